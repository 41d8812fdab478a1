// File: crates/scope-core/tests/interaction.rs
// Purpose: Scroll debounce, scale propagation and drag behavior of the scope controller.

use scope_core::{Point, Scope, ScopeController, ScopeError, ScrollDirection, ScaleLevel, PRIMARY_BUTTON};

#[test]
fn vertical_scroll_rescales_only_the_selected_trace() {
    let mut scope = Scope::oscilloscope();
    let mut ctl = ScopeController::new();
    assert!(ctl.scroll(ScrollDirection::Up, 1_000, &mut scope.traces));
    assert!(ctl.scroll(ScrollDirection::Up, 1_300, &mut scope.traces));
    assert!(ctl.scroll(ScrollDirection::Down, 1_600, &mut scope.traces));
    assert_eq!(scope.traces[0].scale_y, ScaleLevel(1));
    assert_eq!(scope.traces[1].scale_y, ScaleLevel(0));
    assert_eq!(scope.traces[2].scale_y, ScaleLevel(0));
}

#[test]
fn scrolls_inside_the_debounce_window_are_ignored() {
    let mut scope = Scope::oscilloscope();
    let mut ctl = ScopeController::new();
    assert!(ctl.scroll(ScrollDirection::Up, 1_000, &mut scope.traces));
    assert!(!ctl.scroll(ScrollDirection::Up, 1_100, &mut scope.traces));
    assert!(!ctl.scroll(ScrollDirection::Up, 1_250, &mut scope.traces));
    assert!(ctl.scroll(ScrollDirection::Up, 1_251, &mut scope.traces));
    assert_eq!(scope.traces[0].scale_y, ScaleLevel(2));
    assert!((scope.traces[0].scale_y.factor() - 10.0).abs() < 1e-12);
}

#[test]
fn horizontal_scroll_sets_every_trace_from_the_selection() {
    let mut scope = Scope::oscilloscope();
    let mut ctl = ScopeController::new();
    scope.traces[2].scale_x = ScaleLevel(5);
    ctl.select(1, &scope.traces).expect("select");
    assert!(ctl.scroll(ScrollDirection::Left, 1_000, &mut scope.traces));
    assert!(scope.traces.iter().all(|t| t.scale_x == ScaleLevel(1)));
    assert!(ctl.scroll(ScrollDirection::Right, 2_000, &mut scope.traces));
    assert!(ctl.scroll(ScrollDirection::Right, 3_000, &mut scope.traces));
    assert!(scope.traces.iter().all(|t| t.scale_x == ScaleLevel(-1)));
}

#[test]
fn drag_moves_selected_trace_by_pointer_delta() {
    let mut scope = Scope::oscilloscope();
    let mut ctl = ScopeController::new();
    ctl.select(2, &scope.traces).expect("select");

    assert!(!ctl.motion(Point::new(5.0, 5.0), &mut scope.traces));
    ctl.button_press(PRIMARY_BUTTON, Point::new(100.0, 100.0), &scope.traces);
    assert!(ctl.is_dragging());
    assert!(ctl.motion(Point::new(130.0, 80.0), &mut scope.traces));
    assert_eq!(scope.traces[2].offset, Point::new(30.0, 30.0));
    assert!(ctl.motion(Point::new(90.0, 100.0), &mut scope.traces));
    assert_eq!(scope.traces[2].offset, Point::new(-10.0, 50.0));

    ctl.button_release(PRIMARY_BUTTON);
    assert!(!ctl.motion(Point::new(0.0, 0.0), &mut scope.traces));
    assert_eq!(scope.traces[2].offset, Point::new(-10.0, 50.0));
    assert_eq!(scope.traces[0].offset, Point::new(0.0, -50.0));
}

#[test]
fn other_buttons_do_not_drag() {
    let mut scope = Scope::oscilloscope();
    let mut ctl = ScopeController::new();
    ctl.button_press(3, Point::new(0.0, 0.0), &scope.traces);
    assert!(!ctl.is_dragging());
    ctl.button_press(PRIMARY_BUTTON, Point::new(0.0, 0.0), &scope.traces);
    ctl.button_release(2);
    assert!(ctl.is_dragging());
    assert!(ctl.motion(Point::new(1.0, 1.0), &mut scope.traces));
}

#[test]
fn selection_is_bounds_checked() {
    let scope = Scope::oscilloscope();
    let mut ctl = ScopeController::new();
    assert_eq!(
        ctl.select(3, &scope.traces),
        Err(ScopeError::TraceIndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(ctl.selected(), 0);
}

#[test]
fn gestures_without_traces_do_nothing() {
    let mut scope = Scope::new();
    let mut ctl = ScopeController::new();
    assert!(!ctl.scroll(ScrollDirection::Up, 1_000, &mut scope.traces));
    ctl.button_press(PRIMARY_BUTTON, Point::new(0.0, 0.0), &scope.traces);
    assert!(!ctl.is_dragging());
}
