// File: crates/scope-core/tests/trace.rs
// Purpose: Sine sampling and pen-up splitting at non-finite samples.

use scope_core::{compute_trace, trace_from_samples, Point, Rgba, ScaleLevel, Trace, TraceParams};

#[test]
fn fixed_parameters_give_one_bounded_subpath() {
    let path = compute_trace(0, 800, 0.1, 20.0);
    assert_eq!(path.len(), 1);
    let sp = &path.subpaths()[0];
    assert_eq!(sp.len(), 800);
    assert_eq!(sp[0], Point::new(0.0, 0.0));
    assert!(sp.iter().all(|p| (-20.0..=20.0).contains(&p.y)));
    assert_eq!(sp[799].x, 799.0);
}

#[test]
fn injected_nans_split_into_three_subpaths() {
    let samples = (0..800).map(|i| {
        let x = i as f64;
        let y = if i == 5 || i == 400 { f64::NAN } else { 20.0 * (0.1 * x).sin() };
        (x, y)
    });
    let path = trace_from_samples(samples);
    let lens: Vec<usize> = path.subpaths().iter().map(Vec::len).collect();
    assert_eq!(lens, vec![5, 394, 399]);
    assert_eq!(path.subpaths()[1][0].x, 6.0);
    assert_eq!(path.subpaths()[2][0].x, 401.0);
    assert_eq!(path.point_count(), 798);
}

#[test]
fn runs_of_non_finite_samples_leave_no_empty_subpaths() {
    let samples = vec![
        (f64::NAN, 0.0),
        (1.0, 1.0),
        (2.0, f64::INFINITY),
        (3.0, f64::NEG_INFINITY),
        (f64::INFINITY, 4.0),
        (5.0, 5.0),
        (6.0, 6.0),
        (7.0, f64::NAN),
    ];
    let path = trace_from_samples(samples);
    assert_eq!(path.len(), 2);
    assert_eq!(path.subpaths()[0], vec![Point::new(1.0, 1.0)]);
    assert_eq!(path.subpaths()[1], vec![Point::new(5.0, 5.0), Point::new(6.0, 6.0)]);
}

#[test]
fn empty_and_reversed_ranges_are_empty() {
    assert!(compute_trace(10, 10, 0.1, 20.0).is_empty());
    assert!(compute_trace(10, -10, 0.1, 20.0).is_empty());
    assert!(compute_trace(0, 100, 0.1, f64::NAN).is_empty());
}

#[test]
fn repeated_sampling_is_bit_identical() {
    let a = compute_trace(-400, 400, 0.1, 20.0);
    let b = compute_trace(-400, 400, 0.1, 20.0);
    let bits = |p: &Point| (p.x.to_bits(), p.y.to_bits());
    let a: Vec<_> = a.subpaths().iter().flatten().map(bits).collect();
    let b: Vec<_> = b.subpaths().iter().flatten().map(bits).collect();
    assert_eq!(a, b);
}

#[test]
fn default_params_are_centered() {
    let path = TraceParams::default().sample();
    assert_eq!(path.point_count(), 800);
    assert_eq!(path.subpaths()[0][0].x, -400.0);
    assert_eq!(path.subpaths()[0][799].x, 399.0);
}

#[test]
fn screen_path_applies_scale_flip_and_offset() {
    let mut trace = Trace::new("T", Rgba::CYAN)
        .with_offset(10.0, -50.0)
        .with_params(TraceParams { x_start: 0, x_end: 20, frequency: 0.1, amplitude: 20.0 });
    trace.scale_x = ScaleLevel(1);
    trace.scale_y = ScaleLevel(-2);

    let raw = trace.params.sample();
    let screen = trace.screen_path();
    assert_eq!(screen.point_count(), raw.point_count());
    for (r, s) in raw.subpaths()[0].iter().zip(&screen.subpaths()[0]) {
        assert!((s.x - (10.0 + r.x * 2.0)).abs() < 1e-12);
        assert!((s.y - (-50.0 - r.y * 0.1)).abs() < 1e-12);
    }
}

#[test]
fn label_shade_is_darker_and_keeps_alpha() {
    let d = Rgba::CYAN.darken();
    assert_eq!((d.r, d.g, d.b, d.a), (0, 178, 178, 255));
}
