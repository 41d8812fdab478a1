// File: crates/scope-window/src/main.rs
// Summary: Windowed scope viewer that renders scope-core to a window via RGBA blit (CPU) using winit + softbuffer.
// Controls: mouse wheel rescales (vertical: selected trace y, horizontal: all traces x),
// left-drag moves the selected trace, keys 1-9 select a trace.

use anyhow::{anyhow, Result};
use clap::Parser;
use scope_core::geometry::clamp;
use scope_core::{theme, Point, RenderOptions, Scope, ScopeController, ScrollDirection, PRIMARY_BUTTON};
use std::num::NonZeroU32;
use std::time::Instant;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "scope")]
    theme: String,
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scope = Scope::oscilloscope();
    let mut controller = ScopeController::new();
    let started = Instant::now();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Scope Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(
            scope_core::types::WIDTH as f64,
            scope_core::types::HEIGHT as f64,
        ))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&args.theme);
    opts.draw_labels = !args.no_labels;

    let mut size = window.inner_size();
    let mut cursor = Point::new(0.0, 0.0);

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Point::new(
                        clamp(position.x, 0.0, size.width as f64),
                        clamp(position.y, 0.0, size.height as f64),
                    );
                    if controller.motion(cursor, &mut scope.traces) {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                    ElementState::Pressed => controller.button_press(PRIMARY_BUTTON, cursor, &scope.traces),
                    ElementState::Released => controller.button_release(PRIMARY_BUTTON),
                },
                WindowEvent::MouseWheel { delta, .. } => {
                    let (dx, dy) = match delta {
                        MouseScrollDelta::LineDelta(x, y) => (x as f64, y as f64),
                        MouseScrollDelta::PixelDelta(p) => (p.x, p.y),
                    };
                    if let Some(direction) = scroll_direction(dx, dy) {
                        let now_ms = started.elapsed().as_millis() as u64;
                        if controller.scroll(direction, now_ms, &mut scope.traces) {
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    if let Some(index) = digit_index(key) {
                        match controller.select(index, &scope.traces) {
                            Ok(()) => log::info!("selected trace {} ({})", index, scope.traces[index].name),
                            Err(e) => log::warn!("{e}"),
                        }
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&scope, &mut opts, size.width, size.height, &mut surface) {
                    log::error!("draw failed: {e:#}");
                }
            }
            _ => {}
        }
    })
}

fn draw(
    scope: &Scope,
    opts: &mut RenderOptions,
    width: u32,
    height: u32,
    surface: &mut softbuffer::Surface,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Ok(()); // minimized
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;

    opts.width = width as i32;
    opts.height = height as i32;
    let (rgba, _, _, _) = scope.render_to_rgba8(opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer wants 0RGB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

/// Dominant scroll axis; positive deltas move content right/down, i.e. scroll left/up.
fn scroll_direction(dx: f64, dy: f64) -> Option<ScrollDirection> {
    if dx == 0.0 && dy == 0.0 {
        None
    } else if dy.abs() >= dx.abs() {
        Some(if dy > 0.0 { ScrollDirection::Up } else { ScrollDirection::Down })
    } else {
        Some(if dx > 0.0 { ScrollDirection::Left } else { ScrollDirection::Right })
    }
}

fn digit_index(key: VirtualKeyCode) -> Option<usize> {
    use VirtualKeyCode::*;
    let i = match key {
        Key1 => 0, Key2 => 1, Key3 => 2, Key4 => 3, Key5 => 4,
        Key6 => 5, Key7 => 6, Key8 => 7, Key9 => 8,
        _ => return None,
    };
    Some(i)
}
