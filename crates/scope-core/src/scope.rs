// File: crates/scope-core/src/scope.rs
// Summary: Scope struct and headless rendering pipeline (PNG/RGBA) using Skia CPU raster surfaces.

use std::time::Instant;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::grid::{grid_lines, GridSpec, TickLengths};
use crate::theme::{self, Theme};
use crate::text::TextShaper;
use crate::trace::Trace;
use crate::types::{LabelLayout, Rgba, HEIGHT, MAJOR_PIXELS, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// Trace labels need system fonts; turn off for deterministic output.
    pub draw_labels: bool,
    pub labels: LabelLayout,
    pub grid_stroke_width: f32,
    pub trace_stroke_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::scope(),
            draw_labels: true,
            labels: LabelLayout::default(),
            grid_stroke_width: 1.0,
            trace_stroke_width: 1.0,
        }
    }
}

pub struct Scope {
    pub traces: Vec<Trace>,
    pub major_spacing: f64,
    pub ticks: TickLengths,
}

impl Scope {
    pub fn new() -> Self {
        Self { traces: Vec::new(), major_spacing: MAJOR_PIXELS, ticks: TickLengths::default() }
    }

    /// Three strain channels stacked 50 px apart.
    pub fn oscilloscope() -> Self {
        let mut scope = Self::new();
        scope.add_trace(Trace::new("H1:DMT-STRAIN", Rgba::CYAN).with_offset(0.0, -50.0));
        scope.add_trace(Trace::new("L1:DMT-STRAIN", Rgba::MAGENTA));
        scope.add_trace(Trace::new("A1:DMT-STRAIN", Rgba::YELLOW).with_offset(0.0, 50.0));
        scope
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    /// Render the scope to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render the scope and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scope to straight RGBA8 pixels.
    /// Returns `(pixels, width, height, stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed for {}x{} surface", w, h);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let started = Instant::now();
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        // Graticule and traces share a centered origin.
        canvas.save();
        canvas.translate((opts.width as f32 * 0.5, opts.height as f32 * 0.5));
        self.draw_graticule(canvas, opts)?;
        for trace in &self.traces {
            draw_trace(canvas, trace, opts.trace_stroke_width);
        }
        canvas.restore();

        if opts.draw_labels {
            draw_labels(canvas, &self.traces, opts);
        }

        log::debug!(
            "rendered {}x{} scope with {} traces in {:?}",
            opts.width, opts.height, self.traces.len(), started.elapsed()
        );
        Ok(surface)
    }

    fn draw_graticule(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()> {
        let spec = GridSpec::new(opts.width as f64, opts.height as f64, self.major_spacing)?;
        let lines = grid_lines(&spec, &self.ticks)?;

        let mut path = skia::Path::new();
        for l in &lines {
            let s = l.segment;
            path.move_to((s.x1 as f32, s.y1 as f32));
            path.line_to((s.x2 as f32, s.y2 as f32));
        }

        let mut paint = skia::Paint::default();
        paint.set_color(opts.theme.gridline);
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(opts.grid_stroke_width);
        canvas.draw_path(&path, &paint);
        Ok(())
    }
}

impl Default for Scope {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn draw_trace(canvas: &skia::Canvas, trace: &Trace, stroke_width: f32) {
    let screen = trace.screen_path();
    if screen.is_empty() {
        return;
    }

    let mut path = skia::Path::new();
    for sub in screen.subpaths() {
        let mut pts = sub.iter();
        if let Some(first) = pts.next() {
            path.move_to((first.x as f32, first.y as f32));
        }
        for p in pts {
            path.line_to((p.x as f32, p.y as f32));
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(stroke_width);
    stroke.set_color(theme::to_skia(trace.color));
    canvas.draw_path(&path, &stroke);
}

fn draw_labels(canvas: &skia::Canvas, traces: &[Trace], opts: &RenderOptions) {
    let layout = &opts.labels;
    let shaper = TextShaper::new();

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (i, trace) in traces.iter().enumerate() {
        let left = layout.left(i);
        if left >= opts.width as f32 {
            break;
        }
        let outer = skia::Rect::from_xywh(left, 0.0, layout.width, layout.height);
        fill.set_color(theme::to_skia(trace.color.darken()));
        canvas.draw_round_rect(outer, layout.outer_radius, layout.outer_radius, &fill);

        let inner = skia::Rect::from_xywh(
            left + layout.inset,
            layout.inset,
            layout.width - 2.0 * layout.inset,
            layout.height - 2.0 * layout.inset,
        );
        fill.set_color(theme::to_skia(trace.color));
        canvas.draw_round_rect(inner, layout.inner_radius, layout.inner_radius, &fill);

        let (tx, ty) = layout.text_offset;
        shaper.draw_top_left(
            canvas,
            &trace.name,
            (left + tx, ty),
            layout.font_size,
            opts.theme.label_text,
            layout.width - 2.0 * tx,
        );
    }
}
