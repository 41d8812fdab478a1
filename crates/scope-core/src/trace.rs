// File: crates/scope-core/src/trace.rs
// Summary: Sine trace sampling into pen-up/pen-down sub-paths, plus the Trace model drawn by a Scope.
// Notes:
// - Sampling is pure; `Trace` only carries presentation state (name, color,
//   offset, scale levels) that the renderer and controller act on.

use crate::geometry::Point;
use crate::scale::ScaleLevel;
use crate::types::Rgba;

/// Ordered sub-paths; each is non-empty and holds only finite points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TracePath {
    subpaths: Vec<Vec<Point>>,
}

impl TracePath {
    pub fn subpaths(&self) -> &[Vec<Point>] { &self.subpaths }
    pub fn into_subpaths(self) -> Vec<Vec<Point>> { self.subpaths }
    pub fn len(&self) -> usize { self.subpaths.len() }
    pub fn is_empty(&self) -> bool { self.subpaths.is_empty() }
    /// Total number of points across all sub-paths.
    pub fn point_count(&self) -> usize { self.subpaths.iter().map(Vec::len).sum() }
}

/// Split `samples` into sub-paths, lifting the pen at every non-finite sample.
pub fn trace_from_samples<I, P>(samples: I) -> TracePath
where
    I: IntoIterator<Item = P>,
    P: Into<Point>,
{
    let mut subpaths = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    for p in samples {
        let p = p.into();
        if p.is_finite() {
            current.push(p);
        } else if !current.is_empty() {
            subpaths.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        subpaths.push(current);
    }
    TracePath { subpaths }
}

/// Sample `y = amplitude * sin(frequency * x)` for each integer `x` in `[x_start, x_end)`.
pub fn compute_trace(x_start: i64, x_end: i64, frequency: f64, amplitude: f64) -> TracePath {
    trace_from_samples((x_start..x_end).map(|x| {
        let x = x as f64;
        (x, amplitude * (frequency * x).sin())
    }))
}

/// Sampling parameters for a sine trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceParams {
    pub x_start: i64,
    pub x_end: i64,
    pub frequency: f64,
    pub amplitude: f64,
}

impl TraceParams {
    pub fn sample(&self) -> TracePath {
        compute_trace(self.x_start, self.x_end, self.frequency, self.amplitude)
    }
}

impl Default for TraceParams {
    /// Centered trace spanning 800 px.
    fn default() -> Self {
        Self { x_start: -400, x_end: 400, frequency: 0.1, amplitude: 20.0 }
    }
}

/// A named waveform positioned relative to the graticule center.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub name: String,
    pub color: Rgba,
    /// Offset from the graticule center, in pixels (screen y grows downward).
    pub offset: Point,
    pub scale_x: ScaleLevel,
    pub scale_y: ScaleLevel,
    pub params: TraceParams,
}

impl Trace {
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self {
            name: name.into(),
            color,
            offset: Point::new(0.0, 0.0),
            scale_x: ScaleLevel::default(),
            scale_y: ScaleLevel::default(),
            params: TraceParams::default(),
        }
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Point::new(x, y);
        self
    }

    pub fn with_params(mut self, params: TraceParams) -> Self {
        self.params = params;
        self
    }

    /// Sampled path mapped to screen-space offsets from the graticule center:
    /// scaled by the trace's levels, y flipped, then shifted by `offset`.
    pub fn screen_path(&self) -> TracePath {
        let sx = self.scale_x.factor();
        let sy = self.scale_y.factor();
        let path = self.params.sample();
        TracePath {
            subpaths: path
                .into_subpaths()
                .into_iter()
                .map(|sp| {
                    sp.into_iter()
                        .map(|p| Point::new(self.offset.x + p.x * sx, self.offset.y - p.y * sy))
                        .collect()
                })
                .collect(),
        }
    }
}
