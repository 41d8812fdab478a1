// File: crates/scope-core/src/grid.rs
// Summary: Graticule layout: major gridlines, halfway ticks and minor ticks centered on (0, 0).

use crate::error::{Result, ScopeError};
use crate::geometry::LineSegment;

/// Minor ticks per major cell (the halfway tick takes the middle slot).
pub const SUBDIVISIONS: i64 = 10;

/// Upper bound on major gridlines along one axis.
pub const MAX_MAJOR_LINES: u32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub width: f64,
    pub height: f64,
    pub major_spacing: f64,
}

impl GridSpec {
    pub fn new(width: f64, height: f64, major_spacing: f64) -> Result<Self> {
        let spec = Self { width, height, major_spacing };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.major_spacing.is_finite() && self.major_spacing > 0.0) {
            return Err(ScopeError::InvalidSpacing(self.major_spacing));
        }
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(ScopeError::InvalidDimensions { width: self.width, height: self.height });
        }
        // Checked in f64 before any index cast or allocation.
        let per_axis = 2.0 * (0.5 * self.width.max(self.height) / self.major_spacing).ceil() + 1.0;
        if per_axis > MAX_MAJOR_LINES as f64 {
            return Err(ScopeError::TooManyLines { per_axis, limit: MAX_MAJOR_LINES });
        }
        Ok(())
    }
}

/// Tick lengths in pixels, measured from the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickLengths {
    pub halfway: f64,
    pub minor: f64,
}

impl TickLengths {
    pub fn validate(&self) -> Result<()> {
        let ok = self.halfway.is_finite()
            && self.minor.is_finite()
            && self.minor >= 0.0
            && self.minor < self.halfway;
        if ok {
            Ok(())
        } else {
            Err(ScopeError::InvalidTickLengths { halfway: self.halfway, minor: self.minor })
        }
    }
}

impl Default for TickLengths {
    fn default() -> Self {
        Self { halfway: 8.0, minor: 4.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridLineKind {
    /// Full-length gridline across the drawable.
    Major,
    /// Tick at the middle of a major cell.
    Halfway,
    Minor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub kind: GridLineKind,
    pub orientation: Orientation,
    pub segment: LineSegment,
}

/// Plain segments of a centered graticule. Rejects non-positive spacing.
pub fn compute_grid(width: f64, height: f64, major_spacing: f64) -> Result<Vec<LineSegment>> {
    let spec = GridSpec::new(width, height, major_spacing)?;
    Ok(grid_lines(&spec, &TickLengths::default())?
        .into_iter()
        .map(|l| l.segment)
        .collect())
}

/// Tagged graticule lines: all vertical lines first, then horizontal ones.
/// Each major line is followed by the halfway tick and minor ticks of the
/// cell to its right (or below it, for horizontal lines).
pub fn grid_lines(spec: &GridSpec, ticks: &TickLengths) -> Result<Vec<GridLine>> {
    spec.validate()?;
    ticks.validate()?;

    let half_w = 0.5 * spec.width;
    let half_h = 0.5 * spec.height;
    let (v_first, v_last) = major_index_range(half_w, spec.major_spacing);
    let (h_first, h_last) = major_index_range(half_h, spec.major_spacing);

    let cells = (v_last - v_first + 1) + (h_last - h_first + 1);
    let mut out = Vec::with_capacity((cells.max(0) as usize) * SUBDIVISIONS as usize);

    let at = |n: i64| n as f64 * spec.major_spacing / SUBDIVISIONS as f64;

    for i in v_first..=v_last {
        let base = i * SUBDIVISIONS;
        out.push(GridLine {
            kind: GridLineKind::Major,
            orientation: Orientation::Vertical,
            segment: LineSegment::vline(at(base), -half_h, half_h),
        });
        for k in 1..SUBDIVISIONS {
            let (kind, len) = tick_for(k, ticks);
            out.push(GridLine {
                kind,
                orientation: Orientation::Vertical,
                segment: LineSegment::vline(at(base + k), -len, 0.0),
            });
        }
    }

    for i in h_first..=h_last {
        let base = i * SUBDIVISIONS;
        out.push(GridLine {
            kind: GridLineKind::Major,
            orientation: Orientation::Horizontal,
            segment: LineSegment::hline(at(base), -half_w, half_w),
        });
        for k in 1..SUBDIVISIONS {
            let (kind, len) = tick_for(k, ticks);
            out.push(GridLine {
                kind,
                orientation: Orientation::Horizontal,
                segment: LineSegment::hline(at(base + k), 0.0, len),
            });
        }
    }

    log::debug!(
        "graticule {}x{} spacing {}: {} lines",
        spec.width, spec.height, spec.major_spacing, out.len()
    );
    Ok(out)
}

/// Major line indices `first..=last` for a drawable of half-extent `half`.
/// `first` is the largest multiple of spacing at or below `-half`; the range
/// is mirrored so the set is symmetric about zero.
pub fn major_index_range(half: f64, spacing: f64) -> (i64, i64) {
    // Mirror in f64 so saturating casts cannot overflow on negation.
    let first = (-half / spacing).floor();
    (first as i64, (-first) as i64)
}

fn tick_for(k: i64, ticks: &TickLengths) -> (GridLineKind, f64) {
    if k * 2 == SUBDIVISIONS {
        (GridLineKind::Halfway, ticks.halfway)
    } else {
        (GridLineKind::Minor, ticks.minor)
    }
}
