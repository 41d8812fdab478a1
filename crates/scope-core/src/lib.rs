// File: crates/scope-core/src/lib.rs
// Summary: Core library entry point; exports graticule/trace geometry, scope controls and rendering.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod scale;
pub mod scope;
pub mod text;
pub mod theme;
pub mod trace;
pub mod types;

pub use error::ScopeError;
pub use geometry::{LineSegment, Point};
pub use grid::{compute_grid, grid_lines, GridLine, GridLineKind, GridSpec, Orientation, TickLengths};
pub use interaction::{ScopeController, ScrollDirection, PRIMARY_BUTTON};
pub use scale::{scale_factor, ScaleLevel};
pub use scope::{RenderOptions, Scope};
pub use theme::Theme;
pub use text::TextShaper;
pub use trace::{compute_trace, trace_from_samples, Trace, TraceParams, TracePath};
pub use types::Rgba;
