// File: crates/scope-core/src/types.rs
// Summary: Shared types and constants (stage size, grid spacing, label layout).

/// Default surface width in pixels.
pub const WIDTH: i32 = 576;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 576;

/// Pixels between major gridlines.
pub const MAJOR_PIXELS: f64 = 60.0;

/// Minimum gap between accepted scroll events, in milliseconds.
pub const SCROLL_TIMEOUT_MS: u64 = 250;

/// Trace label box geometry, in pixels.
/// Contract: `inset * 2 < width.min(height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
    pub inset: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub text_offset: (f32, f32),
    pub font_size: f32,
}

impl LabelLayout {
    /// Left edge of the `index`-th label in the row.
    pub fn left(&self, index: usize) -> f32 {
        index as f32 * (self.width + self.spacing)
    }
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            width: 144.0,
            height: 48.0,
            spacing: 4.0,
            inset: 3.0,
            outer_radius: 5.0,
            inner_radius: 3.0,
            text_offset: (6.0, 6.0),
            font_size: 14.0,
        }
    }
}

/// Straight 8-bit RGB(A) color, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }

    pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
    pub const MAGENTA: Rgba = Rgba::rgb(255, 0, 255);
    pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);

    /// Darker shade used for label borders (alpha kept).
    pub fn darken(self) -> Self {
        let f = |c: u8| (c as u16 * 7 / 10) as u8;
        Self { r: f(self.r), g: f(self.g), b: f(self.b), a: self.a }
    }
}
