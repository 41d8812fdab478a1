// File: crates/scope-core/src/theme.rs
// Summary: Scope/Light theming for graticule and label rendering colors.

use skia_safe as skia;

use crate::types::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub gridline: skia::Color,
    pub label_text: skia::Color,
}

impl Theme {
    /// Dark grey screen with faint gridlines.
    pub fn scope() -> Self {
        Self {
            name: "scope",
            background: skia::Color::from_argb(255, 0x28, 0x28, 0x28),
            gridline: skia::Color::from_argb(255, 0x3c, 0x3c, 0x3c),
            label_text: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            gridline: skia::Color::from_argb(255, 210, 210, 215),
            label_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::scope() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::scope(), Theme::light()]
}

/// Find a theme by its `name`, falling back to scope.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::scope()
}

#[inline]
pub fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
