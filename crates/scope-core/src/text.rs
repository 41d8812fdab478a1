// File: crates/scope-core/src/text.rs
// Summary: Text shaper for trace labels using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Channel names mix letters, digits and punctuation; monospace keeps labels aligned.
        ts.set_font_families(&["DejaVu Sans Mono", "Menlo", "Consolas", "monospace"]);
        ts
    }

    /// Lay out `text` wrapped to `max_width`.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, max_width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        pstyle.set_max_lines(2);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(max_width.max(1.0));
        paragraph
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw_top_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        max_width: f32,
    ) {
        let p = self.layout(text, size, color, max_width);
        p.paint(canvas, (x, y));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
