/// Glyph and line sizing used to estimate where text ends up on the page.
///
/// The page lays out every item at a fixed height computed from these numbers
/// so block rectangles are known before anything is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub font_size: f32,
    pub line_spacing: f32,
    /// Fixed advance in ems for every narrow glyph, spaces included.
    pub monospace_advance: Option<f32>,
}

/// Cell width of a typical monospace face, in ems.
const MONOSPACE_ADVANCE_EM: f32 = 0.6;

impl TextMetrics {
    pub fn new(font_size: f32, line_spacing: f32) -> Self {
        Self {
            font_size,
            line_spacing,
            monospace_advance: None,
        }
    }

    pub fn monospace(font_size: f32, line_spacing: f32) -> Self {
        Self {
            monospace_advance: Some(MONOSPACE_ADVANCE_EM),
            ..Self::new(font_size, line_spacing)
        }
    }

    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_spacing
    }

    fn glyph_advance(&self, ch: char) -> f32 {
        if let Some(advance) = self.monospace_advance {
            // Wide glyphs take two cells.
            let cells = if ch.is_ascii() || ch.is_whitespace() { 1.0 } else { 2.0 };
            return self.font_size * advance * cells;
        }
        if ch.is_whitespace() {
            self.font_size * 0.3
        } else if ch.is_ascii() {
            self.font_size * 0.58
        } else {
            self.font_size
        }
    }

    fn word_width(&self, word: &str) -> f32 {
        word.chars().map(|ch| self.glyph_advance(ch)).sum()
    }
}

/// Number of wrapped lines `words` need at `max_width`. Overlong words take a
/// line of their own rather than being broken.
pub fn estimate_lines<'a>(
    words: impl IntoIterator<Item = &'a str>,
    max_width: f32,
    metrics: &TextMetrics,
) -> usize {
    let space = metrics.glyph_advance(' ');
    let mut lines = 0usize;
    let mut cursor = 0.0f32;

    for word in words {
        let width = metrics.word_width(word);
        if lines == 0 {
            lines = 1;
            cursor = width;
            continue;
        }
        if cursor + space + width <= max_width {
            cursor += space + width;
        } else {
            lines += 1;
            cursor = width;
        }
    }
    lines
}

pub fn estimate_text_height<'a>(
    words: impl IntoIterator<Item = &'a str>,
    max_width: f32,
    metrics: &TextMetrics,
) -> f32 {
    estimate_lines(words, max_width.max(1.0), metrics) as f32 * metrics.line_height()
}
