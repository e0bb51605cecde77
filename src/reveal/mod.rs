//! Scroll-driven text reveal.
//!
//! Blocks of text fade in word by word as they travel through a trigger band
//! near the bottom of the viewport. Everything here is a pure function of
//! geometry and scroll position so it can be tested without a window:
//!
//! - `progress`: per-block progress and per-word thresholds.
//! - `layout`: text height estimation that produces block rectangles.
//! - `tracker`: the per-block state, tracking or latching.

mod layout;
mod progress;
mod tracker;

pub use layout::{TextMetrics, estimate_text_height};
pub use progress::{
    BlockGeometry, TrackedBlock, TriggerBand, ViewportMetrics, frame_progress, revealed_word_count,
};
pub use tracker::RevealTracker;

/// An ordered run of words, grouped into the lines (bullets) they render on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    id: String,
    lines: Vec<Vec<String>>,
}

impl TextBlock {
    pub fn new(id: impl Into<String>, lines: Vec<Vec<String>>) -> Self {
        Self {
            id: id.into(),
            lines,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lines(&self) -> &[Vec<String>] {
        &self.lines
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Words across all lines, top to bottom, left to right.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flatten().map(String::as_str)
    }
}
