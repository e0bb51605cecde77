use crate::config::RevealMode;
use std::collections::HashMap;
use tracing::debug;

/// Per-block reveal progress.
///
/// In `Track` mode progress follows the scroll position both ways, so text
/// dims again when scrolled back above the trigger band. In `Latch` mode a
/// block never loses progress it has reached.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    mode: RevealMode,
    progress: HashMap<String, f32>,
}

impl RevealTracker {
    pub fn new(mode: RevealMode) -> Self {
        Self {
            mode,
            progress: HashMap::new(),
        }
    }

    /// Merge one frame of computed progress. Returns true when any value changed.
    pub fn apply<'a>(&mut self, frame: impl IntoIterator<Item = (&'a str, f32)>) -> bool {
        let mut changed = false;
        for (id, value) in frame {
            let value = value.clamp(0.0, 1.0);
            let entry = self.progress.entry(id.to_string()).or_insert(0.0);
            let next = match self.mode {
                RevealMode::Track => value,
                RevealMode::Latch => entry.max(value),
            };
            if (next - *entry).abs() > f32::EPSILON {
                if next >= 1.0 && *entry < 1.0 {
                    debug!(block = id, "Block fully revealed");
                }
                *entry = next;
                changed = true;
            }
        }
        changed
    }

    pub fn progress(&self, id: &str) -> f32 {
        self.progress.get(id).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_blocks_start_hidden() {
        let tracker = RevealTracker::new(RevealMode::Track);
        assert_eq!(tracker.progress("about"), 0.0);
    }

    #[test]
    fn track_mode_follows_scroll_back() {
        let mut tracker = RevealTracker::new(RevealMode::Track);
        assert!(tracker.apply([("job", 0.8)]));
        assert!(tracker.apply([("job", 0.2)]));
        assert_eq!(tracker.progress("job"), 0.2);
        assert!(!tracker.apply([("job", 0.2)]));
    }

    #[test]
    fn latch_mode_keeps_highest_value() {
        let mut tracker = RevealTracker::new(RevealMode::Latch);
        tracker.apply([("job", 0.6), ("about", 1.0)]);
        assert!(!tracker.apply([("job", 0.1), ("about", 0.0)]));
        assert_eq!(tracker.progress("job"), 0.6);
        assert_eq!(tracker.progress("about"), 1.0);
        tracker.apply([("job", 0.9)]);
        assert_eq!(tracker.progress("job"), 0.9);
    }

    #[test]
    fn values_are_clamped() {
        let mut tracker = RevealTracker::new(RevealMode::Track);
        tracker.apply([("a", 3.0), ("b", -1.0)]);
        assert_eq!(tracker.progress("a"), 1.0);
        assert_eq!(tracker.progress("b"), 0.0);
    }
}
