//! Headline "decrypt" effect.
//!
//! The title starts as noise and resolves left to right. Noise glyphs are a
//! pure function of (character index, animation step), so a given frame always
//! renders the same string.

use sha2::{Digest, Sha256};
use std::time::{Duration, Instant};

const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+";

#[derive(Debug, Clone)]
pub struct ScrambleText {
    target: Vec<char>,
    duration: Duration,
    started_at: Option<Instant>,
}

impl ScrambleText {
    pub fn new(target: &str, duration: Duration) -> Self {
        Self {
            target: target.chars().collect(),
            duration,
            started_at: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) >= self.duration)
    }

    /// Share of the animation elapsed, 0 before start and 1 once settled.
    pub fn blend(&self, now: Instant) -> f32 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// The headline as it should read at `now`.
    pub fn frame_at(&self, now: Instant) -> String {
        let step = self.step_at(now);
        // Half a character resolves per step.
        let resolved = step / 2;
        self.target
            .iter()
            .enumerate()
            .map(|(idx, &ch)| {
                if ch.is_whitespace() || (idx as u64) < resolved {
                    ch
                } else {
                    noise_glyph(idx, step)
                }
            })
            .collect()
    }

    fn step_at(&self, now: Instant) -> u64 {
        let Some(start) = self.started_at else {
            return 0;
        };
        let steps_total = (self.target.len() as u64 * 2).max(1);
        if now.saturating_duration_since(start) >= self.duration {
            return steps_total;
        }
        let interval = self.duration.as_secs_f64() / steps_total as f64;
        let elapsed = now.saturating_duration_since(start).as_secs_f64();
        ((elapsed / interval) as u64).min(steps_total)
    }
}

fn noise_glyph(index: usize, step: u64) -> char {
    let mut hasher = Sha256::new();
    hasher.update((index as u64).to_le_bytes());
    hasher.update(step.to_le_bytes());
    let digest = hasher.finalize();
    GLYPHS[digest[0] as usize % GLYPHS.len()] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: &str = "Platform Engineer";

    #[test]
    fn unstarted_title_is_fully_scrambled() {
        let scramble = ScrambleText::new(TITLE, Duration::from_millis(2500));
        let frame = scramble.frame_at(Instant::now());
        assert_eq!(frame.chars().count(), TITLE.chars().count());
        assert_eq!(frame.chars().nth(8), Some(' '));
        assert!(!scramble.is_settled(Instant::now()));
        assert_eq!(scramble.blend(Instant::now()), 0.0);
    }

    #[test]
    fn settles_on_target_after_duration() {
        let mut scramble = ScrambleText::new(TITLE, Duration::from_millis(2500));
        let start = Instant::now();
        scramble.start(start);
        let done = start + Duration::from_millis(2500);
        assert!(scramble.is_settled(done));
        assert_eq!(scramble.frame_at(done), TITLE);
        assert_eq!(scramble.blend(done), 1.0);
    }

    #[test]
    fn resolves_left_to_right() {
        let mut scramble = ScrambleText::new(TITLE, Duration::from_millis(3400));
        let start = Instant::now();
        scramble.start(start);
        // 34 steps of 100ms; after 1.05s the first 5 characters are final.
        let frame: Vec<char> = scramble
            .frame_at(start + Duration::from_millis(1050))
            .chars()
            .collect();
        let target: Vec<char> = TITLE.chars().collect();
        assert_eq!(&frame[..5], &target[..5]);
    }

    #[test]
    fn frames_are_deterministic() {
        let mut scramble = ScrambleText::new(TITLE, Duration::from_millis(2500));
        let start = Instant::now();
        scramble.start(start);
        let at = start + Duration::from_millis(400);
        assert_eq!(scramble.frame_at(at), scramble.frame_at(at));
        assert!(noise_glyph(3, 7).is_ascii_graphic());
    }
}
