//! Presentation-mode auto-scroll.
//!
//! A running session nudges the page down by a fixed step on every tick. It
//! ends as soon as the reader takes over with a real drag or the wheel, and
//! also when toggled off or when the controller is dropped.

mod session;

pub use session::AutoScroller;

use std::time::Duration;

/// How the page animates programmatic scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The scrollable viewport the controller drives.
pub trait ScrollSurface {
    fn scroll_offset(&self) -> f32;
    fn max_scroll_offset(&self) -> f32;
    fn scroll_to(&mut self, offset: f32);
    fn scroll_behavior(&self) -> ScrollBehavior;
    fn set_scroll_behavior(&mut self, behavior: ScrollBehavior);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScrollSettings {
    pub interval: Duration,
    pub step_px: f32,
    pub touch_threshold_px: f32,
}

impl Default for AutoScrollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(20),
            step_px: 1.0,
            touch_threshold_px: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Toggle,
    TouchDrag,
    Wheel,
    Teardown,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StopReason::Toggle => "toggle",
            StopReason::TouchDrag => "touch-drag",
            StopReason::Wheel => "wheel",
            StopReason::Teardown => "teardown",
        };
        write!(f, "{}", label)
    }
}

/// Pointer input that can interrupt a session. `y` is in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    TouchStart { y: f32 },
    TouchMove { y: f32 },
    Wheel { delta_y: f32 },
}
