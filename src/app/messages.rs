use super::state::SectionId;
use iced::keyboard::{Key, Modifiers};
use std::path::PathBuf;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleTheme,
    ToggleAutoScroll,
    /// Dismiss the start overlay and schedule the presentation.
    LaunchPresentation,
    Print,
    PrintFinished {
        path: Option<PathBuf>,
        error: Option<String>,
    },
    JumpToSection(SectionId),
    SafeQuit,
    Scrolled {
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    TouchStarted {
        y: f32,
    },
    TouchMoved {
        y: f32,
    },
    WheelScrolled {
        delta_y: f32,
    },
    AutoScrollTick(Instant),
    FrameTick(Instant),
}
