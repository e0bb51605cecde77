use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::{info, warn};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::ToggleAutoScroll => self.handle_toggle_auto_scroll(),
            Message::LaunchPresentation => self.handle_launch_presentation(),
            Message::Print => self.handle_print(&mut effects),
            Message::PrintFinished { path, error } => self.handle_print_finished(path, error),
            Message::JumpToSection(section) => self.handle_jump_to_section(section),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
            Message::Scrolled {
                offset_y,
                viewport_width,
                viewport_height,
                content_height,
            } => self.handle_scrolled(offset_y, viewport_width, viewport_height, content_height),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::TouchStarted { y } => self.handle_touch_started(y),
            Message::TouchMoved { y } => self.handle_touch_moved(y),
            Message::WheelScrolled { delta_y } => self.handle_wheel_scrolled(delta_y),
            Message::AutoScrollTick(_) => self.handle_auto_scroll_tick(),
            Message::FrameTick(now) => self.handle_frame_tick(now),
        }

        if let Some(offset) = self.scroller.surface_mut().take_pending() {
            effects.push(Effect::ScrollTo(offset));
        }
        self.refresh_reveal();

        effects
    }

    fn handle_print(&mut self, effects: &mut Vec<Effect>) {
        if self.ui.printing {
            warn!("Print already in progress; ignoring request");
            return;
        }
        self.ui.printing = true;
        self.ui.status = Some("Preparing print...".to_string());
        effects.push(Effect::PrintResume);
    }

    fn handle_print_finished(
        &mut self,
        path: Option<std::path::PathBuf>,
        error: Option<String>,
    ) {
        self.ui.printing = false;
        self.ui.status = match (path, error) {
            (_, Some(error)) => {
                warn!(%error, "Print hand-off failed");
                Some(format!("Print failed: {error}"))
            }
            (Some(path), None) => {
                info!(path = %path.display(), "Print hand-off complete");
                Some(format!("Sent {}", path.display()))
            }
            (None, None) => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SectionId;
    use crate::app::update::test_support::{build_test_app, scroll_app};
    use crate::config::RevealMode;
    use iced::keyboard::{Key, Modifiers};
    use std::time::{Duration, Instant};

    #[test]
    fn safe_quit_emits_quit_effect() {
        let mut app = build_test_app(RevealMode::Track, false);
        let effects = app.reduce(Message::SafeQuit);
        assert!(matches!(effects.as_slice(), [Effect::QuitSafely]));
    }

    #[test]
    fn space_shortcut_toggles_auto_scroll() {
        let mut app = build_test_app(RevealMode::Track, false);
        app.reduce(Message::KeyPressed {
            key: Key::Named(iced::keyboard::key::Named::Space),
            modifiers: Modifiers::empty(),
        });
        assert!(app.scroller.is_running());
    }

    #[test]
    fn print_is_single_flight() {
        let mut app = build_test_app(RevealMode::Track, false);
        let first = app.reduce(Message::Print);
        assert!(matches!(first.as_slice(), [Effect::PrintResume]));
        assert!(app.reduce(Message::Print).is_empty());

        app.reduce(Message::PrintFinished {
            path: None,
            error: Some("no printer".to_string()),
        });
        assert!(!app.ui.printing);
        assert_eq!(
            app.ui.status.as_deref(),
            Some("Print failed: no printer")
        );
    }

    #[test]
    fn jump_glides_under_smooth_behavior() {
        let mut app = build_test_app(RevealMode::Track, false);
        scroll_app(&mut app, 0.0);
        app.reduce(Message::JumpToSection(SectionId::Skills));
        assert!(app.scroller.surface().is_gliding());
        let effects = app.reduce(Message::FrameTick(Instant::now() + Duration::from_secs(1)));
        assert!(matches!(effects.as_slice(), [Effect::ScrollTo(_)]));
        assert!(!app.scroller.surface().is_gliding());
    }
}
