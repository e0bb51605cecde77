use super::super::state::App;
use crate::autoscroll::{InputEvent, StopReason};
use std::time::{Duration, Instant};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_auto_scroll(&mut self) {
        if self.ui.pending_launch_at.take().is_some() {
            info!("Cancelled pending presentation start");
            return;
        }
        if self.ui.overlay_visible {
            self.dismiss_overlay(Instant::now());
        }
        self.scroller.toggle();
    }

    /// Hide the start overlay, start the title effect and schedule scrolling.
    pub(super) fn handle_launch_presentation(&mut self) {
        let now = Instant::now();
        self.dismiss_overlay(now);
        if self.scroller.is_running() {
            return;
        }
        let delay = Duration::from_millis(self.config.launch_delay_ms);
        self.ui.pending_launch_at = Some(now + delay);
        info!(delay_ms = self.config.launch_delay_ms, "Presentation scheduled");
    }

    fn dismiss_overlay(&mut self, now: Instant) {
        if !self.ui.overlay_visible {
            return;
        }
        self.ui.overlay_visible = false;
        self.title.start(now);
        self.ui.title_settled = false;
        debug!("Start overlay dismissed");
    }

    pub(super) fn handle_frame_tick(&mut self, now: Instant) {
        if let Some(deadline) = self.ui.pending_launch_at {
            if now >= deadline {
                self.ui.pending_launch_at = None;
                self.scroller.start();
            }
        }
        if self.title.is_started() && !self.ui.title_settled && self.title.is_settled(now) {
            self.ui.title_settled = true;
        }
        self.scroller.surface_mut().advance_glide(now);
    }

    pub(super) fn handle_auto_scroll_tick(&mut self) {
        self.scroller.tick();
    }

    pub(super) fn handle_touch_started(&mut self, y: f32) {
        self.scroller.handle_input(InputEvent::TouchStart { y });
    }

    pub(super) fn handle_touch_moved(&mut self, y: f32) {
        if self.ui.pending_launch_at.is_some() && self.scroller.touch_dragged(y) {
            self.ui.pending_launch_at = None;
            info!(reason = %StopReason::TouchDrag, "Cancelled pending presentation start");
        }
        self.scroller.handle_input(InputEvent::TouchMove { y });
    }

    pub(super) fn handle_wheel_scrolled(&mut self, delta_y: f32) {
        self.scroller.surface_mut().cancel_glide();
        if self.ui.pending_launch_at.take().is_some() {
            info!(reason = %StopReason::Wheel, "Cancelled pending presentation start");
        }
        self.scroller.handle_input(InputEvent::Wheel { delta_y });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{build_test_app, scroll_app};
    use crate::app::messages::Message;
    use crate::app::update::Effect;
    use crate::autoscroll::{ScrollBehavior, ScrollSurface};
    use crate::config::RevealMode;
    use std::time::{Duration, Instant};

    #[test]
    fn toggle_starts_and_stops_restoring_behavior() {
        let mut app = build_test_app(RevealMode::Track, false);
        scroll_app(&mut app, 0.0);
        app.reduce(Message::ToggleAutoScroll);
        assert!(app.scroller.is_running());
        assert_eq!(
            app.scroller.surface().scroll_behavior(),
            ScrollBehavior::Instant
        );
        app.reduce(Message::ToggleAutoScroll);
        assert!(!app.scroller.is_running());
        assert_eq!(
            app.scroller.surface().scroll_behavior(),
            ScrollBehavior::Smooth
        );
    }

    #[test]
    fn tick_advances_one_pixel_and_scrolls_widget() {
        let mut app = build_test_app(RevealMode::Track, false);
        scroll_app(&mut app, 10.0);
        app.scroller.surface_mut().set_content_height(4000.0);
        app.reduce(Message::ToggleAutoScroll);
        let effects = app.reduce(Message::AutoScrollTick(Instant::now()));
        assert!(matches!(effects.as_slice(), [Effect::ScrollTo(y)] if *y == 11.0));
    }

    #[test]
    fn idle_tick_does_nothing() {
        let mut app = build_test_app(RevealMode::Track, false);
        assert!(app.reduce(Message::AutoScrollTick(Instant::now())).is_empty());
    }

    #[test]
    fn gestures_stop_a_running_session() {
        let mut app = build_test_app(RevealMode::Track, false);
        app.reduce(Message::ToggleAutoScroll);
        app.reduce(Message::TouchStarted { y: 400.0 });
        app.reduce(Message::TouchMoved { y: 403.0 });
        assert!(app.scroller.is_running());
        app.reduce(Message::TouchMoved { y: 406.0 });
        assert!(!app.scroller.is_running());

        app.reduce(Message::ToggleAutoScroll);
        app.reduce(Message::WheelScrolled { delta_y: -40.0 });
        assert!(!app.scroller.is_running());
    }

    #[test]
    fn launch_starts_exactly_one_session_after_delay() {
        let mut app = build_test_app(RevealMode::Track, true);
        assert!(app.ui.overlay_visible);
        app.reduce(Message::LaunchPresentation);
        assert!(!app.ui.overlay_visible);
        assert!(app.title.is_started());
        assert!(!app.scroller.is_running());

        app.reduce(Message::FrameTick(Instant::now()));
        assert!(!app.scroller.is_running());

        let later = Instant::now() + Duration::from_millis(app.config.launch_delay_ms + 10);
        app.reduce(Message::FrameTick(later));
        assert!(app.scroller.is_running());
        assert!(app.ui.pending_launch_at.is_none());
        app.reduce(Message::FrameTick(later + Duration::from_millis(50)));
        assert!(app.scroller.is_running());
    }

    #[test]
    fn touch_drag_cancels_pending_launch() {
        let mut app = build_test_app(RevealMode::Track, true);
        app.reduce(Message::LaunchPresentation);
        app.reduce(Message::TouchStarted { y: 400.0 });
        app.reduce(Message::TouchMoved { y: 403.0 });
        assert!(app.ui.pending_launch_at.is_some());
        app.reduce(Message::TouchMoved { y: 406.0 });
        assert!(app.ui.pending_launch_at.is_none());
        let later = Instant::now() + Duration::from_secs(10);
        app.reduce(Message::FrameTick(later));
        assert!(!app.scroller.is_running());
    }

    #[test]
    fn toggle_cancels_pending_launch() {
        let mut app = build_test_app(RevealMode::Track, true);
        app.reduce(Message::LaunchPresentation);
        app.reduce(Message::ToggleAutoScroll);
        assert!(app.ui.pending_launch_at.is_none());
        let later = Instant::now() + Duration::from_secs(10);
        app.reduce(Message::FrameTick(later));
        assert!(!app.scroller.is_running());
    }
}
