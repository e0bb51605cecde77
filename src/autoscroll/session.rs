use super::{AutoScrollSettings, InputEvent, ScrollBehavior, ScrollSurface, StopReason};
use std::time::Instant;
use tracing::{debug, info, trace};

const TRACE_EVERY_TICKS: u64 = 50;

/// Live session bookkeeping. Exists only while scrolling.
#[derive(Debug, Clone, Copy)]
struct ScrollSession {
    restore: ScrollBehavior,
    ticks: u64,
    started_at: Instant,
}

/// Owns the scroll surface and at most one running session.
///
/// Starting switches the surface to instant scrolling so each 1px step lands
/// immediately; every stop path, including dropping the controller, puts the
/// previous behavior back.
pub struct AutoScroller<S: ScrollSurface> {
    surface: S,
    settings: AutoScrollSettings,
    session: Option<ScrollSession>,
    touch_anchor: Option<f32>,
}

impl<S: ScrollSurface> AutoScroller<S> {
    pub fn new(surface: S, settings: AutoScrollSettings) -> Self {
        Self {
            surface,
            settings,
            session: None,
            touch_anchor: None,
        }
    }

    pub fn settings(&self) -> &AutoScrollSettings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Begin scrolling. Returns false when a session is already running.
    pub fn start(&mut self) -> bool {
        if self.session.is_some() {
            return false;
        }
        let restore = self.surface.scroll_behavior();
        self.surface.set_scroll_behavior(ScrollBehavior::Instant);
        self.session = Some(ScrollSession {
            restore,
            ticks: 0,
            started_at: Instant::now(),
        });
        info!(
            offset = self.surface.scroll_offset(),
            interval_ms = self.settings.interval.as_millis() as u64,
            step_px = self.settings.step_px,
            "Auto-scroll started"
        );
        true
    }

    /// End the running session. Returns false when nothing was running.
    pub fn stop(&mut self, reason: StopReason) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        self.surface.set_scroll_behavior(session.restore);
        self.touch_anchor = None;
        info!(
            %reason,
            ticks = session.ticks,
            elapsed_ms = session.started_at.elapsed().as_millis() as u64,
            offset = self.surface.scroll_offset(),
            "Auto-scroll stopped"
        );
        true
    }

    /// Flip between running and idle. Returns whether a session is now running.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop(StopReason::Toggle);
            false
        } else {
            self.start()
        }
    }

    /// Advance one step. Returns the new offset, or `None` when idle.
    pub fn tick(&mut self) -> Option<f32> {
        let session = self.session.as_mut()?;
        session.ticks += 1;
        let ticks = session.ticks;

        let max = self.surface.max_scroll_offset().max(0.0);
        let next = (self.surface.scroll_offset() + self.settings.step_px).clamp(0.0, max);
        self.surface.scroll_to(next);

        if ticks % TRACE_EVERY_TICKS == 0 {
            trace!(ticks, offset = next, max, "Auto-scroll progress");
        }
        Some(next)
    }

    /// Whether a touch at `y` has moved past the threshold from where it began.
    pub fn touch_dragged(&self, y: f32) -> bool {
        self.touch_anchor
            .is_some_and(|anchor| (y - anchor).abs() > self.settings.touch_threshold_px)
    }

    /// Feed pointer input. Returns the stop reason when the input ended a session.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<StopReason> {
        match event {
            InputEvent::TouchStart { y } => {
                self.touch_anchor = Some(y);
                None
            }
            InputEvent::TouchMove { y } => {
                if self.is_running() && self.touch_dragged(y) {
                    self.stop(StopReason::TouchDrag);
                    Some(StopReason::TouchDrag)
                } else {
                    None
                }
            }
            InputEvent::Wheel { delta_y } => {
                if self.stop(StopReason::Wheel) {
                    debug!(delta_y, "Wheel input took over scrolling");
                    Some(StopReason::Wheel)
                } else {
                    None
                }
            }
        }
    }
}

impl<S: ScrollSurface> Drop for AutoScroller<S> {
    fn drop(&mut self) {
        self.stop(StopReason::Teardown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct FakeState {
        offset: f32,
        max: f32,
        behavior: ScrollBehavior,
    }

    #[derive(Clone)]
    struct FakeSurface(Arc<Mutex<FakeState>>);

    impl FakeSurface {
        fn new(max: f32) -> Self {
            Self(Arc::new(Mutex::new(FakeState {
                offset: 0.0,
                max,
                behavior: ScrollBehavior::Smooth,
            })))
        }

        fn behavior(&self) -> ScrollBehavior {
            self.0.lock().unwrap().behavior
        }
    }

    impl ScrollSurface for FakeSurface {
        fn scroll_offset(&self) -> f32 {
            self.0.lock().unwrap().offset
        }

        fn max_scroll_offset(&self) -> f32 {
            self.0.lock().unwrap().max
        }

        fn scroll_to(&mut self, offset: f32) {
            self.0.lock().unwrap().offset = offset;
        }

        fn scroll_behavior(&self) -> ScrollBehavior {
            self.0.lock().unwrap().behavior
        }

        fn set_scroll_behavior(&mut self, behavior: ScrollBehavior) {
            self.0.lock().unwrap().behavior = behavior;
        }
    }

    fn scroller(max: f32) -> (AutoScroller<FakeSurface>, FakeSurface) {
        let surface = FakeSurface::new(max);
        (
            AutoScroller::new(surface.clone(), AutoScrollSettings::default()),
            surface,
        )
    }

    #[test]
    fn ticks_advance_one_step_each() {
        let (mut scroller, surface) = scroller(1000.0);
        assert_eq!(scroller.tick(), None);
        assert!(scroller.start());
        assert_eq!(surface.behavior(), ScrollBehavior::Instant);
        for _ in 0..5 {
            scroller.tick();
        }
        assert_eq!(surface.scroll_offset(), 5.0);
    }

    #[test]
    fn tick_clamps_to_end_of_page() {
        let (mut scroller, surface) = scroller(2.5);
        scroller.start();
        scroller.tick();
        scroller.tick();
        assert_eq!(scroller.tick(), Some(2.5));
        assert_eq!(surface.scroll_offset(), 2.5);
    }

    #[test]
    fn second_start_is_a_no_op() {
        let (mut scroller, surface) = scroller(1000.0);
        assert!(scroller.start());
        assert!(!scroller.start());
        scroller.tick();
        assert_eq!(surface.scroll_offset(), 1.0);
        assert!(scroller.stop(StopReason::Toggle));
        assert_eq!(surface.behavior(), ScrollBehavior::Smooth);
        assert!(!scroller.stop(StopReason::Toggle));
    }

    #[test]
    fn small_touch_jitter_keeps_running() {
        let (mut scroller, _surface) = scroller(1000.0);
        scroller.start();
        scroller.handle_input(InputEvent::TouchStart { y: 300.0 });
        assert_eq!(scroller.handle_input(InputEvent::TouchMove { y: 303.0 }), None);
        assert_eq!(scroller.handle_input(InputEvent::TouchMove { y: 295.0 }), None);
        assert!(scroller.is_running());
    }

    #[test]
    fn touch_drag_past_threshold_stops() {
        let (mut scroller, surface) = scroller(1000.0);
        scroller.start();
        scroller.handle_input(InputEvent::TouchStart { y: 300.0 });
        assert_eq!(
            scroller.handle_input(InputEvent::TouchMove { y: 306.0 }),
            Some(StopReason::TouchDrag)
        );
        assert!(!scroller.is_running());
        assert_eq!(surface.behavior(), ScrollBehavior::Smooth);
    }

    #[test]
    fn touch_drag_is_measured_from_touch_start() {
        let (mut scroller, _surface) = scroller(1000.0);
        assert!(!scroller.touch_dragged(900.0));
        scroller.handle_input(InputEvent::TouchStart { y: 300.0 });
        assert!(!scroller.touch_dragged(305.0));
        assert!(scroller.touch_dragged(294.0));
        assert!(!scroller.is_running());
    }

    #[test]
    fn any_wheel_input_stops() {
        let (mut scroller, surface) = scroller(1000.0);
        assert_eq!(scroller.handle_input(InputEvent::Wheel { delta_y: 1.0 }), None);
        scroller.start();
        assert_eq!(
            scroller.handle_input(InputEvent::Wheel { delta_y: 0.0 }),
            Some(StopReason::Wheel)
        );
        assert_eq!(surface.behavior(), ScrollBehavior::Smooth);
    }

    #[test]
    fn toggle_twice_restores_behavior() {
        let (mut scroller, surface) = scroller(1000.0);
        surface.clone().set_scroll_behavior(ScrollBehavior::Instant);
        assert!(scroller.toggle());
        assert!(!scroller.toggle());
        assert_eq!(surface.behavior(), ScrollBehavior::Instant);
    }

    #[test]
    fn drop_while_running_restores_behavior() {
        let (mut scroller, surface) = scroller(1000.0);
        scroller.start();
        assert_eq!(surface.behavior(), ScrollBehavior::Instant);
        drop(scroller);
        assert_eq!(surface.behavior(), ScrollBehavior::Smooth);
    }
}
