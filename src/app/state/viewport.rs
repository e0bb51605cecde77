use super::constants::{ECHO_TOLERANCE_PX, GLIDE_DURATION};
use crate::autoscroll::{ScrollBehavior, ScrollSurface};
use crate::reveal::ViewportMetrics;
use std::time::Instant;

/// Multi-frame scroll toward a section under smooth behavior.
#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// The app's model of the page scrollable.
///
/// Writes are queued in `pending` until the reducer turns them into a
/// `scroll_to` task. Observed offsets come back through `observe`.
#[derive(Debug, Clone)]
pub struct PageViewport {
    offset: f32,
    width: f32,
    height: f32,
    content_height: f32,
    behavior: ScrollBehavior,
    pending: Option<f32>,
    glide: Option<Glide>,
}

impl PageViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            offset: 0.0,
            width: width.max(0.0),
            height: height.max(0.0),
            content_height: 0.0,
            behavior: ScrollBehavior::Smooth,
            pending: None,
            glide: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn metrics(&self) -> Option<ViewportMetrics> {
        (self.height > 0.0).then_some(ViewportMetrics {
            height: self.height,
            scroll_offset: self.offset,
            content_height: self.content_height,
        })
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width.is_finite() {
            self.width = width.max(0.0);
        }
        if height.is_finite() {
            self.height = height.max(0.0);
        }
        self.offset = self.offset.min(self.max_scroll_offset());
    }

    pub fn set_content_height(&mut self, content_height: f32) {
        if content_height.is_finite() {
            self.content_height = content_height.max(0.0);
        }
    }

    /// Fold in what the scrollable widget reported.
    pub fn observe(&mut self, offset: f32, width: f32, height: f32, content_height: f32) {
        self.resize(width, height);
        self.set_content_height(content_height);
        if !offset.is_finite() {
            return;
        }
        let behind = self.offset - offset;
        let stale_echo = self.behavior == ScrollBehavior::Instant
            && behind > 0.0
            && behind <= ECHO_TOLERANCE_PX;
        if !stale_echo {
            self.offset = offset.max(0.0);
        }
    }

    pub fn take_pending(&mut self) -> Option<f32> {
        self.pending.take()
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Move toward `target`: a glide under smooth behavior, a jump otherwise.
    pub fn scroll_toward(&mut self, target: f32, now: Instant) {
        let target = target.clamp(0.0, self.max_scroll_offset());
        match self.behavior {
            ScrollBehavior::Smooth => {
                self.glide = Some(Glide {
                    from: self.offset,
                    to: target,
                    started_at: now,
                });
            }
            ScrollBehavior::Instant => {
                self.glide = None;
                self.scroll_to(target);
            }
        }
    }

    /// Step an active glide. Returns true while it still needs frames.
    pub fn advance_glide(&mut self, now: Instant) -> bool {
        let Some(glide) = self.glide else {
            return false;
        };
        let elapsed = now.saturating_duration_since(glide.started_at);
        let t = (elapsed.as_secs_f32() / GLIDE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        // ease-out cubic
        let eased = 1.0 - (1.0 - t).powi(3);
        let offset = glide.from + (glide.to - glide.from) * eased;
        self.offset = offset;
        self.pending = Some(offset);
        if t >= 1.0 {
            self.glide = None;
            return false;
        }
        true
    }

    pub fn cancel_glide(&mut self) {
        self.glide = None;
    }
}

impl ScrollSurface for PageViewport {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn max_scroll_offset(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }

    fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_scroll_offset());
        self.pending = Some(self.offset);
    }

    fn scroll_behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    fn set_scroll_behavior(&mut self, behavior: ScrollBehavior) {
        if behavior == ScrollBehavior::Instant {
            self.glide = None;
        }
        self.behavior = behavior;
    }
}
