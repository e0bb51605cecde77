use super::super::state::{App, SectionId, TOOLBAR_HEIGHT_PX};
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    ) {
        self.scroller
            .surface_mut()
            .observe(offset_y, viewport_width, viewport_height, content_height);
        self.relayout_if_needed();
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite()) {
            return;
        }
        // Until the scrollable reports its own bounds, assume it fills the window.
        self.scroller
            .surface_mut()
            .resize(width, (height - TOOLBAR_HEIGHT_PX).max(0.0));
        self.relayout_if_needed();
        let content_height = self.page.content_height();
        self.scroller.surface_mut().set_content_height(content_height);
        debug!(width, height, "Window resized");
    }

    pub(super) fn handle_jump_to_section(&mut self, section: SectionId) {
        let Some(top) = self.page.section_top(section) else {
            debug!(section = section.label(), "Section not present on page");
            return;
        };
        let target = (top - self.config.font_size as f32).max(0.0);
        info!(section = section.label(), target, "Jumping to section");
        self.scroller.surface_mut().scroll_toward(target, Instant::now());
    }
}
