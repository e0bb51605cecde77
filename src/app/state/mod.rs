mod constants;
mod page;
mod ui;
mod viewport;

use crate::autoscroll::{AutoScrollSettings, AutoScroller};
use crate::config::AppConfig;
use crate::resume::{ABOUT_BLOCK_ID, Resume};
use crate::reveal::{RevealTracker, TextBlock, TrackedBlock, TriggerBand, frame_progress};
use crate::scramble::ScrambleText;
use crate::theme::ThemeState;
use iced::Task;
use std::time::{Duration, Instant};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use page::{ItemKind, PageModel, PageStyle, SectionId};
pub(in crate::app) use ui::UiState;
pub(in crate::app) use viewport::PageViewport;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) resume: Resume,
    pub(super) blocks: Vec<TextBlock>,
    pub(super) page: PageModel,
    pub(super) scroller: AutoScroller<PageViewport>,
    pub(super) reveal: RevealTracker,
    pub(super) theme: ThemeState,
    pub(super) title: ScrambleText,
    pub(super) ui: UiState,
}

impl App {
    pub(super) fn bootstrap(
        resume: Resume,
        mut config: AppConfig,
        theme: ThemeState,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let blocks = resume.text_blocks();
        let viewport = PageViewport::new(
            config.window_width,
            (config.window_height - TOOLBAR_HEIGHT_PX).max(0.0),
        );
        let style = page_style(&config);
        let page = PageModel::build(&resume, &blocks, &style, viewport.width());
        let settings = AutoScrollSettings {
            interval: Duration::from_millis(config.tick_interval_ms),
            step_px: config.step_px,
            touch_threshold_px: config.touch_cancel_threshold_px,
        };
        let mut title = ScrambleText::new(
            &resume.personal.title,
            Duration::from_millis(config.scramble_duration_ms),
        );
        if !config.show_start_overlay {
            title.start(Instant::now());
        }

        let mut app = App {
            ui: UiState {
                overlay_visible: config.show_start_overlay,
                pending_launch_at: None,
                title_settled: false,
                status: None,
                printing: false,
            },
            reveal: RevealTracker::new(config.reveal_mode),
            scroller: AutoScroller::new(viewport, settings),
            title,
            page,
            blocks,
            resume,
            theme,
            config,
        };
        let content_height = app.page.content_height();
        app.scroller.surface_mut().set_content_height(content_height);
        app.refresh_reveal();

        tracing::info!(
            blocks = app.blocks.len(),
            words = app.blocks.iter().map(TextBlock::word_count).sum::<usize>(),
            columns = app.page.columns().len(),
            reveal_mode = %app.config.reveal_mode,
            overlay = app.ui.overlay_visible,
            "Resume viewer ready"
        );
        (app, Task::none())
    }

    pub(super) fn page_style(&self) -> PageStyle {
        page_style(&self.config)
    }

    /// Rebuild the estimated layout when the viewport width changed.
    pub(super) fn relayout_if_needed(&mut self) {
        let width = self.scroller.surface().width();
        if (width - self.page.layout_width()).abs() < 0.5 {
            return;
        }
        let style = self.page_style();
        self.page = PageModel::build(&self.resume, &self.blocks, &style, width);
        tracing::debug!(
            width,
            columns = self.page.columns().len(),
            content_height = self.page.content_height(),
            "Rebuilt page layout"
        );
    }

    pub(super) fn trigger_band(&self, block: &TextBlock) -> TriggerBand {
        if block.id() == ABOUT_BLOCK_ID {
            TriggerBand::new(self.config.panel_trigger, self.config.panel_span)
        } else {
            TriggerBand::new(self.config.content_trigger, self.config.content_span)
        }
    }

    /// Recompute reveal progress for the current scroll position.
    pub(super) fn refresh_reveal(&mut self) {
        let tracked: Vec<TrackedBlock> = self
            .blocks
            .iter()
            .enumerate()
            .map(|(index, block)| TrackedBlock {
                // The start overlay hides the page, so nothing is laid out yet.
                geometry: if self.ui.overlay_visible {
                    None
                } else {
                    self.page.block_geometry(index)
                },
                band: self.trigger_band(block),
            })
            .collect();
        let metrics = self.scroller.surface().metrics();
        let frame = frame_progress(
            &tracked,
            metrics.as_ref(),
            self.config.bottom_tolerance_px,
        );
        self.reveal
            .apply(self.blocks.iter().map(TextBlock::id).zip(frame));
    }

    pub(super) fn block_progress(&self, index: usize) -> f32 {
        self.blocks
            .get(index)
            .map(|block| self.reveal.progress(block.id()))
            .unwrap_or(0.0)
    }

    /// Whether the view has animation that needs frame ticks.
    pub(super) fn needs_frames(&self) -> bool {
        self.ui.pending_launch_at.is_some()
            || (self.title.is_started() && !self.ui.title_settled)
            || self.scroller.surface().is_gliding()
    }
}

fn page_style(config: &AppConfig) -> PageStyle {
    PageStyle {
        font_size: config.font_size as f32,
        line_spacing: config.line_spacing,
        margin_horizontal: f32::from(config.margin_horizontal),
        margin_vertical: f32::from(config.margin_vertical),
    }
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: String) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback;
        } else {
            *value = normalized;
        }
    }

    fn finite_or(value: f32, fallback: f32) -> f32 {
        if value.is_finite() { value } else { fallback }
    }

    config.font_size = config.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.line_spacing = finite_or(config.line_spacing, 1.5).clamp(0.8, 2.5);
    config.margin_horizontal = config.margin_horizontal.min(MAX_HORIZONTAL_MARGIN);
    config.margin_vertical = config.margin_vertical.min(MAX_VERTICAL_MARGIN);
    config.window_width = finite_or(config.window_width, 1100.0).clamp(320.0, 7680.0);
    config.window_height = finite_or(config.window_height, 800.0).clamp(240.0, 4320.0);
    config.dim_alpha = finite_or(config.dim_alpha, 0.18).clamp(0.0, 1.0);
    config.content_trigger = finite_or(config.content_trigger, 0.7).clamp(0.05, 1.0);
    config.panel_trigger = finite_or(config.panel_trigger, 0.8).clamp(0.05, 1.0);
    // A block must be fully revealed by the time its bottom edge crosses the trigger.
    config.content_span = finite_or(config.content_span, 1.0).clamp(0.1, 1.0);
    config.panel_span = finite_or(config.panel_span, 0.8).clamp(0.1, 1.0);
    config.bottom_tolerance_px = finite_or(config.bottom_tolerance_px, 10.0).clamp(0.0, 200.0);
    config.tick_interval_ms = config.tick_interval_ms.clamp(5, 1000);
    config.step_px = finite_or(config.step_px, 1.0).clamp(0.1, 50.0);
    config.touch_cancel_threshold_px =
        finite_or(config.touch_cancel_threshold_px, 5.0).clamp(0.0, 100.0);
    config.launch_delay_ms = config.launch_delay_ms.min(60_000);
    config.scramble_duration_ms = config.scramble_duration_ms.min(20_000);
    normalize_key_binding(&mut config.key_toggle_theme, "t".to_string());
    normalize_key_binding(&mut config.key_toggle_auto_scroll, "space".to_string());
    normalize_key_binding(&mut config.key_print, "ctrl+p".to_string());
    normalize_key_binding(&mut config.key_safe_quit, "q".to_string());
}
