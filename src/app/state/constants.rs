use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Limits and layout constants for the resume page.
pub(crate) const MIN_FONT_SIZE: u32 = 10;
pub(crate) const MAX_FONT_SIZE: u32 = 32;
pub(crate) const MAX_HORIZONTAL_MARGIN: u16 = 400;
pub(crate) const MAX_VERTICAL_MARGIN: u16 = 200;
pub(crate) const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub(crate) const COLUMN_GAP_PX: f32 = 32.0;
pub(crate) const SIDEBAR_PORTION: u16 = 3;
pub(crate) const MAIN_PORTION: u16 = 7;
pub(crate) const TOOLBAR_HEIGHT_PX: f32 = 48.0;
pub(crate) const NAME_SCALE: f32 = 2.0;
pub(crate) const HEADLINE_SCALE: f32 = 1.25;
pub(crate) const HEADING_SCALE: f32 = 1.15;
pub(crate) const ENTRY_SCALE: f32 = 1.1;
pub(crate) const DETAIL_SCALE: f32 = 0.875;
pub(crate) const BULLET_INDENT_EM: f32 = 1.25;
pub(crate) const SECTION_GAP_EM: f32 = 1.5;
pub(crate) const ITEM_GAP_EM: f32 = 0.75;
/// Observed offsets this close behind our own writes are stale echoes.
pub(crate) const ECHO_TOLERANCE_PX: f32 = 8.0;
pub(crate) const GLIDE_DURATION: Duration = Duration::from_millis(450);
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(33);
pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("resume-page"));
