use std::time::Instant;

pub struct UiState {
    pub(in crate::app) overlay_visible: bool,
    /// When the delayed presentation start fires.
    pub(in crate::app) pending_launch_at: Option<Instant>,
    pub(in crate::app) title_settled: bool,
    pub(in crate::app) status: Option<String>,
    pub(in crate::app) printing: bool,
}
