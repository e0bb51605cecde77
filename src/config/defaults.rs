pub(crate) fn default_fallback_theme() -> crate::config::ThemeMode {
    crate::config::ThemeMode::Dark
}

pub(crate) fn default_font_size() -> u32 {
    16
}

pub(crate) fn default_line_spacing() -> f32 {
    1.5
}

pub(crate) fn default_margin_horizontal() -> u16 {
    32
}

pub(crate) fn default_margin_vertical() -> u16 {
    24
}

pub(crate) fn default_window_width() -> f32 {
    1100.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_dim_alpha() -> f32 {
    0.18
}

pub(crate) fn default_reveal_mode() -> crate::config::RevealMode {
    crate::config::RevealMode::Track
}

pub(crate) fn default_content_trigger() -> f32 {
    0.7
}

pub(crate) fn default_panel_trigger() -> f32 {
    0.8
}

pub(crate) fn default_content_span() -> f32 {
    1.0
}

pub(crate) fn default_panel_span() -> f32 {
    0.8
}

pub(crate) fn default_bottom_tolerance_px() -> f32 {
    10.0
}

pub(crate) fn default_tick_interval_ms() -> u64 {
    20
}

pub(crate) fn default_step_px() -> f32 {
    1.0
}

pub(crate) fn default_touch_cancel_threshold_px() -> f32 {
    5.0
}

pub(crate) fn default_launch_delay_ms() -> u64 {
    3500
}

pub(crate) fn default_show_start_overlay() -> bool {
    true
}

pub(crate) fn default_scramble_duration_ms() -> u64 {
    2500
}

pub(crate) fn default_print_command() -> String {
    "lpr".to_string()
}

pub(crate) fn default_cache_dir() -> String {
    ".cache".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_key_toggle_auto_scroll() -> String {
    "space".to_string()
}

pub(crate) fn default_key_print() -> String {
    "ctrl+p".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
