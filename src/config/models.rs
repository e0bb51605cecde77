use serde::Deserialize;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fallback_theme: ThemeMode,
    pub font_size: u32,
    pub line_spacing: f32,
    pub margin_horizontal: u16,
    pub margin_vertical: u16,
    pub window_width: f32,
    pub window_height: f32,
    pub dim_alpha: f32,
    pub reveal_mode: RevealMode,
    pub content_trigger: f32,
    pub panel_trigger: f32,
    pub content_span: f32,
    pub panel_span: f32,
    pub bottom_tolerance_px: f32,
    pub tick_interval_ms: u64,
    pub step_px: f32,
    pub touch_cancel_threshold_px: f32,
    pub launch_delay_ms: u64,
    pub show_start_overlay: bool,
    pub scramble_duration_ms: u64,
    pub print_command: String,
    pub cache_dir: String,
    pub log_level: LogLevel,
    pub key_toggle_theme: String,
    pub key_toggle_auto_scroll: String,
    pub key_print: String,
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            fallback_theme: crate::config::defaults::default_fallback_theme(),
            font_size: crate::config::defaults::default_font_size(),
            line_spacing: crate::config::defaults::default_line_spacing(),
            margin_horizontal: crate::config::defaults::default_margin_horizontal(),
            margin_vertical: crate::config::defaults::default_margin_vertical(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            dim_alpha: crate::config::defaults::default_dim_alpha(),
            reveal_mode: crate::config::defaults::default_reveal_mode(),
            content_trigger: crate::config::defaults::default_content_trigger(),
            panel_trigger: crate::config::defaults::default_panel_trigger(),
            content_span: crate::config::defaults::default_content_span(),
            panel_span: crate::config::defaults::default_panel_span(),
            bottom_tolerance_px: crate::config::defaults::default_bottom_tolerance_px(),
            tick_interval_ms: crate::config::defaults::default_tick_interval_ms(),
            step_px: crate::config::defaults::default_step_px(),
            touch_cancel_threshold_px: crate::config::defaults::default_touch_cancel_threshold_px(),
            launch_delay_ms: crate::config::defaults::default_launch_delay_ms(),
            show_start_overlay: crate::config::defaults::default_show_start_overlay(),
            scramble_duration_ms: crate::config::defaults::default_scramble_duration_ms(),
            print_command: crate::config::defaults::default_print_command(),
            cache_dir: crate::config::defaults::default_cache_dir(),
            log_level: crate::config::defaults::default_log_level(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_toggle_auto_scroll: crate::config::defaults::default_key_toggle_auto_scroll(),
            key_print: crate::config::defaults::default_key_print(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// Theme mode. Serialized as the `"dark"`/`"light"` preference values.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        };
        write!(f, "{}", label)
    }
}

/// How block progress evolves when the reader scrolls back up.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RevealMode {
    /// Recompute from the current position; scrolling up hides words again.
    Track,
    /// Keep the highest progress ever seen for each block.
    Latch,
}

impl Default for RevealMode {
    fn default() -> Self {
        RevealMode::Track
    }
}

impl std::fmt::Display for RevealMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RevealMode::Track => "track",
            RevealMode::Latch => "latch",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
