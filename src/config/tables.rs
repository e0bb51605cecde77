use super::defaults;
use super::models::{AppConfig, LogLevel, RevealMode, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    reveal: RevealConfig,
    #[serde(default)]
    presentation: PresentationConfig,
    #[serde(default)]
    print: PrintConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            fallback_theme: tables.appearance.fallback_theme,
            font_size: tables.appearance.font_size,
            line_spacing: tables.appearance.line_spacing,
            margin_horizontal: tables.appearance.margin_horizontal,
            margin_vertical: tables.appearance.margin_vertical,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            dim_alpha: tables.appearance.dim_alpha,
            reveal_mode: tables.reveal.mode,
            content_trigger: tables.reveal.content_trigger,
            panel_trigger: tables.reveal.panel_trigger,
            content_span: tables.reveal.content_span,
            panel_span: tables.reveal.panel_span,
            bottom_tolerance_px: tables.reveal.bottom_tolerance_px,
            tick_interval_ms: tables.presentation.tick_interval_ms,
            step_px: tables.presentation.step_px,
            touch_cancel_threshold_px: tables.presentation.touch_cancel_threshold_px,
            launch_delay_ms: tables.presentation.launch_delay_ms,
            show_start_overlay: tables.presentation.show_start_overlay,
            scramble_duration_ms: tables.presentation.scramble_duration_ms,
            print_command: tables.print.command,
            cache_dir: tables.storage.cache_dir,
            log_level: tables.logging.log_level,
            key_toggle_theme: tables.keys.toggle_theme,
            key_toggle_auto_scroll: tables.keys.toggle_auto_scroll,
            key_print: tables.keys.print,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default = "defaults::default_fallback_theme")]
    fallback_theme: ThemeMode,
    #[serde(default = "defaults::default_font_size")]
    font_size: u32,
    #[serde(default = "defaults::default_line_spacing")]
    line_spacing: f32,
    #[serde(default = "defaults::default_margin_horizontal")]
    margin_horizontal: u16,
    #[serde(default = "defaults::default_margin_vertical")]
    margin_vertical: u16,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default = "defaults::default_dim_alpha")]
    dim_alpha: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            fallback_theme: defaults::default_fallback_theme(),
            font_size: defaults::default_font_size(),
            line_spacing: defaults::default_line_spacing(),
            margin_horizontal: defaults::default_margin_horizontal(),
            margin_vertical: defaults::default_margin_vertical(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            dim_alpha: defaults::default_dim_alpha(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RevealConfig {
    #[serde(default = "defaults::default_reveal_mode")]
    mode: RevealMode,
    #[serde(default = "defaults::default_content_trigger")]
    content_trigger: f32,
    #[serde(default = "defaults::default_panel_trigger")]
    panel_trigger: f32,
    #[serde(default = "defaults::default_content_span")]
    content_span: f32,
    #[serde(default = "defaults::default_panel_span")]
    panel_span: f32,
    #[serde(default = "defaults::default_bottom_tolerance_px")]
    bottom_tolerance_px: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            mode: defaults::default_reveal_mode(),
            content_trigger: defaults::default_content_trigger(),
            panel_trigger: defaults::default_panel_trigger(),
            content_span: defaults::default_content_span(),
            panel_span: defaults::default_panel_span(),
            bottom_tolerance_px: defaults::default_bottom_tolerance_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PresentationConfig {
    #[serde(default = "defaults::default_tick_interval_ms")]
    tick_interval_ms: u64,
    #[serde(default = "defaults::default_step_px")]
    step_px: f32,
    #[serde(default = "defaults::default_touch_cancel_threshold_px")]
    touch_cancel_threshold_px: f32,
    #[serde(default = "defaults::default_launch_delay_ms")]
    launch_delay_ms: u64,
    #[serde(default = "defaults::default_show_start_overlay")]
    show_start_overlay: bool,
    #[serde(default = "defaults::default_scramble_duration_ms")]
    scramble_duration_ms: u64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        PresentationConfig {
            tick_interval_ms: defaults::default_tick_interval_ms(),
            step_px: defaults::default_step_px(),
            touch_cancel_threshold_px: defaults::default_touch_cancel_threshold_px(),
            launch_delay_ms: defaults::default_launch_delay_ms(),
            show_start_overlay: defaults::default_show_start_overlay(),
            scramble_duration_ms: defaults::default_scramble_duration_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PrintConfig {
    #[serde(default = "defaults::default_print_command")]
    command: String,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            command: defaults::default_print_command(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct StorageConfig {
    #[serde(default = "defaults::default_cache_dir")]
    cache_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            cache_dir: defaults::default_cache_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_toggle_auto_scroll")]
    toggle_auto_scroll: String,
    #[serde(default = "defaults::default_key_print")]
    print: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            toggle_theme: defaults::default_key_toggle_theme(),
            toggle_auto_scroll: defaults::default_key_toggle_auto_scroll(),
            print: defaults::default_key_print(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
