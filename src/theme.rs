//! Dark/light theme preference and the colours derived from it.

use crate::cache::{MemoryPreferences, PreferenceStore};
use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};
use tracing::{info, warn};

/// Theme preference with its persistence backend.
///
/// Starts from the saved preference, then the desktop's preference, then the
/// configured fallback. When the backend fails to save, the state keeps
/// working from memory and stops touching the backend.
pub struct ThemeState {
    mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
    persistent: bool,
}

impl ThemeState {
    pub fn load(
        store: Box<dyn PreferenceStore>,
        system: Option<ThemeMode>,
        fallback: ThemeMode,
    ) -> Self {
        let saved = store.load_theme();
        let mode = saved.or(system).unwrap_or(fallback);
        info!(
            %mode,
            saved = saved.is_some(),
            system = system.is_some(),
            "Resolved initial theme"
        );
        Self {
            mode,
            store,
            persistent: true,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Flip the theme and write it through to the store.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if self.persistent {
            if let Err(err) = self.store.save_theme(self.mode) {
                warn!("Theme preference will not persist: {err:#}");
                self.store = Box::new(MemoryPreferences::with_theme(self.mode));
                self.persistent = false;
            }
        }
        info!(mode = %self.mode, "Toggled theme");
        self.mode
    }

    pub fn iced_theme(&self) -> IcedTheme {
        match self.mode {
            ThemeMode::Dark => IcedTheme::Dark,
            ThemeMode::Light => IcedTheme::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.mode)
    }
}

/// Resume-specific colours layered over the iced theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub paper: Color,
    pub panel: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub future: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Palette {
                paper: Color::from_rgb8(0x12, 0x12, 0x12),
                panel: Color::from_rgb8(0x1a, 0x1a, 0x1a),
                text: Color::from_rgb8(0xe5, 0xe7, 0xeb),
                muted: Color::from_rgb8(0x9c, 0xa3, 0xaf),
                accent: Color::from_rgb8(0x00, 0xff, 0x00),
                future: Color::from_rgb8(0xf9, 0x73, 0x16),
            },
            ThemeMode::Light => Palette {
                paper: Color::from_rgb8(0xfd, 0xfd, 0xfd),
                panel: Color::from_rgb8(0xf9, 0xfa, 0xfb),
                text: Color::from_rgb8(0x1f, 0x29, 0x37),
                muted: Color::from_rgb8(0x6b, 0x72, 0x80),
                accent: Color::from_rgb8(0x15, 0x80, 0x3d),
                future: Color::from_rgb8(0xea, 0x58, 0x0c),
            },
        }
    }
}

/// Read the desktop's colour-scheme hint from the environment.
pub fn system_theme() -> Option<ThemeMode> {
    system_theme_from(|key| std::env::var(key).ok())
}

/// Interpret `GTK_THEME` (`Adwaita:dark`) and `COLORFGBG` (`15;0`) hints.
pub fn system_theme_from(lookup: impl Fn(&str) -> Option<String>) -> Option<ThemeMode> {
    if let Some(gtk) = lookup("GTK_THEME") {
        let gtk = gtk.to_ascii_lowercase();
        if gtk.contains("dark") {
            return Some(ThemeMode::Dark);
        }
        if !gtk.trim().is_empty() {
            return Some(ThemeMode::Light);
        }
    }
    let colors = lookup("COLORFGBG")?;
    let background: u8 = colors.rsplit(';').next()?.trim().parse().ok()?;
    // xterm palette: 0-6 and 8 are dark backgrounds.
    if background <= 6 || background == 8 {
        Some(ThemeMode::Dark)
    } else {
        Some(ThemeMode::Light)
    }
}
