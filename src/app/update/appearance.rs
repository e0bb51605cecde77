use super::super::state::App;

impl App {
    pub(super) fn handle_toggle_theme(&mut self) {
        let was_persistent = self.theme.is_persistent();
        self.theme.toggle();
        if was_persistent && !self.theme.is_persistent() {
            self.ui.status = Some("Theme will reset on restart".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::build_test_app;
    use crate::app::messages::Message;
    use crate::config::{RevealMode, ThemeMode};

    #[test]
    fn toggle_flips_theme_both_ways() {
        let mut app = build_test_app(RevealMode::Track, false);
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
        app.reduce(Message::ToggleTheme);
        assert_eq!(app.theme.mode(), ThemeMode::Light);
        assert!(app.theme.is_persistent());
        app.reduce(Message::ToggleTheme);
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn palette_follows_mode() {
        let mut app = build_test_app(RevealMode::Track, false);
        let dark = app.theme.palette();
        app.reduce(Message::ToggleTheme);
        let light = app.theme.palette();
        assert_ne!(dark.paper, light.paper);
        assert!(matches!(app.theme.iced_theme(), iced::Theme::Light));
    }
}
