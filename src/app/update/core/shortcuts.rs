use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

/// A parsed `ctrl+shift+p` style binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct KeyBinding {
    key: String,
    modifiers: Modifiers,
}

impl KeyBinding {
    /// Parse `raw`, using `fallback` when it is blank or names no key.
    pub(super) fn parse(raw: &str, fallback: &str) -> Self {
        let mut binding = Self::parse_tokens(raw);
        if binding.key.is_empty() {
            binding = Self::parse_tokens(fallback);
        }
        binding
    }

    fn parse_tokens(raw: &str) -> Self {
        let mut binding = KeyBinding {
            key: String::new(),
            modifiers: Modifiers::empty(),
        };
        for token in raw.split('+').map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => binding.modifiers |= Modifiers::CTRL,
                "alt" | "option" => binding.modifiers |= Modifiers::ALT,
                "shift" => binding.modifiers |= Modifiers::SHIFT,
                "logo" | "meta" | "super" | "cmd" | "command" => {
                    binding.modifiers |= Modifiers::LOGO
                }
                "spacebar" => binding.key = "space".to_string(),
                other => binding.key = other.to_string(),
            }
        }
        binding
    }

    /// Modifiers must match exactly, so `p` does not fire on `ctrl+p`.
    pub(super) fn matches(&self, pressed: &str, modifiers: Modifiers) -> bool {
        self.key == pressed && self.modifiers == modifiers
    }
}

/// Lower-cased name of a pressed key, or `None` for keys we never bind.
fn pressed_name(key: &Key) -> Option<String> {
    match key.as_ref() {
        Key::Named(key::Named::Space) => Some("space".to_string()),
        Key::Named(key::Named::Escape) => Some("escape".to_string()),
        Key::Character(ch) => Some(ch.to_ascii_lowercase()),
        _ => None,
    }
}

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = pressed_name(&key)?;
        // Only the modifiers a binding can name take part in matching.
        let modifiers = modifiers
            & (Modifiers::CTRL | Modifiers::ALT | Modifiers::SHIFT | Modifiers::LOGO);

        let bindings = [
            (&self.config.key_toggle_auto_scroll, "space", Message::ToggleAutoScroll),
            (&self.config.key_safe_quit, "q", Message::SafeQuit),
            (&self.config.key_toggle_theme, "t", Message::ToggleTheme),
            (&self.config.key_print, "ctrl+p", Message::Print),
        ];
        bindings
            .into_iter()
            .find(|(raw, fallback, _)| KeyBinding::parse(raw, fallback).matches(&pressed, modifiers))
            .map(|(_, _, message)| message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::test_support::build_test_app;
    use crate::config::RevealMode;

    #[test]
    fn parses_modifiers_in_any_order() {
        let binding = KeyBinding::parse("Shift + CTRL+P", "x");
        assert!(binding.matches("p", Modifiers::CTRL | Modifiers::SHIFT));
        assert!(!binding.matches("p", Modifiers::CTRL));
    }

    #[test]
    fn blank_or_keyless_binding_uses_fallback() {
        assert!(KeyBinding::parse("  ", "t").matches("t", Modifiers::empty()));
        assert!(KeyBinding::parse("ctrl+", "q").matches("q", Modifiers::empty()));
        assert!(KeyBinding::parse("SpaceBar", "x").matches("space", Modifiers::empty()));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        let binding = KeyBinding::parse("ctrl+p", "x");
        assert!(!binding.matches("p", Modifiers::CTRL | Modifiers::ALT));
    }

    #[test]
    fn default_bindings_map_to_messages() {
        let app = build_test_app(RevealMode::Track, false);
        let theme = app.shortcut_message_for_key(Key::Character("T".into()), Modifiers::empty());
        assert!(matches!(theme, Some(Message::ToggleTheme)));
        let print = app.shortcut_message_for_key(Key::Character("p".into()), Modifiers::CTRL);
        assert!(matches!(print, Some(Message::Print)));
        let quit = app.shortcut_message_for_key(Key::Character("q".into()), Modifiers::empty());
        assert!(matches!(quit, Some(Message::SafeQuit)));
        let plain_p = app.shortcut_message_for_key(Key::Character("p".into()), Modifiers::empty());
        assert!(plain_p.is_none());
        let arrow = app.shortcut_message_for_key(
            Key::Named(key::Named::ArrowDown),
            Modifiers::empty(),
        );
        assert!(arrow.is_none());
    }
}
