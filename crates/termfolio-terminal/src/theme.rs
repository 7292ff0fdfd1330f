//! Active theme token.

use termfolio_types::config::{AVAILABLE_THEMES, DEFAULT_THEME};

/// The theme name presentation layers read. Always one of
/// [`AVAILABLE_THEMES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    active: &'static str,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            active: DEFAULT_THEME,
        }
    }
}

impl ThemeState {
    /// Start on `name`, falling back to the default theme for unknown names.
    pub fn new(name: &str) -> Self {
        let mut state = Self::default();
        if !state.set(name) {
            log::warn!("Unknown theme '{name}', using '{DEFAULT_THEME}'");
        }
        state
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Switch themes. Returns `false` and leaves the theme unchanged when
    /// `name` is not a known theme.
    pub fn set(&mut self, name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        match AVAILABLE_THEMES.iter().find(|t| **t == lower) {
            Some(theme) => {
                self.active = *theme;
                true
            },
            None => false,
        }
    }

    pub fn available() -> &'static [&'static str] {
        &AVAILABLE_THEMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(ThemeState::default().active(), "dark");
    }

    #[test]
    fn set_known_theme_case_insensitive() {
        let mut t = ThemeState::default();
        assert!(t.set("DRACULA"));
        assert_eq!(t.active(), "dracula");
    }

    #[test]
    fn set_unknown_leaves_theme_unchanged() {
        let mut t = ThemeState::new("nord");
        assert!(!t.set("unknownxyz"));
        assert_eq!(t.active(), "nord");
    }

    #[test]
    fn new_with_unknown_falls_back() {
        assert_eq!(ThemeState::new("sepia").active(), "dark");
    }

    #[test]
    fn available_lists_eleven_themes() {
        assert_eq!(ThemeState::available().len(), 11);
    }
}
