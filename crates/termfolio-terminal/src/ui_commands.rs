//! Terminal UI commands: clear, welcome, theme.

use termfolio_types::error::Result;

use crate::interpreter::{Command, CommandRegistry, Environment};
use crate::theme::ThemeState;
use crate::transcript::Transcript;

/// Register the terminal UI commands.
pub fn register_ui_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(WelcomeCmd));
    reg.register(Box::new(ThemeCmd));
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear all terminal output."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.out.clear_all();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// welcome
// ---------------------------------------------------------------------------

static WELCOME_ART: [&str; 7] = [
    r" __      __   _                            ",
    r" \ \    / /__| | ___ ___  _ __ ___   ___   ",
    r"  \ \/\/ / _ \ |/ __/ _ \| '_ ` _ \ / _ \  ",
    r"   \    /  __/ | (_| (_) | | | | | |  __/  ",
    r"    \/\/ \___|_|\___\___/|_| |_| |_|\___|  ",
    r"                                           ",
    "",
];

static WELCOME_TEXT: [&str; 3] = [
    "Welcome to your Personal Terminal Portfolio!",
    "Type 'help' to see available commands.",
    "----------------------------------------------------------------",
];

/// Print the welcome banner. Also shown once when a session starts.
pub fn print_welcome(out: &mut Transcript) {
    for line in WELCOME_ART.iter().chain(WELCOME_TEXT.iter()) {
        out.push_text(*line);
    }
}

struct WelcomeCmd;
impl Command for WelcomeCmd {
    fn name(&self) -> &str {
        "welcome"
    }
    fn description(&self) -> &str {
        "Display the welcome message."
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        print_welcome(env.out);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

fn theme_list() -> String {
    format!("Available themes: {}", ThemeState::available().join(", "))
}

struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Change the terminal color theme or list available themes."
    }
    fn usage(&self) -> Option<&str> {
        Some("theme <theme_name> | theme list")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let requested = match args {
            [] => None,
            [only] if only.eq_ignore_ascii_case("list") => None,
            [first, ..] => Some(first.to_lowercase()),
        };
        let Some(name) = requested else {
            env.out.push_text(theme_list());
            env.out
                .push_text(format!("Current theme: {}", env.theme.active()));
            return Ok(());
        };
        if env.theme.set(&name) {
            log::info!("Theme changed to {name}");
            env.out.push_text(format!("Theme changed to '{name}'."));
        } else {
            env.out
                .push_text(format!("Error: Theme '{name}' not found."));
            env.out.push_text(theme_list());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use crate::deferred::DeferredQueue;

    struct State {
        out: Transcript,
        theme: ThemeState,
        deferred: DeferredQueue,
        reg: CommandRegistry,
    }

    impl State {
        fn new() -> Self {
            let mut reg = CommandRegistry::new();
            register_ui_commands(&mut reg);
            Self {
                out: Transcript::default(),
                theme: ThemeState::default(),
                deferred: DeferredQueue::new(),
                reg,
            }
        }

        fn exec(&mut self, line: &str) -> Vec<String> {
            let mut env = Environment {
                out: &mut self.out,
                theme: &mut self.theme,
                deferred: &mut self.deferred,
                now: Instant::now(),
                clipboard: None,
                links: None,
                time: None,
            };
            self.reg.execute(line, &mut env);
            self.out.lines().iter().map(|l| l.plain()).collect()
        }
    }

    #[test]
    fn clear_empties_transcript() {
        let mut st = State::new();
        st.exec("welcome");
        st.exec("theme");
        assert!(!st.out.is_empty());
        let lines = st.exec("clear");
        assert!(lines.is_empty());
    }

    #[test]
    fn welcome_prints_banner_and_hint() {
        let mut st = State::new();
        let lines = st.exec("welcome");
        assert_eq!(lines.len(), WELCOME_ART.len() + WELCOME_TEXT.len());
        assert!(lines.contains(&"Type 'help' to see available commands.".to_string()));
    }

    #[test]
    fn theme_without_args_lists_and_shows_current() {
        let mut st = State::new();
        let lines = st.exec("theme");
        assert_eq!(
            lines,
            vec![
                "Available themes: dark, light, dracula, onedark, tokyo, monokai, nord, \
                 cyberpunk, hacker, retro, ocean",
                "Current theme: dark",
            ]
        );
    }

    #[test]
    fn theme_list_keyword() {
        let mut st = State::new();
        let lines = st.exec("theme LIST");
        assert_eq!(lines[1], "Current theme: dark");
    }

    #[test]
    fn theme_switch() {
        let mut st = State::new();
        let lines = st.exec("theme Nord");
        assert_eq!(lines, vec!["Theme changed to 'nord'."]);
        assert_eq!(st.theme.active(), "nord");
        let lines = st.exec("theme list");
        assert_eq!(lines.last().unwrap(), "Current theme: nord");
    }

    #[test]
    fn theme_unknown_keeps_current_and_relists() {
        let mut st = State::new();
        st.exec("theme retro");
        let lines = st.exec("theme unknownxyz");
        assert_eq!(st.theme.active(), "retro");
        let n = lines.len();
        assert_eq!(lines[n - 2], "Error: Theme 'unknownxyz' not found.");
        assert!(lines[n - 1].starts_with("Available themes: dark"));
    }
}
