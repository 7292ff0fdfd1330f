//! Built-in command set.

use std::time::Duration;

use termfolio_types::config::TermfolioConfig;

use crate::interpreter::CommandRegistry;

/// Register every built-in command into a registry.
///
/// Portfolio commands are built from `config.profile`; `joke` waits
/// `config.joke_delay_ms` before its punchline. `help` is built into the
/// registry itself.
pub fn register_builtins(reg: &mut CommandRegistry, config: &TermfolioConfig) {
    crate::register_profile_commands(reg, &config.profile);
    crate::register_ui_commands(reg);
    crate::register_text_commands(reg);
    crate::register_fun_commands(reg, Duration::from_millis(config.joke_delay_ms));
}
