//! Command interpreter and terminal session.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. A `Session` owns the input
//! field, history, transcript and theme; it parses submitted lines, resolves
//! the command name, and dispatches `execute()`.

pub mod calc;
mod commands;
mod deferred;
mod fun_commands;
mod history;
mod interpreter;
mod profile_commands;
mod session;
mod text_commands;
mod theme;
mod transcript;
mod ui_commands;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Output scheduled to land in the transcript after a delay.
pub use deferred::DeferredQueue;
/// Register fun commands (cowsay, fortune, joke, art) into a registry.
pub use fun_commands::register_fun_commands;
/// Submitted-line history with up/down recall.
pub use history::HistoryBuffer;
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// What happened to a dispatched line.
pub use interpreter::DispatchOutcome;
/// Mutable state and host services lent to every command.
pub use interpreter::Environment;
pub use interpreter::{ParsedLine, parse_line};
/// Register portfolio commands (about, projects, contact, ...) into a registry.
pub use profile_commands::register_profile_commands;
/// Interactive session driven by input events.
pub use session::{InputResult, Session};
/// Register text commands (echo, date, calc) into a registry.
pub use text_commands::register_text_commands;
/// Active theme token.
pub use theme::ThemeState;
pub use transcript::{DEFAULT_VIEWPORT_ROWS, Transcript, TranscriptLine, escape_html};
/// Register terminal UI commands (clear, welcome, theme) into a registry.
pub use ui_commands::register_ui_commands;
