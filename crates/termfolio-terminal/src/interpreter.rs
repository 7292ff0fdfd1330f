//! Command trait, registry, and dispatch logic.
//!
//! Input lines are split on whitespace only: no quoting, escaping, pipes or
//! variables. The registry is filled once at startup and only read after
//! that; all mutable state lives in the [`Environment`] a session lends to
//! each handler.

use std::collections::HashMap;
use std::time::Instant;

use termfolio_platform::{ClipboardService, LinkService, TimeService};
use termfolio_types::error::Result;

use crate::deferred::DeferredQueue;
use crate::theme::ThemeState;
use crate::transcript::Transcript;

/// Mutable session state and host services lent to a handler.
pub struct Environment<'a> {
    /// Output sink.
    pub out: &'a mut Transcript,
    /// Active theme token.
    pub theme: &'a mut ThemeState,
    /// Output scheduled to appear later.
    pub deferred: &'a mut DeferredQueue,
    /// When the command was submitted.
    pub now: Instant,
    /// Clipboard service for `email`.
    pub clipboard: Option<&'a mut dyn ClipboardService>,
    /// Link opener for `github` / `linkedin`.
    pub links: Option<&'a dyn LinkService>,
    /// Wall clock for `date`.
    pub time: Option<&'a dyn TimeService>,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types), lower-case.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "theme <theme_name> | theme list"), if the command
    /// takes arguments.
    fn usage(&self) -> Option<&str> {
        None
    }

    /// Run the command. Output goes through `env.out`; an `Err` is reported
    /// by the dispatcher.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()>;
}

/// What happened to a dispatched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler ran to completion.
    Executed,
    /// No command by that name.
    NotFound,
    /// The handler returned an error, which was reported.
    Failed,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Lower-cased command token.
    pub name: String,
    /// Remaining tokens, in order.
    pub args: Vec<&'a str>,
}

/// Split a raw line on runs of whitespace. Returns `None` for blank input.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some(ParsedLine {
        name,
        args: tokens.collect(),
    })
}

const HELP_DESCRIPTION: &str =
    "List all available commands or show help for a specific command.";
const HELP_USAGE: &str = "help [command]";

/// Registry of available commands with dispatch.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let key = cmd.name().to_lowercase();
        if key == "help" {
            log::warn!("Ignoring registration of reserved command 'help'");
            return;
        }
        self.commands.insert(key, cmd);
    }

    /// Look up a command by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .get(name.to_lowercase().as_str())
            .map(|c| c.as_ref())
    }

    /// Whether `name` resolves, including the built-in `help`.
    pub fn contains(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        lower == "help" || self.commands.contains_key(&lower)
    }

    /// All command names with descriptions and usage, sorted by name.
    /// Includes `help`.
    pub fn list_commands(&self) -> Vec<(&str, &str, Option<&str>)> {
        let mut cmds: Vec<(&str, &str, Option<&str>)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description(), c.usage()))
            .collect();
        cmds.push(("help", HELP_DESCRIPTION, Some(HELP_USAGE)));
        cmds.sort_by_key(|(name, _, _)| *name);
        cmds
    }

    /// Parse and dispatch a raw line. Returns `None` for blank input, which
    /// never reaches a handler.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Option<DispatchOutcome> {
        let parsed = parse_line(line)?;
        Some(self.dispatch(&parsed.name, &parsed.args, env))
    }

    /// Resolve `name` and run its handler with `args`.
    ///
    /// Unknown names and handler errors become transcript lines; nothing
    /// propagates to the caller.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[&str],
        env: &mut Environment<'_>,
    ) -> DispatchOutcome {
        let name = name.to_lowercase();
        log::debug!("dispatch {name} {args:?}");

        if name == "help" {
            self.execute_help(args, env.out);
            return DispatchOutcome::Executed;
        }

        let Some(cmd) = self.commands.get(name.as_str()) else {
            env.out.push_text(format!(
                "Command '{name}' not found. Type 'help' to see all available commands."
            ));
            return DispatchOutcome::NotFound;
        };

        match cmd.execute(args, env) {
            Ok(()) => DispatchOutcome::Executed,
            Err(e) => {
                log::warn!("Command {name} failed: {e}");
                env.out
                    .push_text(format!("Error executing command '{name}': {e}"));
                DispatchOutcome::Failed
            },
        }
    }

    /// Built-in help with access to the registry.
    fn execute_help(&self, args: &[&str], out: &mut Transcript) {
        if let Some(&topic) = args.first() {
            let topic = topic.to_lowercase();
            match self
                .list_commands()
                .into_iter()
                .find(|(name, _, _)| *name == topic)
            {
                Some((name, desc, usage)) => {
                    out.push_text(format!("{name}: {desc}"));
                    if let Some(usage) = usage {
                        out.push_text(format!("Usage: {usage}"));
                    }
                },
                None => out.push_text(format!("No help available for '{topic}'.")),
            }
            return;
        }

        out.push_text("Available commands:");
        for (name, desc, usage) in self.list_commands() {
            match usage {
                Some(usage) => out.push_text(format!("- {name}: {desc} (Usage: {usage})")),
                None => out.push_text(format!("- {name}: {desc}")),
            }
        }
    }
}
