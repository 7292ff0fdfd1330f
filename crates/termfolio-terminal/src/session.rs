//! Interactive session: the read-eval-append loop behind the prompt.
//!
//! A [`Session`] owns every piece of mutable terminal state (input field,
//! history, transcript, theme, deferred output) and the host services, and
//! turns [`InputEvent`]s into dispatches. The host only feeds it events,
//! ticks it, and renders what it exposes.

use std::time::{Duration, Instant};

use termfolio_platform::{ClipboardService, LinkService, Platform, TimeService};
use termfolio_types::config::TermfolioConfig;
use termfolio_types::input::{Button, InputEvent};

use crate::commands::register_builtins;
use crate::deferred::DeferredQueue;
use crate::history::HistoryBuffer;
use crate::interpreter::{CommandRegistry, DispatchOutcome, Environment};
use crate::theme::ThemeState;
use crate::transcript::{Transcript, escape_html};
use crate::ui_commands::print_welcome;

/// How the session disposed of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Consumed; the host should not apply its own default behavior.
    Handled,
    /// Not meaningful to the session; the host may handle it.
    Ignored,
    /// The user asked to leave.
    Quit,
}

/// One interactive terminal.
pub struct Session {
    registry: CommandRegistry,
    history: HistoryBuffer,
    transcript: Transcript,
    theme: ThemeState,
    deferred: DeferredQueue,
    prompt: String,
    input: String,
    /// Edit cursor, in chars.
    cursor: usize,
    clipboard: Option<Box<dyn ClipboardService>>,
    links: Option<Box<dyn LinkService>>,
    time: Option<Box<dyn TimeService>>,
}

impl Session {
    /// A session with every built-in command and no host services.
    pub fn new(config: &TermfolioConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry, config);
        Self::with_registry(registry, config)
    }

    /// A session over a caller-built registry.
    pub fn with_registry(registry: CommandRegistry, config: &TermfolioConfig) -> Self {
        let history = match config.history_capacity {
            Some(cap) => HistoryBuffer::with_capacity(cap),
            None => HistoryBuffer::new(),
        };
        Self {
            registry,
            history,
            transcript: Transcript::default(),
            theme: ThemeState::new(&config.default_theme),
            deferred: DeferredQueue::new(),
            prompt: config.prompt.clone(),
            input: String::new(),
            cursor: 0,
            clipboard: None,
            links: None,
            time: None,
        }
    }

    /// Use `platform` for every host service.
    pub fn with_platform<P: Platform + Clone + 'static>(self, platform: P) -> Self {
        self.with_clipboard(Box::new(platform.clone()))
            .with_links(Box::new(platform.clone()))
            .with_time(Box::new(platform))
    }

    /// Use `clipboard` for `email`.
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardService>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Use `links` for `github` / `linkedin`.
    pub fn with_links(mut self, links: Box<dyn LinkService>) -> Self {
        self.links = Some(links);
        self
    }

    /// Use `time` for `date`.
    pub fn with_time(mut self, time: Box<dyn TimeService>) -> Self {
        self.time = Some(time);
        self
    }

    /// Show the welcome banner. Call once before the first event.
    pub fn start(&mut self) {
        log::info!("Session started, theme '{}'", self.theme.active());
        print_welcome(&mut self.transcript);
    }

    /// Apply one input event.
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> InputResult {
        match event {
            InputEvent::ButtonPress(Button::Confirm) => {
                let line = std::mem::take(&mut self.input);
                self.cursor = 0;
                self.submit(&line, now);
            },
            InputEvent::ButtonPress(Button::Up) => {
                if let Some(entry) = self.history.recall_previous(&self.input) {
                    self.input = entry.to_string();
                    self.cursor = self.input.chars().count();
                }
            },
            InputEvent::ButtonPress(Button::Down) => {
                if let Some(entry) = self.history.recall_next() {
                    self.input = entry.to_string();
                    self.cursor = self.input.chars().count();
                }
            },
            InputEvent::ButtonPress(Button::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
            },
            InputEvent::ButtonPress(Button::Right) => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            },
            InputEvent::TextInput(c) if c.is_control() => return InputResult::Ignored,
            InputEvent::TextInput(c) => {
                let at = self.byte_offset(self.cursor);
                self.input.insert(at, *c);
                self.cursor += 1;
            },
            InputEvent::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                }
            },
            InputEvent::FocusGained => {},
            InputEvent::Quit => {
                log::info!("Session closed");
                return InputResult::Quit;
            },
        }
        InputResult::Handled
    }

    /// Run a submitted line: echo it, dispatch it, then record it.
    ///
    /// Blank lines produce nothing and return `None`.
    pub fn submit(&mut self, line: &str, now: Instant) -> Option<DispatchOutcome> {
        let command = line.trim();
        if command.is_empty() {
            self.transcript.scroll_to_end();
            return None;
        }
        self.transcript.push_markup(format!(
            "<span class=\"prompt\">{}</span> {}",
            escape_html(&self.prompt),
            escape_html(command)
        ));

        let mut env = Environment {
            out: &mut self.transcript,
            theme: &mut self.theme,
            deferred: &mut self.deferred,
            now,
            clipboard: self
                .clipboard
                .as_deref_mut()
                .map(|c| c as &mut dyn ClipboardService),
            links: self.links.as_deref().map(|l| l as &dyn LinkService),
            time: self.time.as_deref().map(|t| t as &dyn TimeService),
        };
        let outcome = self.registry.execute(command, &mut env);
        self.history.submit(command);
        self.transcript.scroll_to_end();
        outcome
    }

    /// Append deferred output that has come due. Returns the number of tasks
    /// that fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let fired = self.deferred.run_due(now, &mut self.transcript);
        if fired > 0 {
            log::debug!("{fired} deferred task(s) fired");
        }
        fired
    }

    /// Time until the next deferred output is due, if any is pending.
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        self.deferred.next_due_in(now)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Uncommitted text in the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Edit cursor position within [`input`](Self::input), in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Tell the transcript how many rows the host can show.
    pub fn set_viewport(&mut self, rows: usize) {
        self.transcript.set_viewport(rows);
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.input
            .char_indices()
            .nth(chars)
            .map_or(self.input.len(), |(i, _)| i)
    }
}
