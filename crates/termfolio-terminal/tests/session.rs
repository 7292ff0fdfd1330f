//! End-to-end: drive a whole session through key events.

use std::time::{Duration, Instant};

use termfolio_terminal::{InputResult, Session};
use termfolio_types::config::TermfolioConfig;
use termfolio_types::input::{Button, InputEvent};

struct Harness {
    session: Session,
    now: Instant,
}

impl Harness {
    fn new() -> Self {
        Self {
            session: Session::new(&TermfolioConfig::default()),
            now: Instant::now(),
        }
    }

    fn press(&mut self, button: Button) -> InputResult {
        self.session
            .handle_input(&InputEvent::ButtonPress(button), self.now)
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.session.handle_input(&InputEvent::TextInput(c), self.now);
        }
    }

    /// Type `line`, submit it, and return only the output it produced
    /// (without the echoed prompt line).
    fn run(&mut self, line: &str) -> Vec<String> {
        let before = self.session.transcript().len();
        self.type_text(line);
        self.press(Button::Confirm);
        let lines = self.lines();
        lines.into_iter().skip(before + 1).collect()
    }

    fn lines(&self) -> Vec<String> {
        self.session
            .transcript()
            .lines()
            .iter()
            .map(|l| l.plain())
            .collect()
    }
}

#[test]
fn whitespace_submission_does_nothing() {
    let mut h = Harness::new();
    h.type_text(" \t ");
    assert_eq!(h.press(Button::Confirm), InputResult::Handled);
    assert!(h.session.transcript().is_empty());
    assert!(h.session.history().is_empty());
}

#[test]
fn unknown_command_prints_one_line() {
    let mut h = Harness::new();
    let out = h.run("frobnicate now");
    assert_eq!(
        out,
        vec!["Command 'frobnicate' not found. Type 'help' to see all available commands."]
    );
    assert_eq!(h.session.theme().active(), "dark");
}

#[test]
fn repeated_line_is_recorded_once() {
    let mut h = Harness::new();
    h.run("about");
    h.run("about");
    assert_eq!(h.session.history().entries(), ["about"]);
    h.run("skills");
    assert_eq!(h.session.history().entries(), ["about", "skills"]);
}

#[test]
fn recall_walks_history_and_back_to_draft() {
    let mut h = Harness::new();
    for line in ["echo A", "echo B", "echo C"] {
        h.run(line);
    }
    let mut seen = Vec::new();
    for _ in 0..4 {
        h.press(Button::Up);
        seen.push(h.session.input().to_string());
    }
    assert_eq!(seen, ["echo C", "echo B", "echo A", "echo A"]);

    let mut seen = Vec::new();
    for _ in 0..3 {
        h.press(Button::Down);
        seen.push(h.session.input().to_string());
    }
    assert_eq!(seen, ["echo B", "echo C", ""]);
}

#[test]
fn down_while_composing_restores_staged_text() {
    let mut h = Harness::new();
    h.run("about");
    h.type_text("q");
    h.press(Button::Down);
    assert_eq!(h.session.input(), "");
    assert_eq!(h.session.cursor(), 0);
}

#[test]
fn up_at_oldest_entry_keeps_edits() {
    let mut h = Harness::new();
    h.run("about");
    h.press(Button::Up);
    h.type_text("x");
    assert_eq!(h.press(Button::Up), InputResult::Handled);
    assert_eq!(h.session.input(), "aboutx");
}

#[test]
fn failed_command_is_still_recalled() {
    let mut h = Harness::new();
    h.run("nope");
    assert_eq!(h.session.history().entries(), ["nope"]);
    h.press(Button::Up);
    assert_eq!(h.session.input(), "nope");
}

#[test]
fn recalled_line_can_be_resubmitted() {
    let mut h = Harness::new();
    h.run("echo again");
    h.press(Button::Up);
    h.press(Button::Confirm);
    let lines = h.lines();
    assert_eq!(lines.iter().filter(|l| *l == "again").count(), 2);
    assert_eq!(h.session.history().len(), 1);
}

#[test]
fn help_lists_each_command_once() {
    let mut h = Harness::new();
    let out = h.run("help");
    assert_eq!(out[0], "Available commands:");
    let names: Vec<String> = h
        .session
        .registry()
        .list_commands()
        .iter()
        .map(|c| c.0.to_string())
        .collect();
    assert_eq!(out.len(), names.len() + 1);
    for name in &names {
        let prefix = format!("- {name}:");
        assert_eq!(out.iter().filter(|l| l.starts_with(&prefix)).count(), 1);
    }
}

#[test]
fn unknown_theme_keeps_current() {
    let mut h = Harness::new();
    h.run("theme dracula");
    let out = h.run("theme unknownxyz");
    assert_eq!(h.session.theme().active(), "dracula");
    assert_eq!(out[0], "Error: Theme 'unknownxyz' not found.");
    assert!(out[1].contains("dracula"));
}

#[test]
fn cowsay_bubble_fits_message() {
    let mut h = Harness::new();
    let out = h.run("cowsay hello");
    assert_eq!(out[0], "  _______");
    assert_eq!(out[1], "< hello >");
    assert_eq!(out[2], "  -------");
}

#[test]
fn echo_normalizes_spacing() {
    let mut h = Harness::new();
    assert_eq!(h.run("echo a  b"), vec!["a b"]);
}

#[test]
fn clear_empties_everything() {
    let mut h = Harness::new();
    h.session.start();
    h.run("about");
    h.run("clear");
    assert!(h.session.transcript().is_empty());
}

#[test]
fn calc_evaluates_and_rejects_code() {
    let mut h = Harness::new();
    assert_eq!(h.run("calc 2 + 3 * (4 / 2)"), vec!["8"]);
    let out = h.run("calc alert(1)");
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with("Error: "));
}

#[test]
fn joke_punchline_follows_on_tick() {
    let mut h = Harness::new();
    let out = h.run("joke");
    assert_eq!(out.len(), 1);
    let before = h.session.transcript().len();
    h.session.tick(h.now + Duration::from_millis(1000));
    assert_eq!(h.session.transcript().len(), before + 1);
}

#[test]
fn link_without_host_service_reports_error() {
    let mut h = Harness::new();
    let out = h.run("github");
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with("Error executing command 'github':"));
}

#[test]
fn quit_event_ends_session() {
    let mut h = Harness::new();
    assert_eq!(
        h.session.handle_input(&InputEvent::Quit, h.now),
        InputResult::Quit
    );
}
