//! Deferred output: lines that land in the transcript after a delay.
//!
//! Tasks are never cancelled and carry no ordering guarantee relative to
//! commands the user types in the meantime; whatever is due when the host
//! ticks the session gets appended.

use std::time::{Duration, Instant};

use crate::transcript::{Transcript, TranscriptLine};

#[derive(Debug, Clone)]
struct DeferredTask {
    due: Instant,
    seq: u64,
    lines: Vec<TranscriptLine>,
}

/// Pending deferred output.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    tasks: Vec<DeferredTask>,
    next_seq: u64,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `lines` to be appended once `now + delay` has passed.
    pub fn schedule(&mut self, now: Instant, delay: Duration, lines: Vec<TranscriptLine>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(DeferredTask {
            due: now + delay,
            seq,
            lines,
        });
    }

    /// Append every task due at `now`, earliest first. Returns the number of
    /// tasks that fired.
    pub fn run_due(&mut self, now: Instant, out: &mut Transcript) -> usize {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;
        due.sort_by_key(|t| (t.due, t.seq));
        let fired = due.len();
        for task in due {
            for line in task.lines {
                out.push(line);
            }
        }
        fired
    }

    /// Time until the earliest pending task, if any.
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        self.tasks
            .iter()
            .map(|t| t.due.saturating_duration_since(now))
            .min()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
