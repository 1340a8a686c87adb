//! Deferred tasks run after the current claim has fully resolved.

use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Work the game defers instead of running inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// The AI plays its move.
    OpponentMove,
}

/// FIFO queue of deferred tasks.
///
/// Tasks are never cancelled once queued; the caller drains the queue
/// through [`crate::Game::run_pending`] before accepting further input.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: VecDeque<Task>,
}

impl Scheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a task.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, task: Task) {
        self.queue.push_back(task);
        debug!(pending = self.queue.len(), "Task scheduled");
    }

    /// Takes the next task, oldest first.
    pub fn next(&mut self) -> Option<Task> {
        self.queue.pop_front()
    }

    /// Whether `task` is waiting in the queue.
    pub fn contains(&self, task: Task) -> bool {
        self.queue.contains(&task)
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
