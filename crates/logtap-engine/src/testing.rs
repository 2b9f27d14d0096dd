//! Scripted command runner for exercising retrieval logic without a
//! container runtime or orchestrator on the host.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::command::{CommandOutcome, CommandRunner, CommandSpec};

/// A [`CommandRunner`] that replays queued outcomes and records every
/// spec it was asked to run.
pub(crate) struct FakeRunner {
    responses: Mutex<VecDeque<CommandOutcome>>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Queues a zero-exit outcome with the given stdout.
    pub(crate) fn push_success(&self, stdout: &str) {
        self.push(CommandOutcome {
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code: 0,
        });
    }

    /// Queues a failing outcome with the given stderr.
    pub(crate) fn push_failure(&self, stderr: &str, exit_code: i32) {
        self.push(CommandOutcome {
            stdout: String::new(),
            stderr: stderr.to_string(),
            exit_code,
        });
    }

    pub(crate) fn push(&self, outcome: CommandOutcome) {
        self.responses.lock().expect("lock").push_back(outcome);
    }

    /// Returns every spec run so far, in order.
    pub(crate) fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, spec: CommandSpec) -> CommandOutcome {
        self.calls.lock().expect("lock").push(spec);
        self.responses
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| CommandOutcome {
                stdout: String::new(),
                stderr: "no scripted response".to_string(),
                exit_code: -1,
            })
    }
}
