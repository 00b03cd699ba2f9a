//! Generation task snapshots and the small terminal-state machine:
//! `Created → Polling → {Succeeded | Failed}`, with `TimedOut` reachable
//! from either non-terminal state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    Created,
    Polling,
    Succeeded,
    Failed,
    TimedOut,
}

impl TaskState {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Succeeded | TaskState::Failed | TaskState::TimedOut
        )
    }
}

/// One remote generation job, tracked from submission to a terminal state.
/// Owned by the client while a run is in flight; the caller discards the
/// final snapshot once observed — nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationTask {
    pub task_id: String,
    pub state: TaskState,
    pub result_urls: Vec<String>,
    pub submitted_at: DateTime<Utc>,
    /// Remote-reported failure message when `state == Failed`.
    pub failure_reason: Option<String>,
    /// Last transient polling error, kept for diagnostics only. A timed-out
    /// run reports `TimedOut`, not this.
    pub last_transient_error: Option<String>,
}

impl GenerationTask {
    pub(crate) fn created(task_id: String) -> Self {
        Self {
            task_id,
            state: TaskState::Created,
            result_urls: Vec::new(),
            submitted_at: Utc::now(),
            failure_reason: None,
            last_transient_error: None,
        }
    }

    /// Collapses a terminal snapshot into a plain result for callers that
    /// only care about the URLs. Returns `None` while the task is still
    /// in flight.
    pub fn outcome(&self) -> Option<Result<Vec<String>>> {
        match self.state {
            TaskState::Succeeded => Some(Ok(self.result_urls.clone())),
            TaskState::Failed => Some(Err(Error::Remote {
                status: 200,
                message: self
                    .failure_reason
                    .clone()
                    .unwrap_or_else(|| "generation failed".to_string()),
            })),
            TaskState::TimedOut => Some(Err(Error::TimedOut {
                elapsed_secs: (Utc::now() - self.submitted_at).num_seconds().max(0) as u64,
            })),
            TaskState::Created | TaskState::Polling => None,
        }
    }
}
