use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::{Analysis, Report};

/// Handed out by [`AnalysisSession::begin`]; only the most recent ticket
/// may publish its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Caller-held state for a front end that runs one analysis at a time.
/// Starting a new analysis supersedes any still in flight.
#[derive(Clone, Default)]
pub struct AnalysisSession {
    state: Arc<Mutex<SessionState>>,
}

#[derive(Default)]
struct SessionState {
    generation: u64,
    loading: bool,
    latest: Option<Report>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn begin(&self) -> Ticket {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.loading = true;
        Ticket(state.generation)
    }

    /// Returns the outcome when `ticket` is still current, `None` when a
    /// newer analysis has started since and this result is stale.
    pub async fn complete(&self, ticket: Ticket, outcome: Result<Analysis>) -> Option<Result<Analysis>> {
        let mut state = self.state.lock().await;
        if ticket.0 != state.generation {
            tracing::debug!("Discarding stale analysis result (ticket {})", ticket.0);
            return None;
        }

        state.loading = false;
        // Any terminal outcome replaces the displayed report
        state.latest = match &outcome {
            Ok(Analysis::Scored(report)) => Some((**report).clone()),
            _ => None,
        };
        Some(outcome)
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }

    pub async fn latest_report(&self) -> Option<Report> {
        self.state.lock().await.latest.clone()
    }
}
