//! Query Console - View Model

use super::api;
use super::state::{ConsoleOutcome, ConsoleState};
use crate::shared::clipboard;
use contracts::usecases::common::ErrorKind;
use contracts::usecases::u501_query_console::ConnectionField;
use leptos::prelude::*;

/// Commands and derived reads over a single [`ConsoleState`] signal
#[derive(Clone, Copy)]
pub struct QueryConsoleVm {
    pub state: RwSignal<ConsoleState>,
    /// Changes only when the outcome does, not on every keystroke
    outcome_revision: Memo<u64>,
    query_url: StoredValue<String>,
}

impl QueryConsoleVm {
    pub fn new(query_url: String) -> Self {
        let state = RwSignal::new(ConsoleState::new());
        Self {
            state,
            outcome_revision: Memo::new(move |_| state.with(|s| s.outcome_revision())),
            query_url: StoredValue::new(query_url),
        }
    }

    pub fn prompt(&self) -> String {
        self.state.with(|s| s.prompt().to_string())
    }

    pub fn field(&self, field: ConnectionField) -> String {
        self.state.with(|s| s.connection().get(field).to_string())
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.with(|s| s.is_in_flight())
    }

    /// Current outcome, tracked through the revision only
    pub fn outcome(&self) -> ConsoleOutcome {
        self.outcome_revision.track();
        self.state.with_untracked(|s| s.outcome().clone())
    }

    pub fn has_result(&self) -> bool {
        self.outcome_revision.track();
        self.state.with_untracked(|s| s.result().is_some())
    }

    pub fn update_connection_field(&self, field: ConnectionField, value: String) {
        self.state.update(|s| s.update_connection_field(field, value));
    }

    pub fn update_prompt(&self, value: String) {
        self.state.update(|s| s.update_prompt(value));
    }

    /// Validate and send. Every valid call issues its own request; only the
    /// newest one's reply reaches the screen.
    pub fn submit_command(&self) {
        let submission = match self.state.try_update(|s| s.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                log::debug!("u501: submit rejected: {}", e);
                return;
            }
            None => return,
        };

        let state = self.state;
        let url = self.query_url.get_value();
        log::debug!(
            "u501: sending generation {} ({} chars) to {}",
            submission.generation,
            submission.request.prompt.chars().count(),
            url
        );

        wasm_bindgen_futures::spawn_local(async move {
            let generation = submission.generation;
            let reply = api::run_query(&url, &submission.request).await;

            match &reply {
                Ok(result) => log::debug!(
                    "u501: generation {} returned {} rows",
                    generation,
                    result.row_count()
                ),
                Err(e) if e.kind == ErrorKind::Transport => {
                    log::warn!("u501: generation {} failed: {}", generation, e)
                }
                Err(e) => log::info!("u501: generation {} rejected by service: {}", generation, e),
            }

            // Stale replies never touch the signal
            let awaited = state
                .try_with_untracked(|s| s.is_awaiting(generation))
                .unwrap_or(false);
            if !awaited {
                log::debug!("u501: discarded stale reply of generation {}", generation);
                return;
            }
            state.try_update(|s| s.settle(generation, reply));
        });
    }

    pub fn clear_command(&self) {
        self.state.update(|s| s.clear());
    }

    /// No-op when no result is shown
    pub fn copy_sql_command(&self) {
        if let Some(sql) = self.state.with_untracked(|s| s.sql().map(str::to_string)) {
            clipboard::write_text(sql);
        }
    }
}
