//! Console state machine
//!
//! Kept free of signals so every transition can be tested on the host.
//! The view model wraps it in a single `RwSignal`.

use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u501_query_console::{
    ConnectionConfig, ConnectionField, QueryRequest, QueryResult, EMPTY_PROMPT_MESSAGE,
};

/// What the panel below the form shows. Error and result never coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConsoleOutcome {
    #[default]
    Idle,
    Error(String),
    Result(QueryResult),
}

/// A request that passed validation and is ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub generation: u64,
    pub request: QueryRequest,
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    connection: ConnectionConfig,
    prompt: String,
    outcome: ConsoleOutcome,
    /// Generation handed to the most recent submission
    last_generation: u64,
    /// Generation whose reply is still awaited; only its reply is applied
    pending: Option<u64>,
    /// Bumped on every outcome change so readers can skip prompt and field edits
    outcome_revision: u64,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn outcome(&self) -> &ConsoleOutcome {
        &self.outcome
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            ConsoleOutcome::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&QueryResult> {
        match &self.outcome {
            ConsoleOutcome::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn outcome_revision(&self) -> u64 {
        self.outcome_revision
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a reply of `generation` would still be applied
    pub fn is_awaiting(&self, generation: u64) -> bool {
        self.pending == Some(generation)
    }

    pub fn update_connection_field(&mut self, field: ConnectionField, value: String) {
        self.connection.set(field, value);
    }

    pub fn update_prompt(&mut self, value: String) {
        self.prompt = value;
    }

    /// Validate the prompt and start a new request generation.
    ///
    /// A blank prompt sets the validation message and yields no submission.
    pub fn begin_submit(&mut self) -> UseCaseResult<Submission> {
        if self.prompt.trim().is_empty() {
            let err = UseCaseError::validation(EMPTY_PROMPT_MESSAGE);
            self.set_outcome(ConsoleOutcome::Error(err.user_message().to_string()));
            return Err(err);
        }

        self.last_generation += 1;
        self.pending = Some(self.last_generation);
        self.set_outcome(ConsoleOutcome::Idle);

        Ok(Submission {
            generation: self.last_generation,
            request: QueryRequest {
                prompt: self.prompt.clone(),
                connection: self.connection.clone(),
            },
        })
    }

    /// Apply the reply of `generation`. Returns `false` if a newer submission
    /// superseded it, in which case nothing changes.
    pub fn settle(&mut self, generation: u64, reply: UseCaseResult<QueryResult>) -> bool {
        if !self.is_awaiting(generation) {
            return false;
        }
        self.pending = None;
        self.set_outcome(match reply {
            Ok(result) => ConsoleOutcome::Result(result),
            Err(err) => ConsoleOutcome::Error(err.user_message().to_string()),
        });
        true
    }

    /// Reset prompt, result and error. Connection fields and any pending
    /// request are left alone.
    pub fn clear(&mut self) {
        self.prompt.clear();
        self.set_outcome(ConsoleOutcome::Idle);
    }

    /// SQL of the shown result, if any
    pub fn sql(&self) -> Option<&str> {
        self.result().map(|r| r.sql.as_str())
    }

    fn set_outcome(&mut self, outcome: ConsoleOutcome) {
        self.outcome = outcome;
        self.outcome_revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_query_console::{interpret_reply, QueryReply};

    fn result_of(body: &str) -> QueryResult {
        match interpret_reply(body).unwrap() {
            QueryReply::Succeeded(result) => result,
            QueryReply::Failed(message) => panic!("unexpected failure: {}", message),
        }
    }

    fn with_prompt(prompt: &str) -> ConsoleState {
        let mut state = ConsoleState::new();
        state.update_prompt(prompt.to_string());
        state
    }

    #[test]
    fn test_blank_prompt_is_rejected_locally() {
        for prompt in ["", "   ", "\n\t "] {
            let mut state = with_prompt(prompt);
            let err = state.begin_submit().unwrap_err();
            assert_eq!(err.user_message(), EMPTY_PROMPT_MESSAGE);
            assert_eq!(state.error_message(), Some(EMPTY_PROMPT_MESSAGE));
            assert!(!state.is_in_flight());
        }
    }

    #[test]
    fn test_submit_clears_previous_outcome_and_keeps_prompt_untrimmed() {
        let mut state = with_prompt("");
        state.begin_submit().unwrap_err();
        state.update_prompt("  list orders  ".to_string());
        state.update_connection_field(ConnectionField::Host, "db".to_string());

        let submission = state.begin_submit().unwrap();
        assert!(state.is_in_flight());
        assert_eq!(state.outcome(), &ConsoleOutcome::Idle);
        assert_eq!(submission.request.prompt, "  list orders  ");
        assert_eq!(submission.request.connection.host, "db");
    }

    #[test]
    fn test_success_sets_result() {
        let mut state = with_prompt("one");
        let submission = state.begin_submit().unwrap();
        let result = result_of(r#"{"sql":"SELECT 1","data":[{"a":1}]}"#);

        assert!(state.settle(submission.generation, Ok(result.clone())));
        assert_eq!(state.result(), Some(&result));
        assert_eq!(state.error_message(), None);
        assert_eq!(state.sql(), Some("SELECT 1"));
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_application_error_is_verbatim() {
        let mut state = with_prompt("one");
        let submission = state.begin_submit().unwrap();

        state.settle(submission.generation, Err(UseCaseError::application("X")));
        assert_eq!(state.error_message(), Some("X"));
        assert_eq!(state.result(), None);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_transport_error_is_generic() {
        let mut state = with_prompt("one");
        let submission = state.begin_submit().unwrap();

        state.settle(
            submission.generation,
            Err(UseCaseError::transport("TypeError: Failed to fetch")),
        );
        assert_eq!(state.error_message(), Some("Failed to connect to server"));
        assert_eq!(state.result(), None);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_only_latest_generation_is_applied() {
        let mut state = with_prompt("first");
        let first = state.begin_submit().unwrap();
        state.update_prompt("second".to_string());
        let second = state.begin_submit().unwrap();

        let newer = result_of(r#"{"sql":"SELECT 2","data":[]}"#);
        assert!(state.settle(second.generation, Ok(newer.clone())));

        let older = result_of(r#"{"sql":"SELECT 1","data":[]}"#);
        assert!(!state.settle(first.generation, Ok(older)));
        assert_eq!(state.result(), Some(&newer));
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_stale_reply_while_newer_pending() {
        let mut state = with_prompt("first");
        let first = state.begin_submit().unwrap();
        let second = state.begin_submit().unwrap();

        assert!(!state.settle(first.generation, Err(UseCaseError::application("old"))));
        assert!(state.is_in_flight());
        assert_eq!(state.outcome(), &ConsoleOutcome::Idle);

        assert!(state.settle(second.generation, Err(UseCaseError::application("new"))));
        assert_eq!(state.error_message(), Some("new"));
    }

    #[test]
    fn test_clear_keeps_connection() {
        let mut state = with_prompt("one");
        state.update_connection_field(ConnectionField::User, "admin".to_string());
        state.update_connection_field(ConnectionField::Password, "secret".to_string());
        let submission = state.begin_submit().unwrap();
        state.settle(
            submission.generation,
            Ok(result_of(r#"{"sql":"S","data":[]}"#)),
        );

        state.clear();
        assert_eq!(state.prompt(), "");
        assert_eq!(state.outcome(), &ConsoleOutcome::Idle);
        assert_eq!(state.sql(), None);
        assert_eq!(state.connection().user, "admin");
        assert_eq!(state.connection().password, "secret");
    }

    #[test]
    fn test_clear_from_error() {
        let mut state = with_prompt(" ");
        state.begin_submit().unwrap_err();
        state.clear();
        assert_eq!(state.error_message(), None);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_is_awaiting_tracks_latest_generation() {
        let mut state = with_prompt("first");
        assert!(!state.is_awaiting(1));

        let first = state.begin_submit().unwrap();
        assert!(state.is_awaiting(first.generation));

        let second = state.begin_submit().unwrap();
        assert!(!state.is_awaiting(first.generation));
        assert!(state.is_awaiting(second.generation));

        state.settle(second.generation, Err(UseCaseError::application("done")));
        assert!(!state.is_awaiting(second.generation));
    }

    #[test]
    fn test_outcome_revision_ignores_input_edits() {
        let mut state = with_prompt("one");
        let start = state.outcome_revision();

        state.update_prompt("two".to_string());
        state.update_connection_field(ConnectionField::Port, "5432".to_string());
        assert_eq!(state.outcome_revision(), start);

        let submission = state.begin_submit().unwrap();
        let submitted = state.outcome_revision();
        assert!(submitted > start);

        state.update_prompt("three".to_string());
        assert_eq!(state.outcome_revision(), submitted);

        state.settle(
            submission.generation,
            Ok(result_of(r#"{"sql":"S","data":[]}"#)),
        );
        let settled = state.outcome_revision();
        assert!(settled > submitted);

        assert!(!state.settle(submission.generation, Err(UseCaseError::application("late"))));
        assert_eq!(state.outcome_revision(), settled);

        state.clear();
        assert!(state.outcome_revision() > settled);
    }
}
