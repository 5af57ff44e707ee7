use serde::{Deserialize, Serialize};

/// Text shown for every failure to complete the request/response cycle.
/// The underlying cause is kept in [`UseCaseError::details`].
pub const TRANSPORT_ERROR_MESSAGE: &str = "Failed to connect to server";

/// UseCase execution result
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Where a failure originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Rejected locally, never reached the network
    Validation,
    /// The service answered and reported an error itself
    Application,
    /// The request/response cycle did not complete
    Transport,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Application => "APPLICATION_ERROR",
            ErrorKind::Transport => "TRANSPORT_ERROR",
        }
    }
}

/// UseCase execution error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub kind: ErrorKind,
    /// User-facing text
    pub message: String,
    /// Diagnostic detail, never shown in the UI
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Error reported by the service; the message is surfaced verbatim.
    pub fn application(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Application, message)
    }

    /// Collapses any transport-level cause into the generic message.
    pub fn transport(cause: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, TRANSPORT_ERROR_MESSAGE).with_details(cause)
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Text to display to the user
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}
