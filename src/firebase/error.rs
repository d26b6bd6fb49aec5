//! Firebase Error Types
//!
//! Errors are surfaced to the user, never retried. `Display` output is what
//! forms and toasts show.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FirebaseError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from a Firebase API, carrying the server's message
    /// (e.g. `EMAIL_NOT_FOUND`, `INVALID_LOGIN_CREDENTIALS`).
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("malformed document: {0}")]
    Decode(String),

    #[error("not signed in")]
    NotSignedIn,

    #[error("browser storage unavailable")]
    Storage,
}

impl FirebaseError {
    pub fn decode(context: impl Into<String>) -> Self {
        Self::Decode(context.into())
    }
}
