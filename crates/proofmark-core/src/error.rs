// crates/proofmark-core/src/error.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that cross the Proofmark core boundary.
///
/// Provider failures never appear here: they are absorbed by the fallback
/// chain. Only validation and registrar failures reach callers of the
/// generation path; the remaining variants come from queries and plumbing.
#[derive(Debug, Error)]
pub enum ProofmarkError {
    /// Bad caller input (missing prompt, author, content, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The registrar rejected or failed to answer a request.
    /// Raised after a successful generation this means the content was
    /// produced but never recorded.
    #[error("Registrar error: {0}")]
    Registrar(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record store failure (lock poisoning and the like).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProofmarkError {
    /// Stable machine-readable code, carried in the RPC envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ProofmarkError::Validation(_) => "validation",
            ProofmarkError::Registrar(_) => "registrar",
            ProofmarkError::NotFound(_) => "not_found",
            ProofmarkError::Storage(_) => "storage",
            ProofmarkError::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for ProofmarkError {
    fn from(e: serde_json::Error) -> Self {
        ProofmarkError::Serialization(e.to_string())
    }
}

/// Failure of a single provider adapter attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The attempt exceeded its time budget.
    #[error("provider timed out")]
    Timeout,

    /// Network failure or non-success HTTP status.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered with a body we could not interpret.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The provider answered successfully but without usable content.
    #[error("empty response")]
    EmptyResponse,
}

/// Coarse classification of a [`ProviderError`], used in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderErrorKind {
    Timeout,
    Transport,
    MalformedResponse,
    EmptyResponse,
}

impl ProviderError {
    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            ProviderError::Timeout => ProviderErrorKind::Timeout,
            ProviderError::Transport(_) => ProviderErrorKind::Transport,
            ProviderError::MalformedResponse(_) => ProviderErrorKind::MalformedResponse,
            ProviderError::EmptyResponse => ProviderErrorKind::EmptyResponse,
        }
    }
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderErrorKind::Timeout => write!(f, "timeout"),
            ProviderErrorKind::Transport => write!(f, "transport"),
            ProviderErrorKind::MalformedResponse => write!(f, "malformed-response"),
            ProviderErrorKind::EmptyResponse => write!(f, "empty-response"),
        }
    }
}
