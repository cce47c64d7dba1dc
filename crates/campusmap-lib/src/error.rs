use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus map library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Graph document could not be located at the resolved path.
    #[error("graph document not found at {path}")]
    GraphNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the graph document")]
    ProjectDirsUnavailable,

    /// Raised when a graph document does not match the expected schema.
    #[error("invalid graph document: {message}")]
    Validation { message: String },

    /// Raised when a location name or id could not be found in the graph.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when both route endpoints resolve to the same location.
    #[error("start and destination are the same location: {node}")]
    IdenticalEndpoints { node: String },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any locations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for JSON syntax and serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Whether the error was caused by a malformed graph document.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::Json(_))
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
