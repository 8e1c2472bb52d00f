//! Error types for the upload flow.
//!
//! - [`ToolError`] - tool identifier parsing
//! - [`PreconditionError`] - submission refused before any request is made
//! - [`SubmissionError`] - the conversion exchange failed
//!
//! None of these are fatal: the controller turns each one into a
//! notification and returns the UI to its ready state.

use thiserror::Error;

use crate::notification::{CONVERSION_FAILED_NOTICE, IN_FLIGHT_NOTICE, SELECT_TOOL_NOTICE, TRANSPORT_FAILED_NOTICE};

// =============================================================================
// Tool Errors
// =============================================================================

/// Errors when resolving a tool identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The identifier is not one of the predefined tools.
    #[error("Unknown tool: {0}")]
    Unknown(String),
}

// =============================================================================
// Precondition Errors
// =============================================================================

/// Reasons a submission is refused locally, without touching the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// No tool has been selected yet.
    #[error("No tool selected")]
    NoToolSelected,

    /// Another submission is still outstanding.
    #[error("A submission is already in flight")]
    SubmissionInFlight,
}

impl PreconditionError {
    /// Notice shown to the user for this refusal.
    pub fn notice(&self) -> &'static str {
        match self {
            PreconditionError::NoToolSelected => SELECT_TOOL_NOTICE,
            PreconditionError::SubmissionInFlight => IN_FLIGHT_NOTICE,
        }
    }
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Failures of the conversion exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request could not be sent or the response body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response was not a valid conversion result.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The server reported the conversion as failed.
    #[error("Conversion rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
}

impl SubmissionError {
    /// Whether the failure happened below the application protocol.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SubmissionError::Transport(_) | SubmissionError::MalformedResponse(_)
        )
    }

    /// Notice shown to the user for this failure.
    ///
    /// Server messages are passed through verbatim; an empty or missing
    /// message falls back to the generic text.
    pub fn notice(&self) -> String {
        match self {
            SubmissionError::Rejected { message: Some(msg) } if !msg.is_empty() => msg.clone(),
            SubmissionError::Rejected { .. } => CONVERSION_FAILED_NOTICE.to_string(),
            SubmissionError::Transport(_) | SubmissionError::MalformedResponse(_) => {
                TRANSPORT_FAILED_NOTICE.to_string()
            }
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for the conversion exchange.
pub type SubmissionResult<T> = Result<T, SubmissionError>;
