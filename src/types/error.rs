use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid selection expression {expression:?}: {message}")]
    InvalidExpression { expression: String, message: String },

    /// Markup a `NodeSelector` could not parse.
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },
}

impl ExtractError {
    pub fn invalid_expression(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidExpression {
            expression: expression.into(),
            message: message.into(),
        }
    }

    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }
}

/// Failure of the fetch-then-extract flow.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl SourceError {
    /// True for the error kinds that describe bad caller input rather than a
    /// network failure: a bad expression, unparseable markup or a malformed URL.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::Extract(_) | Self::Fetch(FetchError::MalformedUrl { .. })
        )
    }
}
