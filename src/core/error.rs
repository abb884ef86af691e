//! Error types for sink implementations
//!
//! These never reach a logging caller: the facade swallows sink failures at
//! the dispatch boundary. They exist so sinks can report failure precisely
//! and so `flush` can propagate IO problems to whoever asked for the flush.

pub type Result<T> = std::result::Result<T, SinkError>;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink refused an entry
    #[error("sink '{name}' rejected entry: {message}")]
    Rejected { name: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SinkError {
    /// Create a rejection error naming the refusing sink
    pub fn rejected(name: impl Into<String>, message: impl Into<String>) -> Self {
        SinkError::Rejected {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SinkError::Other(msg.into())
    }
}
