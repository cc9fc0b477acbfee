//! Error types for task chains.
//!
//! Errors carry context that chains through layers:
//! Workflow → Task → Detail

use std::io;

use thiserror::Error;

/// Fatal failure signal returned by a task.
///
/// Returning one of these halts the rest of the chain. A problem the task
/// can absorb is logged to the context's error sink instead, and the task
/// returns `Ok(())` so the chain continues. A fatal error is never dropped
/// unreported: a task either returns it or downgrades it to a logged
/// diagnostic.
#[derive(Error, Debug)]
pub enum TaskError {
    /// File I/O failed.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },

    /// A required input was missing or unusable.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The task could not produce valid output.
    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    /// Generic task failure with message.
    #[error("{0}")]
    Other(String),
}

impl TaskError {
    /// Create an I/O error with operation context.
    pub fn io_error(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a missing input error.
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    /// Create an invalid output error.
    pub fn invalid_output(message: impl Into<String>) -> Self {
        Self::InvalidOutput(message.into())
    }

    /// Create a generic error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Driver-level failure report: which workflow halted, at which task, why.
///
/// The task's own signal is carried unchanged in `source`.
#[derive(Error, Debug)]
#[error("Workflow '{workflow}' halted at task '{task}': {source}")]
pub struct ChainError {
    /// Workflow that halted.
    pub workflow: String,
    /// Task whose failure halted it.
    pub task: String,
    /// The fatal signal the task returned.
    #[source]
    pub source: TaskError,
}

impl ChainError {
    /// Create a halt report for a failed task.
    pub fn halted(
        workflow: impl Into<String>,
        task: impl Into<String>,
        source: TaskError,
    ) -> Self {
        Self {
            workflow: workflow.into(),
            task: task.into(),
            source,
        }
    }
}

/// Result type for task operations.
pub type TaskResult<T> = Result<T, TaskError>;

/// Result type for workflow operations.
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn task_error_displays_context() {
        let err = TaskError::io_error(
            "read style.scss",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("read style.scss"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn chain_error_chains_context() {
        let task_err = TaskError::missing_input("style.scss not on disk");
        let chain_err = ChainError::halted("styles", "compile-css", task_err);

        let msg = chain_err.to_string();
        assert!(msg.contains("styles"));
        assert!(msg.contains("compile-css"));
    }

    #[test]
    fn chain_error_exposes_task_signal() {
        let chain_err = ChainError::halted(
            "styles",
            "compile-css",
            TaskError::other("compiler crashed"),
        );

        let source = chain_err.source().expect("task signal attached");
        assert_eq!(source.to_string(), "compiler crashed");
    }
}
