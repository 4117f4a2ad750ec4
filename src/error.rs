//! Error types for phasesort.
//!
//! Every error a machine can return is a strongly typed contract violation:
//! the caller invoked an operation the machine's current state does not
//! permit. There is no I/O, allocation-failure, or external-resource error
//! surface in this crate, so there is nothing environmental to report and
//! nothing is ever retried or masked.

use thiserror::Error;

use crate::machine::Mode;

/// Errors returned by [`SortingMachine`](crate::SortingMachine) operations.
///
/// Both variants signal caller bugs, not recoverable runtime conditions.
/// Callers are expected to check the mode (and, for extraction, the length)
/// before calling, and to treat these errors as fatal when they do occur.
#[derive(Debug, Error)]
pub enum MachineError {
    /// An operation was invoked while the machine was in the wrong mode.
    ///
    /// The machine is left exactly as it was; mode checks happen before any
    /// mutation.
    #[error("operation `{operation}` is not permitted in {mode} mode")]
    InvalidState {
        /// Name of the rejected operation.
        operation: &'static str,
        /// The mode the machine was in when the operation was rejected.
        mode: Mode,
    },

    /// An extraction was attempted while the machine contained no elements.
    #[error("machine is empty: nothing to extract")]
    EmptyMachine,
}

impl MachineError {
    /// Returns true if this is a wrong-mode error.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Returns true if this is an empty-machine error.
    #[must_use]
    pub const fn is_empty_machine(&self) -> bool {
        matches!(self, Self::EmptyMachine)
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            // The wrong mode stays wrong; retrying cannot change it.
            Self::InvalidState { .. } => false,
            // An empty machine only empties further.
            Self::EmptyMachine => false,
        }
    }
}

/// Result type alias for machine operations.
pub type MachineResult<T> = Result<T, MachineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_message_names_operation_and_mode() {
        let err = MachineError::InvalidState {
            operation: "add",
            mode: Mode::Extracting,
        };
        let msg = format!("{err}");
        assert!(msg.contains("`add`"));
        assert!(msg.contains("extraction"));
    }

    #[test]
    fn test_invalid_state_message_insertion_mode() {
        let err = MachineError::InvalidState {
            operation: "remove_first",
            mode: Mode::Inserting,
        };
        let msg = format!("{err}");
        assert!(msg.contains("`remove_first`"));
        assert!(msg.contains("insertion"));
    }

    #[test]
    fn test_empty_machine_message() {
        let err = MachineError::EmptyMachine;
        let msg = format!("{err}");
        assert!(msg.contains("empty"));
    }

    #[test]
    fn test_classification_helpers() {
        let wrong_mode = MachineError::InvalidState {
            operation: "peek_first",
            mode: Mode::Inserting,
        };
        assert!(wrong_mode.is_invalid_state());
        assert!(!wrong_mode.is_empty_machine());

        let empty = MachineError::EmptyMachine;
        assert!(empty.is_empty_machine());
        assert!(!empty.is_invalid_state());
    }

    #[test]
    fn test_nothing_is_retryable() {
        let wrong_mode = MachineError::InvalidState {
            operation: "add",
            mode: Mode::Extracting,
        };
        assert!(!wrong_mode.is_retryable());
        assert!(!MachineError::EmptyMachine.is_retryable());
    }
}
