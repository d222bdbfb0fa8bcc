use thiserror::Error;

use crate::models::FieldError;

/// Failures of the transfer wizard
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error("{}", join_messages(.0))]
    Validation(Vec<FieldError>),
    #[error("Insufficient balance")]
    InsufficientBalance,
    #[error("Transfer can only be sent from the confirm step")]
    NotSubmittable,
}

/// Failures of the history view
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistoryError {
    #[error("Failed to load transactions. Please try again.")]
    LoadFailed,
    #[error("History has not been loaded yet")]
    NotLoaded,
}

/// Bad configuration values read from the environment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Errors reported back to the user by a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error("Page not found: {0}")]
    UnknownRoute(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Transfer(#[from] TransferError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_validation_message_joins_fields() {
        let err = TransferError::Validation(vec![
            FieldError::new(Field::Recipient, "Pick a recipient"),
            FieldError::new(Field::PayTag, "Bad tag"),
        ]);
        assert_eq!(err.to_string(), "Pick a recipient; Bad tag");
    }

    #[test]
    fn test_command_error_wraps_transfer_error() {
        let err: CommandError = TransferError::InsufficientBalance.into();
        assert_eq!(err.to_string(), "Insufficient balance");
    }
}
