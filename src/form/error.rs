use thiserror::Error;

/// Rejected widget interaction. Nothing is emitted when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field {position}: {message}")]
pub struct FieldInputError {
    pub position: usize,
    pub message: String,
}

impl FieldInputError {
    pub fn unsupported(position: usize, kind: &str, action: &str) -> Self {
        Self {
            position,
            message: format!("{kind} fields do not support {action}"),
        }
    }

    pub fn unknown_option(position: usize, option: &str) -> Self {
        Self {
            position,
            message: format!("'{option}' is not one of the offered options"),
        }
    }

    pub fn missing_item(position: usize, index: usize) -> Self {
        Self {
            position,
            message: format!("no toggle at item {index}"),
        }
    }
}
