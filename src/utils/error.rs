use thiserror::Error;

/// Rejections of a single input line. The `Display` text is exactly what the
/// session prints; none of these end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid sequence of digits")]
    InvalidSequence,

    #[error("Please enter a sequence with a valid number of digits")]
    InvalidLength { len: usize },

    #[error("ISBN-13 must begin with the digits, 978")]
    MissingPrefix,
}

impl InputError {
    /// 錯誤分類 (用於日誌)
    pub fn category(&self) -> &'static str {
        match self {
            InputError::InvalidSequence => "malformed",
            InputError::InvalidLength { .. } => "length",
            InputError::MissingPrefix => "prefix",
        }
    }
}

#[derive(Error, Debug)]
pub enum IsbnError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl IsbnError {
    /// 給使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            IsbnError::IoError(e) => format!("Terminal input/output failed: {}", e),
            IsbnError::ConfigError { message } => format!("Could not load configuration: {}", message),
            IsbnError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IsbnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::InvalidSequence.to_string(),
            "Please enter a valid sequence of digits"
        );
        assert_eq!(
            InputError::InvalidLength { len: 11 }.to_string(),
            "Please enter a sequence with a valid number of digits"
        );
        assert_eq!(
            InputError::MissingPrefix.to_string(),
            "ISBN-13 must begin with the digits, 978"
        );
        assert_eq!(InputError::InvalidLength { len: 3 }.category(), "length");
    }

    #[test]
    fn test_user_friendly_message() {
        let err = IsbnError::InvalidConfigValueError {
            field: "logging.level".to_string(),
            value: "loud".to_string(),
            reason: "unknown level".to_string(),
        };
        assert!(err.user_friendly_message().contains("logging.level"));
        assert!(err.to_string().contains("loud"));
    }
}
