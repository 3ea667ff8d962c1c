use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidArgument,
    NotFound,
    Internal,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        };
        write!(f, "{}", s)
    }
}

/// Implemented by every error surfaced across crate boundaries so callers can
/// branch on a stable category instead of matching concrete variants.
pub trait FedispaceError: std::error::Error {
    fn error_code(&self) -> ErrorCode;
}

impl FedispaceError for config::ConfigError {
    fn error_code(&self) -> ErrorCode {
        match self {
            config::ConfigError::NotFound(_) => ErrorCode::NotFound,
            config::ConfigError::Type { .. } | config::ConfigError::Message(_) => {
                ErrorCode::InvalidArgument
            }
            _ => ErrorCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_format() {
        assert_eq!(ErrorCode::InvalidArgument.to_string(), "INVALID_ARGUMENT");
        let json = serde_json::to_string(&ErrorCode::NotFound).unwrap();
        assert_eq!(json, "\"NOT_FOUND\"");
    }

    #[test]
    fn test_config_error_mapping() {
        let err = config::ConfigError::NotFound("api.root".into());
        assert_eq!(err.error_code(), ErrorCode::NotFound);

        let err = config::ConfigError::Message("bad value".into());
        assert_eq!(err.error_code(), ErrorCode::InvalidArgument);
    }
}
