use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // The resource exists but has already been loaned; a second loan is refused
    // until the resource is returned.
    AlreadyUnavailable {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_unavailable(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::AlreadyUnavailable { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { false }
            // retrying after the resource is returned may succeed
            LibraryError::AlreadyUnavailable { .. } => { true }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyUnavailable { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_already_unavailable_error() {
        assert!(matches!(LibraryError::already_unavailable("test", None), LibraryError::AlreadyUnavailable{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<i64>("not a number").expect_err("should fail parsing");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(true, LibraryError::already_unavailable("test", None).retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
        assert_eq!(false, LibraryError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_format_error() {
        assert_eq!("missing", LibraryError::not_found("missing").to_string());
        assert_eq!("loaned Some(\"409\")",
                   LibraryError::already_unavailable("loaned", Some("409".to_string())).to_string());
    }
}
