use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Unavailable { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::{json_to_server_error, ServerError};

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let (status, _) = ServerError::from(CommandError::NotFound { message: "test".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = ServerError::from(CommandError::Unavailable { message: "test".to_string(), reason_code: None });
        assert_eq!(StatusCode::CONFLICT, status);
        let (status, _) = ServerError::from(CommandError::Validation { message: "test".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Runtime { message: "test".to_string(), reason_code: None, retryable: false });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }

    #[tokio::test]
    async fn test_should_map_json_error_to_bad_request() {
        let err = serde_json::from_str::<i64>("{").expect_err("should fail parsing");
        let (status, _) = json_to_server_error(err);
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }
}
