use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::ResourceId;
use crate::resources::dto::ResourceDto;

pub(crate) struct ReturnResourceCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ReturnResourceCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnResourceCommandRequest {
    pub(crate) resource_id: ResourceId,
}

impl ReturnResourceCommandRequest {
    pub fn new(resource_id: ResourceId) -> Self {
        Self {
            resource_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnResourceCommandResponse {
    resource: ResourceDto,
}

impl ReturnResourceCommandResponse {
    pub fn new(resource: ResourceDto) -> Self {
        Self {
            resource,
        }
    }
}

#[async_trait]
impl Command<ReturnResourceCommandRequest, ReturnResourceCommandResponse> for ReturnResourceCommand {
    async fn execute(&self, req: ReturnResourceCommandRequest) -> Result<ReturnResourceCommandResponse, CommandError> {
        self.catalog_service.return_resource(req.resource_id)
            .await.map_err(CommandError::from).map(ReturnResourceCommandResponse::new)
    }
}
