use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::ResourceId;
use crate::resources::dto::ResourceDto;

pub(crate) struct GetResourceCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetResourceCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetResourceCommandRequest {
    pub(crate) resource_id: ResourceId,
}

impl GetResourceCommandRequest {
    pub fn new(resource_id: ResourceId) -> Self {
        Self {
            resource_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct GetResourceCommandResponse {
    resource: ResourceDto,
    description: String,
}

impl GetResourceCommandResponse {
    pub fn new(resource: ResourceDto, description: String) -> Self {
        Self {
            resource,
            description,
        }
    }
}

#[async_trait]
impl Command<GetResourceCommandRequest, GetResourceCommandResponse> for GetResourceCommand {
    async fn execute(&self, req: GetResourceCommandRequest) -> Result<GetResourceCommandResponse, CommandError> {
        let (resource, description) = self.catalog_service.describe_resource(req.resource_id).await?;
        Ok(GetResourceCommandResponse::new(resource, description))
    }
}
