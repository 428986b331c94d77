use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::ResourceId;
use crate::resources::dto::ResourceDto;

pub(crate) struct LoanResourceCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl LoanResourceCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoanResourceCommandRequest {
    pub(crate) resource_id: ResourceId,
}

impl LoanResourceCommandRequest {
    pub fn new(resource_id: ResourceId) -> Self {
        Self {
            resource_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct LoanResourceCommandResponse {
    resource: ResourceDto,
}

impl LoanResourceCommandResponse {
    pub fn new(resource: ResourceDto) -> Self {
        Self {
            resource,
        }
    }
}

#[async_trait]
impl Command<LoanResourceCommandRequest, LoanResourceCommandResponse> for LoanResourceCommand {
    async fn execute(&self, req: LoanResourceCommandRequest) -> Result<LoanResourceCommandResponse, CommandError> {
        self.catalog_service.loan_resource(req.resource_id)
            .await.map_err(CommandError::from).map(LoanResourceCommandResponse::new)
    }
}
