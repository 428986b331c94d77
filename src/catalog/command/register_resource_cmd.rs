use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::resources::domain::model::ResourceEntity;
use crate::resources::dto::{ResourceDetailsDto, ResourceDto};

pub(crate) struct RegisterResourceCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RegisterResourceCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResourceCommandRequest {
    pub(crate) title: String,
    pub(crate) available: bool,
    #[serde(flatten)]
    pub(crate) details: ResourceDetailsDto,
}

impl RegisterResourceCommandRequest {
    #[cfg(test)]
    pub fn new(title: &str, available: bool, details: ResourceDetailsDto) -> Self {
        Self {
            title: title.to_string(),
            available,
            details,
        }
    }

    pub fn build_resource(&self) -> ResourceDto {
        let resource = match &self.details {
            ResourceDetailsDto::Book { author } => {
                ResourceEntity::book(self.title.as_str(), self.available, author.as_str())
            }
            ResourceDetailsDto::Periodical { issue_number, category } => {
                ResourceEntity::periodical(self.title.as_str(), self.available, *issue_number, *category)
            }
        };
        ResourceDto::from(&resource)
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RegisterResourceCommandResponse {
    pub resource: ResourceDto,
}

impl RegisterResourceCommandResponse {
    pub fn new(resource: ResourceDto) -> Self {
        Self {
            resource,
        }
    }
}

#[async_trait]
impl Command<RegisterResourceCommandRequest, RegisterResourceCommandResponse> for RegisterResourceCommand {
    async fn execute(&self, req: RegisterResourceCommandRequest) -> Result<RegisterResourceCommandResponse, CommandError> {
        let resource = req.build_resource();
        self.catalog_service.register_resource(&resource).await.map_err(CommandError::from).map(RegisterResourceCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::register_resource_cmd::{RegisterResourceCommand, RegisterResourceCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::resources::domain::category::PeriodicalCategory;
    use crate::resources::dto::ResourceDetailsDto;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<RegisterResourceCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
                RegisterResourceCommand::new(svc.into())
            });
    }

    #[tokio::test]
    async fn test_should_run_register_resource() {
        let cmd = SUT_CMD.get().await.clone();

        let res = cmd.execute(RegisterResourceCommandRequest::new(
            "Nature", true, ResourceDetailsDto::Periodical { issue_number: 4, category: PeriodicalCategory::Science }))
            .await.expect("should register resource");
        assert_eq!("Nature", res.resource.title.as_str());
        assert!(res.resource.available);
    }

    #[tokio::test]
    async fn test_should_parse_register_request() {
        let req: RegisterResourceCommandRequest = serde_json::from_str(
            r#"{"title": "Dune", "available": true, "kind": "book", "author": "Herbert"}"#).expect("should parse");
        let resource = req.build_resource();
        assert_eq!("Dune", resource.title.as_str());
        assert_eq!(ResourceDetailsDto::Book { author: "Herbert".to_string() }, resource.details);
        assert_ne!(resource.resource_id, req.build_resource().resource_id);
    }
}
