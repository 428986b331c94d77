use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::resources::dto::ResourceDto;

pub(crate) struct SearchByTitleCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchByTitleCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchByTitleCommandRequest {
    pub(crate) title: String,
}

impl SearchByTitleCommandRequest {
    #[cfg(test)]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct SearchByTitleCommandResponse {
    resources: Vec<ResourceDto>,
}

impl SearchByTitleCommandResponse {
    pub fn new(resources: Vec<ResourceDto>) -> Self {
        Self {
            resources,
        }
    }
}

#[async_trait]
impl Command<SearchByTitleCommandRequest, SearchByTitleCommandResponse> for SearchByTitleCommand {
    async fn execute(&self, req: SearchByTitleCommandRequest) -> Result<SearchByTitleCommandResponse, CommandError> {
        self.catalog_service.search_by_title(req.title.as_str())
            .await.map_err(CommandError::from).map(SearchByTitleCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::register_resource_cmd::{RegisterResourceCommand, RegisterResourceCommandRequest};
    use crate::catalog::command::search_by_title_cmd::{SearchByTitleCommand, SearchByTitleCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::resources::dto::ResourceDetailsDto;

    lazy_static! {
        static ref SVC : AsyncOnce<Arc<dyn CatalogService>> = AsyncOnce::new(async {
                let svc: Arc<dyn CatalogService> = Arc::from(
                    factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory));
                svc
            });
    }

    #[tokio::test]
    async fn test_should_run_search_by_title() {
        let svc = SVC.get().await.clone();
        let add_cmd = RegisterResourceCommand::new(svc.clone());
        let search_cmd = SearchByTitleCommand::new(svc);

        let details = ResourceDetailsDto::Book { author: "Herbert".to_string() };
        let first = add_cmd.execute(RegisterResourceCommandRequest::new("Dune", true, details.clone()))
            .await.expect("should register");
        let second = add_cmd.execute(RegisterResourceCommandRequest::new("Dune", false, details))
            .await.expect("should register");

        let res = search_cmd.execute(SearchByTitleCommandRequest::new("Dune")).await.expect("should search");
        assert_eq!(vec![first.resource, second.resource], res.resources);

        let res = search_cmd.execute(SearchByTitleCommandRequest::new("Nonexistent")).await.expect("should search");
        assert!(res.resources.is_empty());
    }
}
