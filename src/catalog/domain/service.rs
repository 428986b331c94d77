use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Catalog;
use crate::core::domain::{Configuration, Identifiable, ResourceId};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::resources::domain::model::{ResourceEntity, ResourceKind};
use crate::resources::domain::Resource;
use crate::resources::dto::{ResourceDetailsDto, ResourceDto};

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    catalog: RwLock<Catalog>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog: RwLock::new(Catalog::new()),
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn register_resource(&self, resource: &ResourceDto) -> LibraryResult<ResourceDto> {
        let size = {
            let mut catalog = self.catalog.write().await;
            catalog.register(ResourceEntity::from(resource));
            catalog.len()
        };
        tracing::info!(resource_id = resource.resource_id, title = resource.title.as_str(), size, "resource registered");
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "resource_registered", "catalog", resource.resource_id.to_string().as_str(), &self.metadata(), resource)?).await?;
        Ok(resource.clone())
    }

    async fn search_by_title(&self, title: &str) -> LibraryResult<Vec<ResourceDto>> {
        let res: Vec<ResourceDto> = self.catalog.read().await.search_by_title(title)
            .into_iter().map(ResourceDto::from).collect();
        tracing::debug!(title, matches = res.len(), "searched catalog by title");
        Ok(res)
    }

    async fn loan_resource(&self, id: ResourceId) -> LibraryResult<ResourceDto> {
        let loaned = ResourceDto::from(self.catalog.write().await.loan(id)?);
        tracing::info!(resource_id = id, "resource loaned");
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "resource_loaned", "catalog", id.to_string().as_str(), &self.metadata(), &loaned)?).await?;
        Ok(loaned)
    }

    async fn return_resource(&self, id: ResourceId) -> LibraryResult<ResourceDto> {
        let returned = ResourceDto::from(self.catalog.write().await.return_resource(id)?);
        tracing::info!(resource_id = id, "resource returned");
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "resource_returned", "catalog", id.to_string().as_str(), &self.metadata(), &returned)?).await?;
        Ok(returned)
    }

    async fn describe_resource(&self, id: ResourceId) -> LibraryResult<(ResourceDto, String)> {
        self.catalog.read().await.find_by_id(id).map(|r| (ResourceDto::from(r), r.describe()))
    }
}

impl From<&ResourceEntity> for ResourceDto {
    fn from(other: &ResourceEntity) -> Self {
        let details = match other.kind() {
            ResourceKind::Book { author } => {
                ResourceDetailsDto::Book { author: author.to_string() }
            }
            ResourceKind::Periodical { issue_number, category } => {
                ResourceDetailsDto::Periodical { issue_number: *issue_number, category: *category }
            }
        };
        Self {
            resource_id: other.id(),
            title: other.title().to_string(),
            available: other.is_available(),
            details,
        }
    }
}

impl From<&ResourceDto> for ResourceEntity {
    fn from(other: &ResourceDto) -> Self {
        let kind = match &other.details {
            ResourceDetailsDto::Book { author } => {
                ResourceKind::Book { author: author.to_string() }
            }
            ResourceDetailsDto::Periodical { issue_number, category } => {
                ResourceKind::Periodical { issue_number: *issue_number, category: *category }
            }
        };
        ResourceEntity::with_id(other.resource_id, other.title.as_str(), other.available, kind)
    }
}
