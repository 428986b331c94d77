pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::domain::ResourceId;
use crate::core::library::LibraryResult;
use crate::resources::dto::ResourceDto;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn register_resource(&self, resource: &ResourceDto) -> LibraryResult<ResourceDto>;
    async fn search_by_title(&self, title: &str) -> LibraryResult<Vec<ResourceDto>>;
    async fn loan_resource(&self, id: ResourceId) -> LibraryResult<ResourceDto>;
    async fn return_resource(&self, id: ResourceId) -> LibraryResult<ResourceDto>;
    async fn describe_resource(&self, id: ResourceId) -> LibraryResult<(ResourceDto, String)>;
}
