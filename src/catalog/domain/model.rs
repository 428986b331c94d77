use crate::core::domain::{Identifiable, ResourceId};
use crate::core::library::{LibraryError, LibraryResult};
use crate::resources::domain::model::ResourceEntity;
use crate::resources::domain::Resource;

// Catalog owns every registered resource in insertion order. It only grows:
// there is no removal, and registering the same title twice keeps both.
#[derive(Debug, Default)]
pub(crate) struct Catalog {
    resources: Vec<ResourceEntity>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, resource: ResourceEntity) {
        self.resources.push(resource);
    }

    /// Resources whose title equals `title` exactly, in registration order.
    pub fn search_by_title(&self, title: &str) -> Vec<&ResourceEntity> {
        self.resources.iter().filter(|r| r.title() == title).collect()
    }

    pub fn find_by_id(&self, id: ResourceId) -> LibraryResult<&ResourceEntity> {
        self.resources.iter().find(|r| r.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("resource with id {} not found", id).as_str()))
    }

    /// Marks the resource as loaned. Fails with `NotFound` for an unknown id and
    /// `AlreadyUnavailable` when the resource is already out.
    pub fn loan(&mut self, id: ResourceId) -> LibraryResult<&ResourceEntity> {
        if !self.find_by_id(id)?.is_available() {
            return Err(LibraryError::already_unavailable(
                format!("resource {} is not available", id).as_str(), Some("409".to_string())));
        }
        self.set_available(id, false)
    }

    pub fn return_resource(&mut self, id: ResourceId) -> LibraryResult<&ResourceEntity> {
        if self.find_by_id(id)?.is_available() {
            return Err(LibraryError::validation(
                format!("resource {} is not on loan", id).as_str(), Some("400".to_string())));
        }
        self.set_available(id, true)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    // a resource registered more than once is one resource, so every entry moves together
    fn set_available(&mut self, id: ResourceId, available: bool) -> LibraryResult<&ResourceEntity> {
        self.resources.iter_mut()
            .filter(|r| r.id() == id)
            .for_each(|r| r.set_available(available));
        self.find_by_id(id)
    }
}
