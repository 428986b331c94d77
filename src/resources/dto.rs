use serde::{Deserialize, Serialize};
use crate::core::domain::{Identifiable, ResourceId};
use crate::resources::domain::category::PeriodicalCategory;

// ResourceDetailsDto is the kind-specific part of a resource on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum ResourceDetailsDto {
    Book {
        author: String,
    },
    Periodical {
        issue_number: i32,
        category: PeriodicalCategory,
    },
}

// ResourceDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ResourceDto {
    pub resource_id: ResourceId,
    pub title: String,
    pub available: bool,
    #[serde(flatten)]
    pub details: ResourceDetailsDto,
}

#[cfg(test)]
impl ResourceDto {
    pub fn new(title: &str, available: bool, details: ResourceDetailsDto) -> ResourceDto {
        ResourceDto {
            resource_id: crate::resources::domain::model::next_resource_id(),
            title: title.to_string(),
            available,
            details,
        }
    }

    pub fn book(title: &str, available: bool, author: &str) -> ResourceDto {
        Self::new(title, available, ResourceDetailsDto::Book { author: author.to_string() })
    }

    pub fn periodical(title: &str, available: bool, issue_number: i32, category: PeriodicalCategory) -> ResourceDto {
        Self::new(title, available, ResourceDetailsDto::Periodical { issue_number, category })
    }
}

impl Identifiable for ResourceDto {
    fn id(&self) -> ResourceId {
        self.resource_id
    }
}
