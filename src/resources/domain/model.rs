use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicI64, Ordering};
use serde::{Deserialize, Serialize};
use crate::core::domain::{Identifiable, ResourceId};
use crate::resources::domain::category::PeriodicalCategory;
use crate::resources::domain::Resource;

// Process-wide sequence, so two resources never share an id.
static NEXT_RESOURCE_ID: AtomicI64 = AtomicI64::new(1);

pub(crate) fn next_resource_id() -> ResourceId {
    NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed)
}

// ResourceKind carries the fields that only one kind of resource has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum ResourceKind {
    Book {
        author: String,
    },
    Periodical {
        issue_number: i32,
        category: PeriodicalCategory,
    },
}

// ResourceEntity abstracts an item held by the catalog. The id is fixed when the
// entity is built; only the availability flag changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResourceEntity {
    id: ResourceId,
    title: String,
    available: bool,
    kind: ResourceKind,
}

impl ResourceEntity {
    pub fn new(title: &str, available: bool, kind: ResourceKind) -> Self {
        Self::with_id(next_resource_id(), title, available, kind)
    }

    pub fn book(title: &str, available: bool, author: &str) -> Self {
        Self::new(title, available, ResourceKind::Book { author: author.to_string() })
    }

    pub fn periodical(title: &str, available: bool, issue_number: i32, category: PeriodicalCategory) -> Self {
        Self::new(title, available, ResourceKind::Periodical { issue_number, category })
    }

    // rebuilds an entity whose id was already handed out
    pub(crate) fn with_id(id: ResourceId, title: &str, available: bool, kind: ResourceKind) -> Self {
        Self {
            id,
            title: title.to_string(),
            available,
            kind,
        }
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Identifiable for ResourceEntity {
    fn id(&self) -> ResourceId {
        self.id
    }
}

impl Resource for ResourceEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for ResourceEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let availability = if self.available { "available" } else { "not available" };
        match &self.kind {
            ResourceKind::Book { author } => {
                write!(f, "book titled '{}' written by {}, {}", self.title, author, availability)
            }
            ResourceKind::Periodical { issue_number, category } => {
                write!(f, "periodical titled '{}' issue {} in category {}, {}",
                       self.title, issue_number, category, availability)
            }
        }
    }
}
