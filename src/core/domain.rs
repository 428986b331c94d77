use serde::{Deserialize, Serialize};

/// Numeric identifier handed out to every catalog resource.
pub type ResourceId = i64;

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> ResourceId;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
        }
    }
}
