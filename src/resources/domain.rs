use crate::core::domain::Identifiable;

pub mod category;
pub mod model;

// Resource is the capability set shared by every catalog item
pub(crate) trait Resource: Identifiable {
    fn title(&self) -> &str;
    fn is_available(&self) -> bool;
    fn describe(&self) -> String;
}
