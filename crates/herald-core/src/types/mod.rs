//! Value types shared between the view-model and its collaborators.

pub mod message;
pub mod site;

pub use message::{MessageParam, RenderableMessage};
pub use site::SiteDescriptor;
