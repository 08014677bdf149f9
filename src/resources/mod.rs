//! Typed Android build resources derived from the manifest.

pub mod register;
pub mod render;
pub mod types;

pub use register::{register_entries, register_resources};
pub use render::{render_gradle, render_table, render_values_xml};
pub use types::{Resource, ResourceSet, ResourceType};
