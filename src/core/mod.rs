// Core algorithm exports
pub mod compatibility;
pub mod registry;

pub use compatibility::is_match;
pub use registry::{Registry, RegistryError};
