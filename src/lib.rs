//! Singles Matcher - in-memory pool of single participants with quota-based matching
//!
//! Participants join with a height, a gender and a number of wanted dates. Each
//! match costs both sides one date; whoever runs out leaves the pool.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{is_match, Registry, RegistryError};
pub use models::{Participant, Gender, MatchLimit, AddPersonRequest, QueryMatchesRequest, RemovePersonRequest};
