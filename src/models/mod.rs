// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Participant, Gender, MatchLimit};
pub use requests::{AddPersonRequest, QueryMatchesRequest, RemovePersonRequest};
pub use responses::{HealthResponse, ErrorResponse};
