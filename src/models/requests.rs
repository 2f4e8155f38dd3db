use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to add a single person and match them against the pool
///
/// Only the types are checked: any gender string is accepted and simply
/// never initiates a match unless it is `male` or `female`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPersonRequest {
    pub name: String,
    pub height: i64,
    pub gender: String,
    #[serde(alias = "wantedDates")]
    pub wanted_dates: u32,
}

/// Request for up to `match_count` matches of an existing person
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QueryMatchesRequest {
    #[validate(range(min = 1))]
    pub id: u64,
    #[serde(alias = "matchCount")]
    pub match_count: usize,
}

/// Request to remove a person from the pool; any id is accepted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePersonRequest {
    pub id: u64,
}
