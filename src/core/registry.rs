use std::collections::BTreeMap;

use parking_lot::Mutex;
use thiserror::Error;

use crate::core::compatibility::is_match;
use crate::models::{MatchLimit, Participant};

/// Errors that can occur with registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Participant not found: {0}")]
    ParticipantNotFound(u64),
}

/// In-memory pool of single participants
///
/// All operations run under one mutex held for the whole call, so a scan and
/// the quota updates it makes are never observed half done. Members are kept
/// in a `BTreeMap`, which makes every scan walk candidates in ascending id order.
#[derive(Debug)]
pub struct Registry {
    state: Mutex<RegistryState>,
}

#[derive(Debug)]
struct RegistryState {
    members: BTreeMap<u64, Participant>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState {
                members: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Register a new participant without matching
    ///
    /// The id is consumed even when `wanted_dates` is 0, but such a participant
    /// is never stored since members must always have quota left.
    pub fn add(&self, name: &str, height: i64, gender: &str, wanted_dates: u32) -> Participant {
        self.state.lock().insert(name, height, gender, wanted_dates)
    }

    /// Register a new participant and match them against the whole pool
    ///
    /// # Returns
    /// The matched candidates in scan order, each reflecting its quota after the scan
    pub fn add_and_match(
        &self,
        name: &str,
        height: i64,
        gender: &str,
        wanted_dates: u32,
    ) -> Vec<Participant> {
        let mut state = self.state.lock();
        let person = state.insert(name, height, gender, wanted_dates);

        if !person.is_active() {
            return Vec::new();
        }

        // Just inserted under the same guard, so the lookup cannot miss
        state
            .find_matches(person.id, MatchLimit::Unbounded)
            .unwrap_or_default()
    }

    /// Find matches for an existing participant
    ///
    /// Quotas of the participant and of every matched candidate drop by one per
    /// match; anyone reaching zero leaves the pool before this call returns.
    pub fn find_matches(&self, id: u64, limit: MatchLimit) -> Result<Vec<Participant>, RegistryError> {
        self.state.lock().find_matches(id, limit)
    }

    /// Find at most `match_count` matches for an existing participant
    pub fn query_matches(&self, id: u64, match_count: usize) -> Result<Vec<Participant>, RegistryError> {
        self.find_matches(id, MatchLimit::AtMost(match_count))
    }

    /// Remove a participant. Unknown ids are a no-op.
    ///
    /// Returns whether an entry was actually deleted.
    pub fn remove(&self, id: u64) -> bool {
        let removed = self.state.lock().members.remove(&id).is_some();
        tracing::debug!("Remove participant {}: removed={}", id, removed);
        removed
    }

    pub fn get(&self, id: u64) -> Option<Participant> {
        self.state.lock().members.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().members.is_empty()
    }

    /// Copy of all current members in ascending id order
    pub fn snapshot(&self) -> Vec<Participant> {
        self.state.lock().members.values().cloned().collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryState {
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn insert(&mut self, name: &str, height: i64, gender: &str, wanted_dates: u32) -> Participant {
        let person = Participant {
            id: self.allocate_id(),
            name: name.to_string(),
            height,
            gender: gender.to_string(),
            remaining_quota: wanted_dates,
        };

        if person.is_active() {
            self.members.insert(person.id, person.clone());
        }

        tracing::debug!(
            "Added participant {} (gender={}, height={}, wanted_dates={}, stored={})",
            person.id,
            person.gender,
            person.height,
            person.remaining_quota,
            person.is_active()
        );

        person
    }

    fn find_matches(&mut self, id: u64, limit: MatchLimit) -> Result<Vec<Participant>, RegistryError> {
        // Taking the initiator out keeps it from matching itself and leaves
        // the map free for mutable candidate access
        let mut initiator = self
            .members
            .remove(&id)
            .ok_or(RegistryError::ParticipantNotFound(id))?;

        let candidate_ids: Vec<u64> = self.members.keys().copied().collect();
        let mut matches = Vec::new();

        for candidate_id in candidate_ids {
            if limit.is_reached(matches.len()) || !initiator.is_active() {
                break;
            }

            let Some(candidate) = self.members.get_mut(&candidate_id) else {
                continue;
            };

            if !is_match(&initiator, candidate) {
                continue;
            }

            initiator.remaining_quota -= 1;
            candidate.remaining_quota -= 1;
            matches.push(candidate.clone());

            if !candidate.is_active() {
                self.members.remove(&candidate_id);
                tracing::debug!("Participant {} exhausted its quota and left the pool", candidate_id);
            }
        }

        if initiator.is_active() {
            self.members.insert(id, initiator);
        } else {
            tracing::debug!("Participant {} exhausted its quota and left the pool", id);
        }

        tracing::debug!("Participant {} matched {} candidates (limit: {:?})", id, matches.len(), limit);

        Ok(matches)
    }
}
