use crate::models::{Gender, Participant};

/// Check whether `initiator` accepts `candidate` as a match
///
/// The rule is directional: a male accepts strictly shorter candidates and a
/// female accepts strictly taller ones. The candidate's own gender is not
/// consulted, so an unrecognised gender can still be matched *as a candidate*
/// but never initiates a match. Both sides must have quota left.
#[inline]
pub fn is_match(initiator: &Participant, candidate: &Participant) -> bool {
    if !initiator.is_active() || !candidate.is_active() {
        return false;
    }

    match initiator.gender_kind() {
        Some(Gender::Male) => initiator.height > candidate.height,
        Some(Gender::Female) => initiator.height < candidate.height,
        None => false,
    }
}
