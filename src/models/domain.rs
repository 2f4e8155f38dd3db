use serde::{Deserialize, Serialize};

/// A single person in the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub name: String,
    pub height: i64,
    pub gender: String,
    /// Remaining number of matches this participant will accept
    #[serde(rename = "wanted_dates")]
    pub remaining_quota: u32,
}

impl Participant {
    /// Helper to get the recognised gender, `None` for anything else
    pub fn gender_kind(&self) -> Option<Gender> {
        Gender::parse(&self.gender)
    }

    /// Whether the participant still accepts matches
    pub fn is_active(&self) -> bool {
        self.remaining_quota > 0
    }
}

/// Genders that take part in the height rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Exact, case-sensitive parse. "Male" or "m" are not recognised.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Upper bound on the number of matches a single scan may produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLimit {
    Unbounded,
    AtMost(usize),
}

impl MatchLimit {
    /// True once `found` matches satisfy the limit
    #[inline]
    pub fn is_reached(&self, found: usize) -> bool {
        match self {
            MatchLimit::Unbounded => false,
            MatchLimit::AtMost(n) => found >= *n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_is_exact() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse("Male"), None);
        assert_eq!(Gender::parse("robot"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn test_match_limit() {
        assert!(!MatchLimit::Unbounded.is_reached(usize::MAX));
        assert!(MatchLimit::AtMost(0).is_reached(0));
        assert!(!MatchLimit::AtMost(2).is_reached(1));
        assert!(MatchLimit::AtMost(2).is_reached(2));
    }

    #[test]
    fn test_participant_wire_format() {
        let p = Participant {
            id: 7,
            name: "Alice".to_string(),
            height: 165,
            gender: "female".to_string(),
            remaining_quota: 2,
        };

        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["wanted_dates"], 2);
        assert!(json.get("remaining_quota").is_none());
        assert_eq!(p.gender_kind(), Some(Gender::Female));
    }
}
