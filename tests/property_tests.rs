//! Property tests: arbitrary operation sequences keep the pool consistent.

use proptest::prelude::*;
use singles_matcher::core::Registry;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Add { height: i64, gender: &'static str, quota: u32 },
    AddAndMatch { height: i64, gender: &'static str, quota: u32 },
    Query { pick: usize, count: usize },
    Remove { pick: usize },
}

fn arb_gender() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("male"), Just("female"), Just("other")]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (140i64..210, arb_gender(), 0u32..5).prop_map(|(height, gender, quota)| Op::Add { height, gender, quota }),
        (140i64..210, arb_gender(), 0u32..5).prop_map(|(height, gender, quota)| Op::AddAndMatch { height, gender, quota }),
        (any::<usize>(), 0usize..6).prop_map(|(pick, count)| Op::Query { pick, count }),
        any::<usize>().prop_map(|pick| Op::Remove { pick }),
    ]
}

proptest! {
    /// Ids handed out by successive adds are strictly increasing, hence unique.
    #[test]
    fn ids_strictly_increase(quotas in prop::collection::vec(0u32..4, 1..50)) {
        let registry = Registry::new();
        let mut last = 0;
        for quota in quotas {
            let p = registry.add("P", 170, "male", quota);
            prop_assert!(p.id > last);
            last = p.id;
        }
    }

    /// No sequence of operations leaves a member with zero quota.
    #[test]
    fn members_always_have_quota(ops in prop::collection::vec(arb_op(), 1..80)) {
        let registry = Registry::new();

        for op in ops {
            match op {
                Op::Add { height, gender, quota } => {
                    registry.add("P", height, gender, quota);
                }
                Op::AddAndMatch { height, gender, quota } => {
                    registry.add_and_match("P", height, gender, quota);
                }
                Op::Query { pick, count } => {
                    let members = registry.snapshot();
                    if !members.is_empty() {
                        let id = members[pick % members.len()].id;
                        prop_assert!(registry.query_matches(id, count).is_ok());
                    }
                }
                Op::Remove { pick } => {
                    let members = registry.snapshot();
                    if !members.is_empty() {
                        registry.remove(members[pick % members.len()].id);
                    }
                }
            }

            prop_assert!(registry.snapshot().iter().all(|p| p.remaining_quota > 0));
        }
    }

    /// A query of k matches costs the initiator k dates and each candidate one.
    #[test]
    fn quota_accounting_per_query(
        pool in prop::collection::vec((140i64..210, arb_gender(), 1u32..4), 1..30),
        count in 0usize..10,
        pick in any::<usize>(),
    ) {
        let registry = Registry::new();
        for (height, gender, quota) in pool {
            registry.add("P", height, gender, quota);
        }

        let before: HashMap<u64, u32> = registry
            .snapshot()
            .into_iter()
            .map(|p| (p.id, p.remaining_quota))
            .collect();
        let ids: Vec<u64> = {
            let mut ids: Vec<u64> = before.keys().copied().collect();
            ids.sort_unstable();
            ids
        };
        let initiator = ids[pick % ids.len()];

        let matches = registry.query_matches(initiator, count).unwrap();
        prop_assert!(matches.len() <= count);

        let k = matches.len() as u32;
        let after_initiator = registry.get(initiator).map(|p| p.remaining_quota).unwrap_or(0);
        prop_assert_eq!(after_initiator, before[&initiator] - k);

        for m in &matches {
            prop_assert_ne!(m.id, initiator);
            prop_assert_eq!(m.remaining_quota, before[&m.id] - 1);
            let now = registry.get(m.id).map(|p| p.remaining_quota).unwrap_or(0);
            prop_assert_eq!(now, m.remaining_quota);
        }
    }
}
