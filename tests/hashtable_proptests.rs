// HashTable property tests over the public API.
//
// Property 1: insert-then-find round trip for fresh keys.
// Property 2: a duplicate insert fails and `find` still yields the first item.
// Property 3: N distinct inserts give exactly N visits with the same pairs.
// Property 4: keys never inserted are never found.
use chain_hashtable::{HashTable, InsertError};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

proptest! {
    #[test]
    fn prop_round_trip(slots in 1usize..64, key in "[ -~]{1,24}", item in any::<u64>()) {
        let mut t = HashTable::new(slots).unwrap();
        prop_assert_eq!(t.insert(&key, item), Ok(()));
        prop_assert_eq!(t.find(&key), Some(&item));
    }

    #[test]
    fn prop_duplicate_keeps_first(slots in 1usize..64, key in "[a-z]{1,8}", a in any::<i64>(), b in any::<i64>()) {
        let mut t = HashTable::new(slots).unwrap();
        t.insert(&key, a).unwrap();
        let rejected = t.insert(&key, b).unwrap_err();
        prop_assert_eq!(rejected.kind(), InsertError::DuplicateKey);
        prop_assert_eq!(rejected.into_inner(), b);
        prop_assert_eq!(t.find(&key), Some(&a));
        prop_assert_eq!(t.len(), 1);
    }

    #[test]
    fn prop_iterate_matches_inserts(slots in 1usize..32, keys in proptest::collection::btree_set("[a-z0-9]{1,10}", 0..200)) {
        let mut t = HashTable::new(slots).unwrap();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k, i).unwrap();
        }
        let expected: BTreeMap<String, usize> =
            keys.iter().enumerate().map(|(i, k)| (k.clone(), i)).collect();

        let mut visits = 0usize;
        let mut seen = BTreeMap::new();
        t.iterate(|k, v| {
            visits += 1;
            seen.insert(k.to_string(), *v);
        });
        prop_assert_eq!(visits, keys.len());
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn prop_absent_keys_not_found(
        present in proptest::collection::btree_set("[a-m]{1,6}", 0..50),
        lookups in proptest::collection::vec("[a-z]{1,6}", 1..50),
    ) {
        let mut t = HashTable::new(7).unwrap();
        for k in &present {
            t.insert(k, ()).unwrap();
        }
        let present: BTreeSet<String> = present;
        for p in lookups {
            prop_assert_eq!(t.contains_key(&p), present.contains(&p));
        }
    }
}
