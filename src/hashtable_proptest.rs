#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect
// buckets alongside the public operations.

use crate::error::InsertError;
use crate::hash::{BuildHasherSlots, SlotHash};
use crate::hashtable::HashTable;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hasher;

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Find(usize),
    Contains(String),
    Iterate,
    Buckets,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=12, proptest::collection::vec("[a-z]{0,5}", 1..=8)).prop_flat_map(
        |(slots, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let contains_pool = proptest::sample::select(pool.clone());
            let op = prop_oneof![
                (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
                idx.clone().prop_map(OpI::Find),
                prop_oneof![
                    contains_pool.prop_map(|s: String| s),
                    "[a-z]{0,5}".prop_map(|s| s)
                ]
                .prop_map(OpI::Contains),
                Just(OpI::Iterate),
                Just(OpI::Buckets),
            ];
            proptest::collection::vec(op, 1..60).prop_map(move |ops| (slots, pool.clone(), ops))
        },
    )
}

// State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Empty keys are rejected; duplicate keys are rejected and keep the first item.
// - `find`/`contains_key` agree with the model for present and absent keys.
// - `iter` yields each stored pair exactly once and matches the model.
// - Every stored key sits in bucket `slot_of(key)` and bucket sizes sum to `len`.
fn run_state_machine<H: SlotHash>(
    mut sut: HashTable<i32, H>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                match sut.insert(k, v) {
                    Ok(()) => {
                        prop_assert!(!k.is_empty());
                        let prev = model.insert(k.clone(), v);
                        prop_assert!(prev.is_none(), "insert must fail on duplicate");
                    }
                    Err(rejected) => {
                        prop_assert_eq!(*rejected.item(), v);
                        match rejected.kind() {
                            InsertError::EmptyKey => prop_assert!(k.is_empty()),
                            InsertError::DuplicateKey => {
                                prop_assert!(model.contains_key(k), "duplicate error only when key exists");
                            }
                        }
                    }
                }
            }
            OpI::Find(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.find(k), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Iterate => {
                let mut seen: HashMap<String, i32> = HashMap::new();
                let mut visits = 0;
                sut.iterate(|k, v| {
                    visits += 1;
                    seen.insert(k.to_string(), *v);
                });
                prop_assert_eq!(visits, model.len());
                prop_assert_eq!(&seen, &model);
                let keys: BTreeSet<&str> = sut.iter().map(|(k, _)| k).collect();
                prop_assert_eq!(keys.len(), model.len());
            }
            OpI::Buckets => {
                let mut total = 0;
                for (slot, bucket) in sut.buckets().enumerate() {
                    total += bucket.len();
                    for (k, _) in bucket.iter() {
                        prop_assert_eq!(sut.slot_of(k), slot);
                    }
                }
                prop_assert_eq!(total, sut.len());
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((slots, pool, ops) in arb_scenario()) {
        let sut = HashTable::new(slots).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }
}

// Collision variant: every key hashes to the same slot, so one bucket
// carries the whole chain.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl std::hash::BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((slots, pool, ops) in arb_scenario()) {
        let sut = HashTable::with_slot_hasher(slots, BuildHasherSlots::new(ConstBuildHasher)).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }

    #[test]
    fn prop_collisions_fill_single_bucket(slots in 1usize..=12, keys in proptest::collection::btree_set("[a-z]{1,6}", 0..30)) {
        let mut t = HashTable::with_slot_hasher(slots, BuildHasherSlots::new(ConstBuildHasher)).unwrap();
        for k in &keys {
            t.insert(k, ()).unwrap();
        }
        let lens: Vec<usize> = t.buckets().map(|b| b.len()).collect();
        prop_assert_eq!(lens[0], keys.len());
        prop_assert!(lens[1..].iter().all(|&n| n == 0));
    }
}
