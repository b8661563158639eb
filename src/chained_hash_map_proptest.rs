#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can
// inspect bucket chains alongside the public operations.

use crate::chained_hash_map::{char_sum_index, ChainedHashMap, Handle};
use core::num::NonZeroUsize;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Find(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=8, proptest::collection::vec("[a-z]{0,5}", 1..=8)).prop_flat_map(
        |(size, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let contains_pool = proptest::sample::select(pool.clone());
            let op = prop_oneof![
                3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
                1 => idx.clone().prop_map(OpI::Find),
                1 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
                1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
                1 => Just(OpI::Iterate),
            ];
            proptest::collection::vec(op, 1..60).prop_map(move |ops| (size, pool.clone(), ops))
        },
    )
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Insert returns the previous value exactly when the key was present.
// - `find`/`contains_key`/`get` parity; handles stay stable across updates.
// - Each key sits in bucket `char_sum_index(key)`, exactly once system-wide.
// - Each chain lists its keys in first-insertion order (updates never move).
// - `iter` yields every live entry once; `len`/`is_empty` match the model.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((size, pool, ops) in arb_scenario()) {
        let mut sut: ChainedHashMap<i32> = ChainedHashMap::new(size).unwrap();
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut order: Vec<Vec<String>> = vec![Vec::new(); size];
        let mut live: HashMap<String, Handle> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = pool[i].clone();
                    let prev = sut.insert(k.clone(), v);
                    prop_assert_eq!(prev, model.insert(k.clone(), v));
                    if prev.is_none() {
                        order[sut.hash(&k)].push(k.clone());
                        let h = sut.find(&k).expect("inserted key resolves");
                        live.insert(k, h);
                    } else {
                        prop_assert_eq!(sut.find(&k), live.get(&k).copied(), "update must keep the handle");
                    }
                }
                OpI::Find(i) => {
                    let k = &pool[i];
                    let s = sut.find(k);
                    prop_assert_eq!(s.is_some(), model.contains_key(k));
                    prop_assert_eq!(s, live.get(k).copied());
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    if let Some(&h) = live.get(k) {
                        if let Some(vr) = h.value_mut(&mut sut) {
                            *vr = vr.saturating_add(d);
                            if let Some(mv) = model.get_mut(k) { *mv = mv.saturating_add(d); }
                        } else { prop_assert!(false, "live handle should resolve"); }
                    }
                }
                OpI::Iterate => {
                    let s_keys: BTreeSet<String> = sut.iter().map(|(_, k, _)| k.to_string()).collect();
                    let m_keys: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(s_keys, m_keys);
                }
            }

            // Post-conditions after each op
            // 1) Chains match the first-insertion order model and hold only their own keys
            for (b, expected) in order.iter().enumerate() {
                let chain: Vec<&str> = sut.chain(b).expect("bucket in range").map(|(k, _)| k).collect();
                prop_assert_eq!(chain.len(), expected.len());
                for (got, want) in chain.iter().zip(expected) {
                    prop_assert_eq!(*got, want.as_str());
                    prop_assert_eq!(sut.hash(got), b);
                }
            }
            // 2) Size parity
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(sut.iter().count(), model.len());
        }
    }
}

// Property: the index is deterministic and always within `0..size`.
proptest! {
    #[test]
    fn prop_index_in_range_and_deterministic(key in ".{0,16}", size in 1usize..=64) {
        let size = NonZeroUsize::new(size).unwrap();
        let a = char_sum_index(&key, size);
        prop_assert!(a < size.get());
        prop_assert_eq!(a, char_sum_index(&key, size));
    }

    // Permuting a key's characters never changes its bucket.
    #[test]
    fn prop_anagrams_share_a_bucket(key in "[a-zA-Z]{1,8}", size in 1usize..=32) {
        let size = NonZeroUsize::new(size).unwrap();
        let reversed: String = key.chars().rev().collect();
        prop_assert_eq!(char_sum_index(&key, size), char_sum_index(&reversed, size));
    }
}
