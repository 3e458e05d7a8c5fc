#![cfg(test)]

// Property tests for CommandList kept inside the crate so they can exercise
// handles without exposing extra test hooks.

use crate::command_list::{CommandList, NodeHandle};
use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// values, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    PushBack(usize),
    PushFront(usize),
    Remove(usize),
    PopFront,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{1,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            idx.clone().prop_map(OpI::PushBack),
            idx.clone().prop_map(OpI::PushFront),
            idx.clone().prop_map(OpI::Remove),
            Just(OpI::PopFront),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against a VecDeque<String> model.
// Invariants exercised across random operation sequences:
// - Uniqueness is caller-enforced: pushes of a value already present are
//   skipped on both sides, matching the list's contract.
// - push_back/push_front land at tail/head; traversal order matches the
//   model after every mutation.
// - remove(handle) returns the owned value, drops traversal length by one,
//   and invalidates the handle; stale handles never resolve again.
// - pop_front parity with the model; len/is_empty parity after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut = CommandList::new();
        let mut model: VecDeque<String> = VecDeque::new();
        let mut live: HashMap<String, NodeHandle> = HashMap::new();
        let mut stale: Vec<NodeHandle> = Vec::new();

        for op in ops {
            match op {
                OpI::PushBack(i) => {
                    let v = pool[i].clone();
                    if !live.contains_key(&v) {
                        let h = sut.push_back(v.clone());
                        model.push_back(v.clone());
                        live.insert(v, h);
                    }
                }
                OpI::PushFront(i) => {
                    let v = pool[i].clone();
                    if !live.contains_key(&v) {
                        let h = sut.push_front(v.clone());
                        model.push_front(v.clone());
                        live.insert(v, h);
                    }
                }
                OpI::Remove(i) => {
                    let v = &pool[i];
                    if let Some(h) = live.remove(v) {
                        prop_assert_eq!(sut.remove(h), Some(v.clone()));
                        let pos = model.iter().position(|m| m == v).unwrap();
                        model.remove(pos);
                        stale.push(h);
                    }
                }
                OpI::PopFront => {
                    let expected = model.pop_front();
                    if let Some(v) = &expected {
                        stale.push(live.remove(v).unwrap());
                    }
                    prop_assert_eq!(sut.pop_front(), expected);
                }
                OpI::Iterate => {
                    let got: Vec<String> =
                        sut.iter().map(|(_, v)| v.to_string()).collect();
                    let want: Vec<String> = model.iter().cloned().collect();
                    prop_assert_eq!(got, want);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            for h in &stale {
                prop_assert!(sut.value(*h).is_none(), "stale handle resolved");
            }
            for (v, h) in &live {
                prop_assert_eq!(sut.value(*h), Some(v.as_str()));
            }
        }

        // Final traversal parity.
        let got: Vec<String> = sut.iter().map(|(_, v)| v.to_string()).collect();
        let want: Vec<String> = model.into_iter().collect();
        prop_assert_eq!(got, want);
    }
}
