use prefixtrie::{CharCodec, PathCodec, PrefixSet, SeparatorCodec, TokenTrie};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Operation {
    Insert(Vec<u8>, u16),
    Remove(Vec<u8>),
    AssignSubtree(Vec<u8>, u16),
    RemoveSubtree(Vec<u8>),
}

// Short keys over a tiny alphabet so operations collide often.
fn key() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..3, 0..5)
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => (key(), any::<u16>()).prop_map(|(k, v)| Operation::Insert(k, v)),
        2 => key().prop_map(Operation::Remove),
        1 => (key(), any::<u16>()).prop_map(|(k, v)| Operation::AssignSubtree(k, v)),
        1 => key().prop_map(Operation::RemoveSubtree),
    ]
}

fn has_prefix(key: &[u8], prefix: &[u8]) -> bool {
    key.starts_with(prefix)
}

proptest! {
    #[test]
    fn test_trie_matches_std_map(ops in proptest::collection::vec(operation(), 1..60), probes in proptest::collection::vec(key(), 1..10)) {
        let mut model: BTreeMap<Vec<u8>, u16> = BTreeMap::new();
        let mut trie: TokenTrie<u8, u16> = TokenTrie::new();

        for op in ops {
            match op {
                Operation::Insert(k, v) => {
                    prop_assert_eq!(trie.insert(&k, v), model.insert(k, v));
                }
                Operation::Remove(k) => {
                    prop_assert_eq!(trie.remove(&k).ok(), model.remove(&k));
                }
                Operation::AssignSubtree(k, v) => {
                    let before = model.len();
                    model.retain(|key, _| !has_prefix(key, &k));
                    let discarded = before - model.len();
                    model.insert(k.clone(), v);
                    prop_assert_eq!(trie.assign_subtree(&k, v), discarded);
                }
                Operation::RemoveSubtree(k) => {
                    let exists = model.keys().any(|key| has_prefix(key, &k));
                    let before = model.len();
                    model.retain(|key, _| !has_prefix(key, &k));
                    let result = trie.remove_subtree(&k);
                    if exists {
                        prop_assert_eq!(result, Ok(before - model.len()));
                    } else {
                        // The root node always exists, so the empty prefix succeeds.
                        prop_assert_eq!(result.is_ok(), k.is_empty());
                    }
                }
            }
            prop_assert_eq!(trie.len(), model.len());
        }

        // Pre-order over sorted tokens is lexicographic order.
        let items: Vec<(Vec<u8>, u16)> = trie.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u16)> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(items, expected);

        for probe in probes {
            prop_assert_eq!(trie.get(&probe), model.get(&probe));

            let stored_prefixes: Vec<&Vec<u8>> = model.keys().filter(|k| has_prefix(&probe, k)).collect();
            let shortest = trie.shortest_prefix(&probe).map(|(k, _)| k);
            let longest = trie.longest_prefix(&probe).map(|(k, _)| k);
            prop_assert_eq!(shortest.as_ref(), stored_prefixes.first().copied());
            prop_assert_eq!(longest.as_ref(), stored_prefixes.last().copied());
            if let (Some(s), Some(l)) = (&shortest, &longest) {
                prop_assert!(s.len() <= l.len());
                prop_assert!(has_prefix(&probe, s) && has_prefix(&probe, l));
            }

            let extends = model.keys().any(|k| has_prefix(k, &probe));
            let strictly_extends = model.keys().any(|k| k.len() > probe.len() && has_prefix(k, &probe));
            prop_assert_eq!(trie.has_node(&probe), extends || probe.is_empty());
            prop_assert_eq!(trie.has_subtrie(&probe), strictly_extends);
        }
    }

    #[test]
    fn test_prefix_set_is_antichain(keys in proptest::collection::vec("[ab]{0,4}", 0..30)) {
        let mut set: PrefixSet<CharCodec> = PrefixSet::new();
        for key in &keys {
            set.add(key);
        }
        let stored: Vec<String> = set.iter().collect();
        prop_assert_eq!(stored.len(), set.len());
        for (i, a) in stored.iter().enumerate() {
            for b in &stored[i + 1..] {
                prop_assert!(!a.starts_with(b.as_str()) && !b.starts_with(a.as_str()));
            }
        }
        for key in &keys {
            prop_assert!(set.contains(key));
        }
    }

    #[test]
    fn test_codecs_round_trip(key in "[a-z/]{0,12}") {
        let chars = CharCodec;
        prop_assert_eq!(chars.key_from_tokens(&chars.tokens_from_key(&key)), key.clone());
        let paths = SeparatorCodec::default();
        prop_assert_eq!(paths.key_from_tokens(&paths.tokens_from_key(&key)), key);
    }
}
