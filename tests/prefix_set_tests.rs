use prefixtrie::{CharCodec, PrefixSet, SeparatorCodec, TrieError};

#[test]
fn test_prefix_set_size_is_not_monotonic() {
    let mut set: PrefixSet<CharCodec> = PrefixSet::new();
    set.add("foobar");
    set.add("foobaz");
    assert_eq!(set.len(), 2);
    set.add("foo");
    assert_eq!(set.len(), 1);
    assert!(set.contains("foobarbaz"));
    assert!(set.contains("foo"));
    assert!(!set.contains("fo"));
}

#[test]
fn test_prefix_set_bulk_load_keeps_antichain() {
    let set: PrefixSet<CharCodec> = ["foobar", "foo", "foobaz", "bar"].into_iter().collect();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["bar", "foo"]);
}

#[test]
fn test_prefix_set_over_paths() {
    let mut set = PrefixSet::with_codec(SeparatorCodec::new("/").unwrap());
    set.add("/usr/lib");
    set.add("/usr/local/lib");
    assert!(set.contains("/usr/lib/x86_64"));
    assert!(!set.contains("/usr/libexec"));

    assert_eq!(set.iter_prefix("/usr").collect::<Vec<_>>(), vec!["/usr/lib", "/usr/local/lib"]);
    assert_eq!(set.iter_prefix("/usr/lib/gcc").collect::<Vec<_>>(), vec!["/usr/lib/gcc"]);
    assert_eq!(set.iter_prefix("/opt").count(), 0);
}

#[test]
fn test_prefix_set_rejects_removal() {
    let mut set: PrefixSet<CharCodec> = ["a"].into_iter().collect();
    for result in [set.remove("a"), set.discard("a"), set.pop().map(|_| ())] {
        assert!(matches!(result, Err(TrieError::UnsupportedOperation(_))));
    }
    assert_eq!(set.len(), 1);
}

#[test]
fn test_prefix_set_debug_and_clone() {
    let set: PrefixSet<CharCodec> = ["b", "a"].into_iter().collect();
    let copy = set.clone();
    assert_eq!(copy, set);
    assert_eq!(format!("{set:?}"), r#"{"a", "b"}"#);
}
