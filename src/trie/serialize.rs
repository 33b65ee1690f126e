//! Serde support.
//!
//! A trie serializes as a map from rendered key to value, in iteration order,
//! and a prefix set as a sequence of its stored keys. Deserializing goes
//! through the codec's default configuration.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::codec::PathCodec;
use super::map::Trie;
use super::set::PrefixSet;

impl<C, V> Serialize for Trie<C, V>
where
    C: PathCodec,
    C::Owned: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct TrieVisitor<C, V> {
    _marker: PhantomData<fn() -> (C, V)>,
}

impl<'de, C, V> Visitor<'de> for TrieVisitor<C, V>
where
    C: PathCodec + Default,
    C::Owned: Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = Trie<C, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of trie keys to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut trie = Trie::new();
        while let Some((key, value)) = access.next_entry::<C::Owned, V>()? {
            trie.insert(key.borrow(), value);
        }
        Ok(trie)
    }
}

impl<'de, C, V> Deserialize<'de> for Trie<C, V>
where
    C: PathCodec + Default,
    C::Owned: Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TrieVisitor {
            _marker: PhantomData,
        })
    }
}

impl<C> Serialize for PrefixSet<C>
where
    C: PathCodec,
    C::Owned: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct PrefixSetVisitor<C> {
    _marker: PhantomData<fn() -> C>,
}

impl<'de, C> Visitor<'de> for PrefixSetVisitor<C>
where
    C: PathCodec + Default,
    C::Owned: Deserialize<'de>,
{
    type Value = PrefixSet<C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of prefix set keys")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = PrefixSet::new();
        while let Some(key) = access.next_element::<C::Owned>()? {
            set.add(key.borrow());
        }
        Ok(set)
    }
}

impl<'de, C> Deserialize<'de> for PrefixSet<C>
where
    C: PathCodec + Default,
    C::Owned: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PrefixSetVisitor {
            _marker: PhantomData,
        })
    }
}
