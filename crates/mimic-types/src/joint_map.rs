//! [`JointMap`] – an insertion-ordered, string-keyed map.
//!
//! The interchange files (§ serializer) require each record's `joints`
//! object to keep its keys in joint-declaration order, byte-for-byte stable
//! across runs.  A `HashMap` loses the order and a `BTreeMap` sorts it, so
//! the map is a thin `Vec<(String, T)>` with hand-written serde impls that
//! read and write a JSON object in insertion order.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// String-keyed map that preserves insertion order and serializes as a JSON
/// object with the keys in that order.
///
/// Lookups are linear; the pipeline's maps hold one entry per joint, so the
/// joint count (tens) bounds the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct JointMap<T>(Vec<(String, T)>);

impl<T> JointMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty map with space reserved for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Insert `value` under `name`.  A fresh name is appended at the end;
    /// an existing name is overwritten in place, keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    /// Look up a value by joint name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate keys in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}

impl<T> Default for JointMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(String, T)> for JointMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for JointMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct JointMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for JointMapVisitor<T> {
    type Value = JointMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of joint names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, T)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, T>()? {
            if entries.iter().any(|(n, _)| *n == name) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate joint name {name:?}"
                )));
            }
            entries.push((name, value));
        }
        Ok(JointMap(entries))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for JointMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(JointMapVisitor(PhantomData))
    }
}
