// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

/// An ordered key-value container holding encoded parameters, results or contract state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScDict {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl ScDict {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bytes stored under `key`, if any.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: &[u8], value: Vec<u8>) {
        self.entries.insert(key.to_vec(), value);
    }

    /// Removes the value stored under `key`.
    pub fn delete(&mut self, key: &[u8]) {
        self.entries.remove(key);
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn exists(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes every key starting with `prefix`.
    pub fn delete_prefix(&mut self, prefix: &[u8]) {
        self.entries.retain(|key, _| !key.starts_with(prefix));
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_slice(), value.as_slice()))
    }
}
