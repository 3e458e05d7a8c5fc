//! CommandIndex: string-to-node lookup built over a CommandList snapshot.

use core::hash::BuildHasher;
use hashbrown::HashTable;
use std::collections::hash_map::RandomState;

use crate::command_list::{CommandList, NodeHandle};

#[derive(Debug)]
struct IndexEntry {
    key: String,
    handle: NodeHandle,
    hash: u64,
}

/// Hash index from a command string to the handle of its list node.
///
/// The index owns copies of the keys but only plain handles into the list,
/// so it never frees or outlives list nodes. Each entry stores its
/// precomputed hash; indexing always uses the stored hash.
pub struct CommandIndex<S = RandomState> {
    hasher: S,
    table: HashTable<IndexEntry>,
}

impl CommandIndex {
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    /// Index every node of `list` under its value.
    pub fn build(list: &CommandList) -> Self {
        let mut index = Self::new();
        for (handle, value) in list.iter() {
            index.put(value, handle);
        }
        index
    }
}

impl Default for CommandIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CommandIndex<S>
where
    S: BuildHasher + Clone + Default,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            table: HashTable::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Exact-match lookup. No partial or case-insensitive matching.
    pub fn get(&self, key: &str) -> Option<NodeHandle> {
        let hash = self.hasher.hash_one(key);
        self.table.find(hash, |e| e.key == key).map(|e| e.handle)
    }

    /// Associate `key` with `handle`.
    ///
    /// Empty keys are never indexed. If `key` is already present, the stored
    /// handle is overwritten in place; only the most recent association is
    /// retrievable afterwards.
    pub fn put(&mut self, key: &str, handle: NodeHandle) {
        if key.is_empty() {
            return;
        }
        let hash = self.hasher.hash_one(key);
        match self.table.entry(hash, |e| e.key == key, |e| e.hash) {
            hashbrown::hash_table::Entry::Occupied(mut o) => {
                o.get_mut().handle = handle;
            }
            hashbrown::hash_table::Entry::Vacant(v) => {
                v.insert(IndexEntry {
                    key: key.to_owned(),
                    handle,
                    hash,
                });
            }
        }
    }
}
