//! CommandList: ordered command storage with stable, generational handles.

use slotmap::{DefaultKey, SlotMap};

/// Handle to a node inside a [`CommandList`].
///
/// Handles are generational: once the node is removed, the handle stops
/// resolving, even if the underlying slot is later reused for a new entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeHandle(DefaultKey);

impl NodeHandle {
    pub(crate) fn new(k: DefaultKey) -> Self {
        NodeHandle(k)
    }
    pub(crate) fn raw(&self) -> DefaultKey {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    value: String,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

/// Doubly linked sequence of command strings backed by arena storage.
///
/// Nodes live in a `SlotMap` and link to each other through keys instead of
/// pointers, which keeps removal-by-handle O(1) while making stale handles
/// detectable. Uniqueness of values is a caller invariant: the list itself
/// never compares entries on insert.
pub struct CommandList {
    slots: SlotMap<DefaultKey, Node>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl CommandList {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append `value` at the tail (least-recent position).
    pub fn push_back(&mut self, value: impl Into<String>) -> NodeHandle {
        let k = self.slots.insert(Node {
            value: value.into(),
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.slots[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
        NodeHandle::new(k)
    }

    /// Insert `value` at the head (most-recent position).
    pub fn push_front(&mut self, value: impl Into<String>) -> NodeHandle {
        let k = self.slots.insert(Node {
            value: value.into(),
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(h) => self.slots[h].prev = Some(k),
            None => self.tail = Some(k),
        }
        self.head = Some(k);
        NodeHandle::new(k)
    }

    /// Unlink the node behind `handle` and return its value.
    ///
    /// Returns `None` for handles whose node was already removed (the
    /// generational key no longer resolves) or that belong to another list.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<String> {
        let node = self.slots.remove(handle.raw())?;
        match node.prev {
            Some(p) => self.slots[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.slots[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.value)
    }

    /// Remove and return the head value.
    pub fn pop_front(&mut self) -> Option<String> {
        let head = self.head?;
        self.remove(NodeHandle::new(head))
    }

    /// Value behind `handle`, if the node is still live.
    pub fn value(&self, handle: NodeHandle) -> Option<&str> {
        self.slots.get(handle.raw()).map(|n| n.value.as_str())
    }

    /// Head value without removing it.
    pub fn front(&self) -> Option<&str> {
        self.head.map(|k| self.slots[k].value.as_str())
    }

    /// Front-to-back traversal yielding each node's handle and value.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
        }
    }
}

impl Default for CommandList {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(NodeHandle, &str)` pairs in list order.
pub struct Iter<'a> {
    slots: &'a SlotMap<DefaultKey, Node>,
    cursor: Option<DefaultKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeHandle, &'a str);
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cursor?;
        let node = &self.slots[k];
        self.cursor = node.next;
        Some((NodeHandle::new(k), node.value.as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for CommandList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = CommandList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

/// Draining iterator over owned values in list order.
pub struct IntoIter {
    list: CommandList,
}

impl Iterator for IntoIter {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.list.len();
        (n, Some(n))
    }
}

impl IntoIterator for CommandList {
    type Item = String;
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter { list: self }
    }
}
