//! dmenu-mru: most-recently-used ordering for dmenu-style launchers.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: bias a launcher's suggestion order toward recently used commands
//!   by keeping a small persisted MRU history and merging it over the
//!   candidate stream in linear time.
//! - Layers:
//!   - CommandList: ordered sequence of unique command strings stored in an
//!     arena (`slotmap`), with generational `NodeHandle`s giving O(1)
//!     removal and O(1) front/back insertion.
//!   - CommandIndex: `hashbrown::HashTable` from command string to the
//!     handle of its list node, built once over a list snapshot; answers
//!     "is this a candidate" in O(1) average.
//!   - HistoryStore: capped, newline-delimited history file in the user's
//!     home directory; load / save / touch (move-to-front-or-insert).
//!   - merge: emits history entries that are also candidates first, in
//!     most-recent-first order, then the remaining candidates in original
//!     order; O(|history| + |candidates|) thanks to the index.
//!
//! Constraints
//! - Single-threaded, single-shot: one process invocation does one load,
//!   one merge or one touch, one save. No suspension points.
//! - Value uniqueness inside a list is a caller invariant; the list never
//!   checks it. History and candidate streams are de-duplicated upstream.
//! - The index holds non-owning handles; removing a list node leaves its
//!   index entry stale, and the generational check on the handle makes any
//!   late use return `None` instead of dangling.
//! - The history file is shared across process invocations without locking;
//!   touch is read-modify-write and the last writer wins.
//!
//! Why this split?
//! - The list-plus-index pairing is the entire design content: it turns the
//!   naive O(|history| x |candidates|) cross-reference into a linear pass.
//! - File plumbing and CLI dispatch sit outside the core and only consume
//!   its public operations.
//!
//! Error semantics
//! - Missing history file on load is not an error (empty history). Every
//!   detected failure elsewhere (no home directory, history write failure,
//!   oversized command) is fatal for the tool; the library surfaces them as
//!   `Error` so the binary can print one diagnostic and exit non-zero.

mod command_index;
mod command_list;
mod command_list_proptest;
mod error;
mod history;
mod merge;

// Public surface
pub use command_index::CommandIndex;
pub use command_list::{CommandList, NodeHandle};
pub use error::Error;
pub use history::{touch, HistoryStore, HISTORY_FILE, MAX_HISTORY};
pub use merge::merge;
