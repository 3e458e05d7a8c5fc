//! MRU merge: reorder candidates so history entries come first.

use crate::command_index::CommandIndex;
use crate::command_list::CommandList;

/// Merge persisted `history` (most-recent-first) over freshly read
/// `candidates` (original stream order).
///
/// History entries that also appear among the candidates are emitted first,
/// in history order; the remaining candidates follow in their original
/// relative order. History entries absent from the candidates are dropped,
/// never fabricated.
///
/// Runs in O(|history| + |candidates|): the candidate index answers "is this
/// history entry a candidate" in O(1) and hands back the node handle for an
/// O(1) removal, instead of rescanning the candidate list per history entry.
pub fn merge(history: &CommandList, mut candidates: CommandList) -> Vec<String> {
    let index = CommandIndex::build(&candidates);

    let mut out = Vec::with_capacity(candidates.len());
    for (_, entry) in history.iter() {
        if let Some(handle) = index.get(entry) {
            // The index entry goes stale here, but history values are unique
            // so no later lookup resolves to this handle again; if one did,
            // the generational check would reject it.
            if let Some(value) = candidates.remove(handle) {
                out.push(value);
            }
        }
    }
    out.extend(candidates);
    out
}
