use std::fs;

use dmenu_mru::{CommandList, Error, HistoryStore, MAX_HISTORY};
use tempfile::tempdir;

fn values(list: &CommandList) -> Vec<String> {
    list.iter().map(|(_, v)| v.to_string()).collect()
}

#[test]
fn load_missing_file_yields_empty_history() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("hist"), MAX_HISTORY);
    assert!(store.load().is_empty());
}

#[test]
fn save_load_round_trip_preserves_order() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("hist"), MAX_HISTORY);

    let history: CommandList = ["c", "a", "b"].into_iter().collect();
    store.save(&history).unwrap();

    assert_eq!(values(&store.load()), ["c", "a", "b"]);
}

#[test]
fn save_truncates_to_cap() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("hist"), 3);

    let history: CommandList = ["1", "2", "3", "4", "5"].into_iter().collect();
    store.save(&history).unwrap();

    // Only the front (most recent) entries survive the rewrite.
    assert_eq!(values(&store.load()), ["1", "2", "3"]);
}

#[test]
fn load_skips_blank_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist");
    fs::write(&path, "ls\n\nvim\n\n").unwrap();

    let store = HistoryStore::new(path, MAX_HISTORY);
    assert_eq!(values(&store.load()), ["ls", "vim"]);
}

#[test]
fn touch_command_persists_promotion() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("hist"), MAX_HISTORY);

    store.touch_command("ls").unwrap();
    store.touch_command("vim").unwrap();
    store.touch_command("ls").unwrap();

    assert_eq!(values(&store.load()), ["ls", "vim"]);
    // One line per entry, trailing newline included.
    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw, "ls\nvim\n");
}

#[test]
fn touch_command_respects_cap() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("hist"), 2);

    store.touch_command("a").unwrap();
    store.touch_command("b").unwrap();
    store.touch_command("c").unwrap();

    // "a" fell off the end when "c" was promoted.
    assert_eq!(values(&store.load()), ["c", "b"]);
}

#[test]
fn save_to_unwritable_path_is_an_error() {
    let dir = tempdir().unwrap();
    // The parent of this path does not exist, so the create fails.
    let store = HistoryStore::new(dir.path().join("missing").join("hist"), MAX_HISTORY);

    match store.save(&CommandList::new()) {
        Err(Error::WriteHistory { .. }) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}
