use dmenu_mru::{merge, touch, CommandList};

fn list(values: &[&str]) -> CommandList {
    values.iter().copied().collect()
}

fn values(list: &CommandList) -> Vec<String> {
    list.iter().map(|(_, v)| v.to_string()).collect()
}

#[test]
fn merge_prefers_recent_history() {
    let history = list(&["b", "a"]);
    let candidates = list(&["a", "b", "c"]);
    assert_eq!(merge(&history, candidates), ["b", "a", "c"]);
}

#[test]
fn merge_keeps_untouched_tail_order() {
    let history = list(&["vim"]);
    let candidates = list(&["firefox", "vim", "ls", "mpv"]);
    assert_eq!(merge(&history, candidates), ["vim", "firefox", "ls", "mpv"]);
}

#[test]
fn merge_ignores_history_without_candidates() {
    let history = list(&["z"]);
    let candidates = list(&["a", "b"]);
    assert_eq!(merge(&history, candidates), ["a", "b"]);
}

#[test]
fn touch_then_merge_reflects_new_order() {
    // Simulate a launch: the user runs "ls", then the candidate stream is
    // re-sorted on the next invocation.
    let mut history = list(&["vim", "ls"]);
    touch(&mut history, "ls");
    assert_eq!(values(&history), ["ls", "vim"]);

    let candidates = list(&["firefox", "ls", "vim"]);
    assert_eq!(merge(&history, candidates), ["ls", "vim", "firefox"]);
}

#[test]
fn repeated_touches_build_mru_order() {
    let mut history = CommandList::new();
    for cmd in ["a", "b", "c", "b"] {
        touch(&mut history, cmd);
    }
    assert_eq!(values(&history), ["b", "c", "a"]);
}
