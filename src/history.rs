//! Persisted MRU history: a capped, newline-delimited file plus the
//! move-to-front ("touch") semantics.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::command_list::CommandList;
use crate::error::Error;

/// History file name, created in the user's home directory.
pub const HISTORY_FILE: &str = ".dmenu_hist";

/// Maximum number of entries written back on save. Older entries beyond the
/// cap are silently dropped.
pub const MAX_HISTORY: usize = 1024;

/// Load/save access to one history file.
///
/// `touch_command` is a plain read-modify-write with no locking; concurrent
/// invocations race and the last writer wins. Accepted limitation for a
/// single-shot launcher helper.
pub struct HistoryStore {
    path: PathBuf,
    cap: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, cap: usize) -> Self {
        Self {
            path: path.into(),
            cap,
        }
    }

    /// Store for `~/.dmenu_hist` with the default cap.
    pub fn in_home_dir() -> Result<Self, Error> {
        let base = BaseDirs::new().ok_or(Error::NoHomeDir)?;
        Ok(Self::new(base.home_dir().join(HISTORY_FILE), MAX_HISTORY))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the history, most-recent-first. A missing or unreadable file
    /// yields an empty history; empty lines are skipped.
    pub fn load(&self) -> CommandList {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "no readable history, starting empty");
                return CommandList::new();
            }
        };
        text.lines().filter(|line| !line.is_empty()).collect()
    }

    /// Rewrite the file with at most `cap` entries from the front of
    /// `history`, one per line.
    pub fn save(&self, history: &CommandList) -> Result<(), Error> {
        let file = File::create(&self.path).map_err(|e| self.write_err(e))?;
        let mut out = BufWriter::new(file);
        for (_, entry) in history.iter().take(self.cap) {
            writeln!(out, "{entry}").map_err(|e| self.write_err(e))?;
        }
        out.flush().map_err(|e| self.write_err(e))?;
        debug!(
            path = %self.path.display(),
            entries = history.len().min(self.cap),
            "history written"
        );
        Ok(())
    }

    /// Promote `command` to the front of the persisted history.
    pub fn touch_command(&self, command: &str) -> Result<(), Error> {
        let mut history = self.load();
        touch(&mut history, command);
        self.save(&history)
    }

    fn write_err(&self, source: io::Error) -> Error {
        Error::WriteHistory {
            path: self.path.clone(),
            source,
        }
    }
}

/// Move `command` to the front of `history`, inserting it if absent.
///
/// Linear scan; history is unique, so the first match is the only one. The
/// list is capped, so O(n) is fine here.
pub fn touch(history: &mut CommandList, command: &str) {
    let found = history
        .iter()
        .find(|(_, value)| *value == command)
        .map(|(handle, _)| handle);
    if let Some(handle) = found {
        history.remove(handle);
    }
    history.push_front(command);
}
