//! Context-to-label cache
//!
//! A flat JSON object keyed by the full context string, read in full at
//! start and rewritten in full at end. Entries are never re-validated.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;

pub(crate) struct LabelCache {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl LabelCache {
    /// Load the cache at `path`. An unreadable or malformed file means an
    /// empty cache, not an error.
    pub(crate) fn load(path: PathBuf) -> Self {
        let entries = File::open(&path)
            .ok()
            .and_then(|file| serde_json::from_reader(file).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    /// Exact-match lookup on the full context string
    pub(crate) fn get(&self, context: &str) -> Option<&str> {
        self.entries.get(context).map(String::as_str)
    }

    /// Insert an entry and rewrite the whole file. The write lands in a
    /// sibling temp file and is renamed over the original, so a crash
    /// mid-write leaves the previous cache intact.
    pub(crate) fn insert_and_save(&mut self, context: &str, label: &str) -> io::Result<()> {
        self.entries
            .insert(context.to_string(), label.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let file = File::create(&tmp)?;
        serde_json::to_writer(&file, &self.entries)?;
        file.sync_all()?;
        std::fs::rename(&tmp, &self.path)
    }

    pub(crate) fn path(&self) -> &PathBuf {
        &self.path
    }
}
