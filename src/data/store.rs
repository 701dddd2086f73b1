// ============================================================
// Layer 4 — Message Store Adapter
// ============================================================
// Reads and writes per-message JSON records organized by
// channel:
//
//   <root>/
//     <channel_username>/
//       msg_<id>.json
//       msg_<id>.json
//       ...
//
// Filenames are stable across preprocessing passes, so writing
// a record back overwrites its previous version in place.
//
// A record that fails to parse is skipped with a logged
// warning — one bad file never aborts a channel or a run.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::sampler;
use crate::domain::message::MessageRecord;
use crate::domain::traits::RecordSource;

/// Channel-partitioned message record storage rooted at one
/// directory.
pub struct MessageStore {
    root: PathBuf,
}

impl MessageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Channel partitions under the root, sorted by name.
    /// A missing root is treated as an empty corpus rather than
    /// an error — the caller decides whether that is fatal.
    pub fn channels(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            tracing::warn!(
                "Data directory '{}' does not exist — returning empty corpus",
                self.root.display()
            );
            return Ok(Vec::new());
        }

        let mut channels = Vec::new();
        for entry in fs::read_dir(&self.root)
            .with_context(|| format!("Cannot read directory '{}'", self.root.display()))?
        {
            let entry = entry?;
            if entry.path().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    channels.push(name.to_string());
                }
            }
        }

        channels.sort();
        Ok(channels)
    }

    /// All `msg_*.json` files in one channel partition, sorted.
    pub fn message_files(&self, channel: &str) -> Result<Vec<PathBuf>> {
        let dir = self.root.join(channel);
        let mut files = Vec::new();

        for entry in fs::read_dir(&dir)
            .with_context(|| format!("Cannot read directory '{}'", dir.display()))?
        {
            let entry = entry?;
            let path  = entry.path();
            let name  = entry.file_name();
            let name  = name.to_string_lossy();

            if path.is_file() && name.starts_with("msg_") && name.ends_with(".json") {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Every message file across every channel partition.
    pub fn all_message_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for channel in self.channels()? {
            files.extend(self.message_files(&channel)?);
        }
        Ok(files)
    }

    /// Parse a single record. A failure here is scoped to this
    /// one file; batch callers skip and continue.
    pub fn load_record(&self, path: &Path) -> Result<MessageRecord> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Cannot parse record '{}'", path.display()))
    }

    /// Write a record into its channel partition under its
    /// stable filename, overwriting any previous version.
    /// Output is pretty-printed UTF-8 JSON with non-ASCII
    /// characters unescaped.
    pub fn write_record(&self, channel: &str, record: &MessageRecord) -> Result<()> {
        let dir = self.root.join(channel);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;

        let path = dir.join(record.file_name());
        let json = serde_json::to_string_pretty(record)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write record '{}'", path.display()))?;

        tracing::debug!("Wrote record '{}'", path.display());
        Ok(())
    }
}

/// The annotation session draws its working set through this
/// impl: sample message files across all channels, then parse
/// the survivors.
impl RecordSource for MessageStore {
    fn sample(&self, sample_size: usize, seed: Option<u64>) -> Result<Vec<MessageRecord>> {
        let files   = self.all_message_files()?;
        let sampled = sampler::sample(files, sample_size, seed);
        let drawn   = sampled.len();

        let mut records = Vec::new();
        for path in sampled {
            match self.load_record(&path) {
                Ok(record) if record.tokens.is_some() => records.push(record),
                // Present but never preprocessed — unusable for
                // token-level annotation
                Ok(_) => {
                    tracing::warn!(
                        "Skipping '{}': no tokens field — has preprocessing run?",
                        path.display()
                    );
                }
                Err(e) => {
                    tracing::warn!("Skipping '{}': {e:#}", path.display());
                }
            }
        }

        tracing::info!("Loaded {} of {} sampled messages", records.len(), drawn);
        Ok(records)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::MessageId;

    fn record(channel: &str, id: i64, text: &str) -> MessageRecord {
        MessageRecord::new(channel, MessageId::Number(id), text)
    }

    #[test]
    fn test_write_then_load_round_trips() {
        let dir   = tempfile::tempdir().unwrap();
        let store = MessageStore::new(dir.path());

        let mut rec = record("shewabrand", 3, "አዲስ ጫማ");
        rec.extra.insert("views".to_string(), serde_json::json!(55));
        store.write_record("shewabrand", &rec).unwrap();

        let path   = dir.path().join("shewabrand").join("msg_3.json");
        let loaded = store.load_record(&path).unwrap();
        assert_eq!(loaded.text, "አዲስ ጫማ");
        assert_eq!(loaded.extra["views"], 55);

        // The file itself must keep Ethiopic characters readable
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("አዲስ ጫማ"));
    }

    #[test]
    fn test_overwrites_in_place() {
        let dir   = tempfile::tempdir().unwrap();
        let store = MessageStore::new(dir.path());

        let mut rec = record("neva", 8, "ላፕቶፕ");
        store.write_record("neva", &rec).unwrap();
        rec.cleaned_text = Some("ላፕቶፕ".to_string());
        rec.tokens       = Some(vec!["ላፕቶፕ".to_string()]);
        store.write_record("neva", &rec).unwrap();

        let files = store.message_files("neva").unwrap();
        assert_eq!(files.len(), 1);
        let loaded = store.load_record(&files[0]).unwrap();
        assert_eq!(loaded.tokens.unwrap(), vec!["ላፕቶፕ"]);
    }

    #[test]
    fn test_enumerates_channels_sorted() {
        let dir   = tempfile::tempdir().unwrap();
        let store = MessageStore::new(dir.path());

        store.write_record("zeta", &record("zeta", 1, "ሀ")).unwrap();
        store.write_record("alpha", &record("alpha", 1, "ለ")).unwrap();

        assert_eq!(store.channels().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_missing_root_is_an_empty_corpus() {
        let store = MessageStore::new("definitely/not/a/real/dir");
        assert!(store.channels().unwrap().is_empty());
    }

    #[test]
    fn test_ignores_files_outside_the_naming_scheme() {
        let dir   = tempfile::tempdir().unwrap();
        let store = MessageStore::new(dir.path());

        store.write_record("shop", &record("shop", 1, "ሀ")).unwrap();
        std::fs::write(dir.path().join("shop").join("notes.txt"), "x").unwrap();
        std::fs::write(dir.path().join("shop").join("index.json"), "{}").unwrap();

        let files = store.message_files("shop").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_malformed_record_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let chan = dir.path().join("shop");
        std::fs::create_dir_all(&chan).unwrap();
        let path = chan.join("msg_1.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = MessageStore::new(dir.path());
        assert!(store.load_record(&path).is_err());
    }

    #[test]
    fn test_sample_skips_bad_and_unpreprocessed_records() {
        let dir   = tempfile::tempdir().unwrap();
        let store = MessageStore::new(dir.path());

        // One good (preprocessed) record
        let mut good = record("shop", 1, "ዋጋ 100");
        good.cleaned_text = Some("ዋጋ 100".to_string());
        good.tokens       = Some(vec!["ዋጋ".to_string(), "100".to_string()]);
        store.write_record("shop", &good).unwrap();

        // One raw record without tokens
        store.write_record("shop", &record("shop", 2, "ሌላ")).unwrap();

        // One unparseable file
        std::fs::write(dir.path().join("shop").join("msg_3.json"), "{").unwrap();

        let records = store.sample(40, Some(1)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_name(), "msg_1.json");
    }
}
