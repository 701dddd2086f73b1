// ============================================================
// Layer 2 — Preprocess Use Case
// ============================================================
// Runs the batch pipeline over every channel partition:
//
//   Step 1: Enumerate channels under the raw root  (Layer 4)
//   Step 2: Load each raw record                   (Layer 4)
//   Step 3: Normalize the text                     (Layer 4)
//   Step 4: Tokenize the cleaned text              (Layer 4)
//   Step 5: Write back with cleaned_text + tokens  (Layer 4)
//
// Channels are independent of each other; they are processed
// sequentially in sorted order. A record that fails to parse
// is skipped and counted — it never aborts its channel.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;

use crate::data::{normalizer::Normalizer, store::MessageStore, tokenizer::tokenize};

// ─── Preprocess Configuration ────────────────────────────────────────────────
// Where the raw corpus lives and where processed records go.
// The two roots share the channel/msg_<id>.json layout, so a
// re-run overwrites earlier output in place.
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    pub raw_dir:       String,
    pub processed_dir: String,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            raw_dir:       "data/raw/text".to_string(),
            processed_dir: "data/processed/text".to_string(),
        }
    }
}

// ─── PreprocessUseCase ───────────────────────────────────────────────────────
pub struct PreprocessUseCase {
    config: PreprocessConfig,
}

impl PreprocessUseCase {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Run the batch over every channel under the raw root.
    pub fn execute(&self) -> Result<()> {
        let cfg        = &self.config;
        let raw        = MessageStore::new(&cfg.raw_dir);
        let processed  = MessageStore::new(&cfg.processed_dir);
        let normalizer = Normalizer::new();

        let channels = raw.channels()?;
        if channels.is_empty() {
            tracing::warn!("No channel partitions under '{}' — nothing to do", cfg.raw_dir);
            return Ok(());
        }

        let mut total_processed = 0usize;
        let mut total_skipped   = 0usize;

        for channel in channels {
            let files = raw.message_files(&channel)?;

            let mut ok      = 0usize;
            let mut skipped = 0usize;

            for path in &files {
                match raw.load_record(path) {
                    Ok(mut record) => {
                        // tokens always derive from the same
                        // cleaned_text that gets written
                        let cleaned = normalizer.clean(&record.text);
                        record.tokens       = Some(tokenize(&cleaned));
                        record.cleaned_text = Some(cleaned);

                        processed.write_record(&channel, &record)?;
                        ok += 1;
                    }
                    Err(e) => {
                        tracing::warn!("Skipping '{}': {e:#}", path.display());
                        skipped += 1;
                    }
                }
            }

            tracing::info!(
                "Channel {}: processed {} messages ({} skipped)",
                channel,
                ok,
                skipped,
            );
            total_processed += ok;
            total_skipped   += skipped;
        }

        tracing::info!(
            "Preprocessing finished: {} messages processed, {} skipped",
            total_processed,
            total_skipped,
        );
        Ok(())
    }
}
