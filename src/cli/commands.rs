// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `preprocess` and `annotate`
// and all their configurable flags.
//
// clap's derive macros generate help text, error messages for
// missing args, and type conversion automatically.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::annotate_use_case::AnnotateConfig;
use crate::application::preprocess_use_case::PreprocessConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean and tokenize raw channel messages
    Preprocess(PreprocessArgs),

    /// Label a random sample of processed messages
    Annotate(AnnotateArgs),
}

/// All arguments for the `preprocess` command
#[derive(Args, Debug, Clone)]
pub struct PreprocessArgs {
    /// Root directory of raw per-channel message files
    #[arg(long, default_value = "data/raw/text")]
    pub raw_dir: String,

    /// Root directory the cleaned records are written under
    #[arg(long, default_value = "data/processed/text")]
    pub processed_dir: String,
}

/// Convert CLI PreprocessArgs into the application-layer
/// config — the application layer never sees clap types.
impl From<PreprocessArgs> for PreprocessConfig {
    fn from(a: PreprocessArgs) -> Self {
        PreprocessConfig {
            raw_dir:       a.raw_dir,
            processed_dir: a.processed_dir,
        }
    }
}

/// All arguments for the `annotate` command
#[derive(Args, Debug, Clone)]
pub struct AnnotateArgs {
    /// Root directory of processed per-channel message files
    #[arg(long, default_value = "data/processed/text")]
    pub data_dir: String,

    /// How many messages to sample for this session
    #[arg(long, default_value_t = 40)]
    pub sample_size: usize,

    /// Fix the sampling seed for a reproducible working set
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file for the exported tagged tokens
    #[arg(long, default_value = "ner_labeled_sample.conll")]
    pub output: String,
}

impl From<AnnotateArgs> for AnnotateConfig {
    fn from(a: AnnotateArgs) -> Self {
        AnnotateConfig {
            data_dir:    a.data_dir,
            sample_size: a.sample_size,
            seed:        a.seed,
            output:      a.output,
        }
    }
}
