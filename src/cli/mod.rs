// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Uses `clap` to parse
// command line arguments; all business logic is delegated to
// Layer 2 (application).
//
// Two commands are supported:
//   1. `preprocess` — cleans and tokenizes the raw corpus
//   2. `annotate`   — runs one interactive labeling session
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AnnotateArgs, Commands, PreprocessArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "amharic-ner",
    version = "0.1.0",
    about = "Clean Amharic e-commerce messages, then label tokens for NER in CoNLL format."
)]
pub struct Cli {
    /// The subcommand to run (preprocess or annotate)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use
    /// case. The CLI layer only routes, never computes.
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Preprocess(args) => self.run_preprocess(args.clone()),
            Commands::Annotate(args)   => self.run_annotate(args.clone()),
        }
    }

    /// Handles the `preprocess` subcommand.
    fn run_preprocess(&self, args: PreprocessArgs) -> Result<()> {
        use crate::application::preprocess_use_case::PreprocessUseCase;

        tracing::info!("Preprocessing raw messages in: {}", args.raw_dir);

        let use_case = PreprocessUseCase::new(args.into());
        use_case.execute()?;

        println!("Preprocessing complete.");
        Ok(())
    }

    /// Handles the `annotate` subcommand.
    fn run_annotate(&self, args: AnnotateArgs) -> Result<()> {
        use crate::application::annotate_use_case::AnnotateUseCase;

        tracing::info!("Starting annotation session over: {}", args.data_dir);

        let use_case = AnnotateUseCase::new(args.into());
        use_case.execute()?;

        println!("Session ended.");
        Ok(())
    }
}
