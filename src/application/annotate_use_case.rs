// ============================================================
// Layer 2 — Annotate Use Case
// ============================================================
// One interactive labeling run over a fresh random sample.
//
// The terminal prompt loop here is deliberately thin glue:
// every state transition goes through AnnotationSession, and
// the loop only parses commands and renders the result. The
// session never sees a terminal.
//
// Command sequence follows the session contract:
//   load → {view, set_labels, advance/retreat}* → export
//
// Reference: Rust Book §12 (I/O and CLI programs)

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, BufRead, Write},
};

use crate::annotation::session::AnnotationSession;
use crate::data::store::MessageStore;
use crate::domain::labels::ENTITY_TAGS;

// ─── Annotate Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    /// Root of the processed corpus to sample from
    pub data_dir: String,

    /// Upper bound on the working-set size
    pub sample_size: usize,

    /// Fixed sampling seed for a reproducible working set
    pub seed: Option<u64>,

    /// Where the exported tagged-token file goes
    pub output: String,
}

// ─── AnnotateUseCase ─────────────────────────────────────────────────────────
pub struct AnnotateUseCase {
    config: AnnotateConfig,
}

impl AnnotateUseCase {
    pub fn new(config: AnnotateConfig) -> Self {
        Self { config }
    }

    /// Load a session and hand control to the prompt loop on
    /// stdin. Fails up front when the corpus is empty.
    pub fn execute(&self) -> Result<()> {
        let store = MessageStore::new(&self.config.data_dir);
        let mut session =
            AnnotationSession::load(&store, self.config.sample_size, self.config.seed)?;

        let stdin = io::stdin();
        self.run_loop(&mut session, stdin.lock(), &mut io::stdout())
    }

    /// The prompt loop proper, generic over its streams so
    /// tests can script it.
    fn run_loop<R, W>(&self, session: &mut AnnotationSession, input: R, out: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        print_help(out)?;
        show_current(session, out)?;

        for line in input.lines() {
            let line  = line?;
            let parts: Vec<&str> = line.split_whitespace().collect();

            match parts.as_slice() {
                [] | ["show"] => {
                    show_current(session, out)?;
                }
                ["n"] | ["next"] => {
                    session.advance();
                    show_current(session, out)?;
                }
                ["p"] | ["prev"] => {
                    session.retreat();
                    show_current(session, out)?;
                }
                ["tag", index, tag] | ["label", index, tag] => {
                    match index.parse::<usize>() {
                        Ok(i) => {
                            apply_tag(session, i, tag, out)?;
                            show_current(session, out)?;
                        }
                        Err(_) => {
                            writeln!(out, "'{index}' is not a token number")?;
                        }
                    }
                }
                ["tags"] => {
                    writeln!(out, "Available tags: {}", ENTITY_TAGS.join(" "))?;
                }
                ["export"] => {
                    let conll = session.export();
                    fs::write(&self.config.output, &conll)
                        .with_context(|| format!("Cannot write '{}'", self.config.output))?;
                    tracing::info!("Exported labeled data to '{}'", self.config.output);
                    writeln!(out, "Exported to '{}'", self.config.output)?;
                }
                ["q"] | ["quit"] => break,
                _ => {
                    writeln!(out, "Unknown command — type one of: show, next, prev, tag <n> <tag>, tags, export, quit")?;
                }
            }
        }

        Ok(())
    }
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  show             redisplay the current message")?;
    writeln!(out, "  next / prev      move through the working set")?;
    writeln!(out, "  tag <n> <tag>    tag token number <n> of this message")?;
    writeln!(out, "  tags             list the available tags")?;
    writeln!(out, "  export           write the labeled data file")?;
    writeln!(out, "  quit             end the session")?;
    Ok(())
}

/// Render the record and labels under the cursor.
fn show_current<W: Write>(session: &mut AnnotationSession, out: &mut W) -> Result<()> {
    let position = session.cursor();
    let total    = session.len();
    let (record, assignment) = session.view(position)?;

    writeln!(out)?;
    writeln!(out, "Message {} / {}", position + 1, total)?;
    writeln!(
        out,
        "Channel: {} | ID: {}",
        record.channel_username, record.message_id
    )?;
    writeln!(out, "Text: {}", record.text)?;
    for (i, (token, label)) in assignment
        .tokens
        .iter()
        .zip(assignment.labels.iter())
        .enumerate()
    {
        writeln!(out, "  {:>3}. {}  [{}]", i + 1, token, label)?;
    }
    Ok(())
}

/// Set one token's tag by its displayed (1-based) number.
/// Range problems are reported and leave the session unchanged;
/// unknown tag strings are coerced by the session itself.
fn apply_tag<W: Write>(
    session: &mut AnnotationSession,
    number:  usize,
    tag:     &str,
    out:     &mut W,
) -> Result<()> {
    let position = session.cursor();
    let (_, assignment) = session.view(position)?;
    let token_count = assignment.len();

    if number == 0 || number > token_count {
        writeln!(out, "Token number must be between 1 and {token_count}")?;
        return Ok(());
    }

    let mut labels = assignment.labels.clone();
    labels[number - 1] = tag.to_string();
    session.set_labels(position, labels)
}
