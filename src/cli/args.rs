//! Command-line arguments and subcommands for the sandhika CLI,
//! declared with `clap`'s derive feature.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "sandhika",
    version,
    about = "Pāṇinian sandhi analysis for Devanāgarī text."
)]
pub struct SandhikaArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Emit machine-readable JSON instead of human output.
    #[arg(long, global = true)]
    pub json: bool,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Join two terms, applying the highest-priority junction rule.
    Join {
        /// The first term (its final sound feeds the junction).
        term1: String,
        /// The second term (its initial sound feeds the junction).
        term2: String,
    },
    /// Scan text for likely traces of sandhi, segment by segment.
    Explain {
        /// Inline text to scan.
        text: Option<String>,
        /// Read the text to scan from a file instead.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// How to split the input into segments.
        #[arg(long, value_enum, default_value = "verse")]
        split: SplitMode,
    },
    /// Show the phoneme breakdown of a term.
    Decompose {
        /// The Devanāgarī text to decompose.
        text: String,
    },
    /// List the supported rule citations.
    Rules,
}

/// Document segmentation modes for `explain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplitMode {
    /// Split on daṇḍa, double daṇḍa, and newlines.
    Verse,
    /// Split on newlines only.
    Line,
    /// Split on daṇḍa marks and Western sentence punctuation.
    Sentence,
}
