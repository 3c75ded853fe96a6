//! The sandhika command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates
//! the core library functions.

use std::fs;

use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::cli::args::{Command, SandhikaArgs, SplitMode};
use crate::engine::SandhiEngine;
use crate::errors::SandhikaError;
use crate::orthography;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> Result<(), SandhikaError> {
    let args = SandhikaArgs::parse();
    let engine = SandhiEngine::new();

    match args.command {
        Command::Join { term1, term2 } => {
            let result = engine.apply(&term1, &term2);
            output::print_result(&result, args.json);
        }
        Command::Explain { text, file, split } => {
            let text = match (text, file) {
                (Some(inline), _) => inline,
                (None, Some(path)) => fs::read_to_string(&path)
                    .map_err(|source| SandhikaError::UnreadableInput { path, source })?,
                (None, None) => return Err(SandhikaError::MissingInput),
            };
            let report = explain_document(&engine, &text, split);
            output::print_explanations(&report, args.json);
        }
        Command::Decompose { text } => {
            let phonemes = orthography::decompose(&text);
            output::print_decomposition(&text, &phonemes, args.json);
        }
        Command::Rules => {
            output::print_rules(engine.rules(), args.json);
        }
    }

    Ok(())
}

// ============================================================================
// DOCUMENT SEGMENTATION
// ============================================================================

/// Per-segment scan results for the `explain` subcommand.
#[derive(Debug, Serialize)]
pub struct SegmentReport {
    pub index: usize,
    pub text: String,
    pub hints: Vec<String>,
}

fn explain_document(engine: &SandhiEngine, text: &str, split: SplitMode) -> Vec<SegmentReport> {
    split_document(text, split)
        .into_iter()
        .enumerate()
        .map(|(i, segment)| SegmentReport {
            index: i + 1,
            hints: engine.explain(&segment),
            text: segment,
        })
        .collect()
}

static VERSE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[।॥\n]+").expect("hard-coded verse pattern"));
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[।॥.!?\n]+").expect("hard-coded sentence pattern"));
static NOISE_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s()\[\]{}०-९0-9.,:;\-_/]+$").expect("hard-coded noise pattern"));

/// Splits a document into analyzable segments, dropping empty and
/// noise-only fragments.
pub fn split_document(text: &str, mode: SplitMode) -> Vec<String> {
    let raw: Vec<&str> = match mode {
        SplitMode::Verse => VERSE_BREAK.split(text).collect(),
        SplitMode::Line => text.lines().collect(),
        SplitMode::Sentence => SENTENCE_BREAK.split(text).collect(),
    };
    raw.into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && !is_noise_segment(segment))
        .map(str::to_owned)
        .collect()
}

/// Numbering or punctuation-only fragments carry nothing to analyze.
fn is_noise_segment(segment: &str) -> bool {
    NOISE_SEGMENT.is_match(segment)
}
