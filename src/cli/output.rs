//! Handles all user-facing output for the CLI.
//!
//! Pretty-printing, colorization, and JSON rendering live here so the
//! subcommands share one presentation layer.

use std::io::Write;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::cli::SegmentReport;
use crate::engine::SandhiResult;
use crate::orthography::aksharas;
use crate::phonemes::Phoneme;
use crate::rules::Sutra;

// ============================================================================
// SHARED HELPERS
// ============================================================================

fn stdout() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("could not render JSON output: {e}"),
    }
}

/// Pads to a display width, not a byte or char count; Devanāgarī glyphs
/// are frequently wider than one column.
fn pad(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(used)))
}

fn with_color(out: &mut StandardStream, spec: &ColorSpec, text: &str) {
    let _ = out.set_color(spec);
    let _ = write!(out, "{text}");
    let _ = out.reset();
}

fn bold(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    spec
}

// ============================================================================
// SUBCOMMAND OUTPUT
// ============================================================================

/// Prints the outcome of a `join` run.
pub fn print_result(result: &SandhiResult, json: bool) {
    if json {
        return print_json(result);
    }

    let mut out = stdout();
    let _ = write!(out, "{} → ", result.original);
    with_color(&mut out, &bold(Color::Green), &result.modified);
    let _ = writeln!(out);

    match result.matched_rule {
        Some(rule) => {
            let _ = write!(out, "  rule ");
            with_color(&mut out, &bold(Color::Cyan), rule.id);
            let _ = writeln!(out, " ({}): {}", rule.mnemonic, rule.gloss);
        }
        None => {
            with_color(&mut out, &bold(Color::Yellow), "  no junction rule applied");
            let _ = writeln!(out);
        }
    }
    let _ = writeln!(out, "  confidence {:.1}", result.confidence);
}

/// Prints per-segment `explain` hints.
pub fn print_explanations(report: &[SegmentReport], json: bool) {
    if json {
        return print_json(&report);
    }

    let mut out = stdout();
    if report.is_empty() {
        let _ = writeln!(out, "nothing to analyze");
        return;
    }
    for segment in report {
        with_color(&mut out, &bold(Color::Blue), &format!("[{}]", segment.index));
        let _ = writeln!(out, " {}", segment.text);
        if segment.hints.is_empty() {
            let _ = writeln!(out, "    no likely sandhi traces");
        }
        for hint in &segment.hints {
            let _ = writeln!(out, "    • {hint}");
        }
    }
}

/// Prints the phoneme breakdown of a term as an aligned table.
pub fn print_decomposition(text: &str, phonemes: &[&'static Phoneme], json: bool) {
    if json {
        #[derive(Serialize)]
        struct Breakdown<'a> {
            text: &'a str,
            aksharas: usize,
            phonemes: &'a [&'static Phoneme],
        }
        return print_json(&Breakdown {
            text,
            aksharas: aksharas(text).len(),
            phonemes,
        });
    }

    let mut out = stdout();
    with_color(&mut out, &bold(Color::Green), text);
    let _ = writeln!(
        out,
        " — {} akṣaras, {} phonemes",
        aksharas(text).len(),
        phonemes.len()
    );

    for p in phonemes {
        let kind = if p.is_vowel {
            "vowel"
        } else if p.is_modifier() {
            "modifier"
        } else {
            "consonant"
        };
        let voicing = if p.is_voiced { "voiced" } else { "unvoiced" };
        let symbol = p.symbol.to_string();
        let _ = writeln!(
            out,
            "  {} {} {} {}",
            pad(&symbol, 4),
            pad(kind, 10),
            pad(&p.place.to_string(), 14),
            voicing
        );
    }
}

/// Prints the citation table for the `rules` subcommand.
pub fn print_rules(rules: &[Sutra], json: bool) {
    if json {
        return print_json(&rules);
    }

    let id_width = rules.iter().map(|r| UnicodeWidthStr::width(r.id)).max().unwrap_or(0);
    let mnemonic_width = rules
        .iter()
        .map(|r| UnicodeWidthStr::width(r.mnemonic))
        .max()
        .unwrap_or(0);

    let mut out = stdout();
    for rule in rules {
        with_color(&mut out, &bold(Color::Cyan), &pad(rule.id, id_width));
        let _ = write!(out, "  ");
        with_color(&mut out, &bold(Color::Green), &pad(rule.mnemonic, mnemonic_width));
        let _ = writeln!(out, "  {}", rule.gloss);
    }
}
