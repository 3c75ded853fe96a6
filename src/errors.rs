//! App-level errors for the CLI surface.
//!
//! The engine core is total over arbitrary string input and has no
//! raised-failure paths; only the binary's I/O and argument handling can
//! fail. Those failures are reported through miette from `main`.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SandhikaError {
    /// An input file could not be read.
    #[error("failed to read input file `{}`", path.display())]
    #[diagnostic(code(sandhika::cli::unreadable_input))]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `explain` was invoked with neither inline text nor `--file`.
    #[error("no input to analyze: pass TEXT or --file <PATH>")]
    #[diagnostic(
        code(sandhika::cli::missing_input),
        help("try `sandhika explain \"देवालय\"`")
    )]
    MissingInput,
}
