pub use crate::engine::{SandhiEngine, SandhiResult};
pub use crate::errors::SandhikaError;
pub use crate::rules::{RuleCategory, Sutra};

pub mod cli;
pub mod engine;
pub mod errors;
pub mod orthography;
pub mod phonemes;
pub mod rules;
