//! Difficulty levels of the computer opponent.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// How strongly the computer plays. Fixed for the lifetime of a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Win / block / center / corner rule chain.
    #[default]
    Medium,
    /// Exhaustive minimax; never loses.
    Hard,
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    /// Case-insensitive `easy`, `medium` or `hard`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DifficultyError::new(s)),
        }
    }
}

/// Unrecognized difficulty value.
#[derive(Debug, Clone, Display, Error)]
#[display(
    "Invalid difficulty {:?} (expected easy, medium or hard) at {}:{}",
    input,
    file,
    line
)]
pub struct DifficultyError {
    /// The rejected text.
    pub input: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DifficultyError {
    /// Creates a new difficulty error with caller location tracking.
    #[track_caller]
    #[instrument(skip(input))]
    pub fn new(input: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            input: input.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
