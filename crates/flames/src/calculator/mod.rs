//! The FLAMES calculator.
//!
//! Two raw names are normalized to lowercase ASCII letters, equal letters are
//! cancelled pairwise, and the count of letters left over drives a cyclic
//! elimination over the `F L A M E S` wheel. Every input maps to exactly one
//! [`Outcome`]; nothing here fails.

pub mod cancel;
pub mod domain;
pub mod wheel;

pub use cancel::Cancellation;
pub use domain::{
    Category, NormalizedName, Outcome, OutcomeKind, FULLY_MATCHED_MESSAGE, INVALID_INPUT_MESSAGE,
};
pub use wheel::{eliminate, CategoryWheel, EliminationStep};

use serde::Serialize;

/// Full trace of one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub first: NormalizedName,
    pub second: NormalizedName,
    /// `None` when either name was empty after normalization.
    pub cancellation: Option<Cancellation>,
    pub steps: Vec<EliminationStep>,
    pub outcome: Outcome,
}

impl Reading {
    pub fn tally(&self) -> Option<usize> {
        self.cancellation.as_ref().map(Cancellation::tally)
    }

    pub fn remaining(&self) -> Option<RemainingLetters> {
        self.cancellation.as_ref().map(|cancellation| RemainingLetters {
            first: cancellation.first_remaining(),
            second: cancellation.second_remaining(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemainingLetters {
    pub first: String,
    pub second: String,
}

pub fn normalize(raw: &str) -> NormalizedName {
    NormalizedName::new(raw)
}

pub fn cross_cancel(first: &NormalizedName, second: &NormalizedName) -> Cancellation {
    Cancellation::new(first, second)
}

/// Runs the whole pipeline and keeps every intermediate value.
pub fn evaluate(first: &str, second: &str) -> Reading {
    let first = normalize(first);
    let second = normalize(second);

    if first.is_empty() || second.is_empty() {
        return Reading {
            first,
            second,
            cancellation: None,
            steps: Vec::new(),
            outcome: Outcome::InvalidInput,
        };
    }

    let cancellation = cross_cancel(&first, &second);
    let tally = cancellation.tally();

    let mut wheel = CategoryWheel::new();
    let steps = wheel.run(tally);
    let outcome = match wheel.survivor() {
        Some(category) if tally > 0 => Outcome::Categorized(category),
        _ => Outcome::FullyMatched,
    };

    Reading {
        first,
        second,
        cancellation: Some(cancellation),
        steps,
        outcome,
    }
}

pub fn compute(first: &str, second: &str) -> Outcome {
    evaluate(first, second).outcome
}

/// The user-facing text for a pair of names.
pub fn compute_message(first: &str, second: &str) -> String {
    compute(first, second).to_string()
}
