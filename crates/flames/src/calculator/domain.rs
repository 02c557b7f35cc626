use serde::{Deserialize, Serialize};
use std::fmt;

pub const INVALID_INPUT_MESSAGE: &str = "Please enter both valid names (letters only).";
pub const FULLY_MATCHED_MESSAGE: &str = "All letters matched — close bond! (Try different names)";

/// One of the six relationship categories on the FLAMES wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Friends,
    Lovers,
    Affection,
    Marriage,
    Enemies,
    Siblings,
}

impl Category {
    /// Categories in wheel order, `F L A M E S`.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Friends,
            Self::Lovers,
            Self::Affection,
            Self::Marriage,
            Self::Enemies,
            Self::Siblings,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Friends => "Friends",
            Self::Lovers => "Lovers",
            Self::Affection => "Affection",
            Self::Marriage => "Marriage",
            Self::Enemies => "Enemies",
            Self::Siblings => "Siblings",
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Friends => 'F',
            Self::Lovers => 'L',
            Self::Affection => 'A',
            Self::Marriage => 'M',
            Self::Enemies => 'E',
            Self::Siblings => 'S',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.letter() == letter.to_ascii_uppercase())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.letter())
    }
}

/// Lowercase ASCII letters kept from a raw name, in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Keeps ASCII letters only and lowercases them. Everything else,
    /// accented Latin letters included, is dropped.
    pub fn new(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(char::is_ascii_alphabetic)
                .map(|ch| ch.to_ascii_lowercase())
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    InvalidInput,
    FullyMatched,
    Categorized,
}

impl OutcomeKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::FullyMatched => "Fully matched",
            Self::Categorized => "Categorized",
        }
    }
}

/// Result of comparing two names. Degenerate inputs are ordinary variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// At least one name had no ASCII letters.
    InvalidInput,
    /// Every letter on both sides was cancelled.
    FullyMatched,
    Categorized(Category),
}

impl Outcome {
    pub const fn kind(self) -> OutcomeKind {
        match self {
            Self::InvalidInput => OutcomeKind::InvalidInput,
            Self::FullyMatched => OutcomeKind::FullyMatched,
            Self::Categorized(_) => OutcomeKind::Categorized,
        }
    }

    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Categorized(category) => Some(category),
            Self::InvalidInput | Self::FullyMatched => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => f.write_str(INVALID_INPUT_MESSAGE),
            Self::FullyMatched => f.write_str(FULLY_MATCHED_MESSAGE),
            Self::Categorized(category) => write!(f, "Your relationship: {category}"),
        }
    }
}
