use crate::calculator::{self, Category, Outcome, OutcomeKind};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read name pairs: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid name pair CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct PairRow {
    #[serde(alias = "Name1", alias = "Name 1", alias = "name_1")]
    name1: String,
    #[serde(alias = "Name2", alias = "Name 2", alias = "name_2")]
    name2: String,
}

/// One scored CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub name1: String,
    pub name2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tally: Option<usize>,
    pub outcome: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub message: String,
}

impl BatchEntry {
    fn score(row: usize, name1: String, name2: String) -> Self {
        let reading = calculator::evaluate(&name1, &name2);
        Self {
            row,
            tally: reading.tally(),
            outcome: reading.outcome.kind(),
            category: reading.outcome.category(),
            message: reading.outcome.to_string(),
            name1,
            name2,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match (self.outcome, self.category) {
            (OutcomeKind::Categorized, Some(category)) => Outcome::Categorized(category),
            (OutcomeKind::FullyMatched, _) => Outcome::FullyMatched,
            _ => Outcome::InvalidInput,
        }
    }
}

/// Scores every `name1,name2` row of a CSV export.
pub struct BatchScorer;

impl BatchScorer {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<BatchEntry>, BatchError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// A malformed row aborts the whole batch.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BatchEntry>, BatchError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (index, row) in csv_reader.deserialize::<PairRow>().enumerate() {
            let row = row?;
            entries.push(BatchEntry::score(index + 1, row.name1, row.name2));
        }

        Ok(entries)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub invalid_input: usize,
    pub fully_matched: usize,
    pub categories: Vec<CategoryCount>,
}

impl BatchSummary {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut invalid_input = 0;
        let mut fully_matched = 0;
        let mut categories: Vec<CategoryCount> = Category::ordered()
            .into_iter()
            .map(|category| CategoryCount {
                category,
                label: category.label(),
                count: 0,
            })
            .collect();

        for entry in entries {
            match entry.outcome() {
                Outcome::InvalidInput => invalid_input += 1,
                Outcome::FullyMatched => fully_matched += 1,
                Outcome::Categorized(category) => {
                    if let Some(slot) = categories.iter_mut().find(|c| c.category == category) {
                        slot.count += 1;
                    }
                }
            }
        }

        Self {
            total: entries.len(),
            invalid_input,
            fully_matched,
            categories,
        }
    }
}
