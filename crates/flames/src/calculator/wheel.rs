use super::domain::Category;
use serde::Serialize;

/// A single removal from the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EliminationStep {
    /// Wheel length before the removal.
    pub wheel_len: usize,
    pub remove_index: usize,
    pub removed: Category,
    /// Cursor position after the removal, relative to the shrunken wheel.
    pub cursor: usize,
}

/// The shrinking `F L A M E S` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWheel {
    entries: Vec<Category>,
    cursor: usize,
}

impl Default for CategoryWheel {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryWheel {
    pub fn new() -> Self {
        Self {
            entries: Category::ordered().to_vec(),
            cursor: 0,
        }
    }

    pub fn entries(&self) -> &[Category] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts `tally` entries from the cursor and removes the one landed on.
    /// Returns `None` once a single entry remains or when `tally` is zero.
    pub fn step(&mut self, tally: usize) -> Option<EliminationStep> {
        if tally == 0 || self.entries.len() <= 1 {
            return None;
        }

        let wheel_len = self.entries.len();
        // (cursor + tally - 1) mod len, reduced first so large tallies cannot overflow.
        let remove_index = (self.cursor + (tally - 1) % wheel_len) % wheel_len;
        let removed = self.entries.remove(remove_index);
        self.cursor = remove_index % self.entries.len();

        Some(EliminationStep {
            wheel_len,
            remove_index,
            removed,
            cursor: self.cursor,
        })
    }

    /// Eliminates down to one entry and returns every removal made.
    pub fn run(&mut self, tally: usize) -> Vec<EliminationStep> {
        let mut steps = Vec::with_capacity(self.entries.len().saturating_sub(1));
        while let Some(step) = self.step(tally) {
            steps.push(step);
        }
        steps
    }

    /// The surviving category, once elimination has finished.
    pub fn survivor(&self) -> Option<Category> {
        match self.entries.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Runs a fresh wheel for `tally`. Zero has no survivor.
pub fn eliminate(tally: usize) -> Option<Category> {
    let mut wheel = CategoryWheel::new();
    wheel.run(tally);
    wheel.survivor()
}
