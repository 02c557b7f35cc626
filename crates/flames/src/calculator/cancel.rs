use super::domain::NormalizedName;

/// Outcome of pairing equal letters between two names.
///
/// Pairing is greedy and one-to-one: each letter of the first name is
/// matched with the first still-unpaired equal letter of the second name,
/// scanning both left to right. Repeated letters are not removed wholesale,
/// so `"aab"` against `"a"` cancels a single `a` on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    first: Vec<u8>,
    second: Vec<u8>,
    first_cancelled: Vec<bool>,
    second_cancelled: Vec<bool>,
}

impl Cancellation {
    pub fn new(first: &NormalizedName, second: &NormalizedName) -> Self {
        let first_letters = first.as_bytes().to_vec();
        let second_letters = second.as_bytes().to_vec();
        let mut first_cancelled = vec![false; first_letters.len()];
        let mut second_cancelled = vec![false; second_letters.len()];

        for (i, letter) in first_letters.iter().enumerate() {
            let partner = second_letters
                .iter()
                .enumerate()
                .position(|(j, candidate)| !second_cancelled[j] && candidate == letter);

            if let Some(j) = partner {
                first_cancelled[i] = true;
                second_cancelled[j] = true;
            }
        }

        Self {
            first: first_letters,
            second: second_letters,
            first_cancelled,
            second_cancelled,
        }
    }

    /// Cancelled flags for each position of the first name.
    pub fn first_mask(&self) -> &[bool] {
        &self.first_cancelled
    }

    /// Cancelled flags for each position of the second name.
    pub fn second_mask(&self) -> &[bool] {
        &self.second_cancelled
    }

    pub fn first_remaining(&self) -> String {
        remaining(&self.first, &self.first_cancelled)
    }

    pub fn second_remaining(&self) -> String {
        remaining(&self.second, &self.second_cancelled)
    }

    pub fn pairs(&self) -> usize {
        self.first_cancelled.iter().filter(|cancelled| **cancelled).count()
    }

    /// Letters left uncancelled across both names.
    pub fn tally(&self) -> usize {
        uncancelled(&self.first_cancelled) + uncancelled(&self.second_cancelled)
    }
}

fn uncancelled(mask: &[bool]) -> usize {
    mask.iter().filter(|cancelled| !**cancelled).count()
}

fn remaining(letters: &[u8], mask: &[bool]) -> String {
    letters
        .iter()
        .zip(mask)
        .filter(|(_, cancelled)| !**cancelled)
        .map(|(letter, _)| char::from(*letter))
        .collect()
}
