use serde::{Deserialize, Serialize};

/// Monotonic score counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    total: u64,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points, returning the new total
    pub fn add(&mut self, amount: u64) -> u64 {
        self.total = self.total.saturating_add(amount);
        self.total
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// True when the total is a positive multiple of `threshold`
    pub fn is_multiple_of(&self, threshold: u64) -> bool {
        threshold != 0 && self.total > 0 && self.total.is_multiple_of(threshold)
    }

    /// Label shown by the HUD
    pub fn text(&self) -> String {
        format!("Score: {}", self.total)
    }
}
