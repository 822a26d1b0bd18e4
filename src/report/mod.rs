//! Reporting utilities: tier statistics and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{Evaluation, Tier};

/// How many evaluations each tier produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub primary: usize,
    pub secondary: usize,
    pub closed_form: usize,
}

impl TierCounts {
    pub fn total(&self) -> usize {
        self.primary + self.secondary + self.closed_form
    }

    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::Primary => self.primary,
            Tier::Secondary => self.secondary,
            Tier::ClosedForm => self.closed_form,
        }
    }

    fn bump(&mut self, tier: Tier) {
        match tier {
            Tier::Primary => self.primary += 1,
            Tier::Secondary => self.secondary += 1,
            Tier::ClosedForm => self.closed_form += 1,
        }
    }
}

/// Count evaluations per tier.
pub fn count_tiers(evals: &[Evaluation]) -> TierCounts {
    let mut counts = TierCounts::default();
    for e in evals {
        counts.bump(e.tier);
    }
    counts
}
