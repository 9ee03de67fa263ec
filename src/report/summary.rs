//! Run counters and completeness arithmetic.

use super::scan::{FileCheck, FileOutcome};

/// Aggregate counters for one verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub found: usize,
    pub missing: usize,
}

impl RunSummary {
    /// Tally the check results; `found + missing == total` by construction.
    pub fn tally(checks: &[FileCheck]) -> Self {
        let found = checks
            .iter()
            .filter(|check| matches!(check.outcome, FileOutcome::Found { .. }))
            .count();
        Self {
            total: checks.len(),
            found,
            missing: checks.len() - found,
        }
    }

    /// Found-to-total ratio as a percentage; 0.0 for an empty checklist.
    pub fn completeness(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.found as f64 / self.total as f64) * 100.0
    }
}
