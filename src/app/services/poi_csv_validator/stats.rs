//! Validation statistics and counters

use serde::{Deserialize, Serialize};

/// Counters accumulated while validating a single file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {
    /// Every line read, header included
    pub lines_scanned: usize,

    /// Data lines checked (everything after the header)
    pub records_checked: usize,

    /// Data lines that produced no violation
    pub records_valid: usize,

    /// Data lines that produced at least one violation
    pub records_invalid: usize,

    /// Total violations recorded (a line may contribute several)
    pub errors_found: usize,
}

impl ValidationStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of checked records that were valid
    pub fn success_rate(&self) -> f64 {
        if self.records_checked == 0 {
            100.0
        } else {
            (self.records_valid as f64 / self.records_checked as f64) * 100.0
        }
    }

    /// True when no record produced a violation
    pub fn is_clean(&self) -> bool {
        self.records_invalid == 0
    }
}
