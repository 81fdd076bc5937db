use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a single planning check: the formatted descriptions of every
/// bookable slot found. An upstream failure is reported as "not available"
/// rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub available: bool,
    pub slots: Vec<String>,
}

impl AvailabilityResult {
    pub fn none() -> Self {
        Self {
            available: false,
            slots: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub available: bool,
    pub slots: Vec<String>,
}
