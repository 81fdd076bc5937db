use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::slot::SlotInfo;

/// User-supplied search criteria for the filtered availability endpoint.
///
/// `days_of_week` uses host-calendar numbering, 0 = Sunday. The request is
/// echoed back verbatim in the response as `searchCriteria`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub days_of_week: Vec<u32>,
    pub weeks_ahead: u32,
    pub time_start: String,
    pub time_end: String,
    pub include_prior_weeks: bool,
}

impl FilterRequest {
    /// Check the request invariants, reporting the first violated field.
    pub fn validate(&self) -> Result<(), String> {
        if self.days_of_week.is_empty() {
            return Err("daysOfWeek must be a non-empty array".to_string());
        }
        if self.weeks_ahead < 1 || self.weeks_ahead > 4 {
            return Err("weeksAhead must be between 1 and 4".to_string());
        }
        if self.time_start.is_empty() || self.time_end.is_empty() {
            return Err("timeStart and timeEnd are required".to_string());
        }
        Ok(())
    }
}

/// One checked date that matched the day filter, with the slots that
/// survived time filtering (possibly none).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredDayResult {
    pub date: NaiveDate,
    pub day_name: String,
    pub day_of_week: u32,
    pub slots: Vec<SlotInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubResults {
    pub results: Vec<FilteredDayResult>,
    pub days_with_no_slots: Vec<FilteredDayResult>,
    pub total_slots: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredAvailabilityResult {
    pub success: bool,
    pub results_by_club: HashMap<String, ClubResults>,
    pub total_slots: usize,
    pub search_criteria: FilterRequest,
}
