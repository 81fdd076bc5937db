use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::time::{minutes_to_time, time_to_minutes};

lazy_static! {
    static ref TIME_RE: Regex = Regex::new(r"Heure: (\d{2}:\d{2})").unwrap();
    static ref DURATION_RE: Regex = Regex::new(r"\((\d+) min\)").unwrap();
    static ref PRICE_RE: Regex = Regex::new(r"Prix: ([\d.]+)€").unwrap();
}

/// Structured view of one bookable slot, extracted from its formatted
/// description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotInfo {
    pub start_time: String,
    pub end_time: String,
    pub playground: String,
    pub price: f64,
    pub duration: u32,
    pub full_info: String,
}

impl SlotInfo {
    /// Parse a slot description of the form
    /// `"<court> - Heure: <HH:MM> (<duration> min), Prix: <price>€"`.
    ///
    /// Fields that cannot be extracted fall back to defaults instead of
    /// failing: "Unknown Court", "00:00", 60 minutes, price 0. The end time
    /// is start + duration in minutes-of-day arithmetic, with no rollover
    /// past midnight.
    pub fn parse(description: &str) -> Self {
        let playground = description
            .split_once(" - ")
            .map(|(name, _)| name)
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown Court")
            .to_string();

        let start_time = TIME_RE
            .captures(description)
            .map(|caps| caps[1].to_string())
            .unwrap_or_else(|| "00:00".to_string());

        let duration = DURATION_RE
            .captures(description)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(60);

        let price = PRICE_RE
            .captures(description)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(0.0);

        let start_minutes = time_to_minutes(&start_time).unwrap_or(0);
        let end_time = minutes_to_time(start_minutes + duration);

        Self {
            start_time,
            end_time,
            playground,
            price,
            duration,
            full_info: description.to_string(),
        }
    }
}
