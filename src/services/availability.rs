use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, Days, Local, NaiveDate};
use tracing::{info, warn};

use crate::clubs::{ClubConfig, ClubRegistry};
use crate::models::{
    AvailabilityResult, ClubResults, DayAvailability, FilterRequest, FilteredAvailabilityResult,
    FilteredDayResult, SlotInfo,
};
use crate::provider::BookingProvider;
use crate::time::{day_name, time_to_minutes};

/// Days covered by an unfiltered sweep, today included.
pub const DAYS_TO_CHECK: u64 = 8;

/// Availability checks against the booking provider: single-date fetch,
/// fixed 8-day sweep, and the filtered multi-week aggregation.
#[derive(Clone)]
pub struct AvailabilityService {
    provider: Arc<dyn BookingProvider>,
    clubs: Arc<ClubRegistry>,
}

impl AvailabilityService {
    pub fn new(provider: Arc<dyn BookingProvider>, clubs: Arc<ClubRegistry>) -> Self {
        Self { provider, clubs }
    }

    pub fn clubs(&self) -> &ClubRegistry {
        &self.clubs
    }

    /// Check one club on one date.
    ///
    /// Walks the provider planning (playgrounds, first activity, slots,
    /// price tiers) and emits one formatted description per bookable price
    /// tier. Provider failures are downgraded to "not available" so a dead
    /// upstream never fails a whole sweep.
    pub async fn check_availability(&self, date: NaiveDate, club: &ClubConfig) -> AvailabilityResult {
        let planning = match self.provider.fetch_planning(club, date).await {
            Ok(planning) => planning,
            Err(err) => {
                warn!("[{}] planning fetch failed for {}: {}", club.name, date, err);
                return AvailabilityResult::none();
            }
        };

        let mut slots = Vec::new();
        for playground in &planning.playgrounds {
            let playground_name = playground.name.as_deref().unwrap_or("Unknown Padel Court");
            let Some(activity) = playground.activities.first() else {
                continue;
            };

            for slot in &activity.slots {
                let start_at = slot.start_at.as_deref().unwrap_or("N/A");
                for price in slot.prices.iter().filter(|price| price.bookable) {
                    let duration_minutes = price.duration / 60;
                    let price_euros = price.price_per_participant as f64 / 100.0;
                    slots.push(format!(
                        "{playground_name} - Heure: {start_at} ({duration_minutes} min), Prix: {price_euros:.2}€"
                    ));
                }
            }
        }

        let weekday = date.weekday().num_days_from_sunday();
        if slots.is_empty() {
            info!("No bookable slot on {} {}", day_name(weekday), date);
            AvailabilityResult::none()
        } else {
            info!(
                "{} bookable slots on {} {}:",
                slots.len(),
                day_name(weekday),
                date
            );
            for slot in &slots {
                info!("- {}", slot);
            }
            AvailabilityResult {
                available: true,
                slots,
            }
        }
    }

    /// Check one club over the next 8 days, today included. Fetches run
    /// sequentially, one date at a time.
    pub async fn check_multiple_days(&self, club: &ClubConfig) -> Vec<DayAvailability> {
        info!("=== Checking availability for {} ===", club.name);
        let today = Local::now().date_naive();

        let mut results = Vec::new();
        for offset in 0..DAYS_TO_CHECK {
            let date = today + Days::new(offset);
            info!("Checking {}", date);
            let result = self.check_availability(date, club).await;
            results.push(DayAvailability {
                date,
                available: result.available,
                slots: result.slots,
            });
        }

        results
    }

    /// Run the user's filtered search across every configured club.
    ///
    /// The day-offset window is `0..weeks*7` when prior weeks are included,
    /// otherwise only the final week `(weeks-1)*7..weeks*7`. Dates whose
    /// weekday is not selected are skipped without a fetch. Checked dates
    /// land either in `results` (at least one slot in the time range) or in
    /// `days_with_no_slots`.
    pub async fn check_filtered_availability(
        &self,
        request: &FilterRequest,
    ) -> FilteredAvailabilityResult {
        let today = Local::now().date_naive();
        let mut results_by_club = HashMap::new();

        for club in self.clubs.iter() {
            info!("Checking {}...", club.name);
            let mut results = Vec::new();
            let mut days_with_no_slots = Vec::new();

            let start_day = if request.include_prior_weeks {
                0
            } else {
                (request.weeks_ahead - 1) * 7
            };
            let end_day = request.weeks_ahead * 7;

            for offset in start_day..end_day {
                let date = today + Days::new(offset as u64);
                let day_of_week = date.weekday().num_days_from_sunday();

                if !request.days_of_week.contains(&day_of_week) {
                    continue;
                }

                let availability = self.check_availability(date, club).await;
                info!(
                    "[{}] {} {}: found {} slots, available: {}",
                    club.name,
                    day_name(day_of_week),
                    date,
                    availability.slots.len(),
                    availability.available
                );

                if availability.available && !availability.slots.is_empty() {
                    let filtered = filter_slots_by_time(
                        &availability.slots,
                        &request.time_start,
                        &request.time_end,
                    );
                    info!(
                        "[{}] {}: {} -> {} slots after time filtering ({}-{})",
                        club.name,
                        date,
                        availability.slots.len(),
                        filtered.len(),
                        request.time_start,
                        request.time_end
                    );

                    if filtered.is_empty() {
                        days_with_no_slots.push(day_result(date, day_of_week, Vec::new()));
                    } else {
                        results.push(day_result(date, day_of_week, filtered));
                    }
                } else {
                    days_with_no_slots.push(day_result(date, day_of_week, Vec::new()));
                }
            }

            let total_slots = results.iter().map(|day| day.slots.len()).sum();
            results_by_club.insert(
                club.id.to_string(),
                ClubResults {
                    results,
                    days_with_no_slots,
                    total_slots,
                },
            );
        }

        let total_slots = results_by_club
            .values()
            .map(|club: &ClubResults| club.total_slots)
            .sum();

        FilteredAvailabilityResult {
            success: true,
            results_by_club,
            total_slots,
            search_criteria: request.clone(),
        }
    }
}

fn day_result(date: NaiveDate, day_of_week: u32, slots: Vec<SlotInfo>) -> FilteredDayResult {
    FilteredDayResult {
        date,
        day_name: day_name(day_of_week).to_string(),
        day_of_week,
        slots,
    }
}

/// Keep the slots whose start time falls in the inclusive range
/// `[time_start, time_end]`. Input order is preserved; descriptions are
/// parsed into `SlotInfo` on the way through.
fn filter_slots_by_time(slots: &[String], time_start: &str, time_end: &str) -> Vec<SlotInfo> {
    let (Some(start_minutes), Some(end_minutes)) =
        (time_to_minutes(time_start), time_to_minutes(time_end))
    else {
        return Vec::new();
    };

    slots
        .iter()
        .map(|slot| SlotInfo::parse(slot))
        .filter(|slot| {
            time_to_minutes(&slot.start_time)
                .is_some_and(|minutes| minutes >= start_minutes && minutes <= end_minutes)
        })
        .collect()
}
