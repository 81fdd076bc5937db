/// Day names indexed by weekday number, 0 = Sunday.
pub const DAYS_OF_WEEK_NAMES: [&str; 7] = [
    "Dimanche",
    "Lundi",
    "Mardi",
    "Mercredi",
    "Jeudi",
    "Vendredi",
    "Samedi",
];

/// Day name for a weekday number (0 = Sunday).
pub fn day_name(day: u32) -> &'static str {
    DAYS_OF_WEEK_NAMES
        .get(day as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// Convert an "HH:MM" time string to minutes since midnight.
pub fn time_to_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Convert minutes since midnight to an "HH:MM" string.
///
/// Values past midnight are not wrapped back into 0..1440, so 1500
/// renders as "25:00".
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
