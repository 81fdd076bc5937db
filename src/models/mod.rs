pub mod availability;
pub mod filter;
pub mod slot;

pub use availability::{AvailabilityResult, DayAvailability};
pub use filter::{ClubResults, FilterRequest, FilteredAvailabilityResult, FilteredDayResult};
pub use slot::SlotInfo;
