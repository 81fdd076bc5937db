use serde::Deserialize;

/// Planning response returned by the booking provider: a hydra collection
/// of playgrounds, each carrying its activities and their time slots.
#[derive(Debug, Deserialize)]
pub struct PlanningResponse {
    #[serde(rename = "hydra:member", default)]
    pub playgrounds: Vec<Playground>,
}

#[derive(Debug, Deserialize)]
pub struct Playground {
    pub name: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub slots: Vec<PlanningSlot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningSlot {
    pub start_at: Option<String>,
    #[serde(default)]
    pub prices: Vec<PriceInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    #[serde(default)]
    pub bookable: bool,
    /// Slot length in seconds.
    #[serde(default)]
    pub duration: u64,
    /// Price per participant in the currency's minor unit (cents).
    #[serde(default)]
    pub price_per_participant: i64,
}
