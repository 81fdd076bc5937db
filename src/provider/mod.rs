pub mod dto;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use thiserror::Error;

use crate::clubs::ClubConfig;

const DEFAULT_FROM_TIME: &str = "00:00:00";
const DEFAULT_TO_TIME: &str = "23:59:59";
const DEFAULT_BOOKING_TYPE: &str = "unique";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode planning response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to the booking provider's planning API.
#[async_trait]
pub trait BookingProvider: Send + Sync {
    /// Fetch the playground planning for one club on one date.
    async fn fetch_planning(
        &self,
        club: &ClubConfig,
        date: NaiveDate,
    ) -> Result<dto::PlanningResponse, ProviderError>;
}

pub struct HttpBookingProvider {
    client: Client,
}

impl HttpBookingProvider {
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl BookingProvider for HttpBookingProvider {
    async fn fetch_planning(
        &self,
        club: &ClubConfig,
        date: NaiveDate,
    ) -> Result<dto::PlanningResponse, ProviderError> {
        let url = format!(
            "{base}{date}?club.id={club_id}&from={from}&to={to}&activities.id={activity_id}&bookingType={booking_type}",
            base = club.base_url,
            club_id = club.club_id,
            from = DEFAULT_FROM_TIME,
            to = DEFAULT_TO_TIME,
            activity_id = club.activity_id,
            booking_type = DEFAULT_BOOKING_TYPE,
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Provider stub that reports an empty planning for every query.
pub struct NoopBookingProvider;

#[async_trait]
impl BookingProvider for NoopBookingProvider {
    async fn fetch_planning(
        &self,
        _club: &ClubConfig,
        _date: NaiveDate,
    ) -> Result<dto::PlanningResponse, ProviderError> {
        Ok(dto::PlanningResponse {
            playgrounds: Vec::new(),
        })
    }
}
