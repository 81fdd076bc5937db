use std::sync::Arc;

use crate::clubs::ClubRegistry;
use crate::provider::BookingProvider;
use crate::services::CheckScheduler;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn BookingProvider>,
    pub clubs: Arc<ClubRegistry>,
    pub scheduler: Arc<CheckScheduler>,
}
