use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use crate::services::AvailabilityService;

/// Recurring availability sweep over every configured club.
///
/// Each `start` call registers one more periodic job; `stop` cancels
/// everything registered so far. Runs are not serialized against each
/// other: every sweep is stateless, so overlapping runs only cost extra
/// upstream calls.
pub struct CheckScheduler {
    service: AvailabilityService,
    interval: Duration,
    jobs: Mutex<Vec<JoinHandle<()>>>,
}

impl CheckScheduler {
    pub fn new(service: AvailabilityService, interval_secs: u64) -> Self {
        Self {
            service,
            interval: Duration::from_secs(interval_secs),
            jobs: Mutex::new(Vec::new()),
        }
    }

    /// Register and start a periodic check job.
    pub async fn start(&self) {
        info!(
            "Starting automatic availability checks (interval: {:?})",
            self.interval
        );

        let service = self.service.clone();
        let interval = self.interval;
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                info!("Automatic availability check started");
                run_sweep(&service).await;
            }
        });

        self.jobs.lock().await.push(handle);
    }

    /// Cancel every registered job.
    pub async fn stop(&self) {
        info!("Stopping automatic availability checks");
        let mut jobs = self.jobs.lock().await;
        for job in jobs.drain(..) {
            job.abort();
        }
    }

    /// Run one sweep inline, outside the periodic schedule.
    pub async fn run_manual(&self) {
        info!("Running manual availability check");
        run_sweep(&self.service).await;
    }

    pub async fn job_count(&self) -> usize {
        self.jobs.lock().await.len()
    }
}

/// Check the 8-day window of every configured club in sequence. Results are
/// discarded beyond the per-slot logging done at the fetch layer.
async fn run_sweep(service: &AvailabilityService) {
    for club in service.clubs().iter() {
        info!("Checking {}...", club.name);
        service.check_multiple_days(club).await;
    }
}
