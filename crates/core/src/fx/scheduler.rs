use std::sync::Arc;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::constants::REFRESH_INTERVAL;

use super::RateCache;

/// Spawns the hourly rate refresh the composition root keeps running for
/// the lifetime of the application.
///
/// The first tick fires immediately, so this doubles as the startup fetch.
/// Timer ticks funnel through the cache's in-flight gate together with any
/// user-initiated refresh, so the timer never causes a second outstanding
/// fetch. Abort the returned handle to stop the task.
pub fn spawn_periodic_refresh(cache: Arc<RateCache>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(REFRESH_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let table = cache.refresh_rates().await;
            debug!("Scheduled rate refresh done, {} currencies cached", table.len());
        }
    })
}
