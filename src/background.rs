use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use crate::state::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

pub async fn start_session_sweeper(state: Arc<AppState>) {
    info!("Starting wizard session sweeper...");

    loop {
        sweep_idle_sessions(&state).await;
        sleep(SWEEP_INTERVAL).await;
    }
}

/// Drops sessions untouched for longer than the configured TTL.
pub async fn sweep_idle_sessions(state: &AppState) -> usize {
    let ttl = state.config.session_ttl_minutes;
    let idle_since = TimeDelta::try_minutes(i64::from(ttl))
        .and_then(|ttl| Utc::now().checked_sub_signed(ttl));

    match idle_since {
        Some(idle_since) => purge_sessions_idle_since(state, idle_since).await,
        None => {
            warn!("Session TTL of {} minutes is out of range, skipping sweep", ttl);
            0
        }
    }
}

pub async fn purge_sessions_idle_since(state: &AppState, idle_since: DateTime<Utc>) -> usize {
    match state.wizard_repo.purge_idle(idle_since).await {
        Ok(0) => 0,
        Ok(purged) => {
            debug!("Purged {} idle wizard sessions", purged);
            purged
        }
        Err(e) => {
            error!("Failed to purge idle wizard sessions: {:?}", e);
            0
        }
    }
}
