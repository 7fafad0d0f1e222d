//! Provisioning status poller
//!
//! Timer-driven control loop that follows a tenant through provisioning:
//! every tick it re-reads the backend record, publishes a progress update
//! and stops once the tenant reaches a terminal state. The loop is
//! cooperative (delayed re-scheduling, not blocking) and bounded: it gives
//! up after a configurable attempt budget and can be cancelled through a
//! watch channel at any tick boundary.
//!
//! Displayed progress is clamped to non-decreasing; the backend integer is
//! otherwise trusted as-is. A failed read does not abort the loop - the
//! next tick fires on its original schedule.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use kurs24_backend::ProvisioningApi;

use crate::progress::status_message;
use crate::types::{TenantProvisioningRecord, TenantStatus};

/// Default poll interval (mirrors the dashboard's 2s cadence).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);
/// Default attempt budget: 150 ticks at 2s = 5 minutes, the backend's own
/// provisioning ceiling.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 150;

/// Poller tuning knobs.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Delay between status reads.
    pub interval: Duration,
    /// Maximum number of status reads before giving up.
    pub max_attempts: u32,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// One progress observation published to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Backend lifecycle status at this tick.
    pub status: TenantStatus,
    /// Displayed progress, clamped to non-decreasing.
    pub progress: u8,
    /// Phase message derived from status and progress.
    pub message: &'static str,
}

/// Why the poll loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The tenant reached `active` or `failed`; no further requests were
    /// issued after this observation.
    Terminal(TenantStatus),
    /// The attempt budget ran out before a terminal state.
    TimedOut,
    /// Cancellation was signalled, or the update consumer went away.
    Cancelled,
}

/// Polls the backend for a tenant's provisioning status until terminal.
pub struct StatusPoller {
    backend: Arc<dyn ProvisioningApi>,
    config: PollerConfig,
}

impl StatusPoller {
    /// Create a poller instance
    #[must_use]
    pub fn new(backend: Arc<dyn ProvisioningApi>, config: PollerConfig) -> Self {
        Self { backend, config }
    }

    /// Run the loop for one user's tenant.
    ///
    /// Publishes an initial `provisioning/0` update immediately (the create
    /// call has just returned), then one update per successful read.
    /// Returns once a terminal state is observed, the budget is exhausted,
    /// or `cancel` flips to `true`.
    pub async fn run(
        &self,
        user_id: i64,
        updates: &mpsc::Sender<ProgressUpdate>,
        cancel: &mut watch::Receiver<bool>,
    ) -> PollOutcome {
        let mut shown_progress: u8 = 0;

        let initial = ProgressUpdate {
            status: TenantStatus::Provisioning,
            progress: 0,
            message: status_message(TenantStatus::Provisioning, 0),
        };
        if updates.send(initial).await.is_err() {
            return PollOutcome::Cancelled;
        }

        // When the cancel sender is dropped the loop keeps running on the
        // timer alone; changed() would otherwise return Err in a busy loop.
        let mut cancel_open = true;

        for attempt in 0..self.config.max_attempts {
            if *cancel.borrow() {
                log::debug!("Status poll cancelled before attempt {attempt}");
                return PollOutcome::Cancelled;
            }

            if cancel_open {
                let tick = tokio::time::sleep(self.config.interval);
                tokio::pin!(tick);
                loop {
                    tokio::select! {
                        () = &mut tick => break,
                        changed = cancel.changed() => match changed {
                            Ok(()) if *cancel.borrow() => {
                                log::debug!("Status poll cancelled at attempt {attempt}");
                                return PollOutcome::Cancelled;
                            }
                            Ok(()) => {}
                            Err(_) => {
                                cancel_open = false;
                                tick.await;
                                break;
                            }
                        },
                    }
                }
            } else {
                tokio::time::sleep(self.config.interval).await;
            }

            let record = match self.backend.tenant_status(user_id).await {
                Ok(Some(wire)) => TenantProvisioningRecord::from_wire(wire),
                Ok(None) => {
                    // Record not visible yet; keep the schedule
                    log::debug!("No tenant record yet for user {user_id} (attempt {attempt})");
                    continue;
                }
                Err(e) => {
                    // A late or failed read must not kill the loop
                    log::warn!("Status poll attempt {attempt} failed: {e}");
                    continue;
                }
            };

            shown_progress = shown_progress.max(record.progress);
            let update = ProgressUpdate {
                status: record.status,
                progress: shown_progress,
                message: status_message(record.status, shown_progress),
            };
            if updates.send(update).await.is_err() {
                return PollOutcome::Cancelled;
            }

            if record.status.is_terminal() {
                log::info!(
                    "Tenant '{}' reached terminal state {}",
                    record.subdomain,
                    record.status.as_str()
                );
                return PollOutcome::Terminal(record.status);
            }
        }

        log::warn!(
            "Status poll for user {user_id} exhausted {} attempts",
            self.config.max_attempts
        );
        PollOutcome::TimedOut
    }
}
