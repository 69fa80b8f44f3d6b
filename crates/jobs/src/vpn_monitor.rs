use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use xdns_application::use_cases::MonitorVpnUseCase;

const DEFAULT_PROBE_INTERVAL_SECS: u64 = 10;

/// Periodically runs a VPN probe cycle. The first probe happens at start.
pub struct VpnMonitorJob {
    monitor: Arc<MonitorVpnUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl VpnMonitorJob {
    pub fn new(monitor: Arc<MonitorVpnUseCase>) -> Self {
        Self {
            monitor,
            interval_secs: DEFAULT_PROBE_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interface = %self.monitor.interface(),
            interval_secs = self.interval_secs,
            "Starting VPN monitor job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("VpnMonitorJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let outcome = self.monitor.execute().await;
                        debug!(outcome = ?outcome, "VPN probe cycle completed");
                    }
                }
            }
        })
    }
}
