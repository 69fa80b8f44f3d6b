use crate::ports::{InterfaceProbe, NetworkRestarter, ResponseCachePort};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use xdns_domain::{RoutePath, RoutingState};

const DEFAULT_RESTART_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartStatus {
    NotNeeded,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VpnProbeOutcome {
    Unchanged(RoutePath),
    Switched {
        from: RoutePath,
        to: RoutePath,
        cleared_entries: usize,
        restart: RestartStatus,
    },
}

/// One probe cycle of the VPN monitor.
///
/// On a transition in either direction the direct-path cache is cleared; the
/// VPN-path cache is left alone. When the interface has gone away the network
/// stack is restarted before the new routing path is committed.
pub struct MonitorVpnUseCase {
    interface: String,
    probe: Arc<dyn InterfaceProbe>,
    restarter: Arc<dyn NetworkRestarter>,
    direct_cache: Arc<dyn ResponseCachePort>,
    routing: Arc<RoutingState>,
    restart_timeout: Duration,
}

impl MonitorVpnUseCase {
    pub fn new(
        interface: impl Into<String>,
        probe: Arc<dyn InterfaceProbe>,
        restarter: Arc<dyn NetworkRestarter>,
        direct_cache: Arc<dyn ResponseCachePort>,
        routing: Arc<RoutingState>,
    ) -> Self {
        Self {
            interface: interface.into(),
            probe,
            restarter,
            direct_cache,
            routing,
            restart_timeout: Duration::from_secs(DEFAULT_RESTART_TIMEOUT_SECS),
        }
    }

    pub fn with_restart_timeout(mut self, timeout: Duration) -> Self {
        self.restart_timeout = timeout;
        self
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub async fn execute(&self) -> VpnProbeOutcome {
        let present = self.probe.is_present(&self.interface);
        let observed = RoutePath::from_vpn_present(present);
        let current = self.routing.current();

        if observed == current {
            debug!(interface = %self.interface, present, path = %current, "VPN probe: no change");
            return VpnProbeOutcome::Unchanged(current);
        }

        let cleared_entries = self.direct_cache.cache_size();
        self.direct_cache.clear_all();

        let restart = if present {
            RestartStatus::NotNeeded
        } else {
            warn!(interface = %self.interface, "VPN interface disappeared, restarting network");
            match self.restarter.restart(self.restart_timeout).await {
                Ok(()) => RestartStatus::Succeeded,
                Err(e) => {
                    warn!(error = %e, "Network restart failed");
                    RestartStatus::Failed
                }
            }
        };

        self.routing.switch_to(observed);

        info!(
            interface = %self.interface,
            from = %current,
            to = %observed,
            cleared_entries,
            "Routing path switched"
        );

        VpnProbeOutcome::Switched {
            from: current,
            to: observed,
            cleared_entries,
            restart,
        }
    }
}
