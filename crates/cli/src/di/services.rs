use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use xdns_application::use_cases::MonitorVpnUseCase;
use xdns_domain::{Config, RoutingState};
use xdns_infrastructure::dns::{resolve_endpoint, ForwarderRegistry, ProxyState};
use xdns_infrastructure::system::{CommandNetworkRestarter, SystemInterfaceProbe};

/// Everything the proxy and its monitor share, built once at startup.
pub struct ProxyServices {
    pub listen: SocketAddr,
    pub forwarders: Arc<ForwarderRegistry>,
    pub state: Arc<ProxyState>,
    pub vpn_monitor: Arc<MonitorVpnUseCase>,
}

impl ProxyServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_endpoint = config.listen_endpoint()?;
        let listen = resolve_endpoint(&listen_endpoint.to_string())
            .await
            .context("Failed to resolve listen address")?;

        let forwarders = Arc::new(
            ForwarderRegistry::resolve(&config.upstream.direct, &config.upstream.vpn)
                .await
                .context("Failed to resolve forwarders")?,
        );

        let routing = Arc::new(RoutingState::default());
        let state = Arc::new(ProxyState::new(forwarders.clone(), routing.clone()));

        let restarter = CommandNetworkRestarter::from_command(&config.vpn.restart_command)?;
        let vpn_monitor = Arc::new(
            MonitorVpnUseCase::new(
                config.vpn.interface.clone(),
                Arc::new(SystemInterfaceProbe::new()),
                Arc::new(restarter),
                state.direct_cache.clone(),
                routing,
            )
            .with_restart_timeout(Duration::from_secs(config.vpn.restart_timeout_secs)),
        );

        info!(
            listen = %listen,
            vpn_interface = %config.vpn.interface,
            "Proxy services initialized"
        );

        Ok(Self {
            listen,
            forwarders,
            state,
            vpn_monitor,
        })
    }
}
