use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use xdns_domain::CliOverrides;
use xdns_infrastructure::dns::DnsProxyServer;
use xdns_jobs::VpnMonitorJob;

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "xdns")]
#[command(version)]
#[command(about = "Caching DNS forwarder that switches upstreams when a VPN interface comes and goes")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (host:port, port defaults to 53)
    #[arg(short = 'l', long, value_name = "ADDR")]
    listen: Option<String>,

    /// Comma-separated forwarders used while the VPN is down
    #[arg(short = 'f', long = "forward", value_name = "ADDRS")]
    forward: Option<String>,

    /// Comma-separated forwarders used while the VPN is up
    #[arg(long = "f2", visible_alias = "forward-vpn", value_name = "ADDRS")]
    forward_vpn: Option<String>,

    /// Interface whose presence selects the VPN forwarders
    #[arg(long = "vpn", value_name = "IFACE")]
    vpn: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(bootstrap::expand_single_dash_flags(std::env::args_os()));

    let cli_overrides = CliOverrides {
        listen: cli.listen,
        direct_forwarders: cli.forward,
        vpn_forwarders: cli.forward_vpn,
        vpn_interface: cli.vpn,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config)?;

    info!("Starting xdns v{}", env!("CARGO_PKG_VERSION"));

    let services = di::ProxyServices::new(&config).await?;
    let sockets = server::bind_proxy_sockets(services.listen, &services.forwarders)?;

    let shutdown = CancellationToken::new();

    let monitor_job = Arc::new(
        VpnMonitorJob::new(services.vpn_monitor.clone())
            .with_interval(config.vpn.probe_interval_secs)
            .with_cancellation(shutdown.clone()),
    );
    let monitor_handle = monitor_job.start();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        signal_shutdown.cancel();
    });

    DnsProxyServer::new(sockets, services.state.clone())
        .run(shutdown.clone())
        .await;

    shutdown.cancel();
    if let Err(e) = monitor_handle.await {
        error!(error = %e, "VPN monitor task failed");
    }

    info!("Shutdown complete");
    Ok(())
}
