mod monitor_vpn;

pub use monitor_vpn::{MonitorVpnUseCase, RestartStatus, VpnProbeOutcome};
