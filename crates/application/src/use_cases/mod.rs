pub mod vpn;

pub use vpn::{MonitorVpnUseCase, RestartStatus, VpnProbeOutcome};
