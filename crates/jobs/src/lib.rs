pub mod vpn_monitor;

pub use vpn_monitor::VpnMonitorJob;
