pub mod interface_probe;
pub mod network_restart;

pub use interface_probe::SystemInterfaceProbe;
pub use network_restart::CommandNetworkRestarter;
