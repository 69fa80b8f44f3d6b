mod interface_probe;
mod network_restarter;
mod response_cache_port;

pub use interface_probe::InterfaceProbe;
pub use network_restarter::NetworkRestarter;
pub use response_cache_port::ResponseCachePort;
