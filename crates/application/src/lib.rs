//! xdns application layer: ports implemented by infrastructure and the use
//! cases that drive them.
pub mod ports;
pub mod use_cases;
