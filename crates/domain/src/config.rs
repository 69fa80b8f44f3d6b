mod errors;
mod logging;
mod root;
mod server;
mod upstream;
mod vpn;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
pub use vpn::VpnConfig;
