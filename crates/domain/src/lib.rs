//! xdns domain layer
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod fingerprint;
pub mod routing;

pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use endpoint::{split_endpoint_list, DnsEndpoint, DEFAULT_DNS_PORT};
pub use errors::DomainError;
pub use fingerprint::QuestionFingerprint;
pub use routing::{RoutePath, RoutingState};
