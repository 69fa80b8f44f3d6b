use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use super::vpn::VpnConfig;
use crate::endpoint::{split_endpoint_list, DnsEndpoint};

const LOCAL_CONFIG_PATH: &str = "xdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/xdns/config.toml";

/// Main configuration structure for xdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Proxy listen address
    #[serde(default)]
    pub server: ServerConfig,

    /// Direct-path and VPN-path forwarders
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// VPN interface monitoring
    #[serde(default)]
    pub vpn: VpnConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. xdns.toml in current directory
    /// 3. /etc/xdns/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen {
            self.server.listen = Some(listen);
        }
        if let Some(list) = overrides.direct_forwarders {
            self.upstream.direct = split_endpoint_list(&list);
        }
        if let Some(list) = overrides.vpn_forwarders {
            self.upstream.vpn = split_endpoint_list(&list);
        }
        if let Some(interface) = overrides.vpn_interface {
            self.vpn.interface = interface;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Parsed listen endpoint; fails when the address is missing or malformed.
    pub fn listen_endpoint(&self) -> Result<DnsEndpoint, ConfigError> {
        let listen = self
            .server
            .listen
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::Validation("Listen address is required (-l)".to_string())
            })?;
        listen
            .parse::<DnsEndpoint>()
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_endpoint()?;

        validate_forwarders("direct", &self.upstream.direct)?;
        validate_forwarders("vpn", &self.upstream.vpn)?;

        if self.vpn.interface.trim().is_empty() {
            return Err(ConfigError::Validation(
                "VPN interface name cannot be empty".to_string(),
            ));
        }
        if self.vpn.probe_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "VPN probe interval cannot be 0".to_string(),
            ));
        }
        if self.vpn.restart_command.is_empty() {
            return Err(ConfigError::Validation(
                "Network restart command cannot be empty".to_string(),
            ));
        }
        if self.vpn.restart_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Network restart timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_forwarders(path: &str, servers: &[String]) -> Result<(), ConfigError> {
    if servers.is_empty() {
        return Err(ConfigError::Validation(format!(
            "No {} forwarders configured",
            path
        )));
    }
    for server in servers {
        server
            .parse::<DnsEndpoint>()
            .map_err(|e| ConfigError::Validation(format!("{} forwarder: {}", path, e)))?;
    }
    Ok(())
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen: Option<String>,
    /// Comma-separated list
    pub direct_forwarders: Option<String>,
    /// Comma-separated list
    pub vpn_forwarders: Option<String>,
    pub vpn_interface: Option<String>,
    pub log_level: Option<String>,
}
