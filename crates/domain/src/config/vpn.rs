use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VpnConfig {
    #[serde(default = "default_interface")]
    pub interface: String,

    #[serde(default = "default_probe_interval_secs")]
    pub probe_interval_secs: u64,

    /// Program and arguments run when the VPN interface disappears.
    #[serde(default = "default_restart_command")]
    pub restart_command: Vec<String>,

    #[serde(default = "default_restart_timeout_secs")]
    pub restart_timeout_secs: u64,
}

impl Default for VpnConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            probe_interval_secs: default_probe_interval_secs(),
            restart_command: default_restart_command(),
            restart_timeout_secs: default_restart_timeout_secs(),
        }
    }
}

fn default_interface() -> String {
    "l2tp-vpn".to_string()
}

fn default_probe_interval_secs() -> u64 {
    10
}

fn default_restart_command() -> Vec<String> {
    vec!["/etc/init.d/network".to_string(), "restart".to_string()]
}

fn default_restart_timeout_secs() -> u64 {
    5
}
