use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Forwarders used while the VPN interface is absent.
    #[serde(default = "default_direct")]
    pub direct: Vec<String>,

    /// Forwarders used while the VPN interface is present.
    #[serde(default = "default_vpn")]
    pub vpn: Vec<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            direct: default_direct(),
            vpn: default_vpn(),
        }
    }
}

fn default_direct() -> Vec<String> {
    vec!["192.168.1.1".to_string()]
}

fn default_vpn() -> Vec<String> {
    vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()]
}
