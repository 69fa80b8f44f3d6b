use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Proxy listen address (`host:port`, port defaults to 53). Required.
    #[serde(default)]
    pub listen: Option<String>,
}
