use super::resolver::resolve_endpoint;
use std::net::SocketAddr;
use tracing::info;
use xdns_domain::{DomainError, RoutePath};

/// Upstream resolvers for both routing paths, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ForwarderRegistry {
    direct: Vec<SocketAddr>,
    vpn: Vec<SocketAddr>,
}

impl ForwarderRegistry {
    pub fn new(direct: Vec<SocketAddr>, vpn: Vec<SocketAddr>) -> Self {
        Self { direct, vpn }
    }

    pub async fn resolve(direct: &[String], vpn: &[String]) -> Result<Self, DomainError> {
        let registry = Self {
            direct: resolve_all(direct).await?,
            vpn: resolve_all(vpn).await?,
        };

        info!(
            direct = ?registry.direct,
            vpn = ?registry.vpn,
            "Forwarders resolved"
        );

        Ok(registry)
    }

    pub fn for_path(&self, path: RoutePath) -> &[SocketAddr] {
        match path {
            RoutePath::Direct => &self.direct,
            RoutePath::Vpn => &self.vpn,
        }
    }

    pub fn has_ipv6(&self) -> bool {
        self.direct.iter().chain(self.vpn.iter()).any(SocketAddr::is_ipv6)
    }
}

async fn resolve_all(servers: &[String]) -> Result<Vec<SocketAddr>, DomainError> {
    let mut resolved = Vec::with_capacity(servers.len());
    for server in servers {
        resolved.push(resolve_endpoint(server).await?);
    }
    Ok(resolved)
}
