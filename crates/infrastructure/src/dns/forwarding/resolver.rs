use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;
use xdns_domain::{DnsEndpoint, DomainError};

pub const RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Turns a configured address (`host`, `host:port`, IP literal) into one
/// socket address. Hostnames are looked up once; IPv4 results are preferred.
pub async fn resolve_endpoint(raw: &str) -> Result<SocketAddr, DomainError> {
    let endpoint: DnsEndpoint = raw.parse()?;

    let (hostname, port) = match endpoint.unresolved_parts() {
        Some(parts) => parts,
        None => {
            return endpoint
                .socket_addr()
                .ok_or_else(|| DomainError::UnresolvedAddress(raw.to_string()))
        }
    };

    let target = format!("{}:{}", hostname, port);

    let addrs: Vec<SocketAddr> =
        tokio::time::timeout(RESOLVE_TIMEOUT, tokio::net::lookup_host(&target))
            .await
            .map_err(|_| DomainError::ResolveTimeout(target.clone()))?
            .map_err(|e| DomainError::InvalidAddress {
                input: raw.to_string(),
                reason: e.to_string(),
            })?
            .collect();

    let chosen = addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| DomainError::UnresolvedAddress(target.clone()))?;

    debug!(target = %target, resolved = %chosen, "Resolved endpoint");
    Ok(chosen)
}
