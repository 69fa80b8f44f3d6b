use crate::errors::DomainError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// A UDP DNS endpoint as written in configuration: either a literal socket
/// address or a hostname still waiting for resolution.
///
/// A missing port means [`DEFAULT_DNS_PORT`]; an empty host (`":5353"`) means
/// the unspecified IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DnsEndpoint {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl DnsEndpoint {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            DnsEndpoint::Resolved(addr) => Some(*addr),
            DnsEndpoint::Unresolved { .. } => None,
        }
    }

    /// Returns (hostname, port) if this endpoint is unresolved.
    pub fn unresolved_parts(&self) -> Option<(&str, u16)> {
        match self {
            DnsEndpoint::Unresolved { hostname, port } => Some((hostname, *port)),
            DnsEndpoint::Resolved(_) => None,
        }
    }
}

impl fmt::Display for DnsEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsEndpoint::Resolved(addr) => write!(f, "{}", addr),
            DnsEndpoint::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}

fn parse_host_port(s: &str) -> Option<(&str, &str)> {
    if s.starts_with('[') {
        let end = s.find(']')?;
        let host = &s[1..end];
        let port_str = s[end + 1..].strip_prefix(':')?;
        Some((host, port_str))
    } else {
        s.rsplit_once(':')
    }
}

fn invalid(input: &str, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidAddress {
        input: input.to_string(),
        reason: reason.into(),
    }
}

impl FromStr for DnsEndpoint {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(invalid(raw, "empty address"));
        }

        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(DnsEndpoint::Resolved(addr));
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(DnsEndpoint::Resolved(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            let ip = inner
                .parse::<Ipv6Addr>()
                .map_err(|e| invalid(raw, e.to_string()))?;
            return Ok(DnsEndpoint::Resolved(SocketAddr::new(
                IpAddr::V6(ip),
                DEFAULT_DNS_PORT,
            )));
        }

        if let Some((host, port_str)) = parse_host_port(s) {
            let port = port_str
                .parse::<u16>()
                .map_err(|e| invalid(raw, format!("invalid port '{}': {}", port_str, e)))?;
            if host.is_empty() {
                return Ok(DnsEndpoint::Resolved(SocketAddr::new(
                    IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                    port,
                )));
            }
            if let Ok(ip) = host.parse::<IpAddr>() {
                return Ok(DnsEndpoint::Resolved(SocketAddr::new(ip, port)));
            }
            if host.contains(':') {
                return Err(invalid(raw, "IPv6 addresses with a port must be bracketed"));
            }
            return Ok(DnsEndpoint::Unresolved {
                hostname: host.into(),
                port,
            });
        }

        Ok(DnsEndpoint::Unresolved {
            hostname: s.into(),
            port: DEFAULT_DNS_PORT,
        })
    }
}

/// Splits a comma-separated address list, skipping blank items.
pub fn split_endpoint_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
