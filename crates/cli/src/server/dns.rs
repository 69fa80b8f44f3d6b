use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::info;
use xdns_infrastructure::dns::{ForwarderRegistry, ProxySockets};

const SOCKET_BUFFER_SIZE: usize = 512 * 1024;

/// Binds the client-facing socket on `listen` and an ephemeral socket for
/// upstream traffic. The upstream socket is dual-stack when any forwarder is
/// IPv6.
pub fn bind_proxy_sockets(
    listen: SocketAddr,
    forwarders: &ForwarderRegistry,
) -> anyhow::Result<ProxySockets> {
    let client = create_udp_socket(listen)?;

    let upstream_bind = if forwarders.has_ipv6() {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
    };
    let upstream = create_udp_socket(upstream_bind)?;

    info!(
        listen = %client.local_addr()?,
        upstream = %upstream.local_addr()?,
        "UDP sockets bound"
    );

    Ok(ProxySockets::new(client, upstream))
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
