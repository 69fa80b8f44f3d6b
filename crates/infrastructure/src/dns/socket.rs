use arc_swap::ArcSwapOption;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerRole {
    Client,
    Upstream,
}

impl ListenerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListenerRole::Client => "client",
            ListenerRole::Upstream => "upstream",
        }
    }
}

/// A listener's UDP socket, shared by its receive loop and every packet task
/// that sends through it.
///
/// `close` detaches the socket for all holders at once; the file descriptor
/// is released when the last in-flight send finishes.
pub struct ListenerSocket {
    role: ListenerRole,
    socket: ArcSwapOption<UdpSocket>,
}

impl ListenerSocket {
    pub fn new(role: ListenerRole, socket: UdpSocket) -> Self {
        Self {
            role,
            socket: ArcSwapOption::from_pointee(socket),
        }
    }

    pub fn role(&self) -> ListenerRole {
        self.role
    }

    /// The live socket, or `None` once closed.
    pub fn get(&self) -> Option<Arc<UdpSocket>> {
        self.socket.load_full()
    }

    pub fn is_closed(&self) -> bool {
        self.socket.load().is_none()
    }

    /// Returns false if the socket was already closed.
    pub fn close(&self) -> bool {
        let closed = self.socket.swap(None).is_some();
        if closed {
            info!(listener = self.role.as_str(), "Listener socket closed");
        }
        closed
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.get().ok_or_else(closed_error)?.local_addr()
    }

    pub async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        let socket = self.get().ok_or_else(closed_error)?;
        socket.send_to(buf, target).await
    }
}

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "listener socket closed")
}
