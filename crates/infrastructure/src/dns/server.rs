use super::dispatcher::{PacketDispatcher, ProxySockets, ProxyState};
use super::socket::ListenerSocket;
use std::io;
use std::net::SocketAddr;
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

pub const MAX_DATAGRAM_SIZE: usize = 512;

/// The listener pair: one receive loop per socket, one task per datagram.
pub struct DnsProxyServer {
    dispatcher: Arc<PacketDispatcher>,
}

impl DnsProxyServer {
    pub fn new(sockets: ProxySockets, state: Arc<ProxyState>) -> Self {
        Self {
            dispatcher: Arc::new(PacketDispatcher::new(sockets, state)),
        }
    }

    pub fn client_addr(&self) -> io::Result<SocketAddr> {
        self.dispatcher.sockets().client.local_addr()
    }

    /// Runs both receive loops until `shutdown` fires or both loops end.
    /// A loop that hits a non-transient error closes its socket and ends
    /// alone.
    pub async fn run(self, shutdown: CancellationToken) {
        let sockets = self.dispatcher.sockets().clone();

        info!(
            listen = ?sockets.client.local_addr().ok(),
            upstream = ?sockets.upstream.local_addr().ok(),
            "DNS proxy listening"
        );

        let mut join_set = JoinSet::new();
        join_set.spawn(serve_socket(
            sockets.client,
            self.dispatcher.clone(),
            shutdown.clone(),
        ));
        join_set.spawn(serve_socket(
            sockets.upstream,
            self.dispatcher.clone(),
            shutdown,
        ));

        while let Some(result) = join_set.join_next().await {
            if let Err(e) = result {
                error!(error = %e, "Listener task panicked");
            }
        }

        info!("DNS proxy stopped");
    }
}

async fn serve_socket(
    listener: Arc<ListenerSocket>,
    dispatcher: Arc<PacketDispatcher>,
    shutdown: CancellationToken,
) {
    let role = listener.role();
    let Some(socket) = listener.get() else {
        warn!(listener = role.as_str(), "Listener socket already closed");
        return;
    };
    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        let received = tokio::select! {
            _ = shutdown.cancelled() => {
                debug!(listener = role.as_str(), "Listener shutting down");
                break;
            }
            received = socket.recv_from(&mut recv_buf) => received,
        };

        match received {
            Ok((len, source)) => {
                let datagram: Arc<[u8]> = Arc::from(&recv_buf[..len]);
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move {
                    let outcome = dispatcher.dispatch(&datagram, source).await;
                    debug!(listener = role.as_str(), source = %source, outcome = ?outcome, "Datagram handled");
                });
            }
            Err(e) => {
                if handle_recv_error(&listener, &e).is_break() {
                    break;
                }
            }
        }
    }
}

/// Transient errors keep the loop going; anything else closes the listener.
fn handle_recv_error(listener: &ListenerSocket, error: &io::Error) -> ControlFlow<()> {
    let role = listener.role().as_str();
    if is_transient(error) {
        warn!(listener = role, error = %error, "Transient receive error");
        return ControlFlow::Continue(());
    }

    error!(listener = role, error = %error, "Receive failed, listener stopping");
    listener.close();
    ControlFlow::Break(())
}

fn is_transient(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::TimedOut
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
    )
}
