use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, oneshot, Mutex};
use xdns_infrastructure::dns::wire::decode_message;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// An upstream resolver on a localhost UDP socket that records what it
/// receives and answers only when told to.
pub struct MockUpstream {
    addr: SocketAddr,
    socket: Arc<UdpSocket>,
    received: Mutex<mpsc::UnboundedReceiver<(Vec<u8>, SocketAddr)>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
        let addr = socket.local_addr().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let recv_socket = socket.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = recv_socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let _ = tx.send((buf[..len].to_vec(), peer));
                        }
                    }
                }
            }
        });

        Self {
            addr,
            socket,
            received: Mutex::new(rx),
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Waits for the next datagram sent to this upstream.
    pub async fn next_query(&self) -> (Vec<u8>, SocketAddr) {
        let mut received = self.received.lock().await;
        tokio::time::timeout(RECV_TIMEOUT, received.recv())
            .await
            .expect("upstream received nothing")
            .expect("upstream channel closed")
    }

    /// Asserts nothing arrives within `wait`.
    pub async fn expect_silence(&self, wait: Duration) {
        let mut received = self.received.lock().await;
        let result = tokio::time::timeout(wait, received.recv()).await;
        assert!(result.is_err(), "upstream unexpectedly received a datagram");
    }

    pub async fn reply(&self, bytes: &[u8], to: SocketAddr) {
        self.socket.send_to(bytes, to).await.unwrap();
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn recv_message(socket: &UdpSocket) -> (Vec<u8>, Message) {
    let mut buf = vec![0u8; 512];
    let (len, _) = tokio::time::timeout(RECV_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .expect("nothing received")
        .unwrap();
    buf.truncate(len);
    let message = decode_message(&buf).unwrap();
    (buf, message)
}

pub async fn expect_nothing(socket: &UdpSocket, wait: Duration) {
    let mut buf = vec![0u8; 512];
    let result = tokio::time::timeout(wait, socket.recv_from(&mut buf)).await;
    assert!(result.is_err(), "socket unexpectedly received a datagram");
}
