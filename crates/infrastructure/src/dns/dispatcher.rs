use super::cache::{question_fingerprint, ResponseCache};
use super::correlator::TransactionCorrelator;
use super::forwarding::ForwarderRegistry;
use super::socket::{ListenerRole, ListenerSocket};
use super::wire::{decode_message, encode_message};
use hickory_proto::op::{Message, MessageType};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, warn};
use xdns_domain::{QuestionFingerprint, RoutePath, RoutingState};

/// What a single datagram led to. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Undecodable, or a message without questions.
    Dropped,
    /// Upstream response relayed to the client that asked.
    Relayed { client: SocketAddr },
    /// Upstream response with no pending request. Cached, not relayed.
    Unsolicited,
    AnsweredFromCache,
    Forwarded { sent: usize },
    /// A send or re-encode step failed; already logged.
    Failed,
}

/// The two sockets of the listener pair.
#[derive(Clone)]
pub struct ProxySockets {
    /// Bound to the listen address; all client-bound traffic leaves here.
    pub client: Arc<ListenerSocket>,
    /// Ephemeral; all upstream-bound traffic leaves here.
    pub upstream: Arc<ListenerSocket>,
}

impl ProxySockets {
    pub fn new(client: UdpSocket, upstream: UdpSocket) -> Self {
        Self {
            client: Arc::new(ListenerSocket::new(ListenerRole::Client, client)),
            upstream: Arc::new(ListenerSocket::new(ListenerRole::Upstream, upstream)),
        }
    }
}

/// Shared proxy state: correlator, both caches, forwarders and routing flag.
pub struct ProxyState {
    pub correlator: TransactionCorrelator,
    pub direct_cache: Arc<ResponseCache>,
    pub vpn_cache: Arc<ResponseCache>,
    pub forwarders: Arc<ForwarderRegistry>,
    pub routing: Arc<RoutingState>,
}

impl ProxyState {
    pub fn new(forwarders: Arc<ForwarderRegistry>, routing: Arc<RoutingState>) -> Self {
        Self {
            correlator: TransactionCorrelator::new(),
            direct_cache: Arc::new(ResponseCache::new(RoutePath::Direct)),
            vpn_cache: Arc::new(ResponseCache::new(RoutePath::Vpn)),
            forwarders,
            routing,
        }
    }

    pub fn cache_for(&self, path: RoutePath) -> &Arc<ResponseCache> {
        match path {
            RoutePath::Direct => &self.direct_cache,
            RoutePath::Vpn => &self.vpn_cache,
        }
    }
}

pub struct PacketDispatcher {
    sockets: ProxySockets,
    state: Arc<ProxyState>,
}

impl PacketDispatcher {
    pub fn new(sockets: ProxySockets, state: Arc<ProxyState>) -> Self {
        Self { sockets, state }
    }

    pub fn sockets(&self) -> &ProxySockets {
        &self.sockets
    }

    /// Handles one received datagram. Never returns an error: every failure
    /// is logged and reported through the outcome.
    pub async fn dispatch(&self, datagram: &[u8], source: SocketAddr) -> DispatchOutcome {
        let message = match decode_message(datagram) {
            Ok(message) => message,
            Err(e) => {
                debug!(source = %source, error = %e, "Dropping undecodable datagram");
                return DispatchOutcome::Dropped;
            }
        };

        let Some(question) = message.queries().first() else {
            debug!(source = %source, id = message.id(), "Dropping message without questions");
            return DispatchOutcome::Dropped;
        };

        let fingerprint = question_fingerprint(question);
        let path = self.state.routing.current();

        match message.message_type() {
            MessageType::Response => self.handle_response(message, datagram, fingerprint, path).await,
            MessageType::Query => {
                self.handle_query(message, datagram, source, fingerprint, path)
                    .await
            }
        }
    }

    async fn handle_response(
        &self,
        message: Message,
        datagram: &[u8],
        fingerprint: QuestionFingerprint,
        path: RoutePath,
    ) -> DispatchOutcome {
        let id = message.id();
        let answers = message.answers().to_vec();

        debug!(id, question = %fingerprint, path = %path, answers = answers.len(), "Caching upstream response");
        self.state.cache_for(path).store(fingerprint, answers);

        let Some(client) = self.state.correlator.consume(id) else {
            debug!(id, "No pending request for response");
            return DispatchOutcome::Unsolicited;
        };

        match self.sockets.client.send_to(datagram, client).await {
            Ok(_) => {
                debug!(id, client = %client, "Relayed upstream response");
                DispatchOutcome::Relayed { client }
            }
            Err(e) => {
                warn!(id, client = %client, error = %e, "Failed to relay response to client");
                DispatchOutcome::Failed
            }
        }
    }

    async fn handle_query(
        &self,
        mut message: Message,
        datagram: &[u8],
        source: SocketAddr,
        fingerprint: QuestionFingerprint,
        path: RoutePath,
    ) -> DispatchOutcome {
        let id = message.id();

        if let Some(records) = self.state.cache_for(path).lookup(&fingerprint) {
            message.add_answers(records.iter().cloned());
            let mut header = *message.header();
            header.set_message_type(MessageType::Response);
            message.set_header(header);

            let bytes = match encode_message(&message) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(id, question = %fingerprint, error = %e, "Failed to encode cached answer");
                    return DispatchOutcome::Failed;
                }
            };

            return match self.sockets.client.send_to(&bytes, source).await {
                Ok(_) => {
                    debug!(id, question = %fingerprint, client = %source, "Answered from cache");
                    DispatchOutcome::AnsweredFromCache
                }
                Err(e) => {
                    warn!(id, client = %source, error = %e, "Failed to send cached answer");
                    DispatchOutcome::Failed
                }
            };
        }

        self.state.correlator.record(id, source);

        let mut sent = 0;
        for forwarder in self.state.forwarders.for_path(path) {
            match self.sockets.upstream.send_to(datagram, *forwarder).await {
                Ok(_) => sent += 1,
                Err(e) => {
                    warn!(id, forwarder = %forwarder, error = %e, "Failed to forward query");
                }
            }
        }

        debug!(id, question = %fingerprint, path = %path, sent, "Forwarded query");
        DispatchOutcome::Forwarded { sent }
    }
}
