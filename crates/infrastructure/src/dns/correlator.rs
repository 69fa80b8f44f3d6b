use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::net::SocketAddr;
use tracing::debug;

/// In-flight forwarded queries, keyed by DNS transaction ID.
///
/// Entries live until a response with the same ID is consumed. There is no
/// expiry: an ID whose upstreams never answer stays until restart.
#[derive(Default)]
pub struct TransactionCorrelator {
    pending: DashMap<u16, SocketAddr, FxBuildHasher>,
}

impl TransactionCorrelator {
    pub fn new() -> Self {
        Self {
            pending: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Stores the client for `id`, replacing any earlier client with that ID.
    pub fn record(&self, id: u16, client: SocketAddr) {
        if let Some(previous) = self.pending.insert(id, client) {
            if previous != client {
                debug!(id, previous = %previous, client = %client, "Pending request overwritten");
            }
        }
    }

    /// Removes and returns the client waiting on `id`.
    pub fn consume(&self, id: u16) -> Option<SocketAddr> {
        self.pending.remove(&id).map(|(_, client)| client)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
