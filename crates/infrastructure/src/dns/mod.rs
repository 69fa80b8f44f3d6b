pub mod cache;
pub mod correlator;
pub mod dispatcher;
pub mod forwarding;
pub mod server;
pub mod socket;
pub mod wire;

pub use cache::{question_fingerprint, CacheEntry, ResponseCache};
pub use correlator::TransactionCorrelator;
pub use dispatcher::{DispatchOutcome, PacketDispatcher, ProxySockets, ProxyState};
pub use forwarding::{resolve_endpoint, ForwarderRegistry};
pub use server::{DnsProxyServer, MAX_DATAGRAM_SIZE};
pub use socket::{ListenerRole, ListenerSocket};
