use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use xdns_domain::{QuestionFingerprint, RoutingState};
use xdns_infrastructure::dns::wire::encode_message;
use xdns_infrastructure::dns::{
    question_fingerprint, ForwarderRegistry, PacketDispatcher, ProxySockets, ProxyState,
};

pub fn build_query(name: &str) -> Query {
    let mut query = Query::new();
    query.set_name(Name::from_str(name).unwrap());
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);
    query
}

pub fn fingerprint_of(name: &str) -> QuestionFingerprint {
    question_fingerprint(&build_query(name))
}

pub fn a_record(name: &str, ip: Ipv4Addr, ttl: u32) -> Record {
    Record::from_rdata(Name::from_str(name).unwrap(), ttl, RData::A(A(ip)))
}

pub fn query_message(id: u16, name: &str) -> Message {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(build_query(name));
    message
}

pub fn query_bytes(id: u16, name: &str) -> Vec<u8> {
    encode_message(&query_message(id, name)).unwrap()
}

pub fn response_bytes(id: u16, name: &str, ip: Ipv4Addr, ttl: u32) -> Vec<u8> {
    let mut message = query_message(id, name);
    let mut header = *message.header();
    header.set_message_type(MessageType::Response);
    message.set_header(header);
    message.add_answer(a_record(name, ip, ttl));
    encode_message(&message).unwrap()
}

pub fn first_a(message: &Message) -> Option<Ipv4Addr> {
    message.answers().iter().find_map(|record| match record.data() {
        RData::A(a) => Some(a.0),
        _ => None,
    })
}

/// A dispatcher wired to real localhost sockets, plus a socket playing the
/// role of a local client.
pub struct TestProxy {
    pub dispatcher: PacketDispatcher,
    pub state: Arc<ProxyState>,
    pub sockets: ProxySockets,
    pub client: UdpSocket,
}

impl TestProxy {
    pub async fn new(direct: Vec<SocketAddr>, vpn: Vec<SocketAddr>) -> Self {
        let sockets = ProxySockets::new(
            UdpSocket::bind("127.0.0.1:0").await.unwrap(),
            UdpSocket::bind("127.0.0.1:0").await.unwrap(),
        );
        let state = Arc::new(ProxyState::new(
            Arc::new(ForwarderRegistry::new(direct, vpn)),
            Arc::new(RoutingState::default()),
        ));
        let dispatcher = PacketDispatcher::new(sockets.clone(), state.clone());
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        Self {
            dispatcher,
            state,
            sockets,
            client,
        }
    }

    pub fn client_addr(&self) -> SocketAddr {
        self.client.local_addr().unwrap()
    }

    pub fn upstream_addr(&self) -> SocketAddr {
        self.sockets.upstream.local_addr().unwrap()
    }
}
