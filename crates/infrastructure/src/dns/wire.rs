//! Decode/encode helpers over `hickory-proto`.

use hickory_proto::op::Message;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use xdns_domain::DomainError;

pub fn decode_message(bytes: &[u8]) -> Result<Message, DomainError> {
    Message::from_vec(bytes).map_err(|e| DomainError::DecodeError(e.to_string()))
}

pub fn encode_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::EncodeError(e.to_string()))?;

    Ok(buf)
}
