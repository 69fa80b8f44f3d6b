use hickory_proto::op::Query;
use xdns_domain::QuestionFingerprint;

/// Fingerprint of a question: its name as carried in the message (case
/// preserved) plus the record type code.
#[inline]
pub fn question_fingerprint(query: &Query) -> QuestionFingerprint {
    QuestionFingerprint::new(
        query.name().to_ascii().as_bytes(),
        u16::from(query.query_type()),
    )
}
