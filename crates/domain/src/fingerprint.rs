use std::fmt;

/// Cache key of a DNS question: the question name bytes exactly as carried
/// in the message, followed by the big-endian record type code.
///
/// No case folding or other normalization is applied, so `Example.com` and
/// `example.com` produce different fingerprints.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct QuestionFingerprint(Box<[u8]>);

impl QuestionFingerprint {
    pub fn new(name: &[u8], record_type: u16) -> Self {
        let mut bytes = Vec::with_capacity(name.len() + 2);
        bytes.extend_from_slice(name);
        bytes.extend_from_slice(&record_type.to_be_bytes());
        Self(bytes.into_boxed_slice())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn name_bytes(&self) -> &[u8] {
        &self.0[..self.0.len() - 2]
    }

    pub fn record_type(&self) -> u16 {
        let len = self.0.len();
        u16::from_be_bytes([self.0[len - 2], self.0[len - 1]])
    }
}

impl fmt::Display for QuestionFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            String::from_utf8_lossy(self.name_bytes()),
            self.record_type()
        )
    }
}

impl fmt::Debug for QuestionFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionFingerprint({})", self)
    }
}
