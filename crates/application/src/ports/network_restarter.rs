use async_trait::async_trait;
use std::time::Duration;
use xdns_domain::DomainError;

/// Port for restarting the host network stack.
#[async_trait]
pub trait NetworkRestarter: Send + Sync {
    /// Runs the restart, giving up once `timeout` has elapsed.
    async fn restart(&self, timeout: Duration) -> Result<(), DomainError>;
}
