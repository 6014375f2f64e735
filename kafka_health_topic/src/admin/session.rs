use crate::error::BrokerError;
use crate::topic_descriptor::TopicDescriptor;
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Duration;

/// Exclusively owned connection to the broker control plane.
///
/// A session lives for a single ensure pass. Dropping it releases the underlying
/// connection, so implementations put their cleanup in `Drop`.
#[async_trait]
pub trait AdminSession: Send + Sync {
    async fn list_topic_names(&self, timeout: Duration) -> Result<HashSet<String>, BrokerError>;

    /// Resolves once the broker acknowledged every topic or `timeout` passed.
    async fn create_topics(
        &self,
        topics: &[TopicDescriptor],
        timeout: Duration,
    ) -> Result<(), BrokerError>;
}

pub trait AdminSessionFactory: Send + Sync {
    type Session: AdminSession;

    fn acquire(&self) -> Result<Self::Session, BrokerError>;
}
