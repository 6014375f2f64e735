use crate::admin::session::{AdminSession, AdminSessionFactory};
use crate::admin::AdminWrapper;
use crate::connection_settings::ConnectionSettings;
use crate::error::BrokerError;
use crate::topic_descriptor::TopicDescriptor;
use async_trait::async_trait;
use rdkafka::admin::{AdminOptions, NewTopic, TopicReplication};
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::util::Timeout;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct RdKafkaAdminSessionFactory {
    connection_settings: ConnectionSettings,
}

impl RdKafkaAdminSessionFactory {
    pub fn new(connection_settings: ConnectionSettings) -> Self {
        Self {
            connection_settings,
        }
    }
}

impl AdminSessionFactory for RdKafkaAdminSessionFactory {
    type Session = RdKafkaAdminSession;

    fn acquire(&self) -> Result<Self::Session, BrokerError> {
        let admin = AdminWrapper::create(&self.connection_settings)
            .map_err(|e| BrokerError::Client(format!("{e:#}")))?;
        debug!(brokers = ?self.connection_settings.brokers, "Kafka admin session acquired");

        Ok(RdKafkaAdminSession {
            admin: Arc::new(admin),
        })
    }
}

pub struct RdKafkaAdminSession {
    admin: Arc<AdminWrapper>,
}

#[async_trait]
impl AdminSession for RdKafkaAdminSession {
    async fn list_topic_names(&self, timeout: Duration) -> Result<HashSet<String>, BrokerError> {
        let admin = self.admin.clone();
        // fetch_metadata blocks the calling thread until librdkafka answers
        let handle = tokio::task::spawn_blocking(move || {
            let metadata = admin.inner().fetch_metadata(None, Timeout::After(timeout));
            drop(admin);
            let metadata = metadata?;
            let names = metadata
                .topics()
                .iter()
                .map(|topic| topic.name().to_owned())
                .collect::<HashSet<_>>();
            Result::<_, KafkaError>::Ok(names)
        });

        let names = handle
            .await
            .map_err(|e| BrokerError::Client(format!("While joining blocking handle: {e}")))?
            .map_err(|e| map_kafka_error(e, timeout))?;

        Ok(names)
    }

    async fn create_topics(
        &self,
        topics: &[TopicDescriptor],
        timeout: Duration,
    ) -> Result<(), BrokerError> {
        let new_topics = topics.iter().map(to_new_topic).collect::<Vec<_>>();
        let options = AdminOptions::new()
            .request_timeout(Some(timeout))
            .operation_timeout(Some(timeout));

        let results = self
            .admin
            .create_topics(new_topics.iter(), &options)
            .await
            .map_err(|e| map_kafka_error(e, timeout))?;

        for result in results {
            if let Err((topic, code)) = result {
                debug!(topic = %topic, %code, "Broker refused topic creation");
                return Err(map_error_code(code, timeout));
            }
        }

        Ok(())
    }
}

impl Drop for RdKafkaAdminSession {
    fn drop(&mut self) {
        // A metadata fetch still running after a timeout keeps the client alive until it returns.
        debug!("Kafka admin session handle dropped");
    }
}

fn to_new_topic(descriptor: &TopicDescriptor) -> NewTopic<'_> {
    let new_topic = NewTopic::new(
        descriptor.name(),
        descriptor.partitions(),
        TopicReplication::Fixed(descriptor.replication()),
    );

    descriptor
        .configs()
        .iter()
        .fold(new_topic, |new_topic, (key, value)| new_topic.set(key, value))
}

fn map_kafka_error(error: KafkaError, timeout: Duration) -> BrokerError {
    match error.rdkafka_error_code() {
        Some(code) => map_error_code(code, timeout),
        None => BrokerError::Client(error.to_string()),
    }
}

fn map_error_code(code: RDKafkaErrorCode, timeout: Duration) -> BrokerError {
    match code {
        RDKafkaErrorCode::TopicAlreadyExists => BrokerError::TopicAlreadyExists,
        RDKafkaErrorCode::RequestTimedOut | RDKafkaErrorCode::OperationTimedOut => {
            BrokerError::Timeout(timeout)
        }
        RDKafkaErrorCode::TopicAuthorizationFailed
        | RDKafkaErrorCode::ClusterAuthorizationFailed
        | RDKafkaErrorCode::SaslAuthenticationFailed
        | RDKafkaErrorCode::Authentication => BrokerError::Authorization(code.to_string()),
        RDKafkaErrorCode::BrokerTransportFailure
        | RDKafkaErrorCode::AllBrokersDown
        | RDKafkaErrorCode::NetworkException => BrokerError::Connection(code.to_string()),
        code => BrokerError::Broker(code.to_string()),
    }
}
