use crate::admin::{AdminSession, AdminSessionFactory, RdKafkaAdminSessionFactory};
use crate::connection_settings::ConnectionSettings;
use crate::error::{BrokerError, EnsureTopicError};
use crate::health_topic::{AlreadyExistsPolicy, HealthTopicSettings};
use crate::topic_descriptor::TopicDescriptor;
use anyhow::Context;
use std::future::Future;
use tracing::{info, warn};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    AlreadyExists,
    Created,
    Disabled,
}

/// Makes sure the health-check topic exists before the readiness probe starts using it.
///
/// Every call is a single pass: list topics, create the topic when it is missing, fail on
/// the first error. Retrying is left to whoever restarts the process.
pub struct TopicEnsurer<F> {
    session_factory: F,
    settings: HealthTopicSettings,
}

impl<F: AdminSessionFactory> TopicEnsurer<F> {
    pub fn new(session_factory: F, settings: HealthTopicSettings) -> Self {
        Self {
            session_factory,
            settings,
        }
    }

    pub fn settings(&self) -> &HealthTopicSettings {
        &self.settings
    }

    pub async fn ensure(&self) -> Result<EnsureOutcome, EnsureTopicError> {
        if !self.settings.enabled {
            info!(topic = %self.settings.name, "Kafka health-check topic check is disabled, skipping");
            return Ok(EnsureOutcome::Disabled);
        }

        // Released on drop, whichever branch returns.
        let session = self
            .session_factory
            .acquire()
            .map_err(EnsureTopicError::LookupFailure)?;

        if self.topic_exists(&session).await? {
            info!(topic = %self.settings.name, "Kafka health-check topic already exists");
            return Ok(EnsureOutcome::AlreadyExists);
        }

        match self.create_topic(&session).await {
            Ok(()) => {
                info!(topic = %self.settings.name, "Kafka health-check topic created");
                Ok(EnsureOutcome::Created)
            }
            Err(e)
                if e.is_topic_already_exists()
                    && self.settings.already_exists_policy == AlreadyExistsPolicy::Accept =>
            {
                warn!(
                    topic = %self.settings.name,
                    "Kafka health-check topic was created concurrently by another instance"
                );
                Ok(EnsureOutcome::AlreadyExists)
            }
            Err(e) => Err(e),
        }
    }

    async fn topic_exists(&self, session: &F::Session) -> Result<bool, EnsureTopicError> {
        let timeout = self.settings.timeout();
        let names = bounded(timeout, session.list_topic_names(timeout))
            .await
            .map_err(EnsureTopicError::LookupFailure)?;

        Ok(names.contains(&self.settings.name))
    }

    async fn create_topic(&self, session: &F::Session) -> Result<(), EnsureTopicError> {
        let timeout = self.settings.timeout();
        let descriptor = TopicDescriptor::health_check(&self.settings);
        info!(
            topic = %descriptor.name(),
            partitions = descriptor.partitions(),
            replication = descriptor.replication(),
            configs = ?descriptor.configs(),
            "Creating kafka health-check topic"
        );

        bounded(
            timeout,
            session.create_topics(std::slice::from_ref(&descriptor), timeout),
        )
        .await
        .map_err(|source| EnsureTopicError::CreationFailure {
            topic: descriptor.name().clone(),
            source,
        })
    }
}

/// Enforces `timeout` even when the session does not honour it itself.
async fn bounded<T>(
    timeout: std::time::Duration,
    future: impl Future<Output = Result<T, BrokerError>>,
) -> Result<T, BrokerError> {
    tokio::time::timeout(timeout, future)
        .await
        .map_err(|_| BrokerError::Timeout(timeout))?
}

/// Startup hook: ensures the health-check topic on the cluster described by `connection_settings`.
pub async fn ensure_health_topic(
    connection_settings: &ConnectionSettings,
    settings: HealthTopicSettings,
) -> Result<(), anyhow::Error> {
    let factory = RdKafkaAdminSessionFactory::new(connection_settings.clone());
    let ensurer = TopicEnsurer::new(factory, settings);

    let outcome = ensurer
        .ensure()
        .await
        .with_context(|| format!("While ensuring kafka topic {}", ensurer.settings().name))?;
    info!(?outcome, "Kafka health-check topic is ready");

    Ok(())
}
