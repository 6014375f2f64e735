use std::time::Duration;
use thiserror::Error;

/// Failure reported by an admin session while talking to the broker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrokerError {
    #[error("Broker connection failed: {0}")]
    Connection(String),
    #[error("Broker did not answer within {0:?}")]
    Timeout(Duration),
    #[error("Topic already exists")]
    TopicAlreadyExists,
    #[error("Not authorized: {0}")]
    Authorization(String),
    #[error("Broker rejected the request: {0}")]
    Broker(String),
    #[error("Kafka client failure: {0}")]
    Client(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EnsureTopicErrorKind {
    LookupFailure,
    CreationFailure,
}

#[derive(Error, Debug)]
pub enum EnsureTopicError {
    #[error("Failed to retrieve existing kafka topics")]
    LookupFailure(#[source] BrokerError),
    #[error("Failed to create kafka topic {topic}")]
    CreationFailure {
        topic: String,
        #[source]
        source: BrokerError,
    },
}

impl EnsureTopicError {
    pub fn kind(&self) -> EnsureTopicErrorKind {
        match self {
            EnsureTopicError::LookupFailure(_) => EnsureTopicErrorKind::LookupFailure,
            EnsureTopicError::CreationFailure { .. } => EnsureTopicErrorKind::CreationFailure,
        }
    }

    pub fn cause(&self) -> &BrokerError {
        match self {
            EnsureTopicError::LookupFailure(source) => source,
            EnsureTopicError::CreationFailure { source, .. } => source,
        }
    }

    /// Creation lost a race against another instance creating the same topic.
    pub fn is_topic_already_exists(&self) -> bool {
        matches!(
            self,
            EnsureTopicError::CreationFailure {
                source: BrokerError::TopicAlreadyExists,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn creation_failure_keeps_cause_as_source() {
        let error = EnsureTopicError::CreationFailure {
            topic: "health-check-topic".to_owned(),
            source: BrokerError::TopicAlreadyExists,
        };

        assert_eq!(error.kind(), EnsureTopicErrorKind::CreationFailure);
        assert!(error.is_topic_already_exists());
        assert_eq!(
            error.source().map(ToString::to_string),
            Some("Topic already exists".to_owned())
        );
        assert_eq!(
            error.to_string(),
            "Failed to create kafka topic health-check-topic"
        );
    }

    #[test]
    fn lookup_failure_is_never_an_already_exists_race() {
        let error = EnsureTopicError::LookupFailure(BrokerError::TopicAlreadyExists);

        assert_eq!(error.kind(), EnsureTopicErrorKind::LookupFailure);
        assert!(!error.is_topic_already_exists());
        assert_eq!(error.cause(), &BrokerError::TopicAlreadyExists);
    }
}
