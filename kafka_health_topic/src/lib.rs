pub mod admin;
pub mod connection_settings;
pub mod error;
pub mod health_topic;
pub mod topic_descriptor;
pub mod topic_ensurer;

pub use health_topic::{AlreadyExistsPolicy, HealthTopicSettings};
pub use topic_ensurer::{ensure_health_topic, EnsureOutcome, TopicEnsurer};
