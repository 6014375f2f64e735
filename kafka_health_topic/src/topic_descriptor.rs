use crate::health_topic::{HealthTopicSettings, NUM_PARTITIONS, REPLICATION_FACTOR, RETENTION_MS_CONFIG};
use getset::{CopyGetters, Getters};
use std::collections::BTreeMap;

/// Topic creation request. Built fresh for every attempt and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct TopicDescriptor {
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    partitions: i32,
    #[getset(get_copy = "pub")]
    replication: i32,
    #[getset(get = "pub")]
    configs: BTreeMap<String, String>,
}

impl TopicDescriptor {
    pub fn health_check(settings: &HealthTopicSettings) -> Self {
        let configs = BTreeMap::from([(
            RETENTION_MS_CONFIG.to_owned(),
            settings.retention_ms.to_string(),
        )]);

        Self {
            name: settings.name.clone(),
            partitions: NUM_PARTITIONS,
            replication: REPLICATION_FACTOR,
            configs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_descriptor_has_fixed_layout_and_retention() {
        let settings = HealthTopicSettings {
            retention_ms: 42_000,
            ..HealthTopicSettings::default()
        };

        let descriptor = TopicDescriptor::health_check(&settings);

        assert_eq!(descriptor.name(), "health-check-topic");
        assert_eq!(descriptor.partitions(), 1);
        assert_eq!(descriptor.replication(), 1);
        assert_eq!(
            descriptor.configs().get("retention.ms").map(String::as_str),
            Some("42000")
        );
    }
}
