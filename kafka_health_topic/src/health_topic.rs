use anyhow::bail;
use serde::Deserialize;
use std::time::Duration;

pub const HEALTH_TOPIC_NAME: &str = "health-check-topic";
pub const NUM_PARTITIONS: i32 = 1;
pub const REPLICATION_FACTOR: i32 = 1;
/// Records older than this may be discarded by the broker, probes only need the latest one.
pub const RETENTION_MS: i64 = 60 * 60 * 1000;
/// Bound for both the topic listing and the creation acknowledgment.
pub const TOPIC_OPERATION_TIMEOUT_SECS: u64 = 10;

pub const RETENTION_MS_CONFIG: &str = "retention.ms";

/// What to do when creation reports that another instance created the topic first.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlreadyExistsPolicy {
    #[default]
    Fail,
    Accept,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HealthTopicSettings {
    /// Turns the whole check off, for deployments without a kafka health indicator.
    pub enabled: bool,
    pub name: String,
    /// `-1` keeps records forever.
    pub retention_ms: i64,
    pub timeout_secs: u64,
    pub already_exists_policy: AlreadyExistsPolicy,
}

impl HealthTopicSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.name.is_empty() {
            bail!("Health-check topic name is empty")
        }
        if self.timeout_secs == 0 {
            bail!("Health-check topic timeout must be at least one second")
        }
        if self.retention_ms != -1 && self.retention_ms <= 0 {
            bail!(
                "Health-check topic retention must be positive or -1, got {}",
                self.retention_ms
            )
        }

        Ok(())
    }
}

impl Default for HealthTopicSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            name: HEALTH_TOPIC_NAME.to_owned(),
            retention_ms: RETENTION_MS,
            timeout_secs: TOPIC_OPERATION_TIMEOUT_SECS,
            already_exists_policy: AlreadyExistsPolicy::Fail,
        }
    }
}
