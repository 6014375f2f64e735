use crate::app_config::AppConfig;
use kafka_health_topic::ensure_health_topic;
use tracing::info;

/// Runs the startup hooks. The process must not report ready if this fails.
pub async fn run(config: AppConfig) -> Result<(), anyhow::Error> {
    if !config.health_topic.enabled {
        info!("Kafka health indicator is disabled, skipping health-check topic");
        return Ok(());
    }

    ensure_health_topic(&config.kafka, config.health_topic).await?;
    info!("Startup checks passed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kafka_health_topic::connection_settings::{ConnectionSettings, SecurityProtocol};
    use kafka_health_topic::HealthTopicSettings;

    fn config(enabled: bool) -> AppConfig {
        AppConfig {
            // Acquiring a session from these settings fails before any network call.
            kafka: ConnectionSettings {
                brokers: vec![],
                security_protocol: SecurityProtocol::Plaintext,
                sasl: None,
            },
            health_topic: HealthTopicSettings {
                enabled,
                ..HealthTopicSettings::default()
            },
        }
    }

    #[tokio::test]
    async fn disabled_check_skips_the_broker() {
        let result = run(config(false)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn enabled_check_reaches_the_broker() {
        let result = run(config(true)).await;

        assert!(result.is_err());
    }
}
