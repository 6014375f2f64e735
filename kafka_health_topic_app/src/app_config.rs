use anyhow::Context;
use config::Config;
use kafka_health_topic::connection_settings::ConnectionSettings;
use kafka_health_topic::HealthTopicSettings;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    pub kafka: ConnectionSettings,
    #[serde(default)]
    pub health_topic: HealthTopicSettings,
}

impl AppConfig {
    pub fn build() -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(config::File::with_name("appsettings").required(false))
            .add_source(
                config::Environment::with_prefix("App")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("kafka.brokers")
                    .try_parsing(true),
            )
            .build()
            .context("While building config")?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, anyhow::Error> {
        let deserialized_config: Self = config
            .try_deserialize()
            .context("While deserializing config")?;
        deserialized_config
            .health_topic
            .validate()
            .context("While validating health_topic config")?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }
}
