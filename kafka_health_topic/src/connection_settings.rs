mod security_protocol;

pub use security_protocol::{SaslMechanism, SaslSettings, SecurityProtocol};

use anyhow::bail;
use rdkafka::ClientConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionSettings {
    pub brokers: Vec<String>,
    #[serde(default)]
    pub security_protocol: SecurityProtocol,
    #[serde(default)]
    pub sasl: Option<SaslSettings>,
}

impl TryFrom<&ConnectionSettings> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(value: &ConnectionSettings) -> Result<Self, Self::Error> {
        if value.brokers.is_empty() {
            bail!("No brokers specified")
        }

        let mut config = ClientConfig::new();

        let brokers_string = value.brokers.join(",");
        config
            .set("bootstrap.servers", brokers_string)
            .set("security.protocol", value.security_protocol.to_string());

        match (&value.sasl, value.security_protocol.uses_sasl()) {
            (Some(sasl), true) => {
                config
                    .set("sasl.mechanism", sasl.mechanism.to_string())
                    .set("sasl.username", &sasl.username)
                    .set("sasl.password", &sasl.password);
            }
            (None, true) => bail!(
                "Security protocol {} requires sasl settings",
                value.security_protocol
            ),
            (_, false) => {}
        }

        if let Ok(value) = std::env::var("RD_KAFKA_DEBUG") {
            config.set("debug", value);
        }

        Ok(config)
    }
}
