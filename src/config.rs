use anyhow::{bail, Result};
use config::{Environment, File};
use serde::Deserialize;

/// Runtime settings, loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub translator: TranslatorSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Credentials and endpoint for the upstream translation provider.
/// All three values are required; the server refuses to start without them.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorSettings {
    pub endpoint: String,
    pub subscription_key: String,
    pub location: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Settings {
    /// Load settings from a config file merged with environment overrides
    /// (e.g. `TRANSLATOR__SUBSCRIPTION_KEY`, `SERVER__PORT`). The file is
    /// optional so a fully env-configured deployment works too.
    pub fn load(path: &str) -> Result<Self> {
        let settings: Settings = config::Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()?;

        let translator = &settings.translator;
        for (key, value) in [
            ("translator.endpoint", &translator.endpoint),
            ("translator.subscription_key", &translator.subscription_key),
            ("translator.location", &translator.location),
        ] {
            if value.trim().is_empty() {
                bail!("missing required configuration value: {}", key);
            }
        }

        Ok(settings)
    }
}
