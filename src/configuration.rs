use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub webdriver_url: String,
    pub openai_api_key: Option<String>,
    pub serper_api_key: Option<String>,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Builds the process-wide settings once at startup. Everything comes from
/// the environment (`OPENAI_API_KEY`, `SERPER_API_KEY`, `WEBDRIVER_URL`,
/// `APPLICATION__HOST`, `APPLICATION__PORT`) layered over defaults. API keys
/// stay optional here so each binary can enforce only the keys it needs.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 8000)?
        .set_default("webdriver_url", "http://localhost:4444")?
        .add_source(config::Environment::default().separator("__"))
        .build()?;

    settings.try_deserialize::<Settings>()
}
