use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiSettings {
    pub host: String,
    /// Supplied by the host environment's secret store via
    /// `SDV_GEMINI__API_KEY`; the file value stays empty.
    #[serde(default)]
    pub api_key: String,
    pub default_model: String,
}

pub fn load_backend_config() -> anyhow::Result<BackendConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/backend"))
        .add_source(
            config::Environment::with_prefix("SDV")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
