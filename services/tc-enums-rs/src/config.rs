use clap::ValueEnum;
use serde::Deserialize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration, loaded from `TC_ENUMS_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputFormat,
    /// Exit with an error if any value parses to its invalid sentinel.
    pub strict: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::prefixed("TC_ENUMS_")
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Invalid TC_ENUMS_* configuration: {e}"))?;
        Ok(config)
    }
}
