//! Application configuration management.

use serde::Deserialize;

use crate::types::state::{State, StateParseError};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Organization configuration.
    #[serde(default)]
    pub organization: OrganizationConfig,
}

/// Organization configuration.
///
/// Carries the seller-side context every document is priced against.
/// The home state decides intra-state vs inter-state tax treatment; it
/// is configuration, never a hardcoded constant.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationConfig {
    /// Organization display name.
    #[serde(default)]
    pub name: String,
    /// GST code of the organization's home state.
    #[serde(default = "default_home_state")]
    pub home_state: String,
    /// Optional GST identification number.
    #[serde(default)]
    pub gstin: Option<String>,
}

fn default_home_state() -> String {
    // Maharashtra
    "27".to_string()
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            home_state: default_home_state(),
            gstin: None,
        }
    }
}

impl OrganizationConfig {
    /// Resolves the configured home state code to a [`State`].
    ///
    /// # Errors
    ///
    /// Returns [`StateParseError::Unknown`] if the configured value
    /// matches no state name or code.
    pub fn home_state(&self) -> Result<State, StateParseError> {
        self.home_state.parse()
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Layers `config/default`, `config/{RUN_MODE}`, then `BAHI__`
    /// prefixed environment variables. A `.env` file is read first if
    /// present.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BAHI").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
