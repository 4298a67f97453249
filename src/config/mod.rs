pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::ors::DEFAULT_ORS_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "ORS_API_KEY";
pub const API_KEY_PLACEHOLDER: &str = "YOUR_ORS_API_KEY";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// `ORS_API_KEY` from the environment, or the placeholder when unset.
pub fn default_api_key() -> String {
    std::env::var(API_KEY_ENV).unwrap_or_else(|_| API_KEY_PLACEHOLDER.to_string())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "school-route-relay")]
#[command(about = "Relays six school-run waypoints to OpenRouteService")]
pub struct CliConfig {
    #[arg(long, env = "RELAY_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    #[arg(long, env = "ORS_ENDPOINT", default_value = DEFAULT_ORS_ENDPOINT)]
    pub ors_endpoint: String,

    #[arg(long, env = API_KEY_ENV, default_value = API_KEY_PLACEHOLDER, hide_env_values = true)]
    pub api_key: String,

    #[arg(long, help = "Upstream request timeout in seconds (none by default)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Read settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    fn ors_endpoint(&self) -> &str {
        &self.ors_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every [`ConfigProvider`].
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_socket_addr("listen_addr", config.listen_addr())?;
    validation::validate_url("ors_endpoint", config.ors_endpoint())?;
    validation::validate_non_empty_string("api_key", config.api_key())?;

    if let Some(timeout) = config.timeout_seconds() {
        validation::validate_range("timeout_seconds", timeout, 1, 300)?;
    }

    if config.api_key() == API_KEY_PLACEHOLDER {
        tracing::warn!(
            "{} is not set; upstream calls will be rejected until a real key is configured",
            API_KEY_ENV
        );
    }

    Ok(())
}
