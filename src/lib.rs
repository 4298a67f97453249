pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::ors::OrsClient;
pub use core::relay::RouteRelay;
pub use utils::error::{RelayError, Result};
