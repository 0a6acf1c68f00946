//! Runtime configuration for greeting-service.
//!
//! Settings come from an optional `greeting.toml` file and environment
//! variables prefixed with `GREETING` (e.g. `GREETING__PORT=9090`).

use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TCP port for the HTTP listener. Port 0 requests an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let settings = Cfg::builder()
            .add_source(File::with_name("greeting").required(false))
            .add_source(Environment::with_prefix("GREETING").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
