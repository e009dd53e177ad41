// Process configuration.
//
// Responsibilities
// - Read the listening port from the environment; everything else is fixed.

use anyhow::Context;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var("PORT").ok();
        Ok(Self {
            port: parse_port(raw.as_deref())?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("PORT must be a number between 1 and 65535, got {raw:?}")),
        None => Ok(DEFAULT_PORT),
    }
}
