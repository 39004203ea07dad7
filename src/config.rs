use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

fn default_host() -> String {
    "localhost".to_string()
}

fn default_access_token_age() -> i64 {
    1800
}

fn default_covers_path() -> PathBuf {
    PathBuf::from("public/images/covers")
}

fn default_bcrypt_cost() -> u32 {
    10
}

/// Server configuration, read from the JSON file passed with `--config`.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    pub postgres: String,
    pub redis: String,
    pub amqp: String,
    pub access_token_key: String,
    pub refresh_token_key: String,
    /// Seconds an access token stays valid.
    #[serde(default = "default_access_token_age")]
    pub access_token_age: i64,
    #[serde(default = "default_covers_path")]
    pub covers_path: PathBuf,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Error opening configuration file {}", path.display()))?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> anyhow::Result<Config> {
        serde_json::from_str(raw).context("Malformed configuration")
    }

    /// Base URL under which uploaded covers are published.
    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
