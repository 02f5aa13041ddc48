// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

use crate::domain::poem::value_objects::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    poems_seed_path: Option<PathBuf>,
    allowed_origins: Vec<String>,
    gallery_page_size: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let poems_seed_path = lookup("POEMS_SEED_PATH")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let gallery_page_size = match lookup("GALLERY_PAGE_SIZE") {
            Some(raw) => {
                let value = raw.trim().parse::<u32>().map_err(|_| {
                    ConfigError::Invalid(format!("GALLERY_PAGE_SIZE must be a number, got {raw:?}"))
                })?;
                if value == 0 || value > MAX_PER_PAGE {
                    return Err(ConfigError::Invalid(format!(
                        "GALLERY_PAGE_SIZE must be between 1 and {MAX_PER_PAGE}"
                    )));
                }
                value
            }
            None => DEFAULT_PER_PAGE,
        };

        Ok(Self {
            listen_addr,
            poems_seed_path,
            allowed_origins,
            gallery_page_size,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn poems_seed_path(&self) -> Option<&PathBuf> {
        self.poems_seed_path.as_ref()
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn gallery_page_size(&self) -> u32 {
        self.gallery_page_size
    }
}
