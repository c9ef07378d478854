use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
}

/// Values given on the command line; they take precedence over every
/// other layer.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub catalog_path: Option<PathBuf>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub catalog_path: Option<PathBuf>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub cors_allowed_methods: Option<Vec<String>>,
    pub cors_allowed_headers: Option<Vec<String>>,
    pub dev_mode: Option<bool>,
    /// Variables that were set but could not be parsed.
    pub rejected: Vec<(&'static str, String)>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the environment view from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env_config = Self::default();

        env_config.config_path =
            lookup("MARQUEE_CONFIG_PATH").map(PathBuf::from);
        env_config.server_host =
            lookup("SERVER_HOST").filter(|s| !s.trim().is_empty());
        env_config.server_port =
            env_config.parse_var(&lookup, "SERVER_PORT", |raw| raw.parse().ok());
        env_config.catalog_path =
            lookup("MARQUEE_CATALOG_PATH").map(PathBuf::from);

        env_config.cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").map(|raw| split_csv(&raw));
        env_config.cors_allowed_methods =
            lookup("CORS_ALLOWED_METHODS").map(|raw| split_csv(&raw));
        env_config.cors_allowed_headers =
            lookup("CORS_ALLOWED_HEADERS").map(|raw| split_csv(&raw));

        env_config.dev_mode =
            env_config.parse_var(&lookup, "DEV_MODE", parse_bool);

        env_config
    }

    fn parse_var<F, T>(
        &mut self,
        lookup: &F,
        name: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Option<T>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(name)?;
        let parsed = parse(raw.trim());
        if parsed.is_none() {
            self.rejected.push((name, raw));
        }
        parsed
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
