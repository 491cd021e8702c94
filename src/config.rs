//! Configuration management for the catalog seeder

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_LOCAL_URI: &str = "http://localhost:8080/library";
pub const DEFAULT_CORP_URI: &str = "http://gptestshop.prom.corp.google.com/library";
pub const DEFAULT_FILES: [&str; 2] = ["book.xml", "tech.xml"];

/// Where submissions are sent, and the shorthands accepted by `-u`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub default_uri: String,
    pub local_uri: String,
    pub corp_uri: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogsConfig {
    /// Processed in order when no file is given on the command line
    pub default_files: Vec<String>,
}

/// Which HTTP capability performs the submissions
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    /// Shell out to a command-line downloader
    #[default]
    Wget,
    /// In-process HTTP client
    Http,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SubmitterConfig {
    pub client: ClientKind,
    /// Downloader executable used by the wget client
    pub program: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub catalogs: CatalogsConfig,
    #[serde(default)]
    pub submitter: SubmitterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from built-in defaults, an optional file and environment variables
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let mut builder = Config::builder()
            .set_default("target.default_uri", defaults.target.default_uri)?
            .set_default("target.local_uri", defaults.target.local_uri)?
            .set_default("target.corp_uri", defaults.target.corp_uri)?
            .set_default("catalogs.default_files", defaults.catalogs.default_files)?
            .set_default("submitter.client", "wget")?
            .set_default("submitter.program", defaults.submitter.program)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?;

        builder = match config_file {
            // An explicitly requested file must exist
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("config/catalog-seeder").required(false)),
        };

        let config = builder
            // Add environment variables (with prefix CATALOG_SEEDER_),
            // default files given comma separated
            .add_source(
                Environment::with_prefix("CATALOG_SEEDER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("catalogs.default_files"),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            default_uri: DEFAULT_CORP_URI.to_string(),
            local_uri: DEFAULT_LOCAL_URI.to_string(),
            corp_uri: DEFAULT_CORP_URI.to_string(),
        }
    }
}

impl Default for CatalogsConfig {
    fn default() -> Self {
        Self {
            default_files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            client: ClientKind::Wget,
            program: "wget".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
