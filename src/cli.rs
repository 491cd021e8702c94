//! Command line parsing and argument resolution

use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

use crate::{
    config::{AppConfig, ClientKind, TargetConfig},
    error::AppResult,
    models::CatalogFile,
};

/// Seed a library service with the books listed in XML catalogs
#[derive(Parser, Debug)]
#[command(name = "catalog-seeder")]
#[command(version)]
#[command(about = "Seed a library service with the books listed in XML catalogs")]
pub struct Cli {
    /// Target library URI, or one of the shorthands `local` and `corp`.
    /// Only the first occurrence counts.
    #[arg(short, long, action = ArgAction::Append, allow_hyphen_values = true)]
    pub uri: Vec<String>,

    /// HTTP client used for submissions (overrides submitter.client)
    #[arg(long, value_enum)]
    pub client: Option<ClientKind>,

    /// Configuration file (defaults to config/catalog-seeder.* when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Catalog files; relative paths are resolved next to the executable.
    /// Options are not recognized after the first file.
    #[arg(trailing_var_arg = true)]
    pub files: Vec<String>,
}

impl Cli {
    /// The `-u` value in effect
    pub fn uri(&self) -> Option<&str> {
        self.uri.first().map(String::as_str)
    }
}

/// Resolve the `-u` value: `local` and `corp` are shorthands, anything else is taken verbatim
pub fn resolve_uri(uri: Option<&str>, target: &TargetConfig) -> String {
    match uri {
        None => target.default_uri.clone(),
        Some("local") => target.local_uri.clone(),
        Some("corp") => target.corp_uri.clone(),
        Some(other) => other.to_string(),
    }
}

/// Resolve catalog paths, falling back to `defaults` when none are given.
///
/// Paths with a leading separator are used as-is; all others are joined to
/// `base_dir`. Empty arguments are skipped.
pub fn resolve_files(files: &[String], defaults: &[String], base_dir: &Path) -> Vec<CatalogFile> {
    let files = if files.is_empty() { defaults } else { files };

    files
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| {
            let path = if f.starts_with(std::path::MAIN_SEPARATOR) || Path::new(f).is_absolute() {
                PathBuf::from(f)
            } else {
                base_dir.join(f)
            };
            CatalogFile {
                arg: f.clone(),
                path,
            }
        })
        .collect()
}

/// Directory holding the running executable
pub fn program_dir() -> AppResult<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Usage text printed when the command line cannot be parsed
pub fn usage(config: &AppConfig) -> String {
    format!(
        "Usage: catalog-seeder [-u uri] [files]\n\
         \x20   Default files = {}\n\
         \x20   Default uri = {}\n\
         \x20   Shorthand uri's\n\
         \x20   -u corp =  {}\n\
         \x20   -u local = {}\n",
        config.catalogs.default_files.join(" "),
        config.target.default_uri,
        config.target.corp_uri,
        config.target.local_uri,
    )
}
