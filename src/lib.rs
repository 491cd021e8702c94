//! Catalog seeder
//!
//! Reads XML book catalogs and submits every book as an "Add" action to a
//! library service, to populate fixture data ahead of automated UI tests.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
