pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::toml_config::ScorerConfig;
pub use crate::core::{export::CsvExporter, session::ScoringSession};
pub use utils::error::{Result, ScorerError};
