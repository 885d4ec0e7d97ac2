#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::{Result, ScorerError};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use toml_config::{ScorerConfig, DEFAULT_CONFIG_FILE};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sara-scorer")]
#[command(about = "SARA スコア（簡易版）: score ataxia items and export CSV")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory the CSV export is written to (overrides config)
    #[arg(long, global = true)]
    pub output_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit log lines as JSON")]
    pub json_log: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the scoring items and their ranges
    Items,
    /// Print the scoring guidance for one item
    Guide { id: String },
    /// Score a session non-interactively and export it as CSV
    Export {
        /// Item score as ID=VALUE, repeatable
        #[arg(short, long = "score", value_parser = parse_score_arg)]
        scores: Vec<(String, i64)>,

        #[arg(short, long, default_value = "")]
        note: String,
    },
    /// Line-oriented scoring session (default)
    Interactive,
}

#[cfg(feature = "cli")]
pub fn parse_score_arg(raw: &str) -> std::result::Result<(String, i64), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{}'", raw))?;
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid score '{}': {}", value, e))?;
    Ok((id.trim().to_string(), value))
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML 後套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<ScorerConfig> {
        let mut config = match &self.config {
            Some(path) => ScorerConfig::from_file(path).map_err(|e| match e {
                ScorerError::IoError(io) => ScorerError::ConfigError {
                    message: format!("Failed to read config file '{}': {}", path, io),
                },
                other => other,
            })?,
            None => ScorerConfig::from_file_or_default(DEFAULT_CONFIG_FILE)?,
        };

        if let Some(output_dir) = &self.output_dir {
            config.export.output_dir = output_dir.clone();
        }
        if self.json_log {
            config.logging.json = true;
        }

        Ok(config)
    }
}
