use crate::core::export::DEFAULT_FILENAME_PREFIX;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ScorerError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_CONFIG_FILE: &str = "sara-scorer.toml";

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_filename_prefix() -> String {
    DEFAULT_FILENAME_PREFIX.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            filename_prefix: default_filename_prefix(),
        }
    }
}

impl ScorerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時使用預設值
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScorerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EXPORT_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for ScorerConfig {
    fn output_dir(&self) -> &str {
        &self.export.output_dir
    }

    fn filename_prefix(&self) -> &str {
        &self.export.filename_prefix
    }
}

impl Validate for ScorerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("export.output_dir", &self.export.output_dir)?;
        validation::validate_filename_component(
            "export.filename_prefix",
            &self.export.filename_prefix,
        )?;

        if let Some(level) = &self.logging.level {
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}
