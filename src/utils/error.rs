use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Invalid score {value} for item '{item_id}': {reason}")]
    InvalidScore {
        item_id: String,
        value: i64,
        reason: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScorerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScorerError::InvalidScore { .. } => ErrorCategory::Input,
            ScorerError::ConfigError { .. }
            | ScorerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ScorerError::IoError(_) => ErrorCategory::Io,
            ScorerError::CsvError(_) | ScorerError::SerializationError(_) => {
                ErrorCategory::Export
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 輸入錯誤只會被拒絕，不影響狀態
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Export => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScorerError::InvalidScore {
                item_id, value, ..
            } => format!("項目 {} にスコア {} は設定できません", item_id, value),
            ScorerError::IoError(e) => format!("ファイル操作に失敗しました: {}", e),
            ScorerError::ConfigError { message } => format!("設定エラー: {}", message),
            ScorerError::InvalidConfigValueError { field, reason, .. } => {
                format!("設定値が不正です ({}): {}", field, reason)
            }
            other => format!("エクスポートに失敗しました: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Use `items` to list valid item ids and score ranges",
            ErrorCategory::Configuration => "Check the TOML config file and CLI flags",
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Export => "Retry the export; the session state is unchanged",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScorerError>;
