use crate::utils::error::{Result, ScorerError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檔名前綴不可包含路徑分隔符
pub fn validate_filename_component(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains(['/', '\\', '\0']) || value == "." || value == ".." {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a plain file name without path separators".to_string(),
        });
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, value: &str) -> Result<()> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    if !LEVELS.contains(&value.to_ascii_lowercase().as_str()) {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported log level. Valid levels: {}", LEVELS.join(", ")),
        });
    }
    Ok(())
}

/// 分數範圍檢查，失敗時回傳 `InvalidScore`
pub fn validate_score_range(item_id: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(ScorerError::InvalidScore {
            item_id: item_id.to_string(),
            value,
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
