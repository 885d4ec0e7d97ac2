use crate::core::session::ScoringSession;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub const BOM: &str = "\u{FEFF}";
pub const DEFAULT_FILENAME_PREFIX: &str = "sara_score";

const HEADER: [&str; 2] = ["項目名", "スコア"];
const TOTAL_LABEL: &str = "合計";
const NOTE_LABEL: &str = "メモ";

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

/// 備註中的換行（\r\n 或 \n）各換成一個空白
pub fn flatten_note(note: &str) -> Cow<'_, str> {
    LINE_BREAK.replace_all(note, " ")
}

/// 產生 CSV：BOM 開頭、每個欄位都加引號、列之間以 CRLF 分隔，最後一列後面不加換行。
pub fn render_csv(session: &ScoringSession) -> Result<Vec<u8>> {
    let mut buffer = BOM.as_bytes().to_vec();

    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .double_quote(true)
            .terminator(Terminator::CRLF)
            .from_writer(&mut buffer);

        writer.write_record(HEADER)?;
        for (item, score) in session.entries() {
            writer.write_record([item.label, score.to_string().as_str()])?;
        }
        writer.write_record([TOTAL_LABEL, session.total().to_string().as_str()])?;
        writer.write_record([NOTE_LABEL, &*flatten_note(session.note())])?;
        writer.flush()?;
    }

    if buffer.ends_with(b"\r\n") {
        buffer.truncate(buffer.len() - 2);
    }

    Ok(buffer)
}

pub fn export_filename(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{}_{}.csv", prefix, at.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: String,
    pub filename: String,
    pub bytes: usize,
    pub total: u32,
}

pub struct CsvExporter<S: Storage> {
    storage: S,
    filename_prefix: String,
}

impl<S: Storage> CsvExporter<S> {
    pub fn new(storage: S) -> Self {
        Self::with_prefix(storage, DEFAULT_FILENAME_PREFIX)
    }

    pub fn with_prefix(storage: S, filename_prefix: impl Into<String>) -> Self {
        Self {
            storage,
            filename_prefix: filename_prefix.into(),
        }
    }

    pub async fn export(&self, session: &ScoringSession) -> Result<ExportReport> {
        self.export_at(session, Utc::now()).await
    }

    pub async fn export_at(
        &self,
        session: &ScoringSession,
        at: DateTime<Utc>,
    ) -> Result<ExportReport> {
        let filename = export_filename(&self.filename_prefix, at);
        let data = render_csv(session)?;

        tracing::debug!("Writing {} ({} bytes) to storage", filename, data.len());
        let path = self.storage.write_file(&filename, &data).await?;
        tracing::info!("📁 Exported total {} to {}", session.total(), path);

        Ok(ExportReport {
            path,
            filename,
            bytes: data.len(),
            total: session.total(),
        })
    }
}
