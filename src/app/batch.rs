use crate::core::export::{CsvExporter, ExportReport};
use crate::core::session::ScoringSession;
use crate::core::Storage;
use crate::utils::error::Result;

/// 依序套用 `(id, value)`，任何一筆不合法就中止且不輸出檔案。
pub fn build_session(scores: &[(String, i64)], note: &str) -> Result<ScoringSession> {
    let mut session = ScoringSession::new();
    for (id, value) in scores {
        session.set_score(id, *value)?;
    }
    session.set_note(note);
    Ok(session)
}

pub async fn export_scores<S: Storage>(
    exporter: &CsvExporter<S>,
    scores: &[(String, i64)],
    note: &str,
) -> Result<ExportReport> {
    let session = build_session(scores, note)?;
    tracing::info!(
        "Scored {} item(s), total {}/{}",
        scores.len(),
        session.total(),
        session.max_total()
    );
    exporter.export(&session).await
}
