use anyhow::Result;
use sara_scorer::app::interactive::Interactive;
use sara_scorer::{CsvExporter, LocalStorage};
use std::io::Cursor;
use tempfile::TempDir;

async fn run_script(script: &str) -> Result<(Interactive<LocalStorage>, String, TempDir)> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let mut app = Interactive::new(CsvExporter::new(storage));

    let mut output = Vec::new();
    app.run(Cursor::new(script.as_bytes().to_vec()), &mut output)
        .await?;

    Ok((app, String::from_utf8(output)?, temp_dir))
}

#[tokio::test]
async fn test_scores_and_total() -> Result<()> {
    let (app, output, _dir) = run_script("set 1 3\nset 2 5\nset 4 2\ntotal\nquit\n").await?;

    assert_eq!(app.session().total(), 10);
    assert!(output.contains("SARA スコア（簡易版）"));
    assert!(output.contains("合計: 10"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_score_keeps_session() -> Result<()> {
    let (app, output, _dir) = run_script("set 3 4\nset 3 5\nset 9 1\nset 3 -1\n").await?;

    assert_eq!(app.session().score("3"), Some(4));
    assert_eq!(app.session().total(), 4);
    assert_eq!(output.matches("❌").count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_declined_reset_is_noop() -> Result<()> {
    let (app, output, _dir) = run_script("set 1 8\nnote 所見\nreset\nn\n").await?;

    assert_eq!(app.session().total(), 8);
    assert_eq!(app.session().note(), "所見");
    assert!(output.contains("全スコアとメモをリセットします。よろしいですか？ [y/N]"));
    assert!(output.contains("キャンセルしました"));
    Ok(())
}

#[tokio::test]
async fn test_confirmed_reset_clears_everything() -> Result<()> {
    let (app, output, _dir) = run_script("set 1 8\nset 8 4\nnote 所見\nreset\ny\nshow\n").await?;

    assert_eq!(app.session().total(), 0);
    assert_eq!(app.session().note(), "");
    assert!(output.contains("リセットしました"));
    Ok(())
}

#[tokio::test]
async fn test_reset_at_eof_declines() -> Result<()> {
    let (app, _, _dir) = run_script("set 2 6\nreset\n").await?;
    assert_eq!(app.session().total(), 6);
    Ok(())
}

#[tokio::test]
async fn test_guidance_popover_follows_last_item() -> Result<()> {
    let (app, output, _dir) = run_script("guide 1\nguide 5\n").await?;

    let popover = app.view().popover();
    assert!(popover.open);
    assert_eq!(popover.item_id.as_deref(), Some("5"));
    assert!(popover.text.starts_with("指の追跡運動"));
    assert!(output.contains("歩行（評価のポイント）"));

    let (app, output, _dir) = run_script("guide 5\nclose\nguide 99\n").await?;
    assert_eq!(app.view().popover().text, "");
    assert!(output.contains("説明はありません"));
    Ok(())
}

#[tokio::test]
async fn test_total_is_pinned_after_scrolling() -> Result<()> {
    let (app, output, _dir) = run_script("set 1 2\nset 2 3\nshow\n").await?;

    // show の後は合計パネルが画面内
    assert!(!app.view().is_total_pinned());
    assert!(output.contains("[合計 2/40] > "));
    assert!(output.contains("[合計 5/40] > "));
    Ok(())
}

#[tokio::test]
async fn test_export_writes_file() -> Result<()> {
    let (app, output, dir) = run_script("set 1 3\nnote  右側  優位 C:\\new\nexport\n").await?;

    let files: Vec<_> = std::fs::read_dir(dir.path())?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<_>>()?;
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("sara_score_"));
    assert!(output.contains("✅ CSV exported"));

    let content = std::fs::read_to_string(dir.path().join(&files[0]))?;
    assert!(content.ends_with(r#""メモ"," 右側  優位 C:\new""#));
    assert_eq!(app.session().note(), r" 右側  優位 C:\new");
    Ok(())
}

#[tokio::test]
async fn test_summary_is_json() -> Result<()> {
    let (_, output, _dir) = run_script("set 6 4\nsummary\n").await?;

    let start = output.find('{').unwrap();
    let end = output.rfind('}').unwrap();
    let summary: serde_json::Value = serde_json::from_str(&output[start..=end])?;
    assert_eq!(summary["total"], 4);
    assert_eq!(summary["items"][5]["score"], 4);
    Ok(())
}
