use crate::core::export::CsvExporter;
use crate::core::session::ScoringSession;
use crate::core::view::{button_groups, ViewState};
use crate::core::viewport::Viewport;
use crate::core::{Confirm, Item, Region, Storage};
use crate::utils::error::{Result, ScorerError};
use std::io::{BufRead, Write};

pub const TITLE: &str = "SARA スコア（簡易版）";
pub const SUBTITLE: &str = "個人/教育目的のプロトタイプ";

const HELP: &str = "\
コマンド:
  show                 合計・メモ・スコア表を表示
  items                項目一覧
  set <id> <value>     スコアを設定
  note <text>          メモを置き換え（空で消去）
  guide <id>           評価のポイントを表示
  close                説明を閉じる
  total                合計を表示
  summary              JSON で表示
  reset                全スコアとメモをリセット
  export               CSV エクスポート
  help                 このヘルプ
  quit                 終了";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Show,
    Items,
    Set { id: String, value: i64 },
    Note(String),
    Guide(String),
    Close,
    Total,
    Summary,
    Reset,
    Export,
    Help,
    Quit,
}

/// `note` 之後的文字原樣保留，只去掉一個分隔字元
fn note_text(line: &str) -> Option<&str> {
    match line.trim_start().strip_prefix("note")? {
        "" => Some(""),
        rest if rest.starts_with([' ', '\t']) => Some(&rest[1..]),
        _ => None,
    }
}

pub fn parse_action(line: &str) -> std::result::Result<Action, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(text) = note_text(line) {
        return Ok(Action::Note(text.to_string()));
    }

    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let action = match command {
        "show" | "s" => Action::Show,
        "items" => Action::Items,
        "set" => {
            let mut parts = rest.split_whitespace();
            let (Some(id), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err("使い方: set <id> <value>".to_string());
            };
            let value = value
                .parse::<i64>()
                .map_err(|_| format!("スコアは整数で指定してください: {}", value))?;
            Action::Set {
                id: id.to_string(),
                value,
            }
        }
        "guide" | "g" if !rest.is_empty() => Action::Guide(rest.to_string()),
        "guide" | "g" => return Err("使い方: guide <id>".to_string()),
        "close" => Action::Close,
        "total" | "t" => Action::Total,
        "summary" => Action::Summary,
        "reset" => Action::Reset,
        "export" | "e" => Action::Export,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        "" => return Err(String::new()),
        other => return Err(format!("不明なコマンド: {} (help で一覧)", other)),
    };
    Ok(action)
}

/// 從同一個輸入串流讀取 y/N 回答
struct LineConfirm<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<'_, R, W> {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        write!(self.output, "{} [y/N] ", message)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

pub struct Interactive<S: Storage> {
    session: ScoringSession,
    view: ViewState,
    viewport: Viewport,
    exporter: CsvExporter<S>,
}

impl<S: Storage> Interactive<S> {
    pub fn new(exporter: CsvExporter<S>) -> Self {
        Self {
            session: ScoringSession::new(),
            view: ViewState::new(),
            viewport: Viewport::new(),
            exporter,
        }
    }

    pub fn session(&self) -> &ScoringSession {
        &self.session
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub async fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let _watch = self.view.watch_total_panel(&self.viewport);
        tracing::debug!("Interactive session started");

        writeln!(output, "{}", TITLE)?;
        writeln!(output, "{}", SUBTITLE)?;
        self.render_panel(&mut output)?;
        self.viewport.set_visible(Region::TotalPanel, true);

        loop {
            self.write_prompt(&mut output)?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let action = match parse_action(&line) {
                Ok(Action::Quit) => break,
                Ok(action) => action,
                Err(message) => {
                    if !message.is_empty() {
                        writeln!(output, "{}", message)?;
                    }
                    continue;
                }
            };

            let panel_visible = self.apply(action, &mut input, &mut output).await?;
            self.viewport.set_visible(Region::TotalPanel, panel_visible);
        }

        tracing::debug!("Interactive session ended with total {}", self.session.total());
        Ok(())
    }

    /// 執行一個指令，回傳合計面板是否仍在畫面上
    async fn apply<R: BufRead, W: Write>(
        &mut self,
        action: Action,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool> {
        match action {
            Action::Show => {
                self.render_panel(output)?;
                return Ok(true);
            }
            Action::Items => render_items(output, self.session.catalog())?,
            Action::Set { id, value } => match self.session.set_score(&id, value) {
                Ok(()) => writeln!(
                    output,
                    "{} = {} (合計 {})",
                    id,
                    value,
                    self.session.total()
                )?,
                Err(e @ ScorerError::InvalidScore { .. }) => {
                    writeln!(output, "❌ {}", e.user_friendly_message())?;
                    writeln!(output, "💡 {}", e.recovery_suggestion())?;
                }
                Err(e) => return Err(e),
            },
            Action::Note(text) => {
                self.session.set_note(text);
                writeln!(output, "メモを更新しました")?;
            }
            Action::Guide(id) => {
                let popover = self.view.open_guidance(&self.session, &id);
                if popover.text.is_empty() {
                    writeln!(output, "（項目 {} の説明はありません）", id)?;
                } else {
                    writeln!(output, "{}", popover.text)?;
                }
            }
            Action::Close => self.view.close_guidance(),
            Action::Total => writeln!(output, "合計: {}", self.session.total())?,
            Action::Summary => {
                let json = serde_json::to_string_pretty(&self.session.summary())?;
                writeln!(output, "{}", json)?;
            }
            Action::Reset => {
                let mut confirm = LineConfirm {
                    input,
                    output: &mut *output,
                };
                if self.session.reset_all(&mut confirm)? {
                    writeln!(output, "リセットしました")?;
                } else {
                    writeln!(output, "キャンセルしました")?;
                }
            }
            Action::Export => match self.exporter.export(&self.session).await {
                Ok(report) => writeln!(output, "✅ CSV exported: {}", report.path)?,
                Err(e) => {
                    tracing::error!("❌ Export failed: {}", e);
                    writeln!(output, "❌ {}", e.user_friendly_message())?;
                    writeln!(output, "💡 {}", e.recovery_suggestion())?;
                }
            },
            Action::Help => writeln!(output, "{}", HELP)?,
            Action::Quit => {}
        }
        Ok(false)
    }

    fn write_prompt<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.view.is_total_pinned() {
            write!(
                output,
                "[合計 {}/{}] > ",
                self.session.total(),
                self.session.max_total()
            )?;
        } else {
            write!(output, "> ")?;
        }
        output.flush()?;
        Ok(())
    }

    fn render_panel<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(
            output,
            "合計: {} / {}",
            self.session.total(),
            self.session.max_total()
        )?;
        writeln!(output, "メモ: {}", self.session.note())?;

        for (index, (item, score)) in self.session.entries().enumerate() {
            writeln!(
                output,
                "{:>2} {}  {}",
                index + 1,
                item.label,
                render_buttons(item, score)
            )?;
        }
        Ok(())
    }
}

pub fn render_items<W: Write>(output: &mut W, catalog: &[Item]) -> Result<()> {
    for item in catalog {
        writeln!(output, "{:>2} {} (0-{})", item.id, item.label, item.max)?;
    }
    Ok(())
}

/// 選中的分數以 [n] 標示，分組之間以 | 隔開
pub fn render_buttons(item: &Item, selected: u8) -> String {
    button_groups(item)
        .into_iter()
        .map(|group| {
            group
                .map(|value| {
                    if value == selected {
                        format!("[{}]", value)
                    } else {
                        value.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SARA_ITEMS;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("show"), Ok(Action::Show));
        assert_eq!(
            parse_action("set 1 8\n"),
            Ok(Action::Set {
                id: "1".to_string(),
                value: 8
            })
        );
        assert_eq!(
            parse_action("set 3 -1"),
            Ok(Action::Set {
                id: "3".to_string(),
                value: -1
            })
        );
        assert!(parse_action("set 1").is_err());
        assert!(parse_action("set 1 x").is_err());
        assert!(parse_action("set 1 2 3").is_err());
        assert_eq!(parse_action("note 所見あり\n"), Ok(Action::Note("所見あり".to_string())));
        assert_eq!(parse_action("note"), Ok(Action::Note(String::new())));
        assert_eq!(parse_action("note \r\n"), Ok(Action::Note(String::new())));
        assert!(parse_action("notes x").is_err());
        assert_eq!(parse_action("guide 2"), Ok(Action::Guide("2".to_string())));
        assert!(parse_action("guide").is_err());
        assert_eq!(parse_action("exit"), Ok(Action::Quit));
        assert_eq!(parse_action("   "), Err(String::new()));
        assert!(parse_action("dance").is_err());
    }

    #[test]
    fn test_note_keeps_text_verbatim() {
        assert_eq!(
            parse_action("note   two  spaces  \n"),
            Ok(Action::Note("  two  spaces  ".to_string()))
        );
        assert_eq!(
            parse_action(r"note C:\new\table"),
            Ok(Action::Note(r"C:\new\table".to_string()))
        );
        assert_eq!(
            parse_action("note\tタブ区切り"),
            Ok(Action::Note("タブ区切り".to_string()))
        );
    }

    #[test]
    fn test_render_buttons() {
        assert_eq!(
            render_buttons(&SARA_ITEMS[0], 5),
            "0 1 2 3 4 | [5] 6 7 8"
        );
        assert_eq!(render_buttons(&SARA_ITEMS[2], 0), "[0] 1 2 3 4");
    }
}
