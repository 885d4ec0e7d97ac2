use crate::domain::guidance::guidance_for;
use crate::domain::model::{find_item, max_total, Item, ScoreEntry, SessionSummary, SARA_ITEMS};
use crate::domain::ports::Confirm;
use crate::utils::error::{Result, ScorerError};
use crate::utils::validation::validate_score_range;

pub const RESET_CONFIRM_MESSAGE: &str = "全スコアとメモをリセットします。よろしいですか？";

/// 一次評分作業。分數與 catalog 以索引一一對應。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringSession {
    catalog: &'static [Item],
    scores: Vec<u8>,
    note: String,
}

impl ScoringSession {
    /// 固定使用 SARA 項目；評分說明也只涵蓋這份 catalog
    pub fn new() -> Self {
        Self {
            catalog: &SARA_ITEMS,
            scores: vec![0; SARA_ITEMS.len()],
            note: String::new(),
        }
    }

    pub fn catalog(&self) -> &'static [Item] {
        self.catalog
    }

    pub fn set_score(&mut self, item_id: &str, value: i64) -> Result<()> {
        let (index, item) = match find_item(self.catalog, item_id) {
            Some(found) => found,
            None => {
                tracing::warn!("Rejected score {} for unknown item '{}'", value, item_id);
                return Err(ScorerError::InvalidScore {
                    item_id: item_id.to_string(),
                    value,
                    reason: "Unknown item id".to_string(),
                });
            }
        };

        if let Err(e) = validate_score_range(item_id, value, 0, i64::from(item.max)) {
            tracing::warn!("Rejected score: {}", e);
            return Err(e);
        }

        // 範圍已驗證，0..=max 必定落在 u8 內
        self.scores[index] = value as u8;
        tracing::debug!("Score for {} ({}) set to {}", item.id, item.label, value);
        Ok(())
    }

    pub fn score(&self, item_id: &str) -> Option<u8> {
        find_item(self.catalog, item_id).map(|(index, _)| self.scores[index])
    }

    pub fn total(&self) -> u32 {
        self.scores.iter().map(|&score| u32::from(score)).sum()
    }

    pub fn max_total(&self) -> u32 {
        max_total(self.catalog)
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static Item, u8)> + '_ {
        self.catalog.iter().zip(self.scores.iter().copied())
    }

    pub fn guidance(&self, item_id: &str) -> &'static str {
        if find_item(self.catalog, item_id).is_none() {
            return "";
        }
        guidance_for(item_id)
    }

    /// 經確認後把所有分數歸零並清空備註；拒絕時狀態不變。
    pub fn reset_all<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> Result<bool> {
        if !confirm.confirm(RESET_CONFIRM_MESSAGE)? {
            tracing::debug!("Reset declined");
            return Ok(false);
        }

        self.scores.iter_mut().for_each(|score| *score = 0);
        self.note.clear();
        tracing::info!("🔄 All scores and the note were reset");
        Ok(true)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            items: self
                .entries()
                .map(|(item, score)| ScoreEntry {
                    id: item.id.to_string(),
                    label: item.label.to_string(),
                    max: item.max,
                    score,
                })
                .collect(),
            total: self.total(),
            max_total: self.max_total(),
            note: self.note.clone(),
        }
    }
}

impl Default for ScoringSession {
    fn default() -> Self {
        Self::new()
    }
}
