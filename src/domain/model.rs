use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: &'static str,
    pub label: &'static str,
    pub max: u8,
}

/// SARA 八個評估項目，順序即畫面與 CSV 的順序
pub const SARA_ITEMS: [Item; 8] = [
    Item { id: "1", label: "歩行", max: 8 },
    Item { id: "2", label: "立位", max: 6 },
    Item { id: "3", label: "座位", max: 4 },
    Item { id: "4", label: "言語機能", max: 6 },
    Item { id: "5", label: "指の追跡運動", max: 4 },
    Item { id: "6", label: "鼻指試験", max: 4 },
    Item { id: "7", label: "手の回内回外運動", max: 4 },
    Item { id: "8", label: "踵膝試験", max: 4 },
];

pub fn find_item<'a>(catalog: &'a [Item], id: &str) -> Option<(usize, &'a Item)> {
    catalog.iter().enumerate().find(|(_, item)| item.id == id)
}

pub fn max_total(catalog: &[Item]) -> u32 {
    catalog.iter().map(|item| u32::from(item.max)).sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: String,
    pub label: String,
    pub max: u8,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub items: Vec<ScoreEntry>,
    pub total: u32,
    pub max_total: u32,
    pub note: String,
}
