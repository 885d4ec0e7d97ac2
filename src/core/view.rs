use crate::core::session::ScoringSession;
use crate::domain::model::Item;
use crate::domain::ports::{Observation, Region, VisibilityObserver};
use std::cell::Cell;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// 第一排按鈕固定顯示 0..=4
const FIRST_ROW_MAX: u8 = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Popover {
    pub open: bool,
    pub item_id: Option<String>,
    pub text: &'static str,
}

/// 畫面狀態：說明彈窗與合計釘選，兩者互相獨立。
#[derive(Debug, Default)]
pub struct ViewState {
    popover: Popover,
    total_pinned: Rc<Cell<bool>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_guidance(&mut self, session: &ScoringSession, item_id: &str) -> &Popover {
        self.popover = Popover {
            open: true,
            item_id: Some(item_id.to_string()),
            text: session.guidance(item_id),
        };
        &self.popover
    }

    pub fn close_guidance(&mut self) {
        self.popover.open = false;
    }

    pub fn popover(&self) -> &Popover {
        &self.popover
    }

    pub fn is_total_pinned(&self) -> bool {
        self.total_pinned.get()
    }

    /// 掛載時登記一次；回傳的 `Observation` 被 drop 時解除。
    pub fn watch_total_panel<V: VisibilityObserver + ?Sized>(&self, observer: &V) -> Observation {
        let pinned = Rc::clone(&self.total_pinned);
        observer.observe(
            Region::TotalPanel,
            Box::new(move |visible: bool| pinned.set(!visible)),
        )
    }
}

/// 按鈕分組只影響排版，不影響有效範圍
pub fn button_groups(item: &Item) -> Vec<RangeInclusive<u8>> {
    if item.max > FIRST_ROW_MAX {
        vec![0..=FIRST_ROW_MAX, FIRST_ROW_MAX + 1..=item.max]
    } else {
        vec![0..=item.max]
    }
}
