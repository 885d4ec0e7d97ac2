pub mod export;
pub mod session;
pub mod view;
pub mod viewport;

pub use crate::domain::model::{Item, ScoreEntry, SessionSummary, SARA_ITEMS};
pub use crate::domain::ports::{
    ConfigProvider, Confirm, Observation, Region, Storage, VisibilityObserver,
};
pub use crate::utils::error::Result;
