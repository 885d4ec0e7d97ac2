use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_dir(&self) -> &str;
    fn filename_prefix(&self) -> &str;
}

/// 是/否確認閘門，用於重設等破壞性操作
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(self(message))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TotalPanel,
}

pub type VisibilityCallback = Box<dyn FnMut(bool)>;

/// 「區域 R 的可見性改變時通知我」
pub trait VisibilityObserver {
    fn observe(&self, region: Region, on_change: VisibilityCallback) -> Observation;
}

/// 觀察登記的持有者，drop 時解除登記
#[must_use = "dropping the observation deregisters it immediately"]
pub struct Observation {
    release: Option<Box<dyn FnOnce()>>,
}

impl Observation {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observation")
            .field("active", &self.release.is_some())
            .finish()
    }
}
