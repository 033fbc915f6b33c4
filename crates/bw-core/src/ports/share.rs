use crate::ports::ShareError;

/// Targets for sharing a deployed will, tried in order by the share use case.
#[async_trait::async_trait]
pub trait SharePort: Send + Sync {
    /// Open a native compose surface prefilled with `text`.
    async fn compose(&self, text: &str) -> Result<(), ShareError>;

    /// Open `url` in a browser.
    async fn open_url(&self, url: &str) -> Result<(), ShareError>;

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
}
