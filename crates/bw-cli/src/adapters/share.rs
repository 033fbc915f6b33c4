use async_trait::async_trait;
use tracing::{debug, info};

use bw_core::ports::{SharePort, ShareError};

/// Share target for a plain terminal.
///
/// There is no native composer or clipboard here. Opening a URL means
/// handing it to the renderer, which prints it for the user to follow.
pub struct TerminalShareTarget;

#[async_trait]
impl SharePort for TerminalShareTarget {
    async fn compose(&self, _text: &str) -> Result<(), ShareError> {
        debug!("terminal has no native composer");
        Err(ShareError::Unsupported)
    }

    async fn open_url(&self, url: &str) -> Result<(), ShareError> {
        info!(url_len = url.len(), "share link handed to terminal");
        Ok(())
    }

    async fn copy_to_clipboard(&self, _text: &str) -> Result<(), ShareError> {
        debug!("terminal has no clipboard access");
        Err(ShareError::Unsupported)
    }
}
