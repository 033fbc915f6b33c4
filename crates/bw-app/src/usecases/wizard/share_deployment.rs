use std::sync::Arc;

use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};
use url::Url;

use bw_core::deployment::share_text;
use bw_core::ports::SharePort;
use bw_core::DeploymentRecord;

/// Where the share text ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShareOutcome {
    Composed,
    OpenedUrl { url: String },
    CopiedToClipboard,
    Unavailable,
}

impl ShareOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ShareOutcome::Composed => "Will creation shared to your social feed.",
            ShareOutcome::OpenedUrl { .. } => "Opened the compose page to share your will.",
            ShareOutcome::CopiedToClipboard => {
                "Will details copied to clipboard! Paste in your favorite social app."
            }
            ShareOutcome::Unavailable => {
                "Share functionality unavailable. Your will has been successfully deployed!"
            }
        }
    }
}

/// Use case for sharing a deployed will.
///
/// Tries the native composer, then the web compose URL, then the clipboard.
/// Share failures never touch the deployment itself.
pub struct ShareDeployment {
    share: Arc<dyn SharePort>,
    compose_url: String,
}

impl ShareDeployment {
    pub fn new(share: Arc<dyn SharePort>, compose_url: impl Into<String>) -> Self {
        Self {
            share,
            compose_url: compose_url.into(),
        }
    }

    /// `{compose_url}?text=<encoded>`, or `None` when the base URL does not parse.
    pub fn compose_link(&self, text: &str) -> Option<String> {
        match Url::parse_with_params(&self.compose_url, &[("text", text)]) {
            Ok(url) => Some(url.into()),
            Err(err) => {
                warn!(compose_url = %self.compose_url, error = %err, "invalid compose url");
                None
            }
        }
    }

    pub async fn execute(&self, record: &DeploymentRecord) -> ShareOutcome {
        let span = info_span!(
            "usecase.share_deployment.execute",
            contract = %record.contract_address.prefix(),
        );
        async move {
            let text = share_text(record);

            match self.share.compose(&text).await {
                Ok(()) => {
                    info!("will shared through composer");
                    return ShareOutcome::Composed;
                }
                Err(err) => warn!(error = %err, "compose share failed"),
            }

            if let Some(url) = self.compose_link(&text) {
                match self.share.open_url(&url).await {
                    Ok(()) => {
                        info!("will shared through compose url");
                        return ShareOutcome::OpenedUrl { url };
                    }
                    Err(err) => warn!(error = %err, "compose url share failed"),
                }
            }

            match self.share.copy_to_clipboard(&text).await {
                Ok(()) => {
                    info!("will details copied to clipboard");
                    ShareOutcome::CopiedToClipboard
                }
                Err(err) => {
                    warn!(error = %err, "clipboard share failed");
                    ShareOutcome::Unavailable
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_core::ports::ShareError;
    use bw_core::{
        ContractAddress, GuardianRoster, Signature, VaultLedger, VerificationMethodSet,
        WalletAddress, WillSnapshot,
    };

    mockall::mock! {
        pub Share {}

        #[async_trait::async_trait]
        impl SharePort for Share {
            async fn compose(&self, text: &str) -> Result<(), ShareError>;
            async fn open_url(&self, url: &str) -> Result<(), ShareError>;
            async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
        }
    }

    fn record() -> DeploymentRecord {
        let mut roster = GuardianRoster::new();
        roster
            .add_at("0x0000000000000000000000000000000000000001", 1)
            .unwrap();
        DeploymentRecord {
            contract_address: ContractAddress::from_hex_fragment("deadbeef"),
            signature: Signature::new("0xsig".to_string()),
            snapshot: WillSnapshot::compose(
                WalletAddress::parse("0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0").unwrap(),
                &roster,
                &VaultLedger::new(),
                &VerificationMethodSet::new(),
                0,
            ),
        }
    }

    #[tokio::test]
    async fn share_deployment_prefers_composer() {
        let mut share = MockShare::new();
        share.expect_compose().times(1).returning(|_| Ok(()));
        share.expect_open_url().times(0);
        share.expect_copy_to_clipboard().times(0);

        let usecase = ShareDeployment::new(Arc::new(share), "https://base.org/compose");
        assert_eq!(usecase.execute(&record()).await, ShareOutcome::Composed);
    }

    #[tokio::test]
    async fn share_deployment_falls_back_to_compose_url() {
        let mut share = MockShare::new();
        share
            .expect_compose()
            .returning(|_| Err(ShareError::Unsupported));
        share
            .expect_open_url()
            .withf(|url: &str| url.starts_with("https://base.org/compose?text=Just+secured"))
            .times(1)
            .returning(|_| Ok(()));
        share.expect_copy_to_clipboard().times(0);

        let usecase = ShareDeployment::new(Arc::new(share), "https://base.org/compose");
        let outcome = usecase.execute(&record()).await;

        assert!(matches!(outcome, ShareOutcome::OpenedUrl { .. }));
    }

    #[tokio::test]
    async fn share_deployment_reports_unavailable_when_every_target_fails() {
        let mut share = MockShare::new();
        share
            .expect_compose()
            .returning(|_| Err(ShareError::Unsupported));
        share
            .expect_open_url()
            .returning(|_| Err(ShareError::Failed("no browser".to_string())));
        share
            .expect_copy_to_clipboard()
            .returning(|_| Err(ShareError::Unsupported));

        let usecase = ShareDeployment::new(Arc::new(share), "https://base.org/compose");
        let outcome = usecase.execute(&record()).await;

        assert_eq!(outcome, ShareOutcome::Unavailable);
        assert_eq!(
            outcome.message(),
            "Share functionality unavailable. Your will has been successfully deployed!"
        );
    }

    #[tokio::test]
    async fn share_deployment_skips_url_when_compose_base_is_invalid() {
        let mut share = MockShare::new();
        share
            .expect_compose()
            .returning(|_| Err(ShareError::Unsupported));
        share.expect_open_url().times(0);
        share
            .expect_copy_to_clipboard()
            .times(1)
            .returning(|_| Ok(()));

        let usecase = ShareDeployment::new(Arc::new(share), "not a url");
        assert_eq!(
            usecase.execute(&record()).await,
            ShareOutcome::CopiedToClipboard
        );
    }
}
