//! Deploy and share commands.

use tracing::{info_span, Instrument};

use bw_app::{DeployOutcome, ShareOutcome};

use crate::bootstrap::AppRuntime;

pub async fn deploy(runtime: &AppRuntime) -> Result<String, String> {
    let span = info_span!("command.deployment.deploy");
    async {
        let outcome = runtime
            .orchestrator()
            .deploy()
            .await
            .map_err(|e| e.to_string())?;
        match &outcome {
            DeployOutcome::Failed(_) => Err(outcome.message()),
            _ => Ok(outcome.message()),
        }
    }
    .instrument(span)
    .await
}

pub async fn share(runtime: &AppRuntime) -> Result<String, String> {
    let span = info_span!("command.deployment.share");
    async {
        let outcome = runtime
            .orchestrator()
            .share()
            .await
            .map_err(|e| e.to_string())?;
        Ok(match &outcome {
            ShareOutcome::OpenedUrl { url } => format!("{}\n{url}", outcome.message()),
            _ => outcome.message().to_string(),
        })
    }
    .instrument(span)
    .await
}
