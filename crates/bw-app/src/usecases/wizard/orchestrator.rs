//! Wizard orchestrator.
//!
//! This module coordinates the wizard state machine and its side effects.
//! Transitions run under the context's dispatch lock; wallet signatures and
//! settlement waits run with no lock held, and their results are applied
//! afterwards only if the session they started in is still current.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use bw_core::ports::{
    BalancePort, ClockPort, SettlementError, SettlementKind, SettlementPort, SigningError,
    WalletPort, WizardEventPort,
};
use bw_core::{
    AssetSymbol, DeploymentRecord, Guardian, GuardianId, PriceTable, Role, TokenAmount,
    ValidationError, VaultAsset, VerificationMethod, WillRecord, WizardAction,
    WizardError, WizardEvent, WizardState, WizardStep,
};

use crate::usecases::wizard::context::WizardContext;
use crate::usecases::wizard::{
    AvailableBalance, DeployWill, ShareDeployment, ShareOutcome, VerifyPassing, WizardView,
};

/// Deposit amount keyword that deposits the whole available balance.
pub const MAX_AMOUNT: &str = "max";

/// Errors produced by the wizard orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error("failed to read {symbol} balance: {source}")]
    Balance {
        symbol: AssetSymbol,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Settlement(#[from] SettlementError),
    #[error("Deploy your will before sharing it")]
    NotDeployed,
}

impl From<ValidationError> for OrchestratorError {
    fn from(err: ValidationError) -> Self {
        OrchestratorError::Wizard(WizardError::Validation(err))
    }
}

/// Result of a deploy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    Deployed(DeploymentRecord),
    /// Back on the review step; the user may retry.
    Failed(SigningError),
    /// The session ended while the deployment was in flight.
    Abandoned,
}

impl DeployOutcome {
    pub fn message(&self) -> String {
        match self {
            DeployOutcome::Deployed(record) => {
                format!("Will deployed at {}", record.contract_address)
            }
            DeployOutcome::Failed(err) => err.to_string(),
            DeployOutcome::Abandoned => "Session ended before the deployment settled".to_string(),
        }
    }
}

/// Result of a deposit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositOutcome {
    Deposited(VaultAsset),
    /// The vault view was left, or the session ended, before settlement.
    Discarded,
}

/// Orchestrator that drives the wizard session and its side effects.
pub struct WizardOrchestrator {
    context: Arc<WizardContext>,
    will_record: WillRecord,
    prices: PriceTable,

    wallet: Arc<dyn WalletPort>,
    balances: Arc<dyn BalancePort>,
    settlement: Arc<dyn SettlementPort>,
    clock: Arc<dyn ClockPort>,
    event_port: Arc<dyn WizardEventPort>,

    deploy_will: Arc<DeployWill>,
    share_deployment: Arc<ShareDeployment>,
    verify_passing: Arc<VerifyPassing>,
}

impl WizardOrchestrator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        will_record: WillRecord,
        prices: PriceTable,
        wallet: Arc<dyn WalletPort>,
        balances: Arc<dyn BalancePort>,
        settlement: Arc<dyn SettlementPort>,
        clock: Arc<dyn ClockPort>,
        event_port: Arc<dyn WizardEventPort>,
        deploy_will: Arc<DeployWill>,
        share_deployment: Arc<ShareDeployment>,
        verify_passing: Arc<VerifyPassing>,
    ) -> Self {
        Self {
            context: WizardContext::new(will_record.clone()).arc(),
            will_record,
            prices,
            wallet,
            balances,
            settlement,
            clock,
            event_port,
            deploy_will,
            share_deployment,
            verify_passing,
        }
    }

    pub async fn select_role(&self, role: Role) -> Result<WizardState, OrchestratorError> {
        self.dispatch(WizardEvent::SelectRole { role }).await
    }

    pub async fn continue_step(&self) -> Result<WizardState, OrchestratorError> {
        self.dispatch(WizardEvent::Continue).await
    }

    pub async fn back(&self) -> Result<WizardState, OrchestratorError> {
        self.dispatch(WizardEvent::Back).await
    }

    /// Jump from the review step back to `step`.
    pub async fn edit(&self, step: WizardStep) -> Result<WizardState, OrchestratorError> {
        let event = match step {
            WizardStep::Verification => WizardEvent::EditVerification,
            WizardStep::Guardians => WizardEvent::EditGuardians,
            WizardStep::Vault => WizardEvent::EditVault,
            WizardStep::Review => {
                return Err(WizardError::InvalidTransition {
                    state: "review",
                    event: "edit_review",
                }
                .into())
            }
        };
        self.dispatch(event).await
    }

    pub async fn get_state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn snapshot(&self) -> WizardView {
        let connected = self.wallet.connected_address();
        let available = self.available_balances().await;
        let session = self.context.session().await;
        WizardView::capture(&session, connected, available)
    }

    /// Balances the wallet can deposit, valued at the configured prices.
    pub async fn available_balances(&self) -> Vec<AvailableBalance> {
        let mut available = Vec::with_capacity(AssetSymbol::ALL.len());
        for symbol in AssetSymbol::ALL {
            match self.balances.available_balance(symbol).await {
                Ok(amount) => available.push(AvailableBalance {
                    symbol,
                    amount,
                    usd_value: amount
                        .value_at(self.prices.price(symbol))
                        .unwrap_or_default(),
                }),
                Err(err) => {
                    warn!(symbol = %symbol, error = %err, "balance unavailable for view");
                }
            }
        }
        available
    }

    pub async fn add_guardian(&self, input: &str) -> Result<Guardian, OrchestratorError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let mut session = self.context.session().await;
        let guardian = session.add_guardian(input, self.clock.now_ms())?;
        info!(
            guardian_id = %guardian.id,
            address = %guardian.address.short(),
            count = session.roster().count(),
            "guardian added"
        );
        Ok(guardian)
    }

    pub async fn remove_guardian(
        &self,
        id: &GuardianId,
    ) -> Result<Option<Guardian>, OrchestratorError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let mut session = self.context.session().await;
        let removed = session.remove_guardian(id)?;
        match &removed {
            Some(guardian) => info!(guardian_id = %guardian.id, "guardian removed"),
            None => debug!(guardian_id = %id, "guardian already absent"),
        }
        Ok(removed)
    }

    /// Toggle a verification method; returns whether it is now selected.
    pub async fn toggle_method(&self, method: VerificationMethod) -> Result<bool, OrchestratorError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let mut session = self.context.session().await;
        let selected = session.toggle_method(method)?;
        debug!(method = %method, selected, "verification method toggled");
        Ok(selected)
    }

    /// Deposit `amount` of `symbol` into the vault.
    ///
    /// `amount` is a decimal literal, or [`MAX_AMOUNT`] for the whole
    /// available balance. The deposit is validated and marked in flight
    /// before the settlement wait, so a second deposit is refused until this
    /// one resolves.
    pub async fn deposit(
        &self,
        symbol: AssetSymbol,
        amount: &str,
    ) -> Result<DepositOutcome, OrchestratorError> {
        let span = info_span!("usecase.wizard_orchestrator.deposit", symbol = %symbol);
        async {
            let available = self
                .balances
                .available_balance(symbol)
                .await
                .map_err(|source| OrchestratorError::Balance { symbol, source })?;
            let amount = if amount.trim().eq_ignore_ascii_case(MAX_AMOUNT) {
                available
            } else {
                TokenAmount::parse(amount)?
            };

            let (ticket, generation) = {
                let _dispatch_guard = self.context.acquire_dispatch_lock().await;
                let mut session = self.context.session().await;
                let ticket = session.begin_deposit(symbol, amount, available)?;
                (ticket, self.context.generation())
            };
            debug!(amount = %amount, available = %available, "deposit awaiting settlement");

            let settled = self.settlement.settle(SettlementKind::Deposit).await;

            let _dispatch_guard = self.context.acquire_dispatch_lock().await;
            if self.context.generation() != generation {
                debug!("deposit settled after session end; dropped");
                return Ok(DepositOutcome::Discarded);
            }
            let mut session = self.context.session().await;
            if let Err(err) = settled {
                session.abort_deposit(&ticket);
                warn!(error = %err, "deposit settlement failed");
                return Err(err.into());
            }

            match session.finish_deposit(ticket, &self.prices)? {
                Some(asset) => {
                    info!(
                        balance = %asset.balance,
                        usd_value = %asset.usd_value,
                        total = %session.ledger().total(),
                        "deposit settled"
                    );
                    Ok(DepositOutcome::Deposited(asset))
                }
                None => {
                    info!("vault view left before settlement; deposit discarded");
                    Ok(DepositOutcome::Discarded)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Sign and deploy the will from the review step.
    pub async fn deploy(&self) -> Result<DeployOutcome, OrchestratorError> {
        let span = info_span!("usecase.wizard_orchestrator.deploy");
        async {
            let (actions, generation) = self.dispatch_with_actions(WizardEvent::Deploy).await?;
            let mut outcome = DeployOutcome::Abandoned;
            for action in actions {
                if action == WizardAction::SignAndDeploy {
                    outcome = self.sign_and_deploy(generation).await?;
                }
            }
            Ok(outcome)
        }
        .instrument(span)
        .await
    }

    async fn sign_and_deploy(&self, generation: u64) -> Result<DeployOutcome, OrchestratorError> {
        let result = match self.wallet.connected_address() {
            Some(creator) => {
                let snapshot = {
                    let session = self.context.session().await;
                    session.compose_snapshot(creator, self.clock.now_ms())
                };
                self.deploy_will.execute(snapshot).await
            }
            None => Err(SigningError::Other("wallet not connected".to_string())),
        };

        let (event, outcome) = match result {
            Ok(record) => (
                WizardEvent::DeploySucceeded {
                    record: record.clone(),
                },
                DeployOutcome::Deployed(record),
            ),
            Err(error) => (
                WizardEvent::DeployFailed {
                    error: error.clone(),
                },
                DeployOutcome::Failed(error),
            ),
        };

        if self.resume(generation, event).await?.is_none() {
            return Ok(DeployOutcome::Abandoned);
        }
        Ok(outcome)
    }

    /// Share the deployed will.
    pub async fn share(&self) -> Result<ShareOutcome, OrchestratorError> {
        let record = match self.context.get_state().await {
            WizardState::Deployed { record } => record,
            _ => return Err(OrchestratorError::NotDeployed),
        };
        Ok(self.share_deployment.execute(&record).await)
    }

    /// Attest the testator's passing as the connected guardian.
    pub async fn verify_passing(&self) -> Result<WizardState, OrchestratorError> {
        let span = info_span!("usecase.wizard_orchestrator.verify_passing");
        async {
            let caller = self.wallet.connected_address();
            let (actions, generation) = self
                .dispatch_with_actions(WizardEvent::StartPassingVerification)
                .await?;

            for action in actions {
                if action != WizardAction::SettlePassingVerification {
                    continue;
                }
                let settled = match &caller {
                    Some(guardian) => self.verify_passing.execute(guardian).await,
                    None => false,
                };

                let _dispatch_guard = self.context.acquire_dispatch_lock().await;
                if self.context.generation() != generation {
                    debug!("verification settled after session end; dropped");
                    break;
                }
                let state = {
                    let mut session = self.context.session().await;
                    let verified = session.settle_passing_verification(caller.as_ref(), settled)?;
                    info!(
                        verified,
                        verified_count = session.will_record().verified_count(),
                        guardian_count = session.will_record().guardians.len(),
                        "passing verification settled"
                    );
                    session.state().clone()
                };
                self.event_port.emit_state_changed(&state).await;
            }

            Ok(self.context.get_state().await)
        }
        .instrument(span)
        .await
    }

    /// Discard the session. Work still in flight resolves as a no-op.
    pub async fn end_session(&self) {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.context.reset(self.will_record.clone()).await;
        info!(generation = self.context.generation(), "wizard session ended");
        self.event_port
            .emit_state_changed(&WizardState::RoleUnselected)
            .await;
    }

    async fn dispatch(&self, event: WizardEvent) -> Result<WizardState, OrchestratorError> {
        self.dispatch_with_actions(event).await?;
        Ok(self.context.get_state().await)
    }

    async fn dispatch_with_actions(
        &self,
        event: WizardEvent,
    ) -> Result<(Vec<WizardAction>, u64), OrchestratorError> {
        // Acquire dispatch lock to serialize concurrent dispatch calls.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let generation = self.context.generation();
        let actions = self.apply(event).await?;
        Ok((actions, generation))
    }

    /// Apply the follow-up event of a finished side effect, unless the session
    /// it belongs to has ended. Returns `None` when dropped.
    async fn resume(
        &self,
        generation: u64,
        event: WizardEvent,
    ) -> Result<Option<WizardState>, OrchestratorError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if self.context.generation() != generation {
            debug!(event = event.name(), "stale wizard event dropped");
            return Ok(None);
        }
        self.apply(event).await?;
        Ok(Some(self.context.get_state().await))
    }

    /// Must be called with the dispatch lock held.
    async fn apply(&self, event: WizardEvent) -> Result<Vec<WizardAction>, OrchestratorError> {
        let span = info_span!("usecase.wizard_orchestrator.dispatch", event = event.name());
        async {
            let caller = self.wallet.connected_address();
            let (from, to, actions) = {
                let mut session = self.context.session().await;
                let from = session.state().name();
                let event_name = event.name();
                let actions = session.apply(event, caller.as_ref()).map_err(|err| {
                    debug!(from, event = event_name, error = %err, "wizard event refused");
                    err
                })?;
                (from, session.state().clone(), actions)
            };
            info!(from, to = to.name(), "wizard state transition");
            self.event_port.emit_state_changed(&to).await;
            Ok(actions)
        }
        .instrument(span)
        .await
    }
}
