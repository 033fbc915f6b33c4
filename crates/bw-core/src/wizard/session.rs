use crate::address::WalletAddress;
use crate::deployment::WillSnapshot;
use crate::guardian::{Guardian, GuardianRoster, WillRecord};
use crate::ids::GuardianId;
use crate::vault::{AssetSymbol, PriceTable, TokenAmount, VaultAsset, VaultLedger};
use crate::verification::{VerificationMethod, VerificationMethodSet};
use crate::wizard::state_machine::{GuardianAccess, WizardGates, WizardStateMachine};
use crate::wizard::{WizardAction, WizardError, WizardEvent, WizardState, WizardStep};

/// A deposit that passed validation and is waiting on settlement.
///
/// The ticket remembers which vault view it was started from; it only
/// lands in the ledger if that view is still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositTicket {
    pub symbol: AssetSymbol,
    pub amount: TokenAmount,
    pub available: TokenAmount,
    epoch: u64,
}

/// Everything one wizard run accumulates.
///
/// Mutations are gated on the current step: the roster changes only on the
/// guardians step, deposits only on the vault step and method toggles only
/// on the verification step. Once deployed, nothing changes.
#[derive(Debug, Clone)]
pub struct WizardSession {
    state: WizardState,
    roster: GuardianRoster,
    ledger: VaultLedger,
    methods: VerificationMethodSet,
    will_record: WillRecord,
    deposit_in_flight: bool,
    vault_view_epoch: u64,
}

impl WizardSession {
    pub fn new(will_record: WillRecord) -> Self {
        Self {
            state: WizardState::RoleUnselected,
            roster: GuardianRoster::new(),
            ledger: VaultLedger::new(),
            methods: VerificationMethodSet::new(),
            will_record,
            deposit_in_flight: false,
            vault_view_epoch: 0,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn roster(&self) -> &GuardianRoster {
        &self.roster
    }

    pub fn ledger(&self) -> &VaultLedger {
        &self.ledger
    }

    pub fn methods(&self) -> &VerificationMethodSet {
        &self.methods
    }

    pub fn will_record(&self) -> &WillRecord {
        &self.will_record
    }

    pub fn deposit_in_flight(&self) -> bool {
        self.deposit_in_flight
    }

    pub fn gates(&self, caller: Option<&WalletAddress>) -> WizardGates {
        let guardian_access = match caller {
            None => GuardianAccess::NotConnected,
            Some(address) if self.will_record.is_guardian(address) => GuardianAccess::Authorized,
            Some(_) => GuardianAccess::NotAGuardian,
        };
        WizardGates {
            guardian_count: self.roster.count(),
            asset_count: self.ledger.len(),
            guardian_access,
        }
    }

    /// Run `event` through the state machine and commit the new state.
    ///
    /// On error the session is left untouched.
    pub fn apply(
        &mut self,
        event: WizardEvent,
        caller: Option<&WalletAddress>,
    ) -> Result<Vec<WizardAction>, WizardError> {
        let gates = self.gates(caller);
        let (next, actions) = WizardStateMachine::transition(self.state.clone(), event, &gates)?;

        let was_vault = self.state == WizardState::Vault;
        let is_vault = next == WizardState::Vault;
        if was_vault != is_vault {
            self.deposit_in_flight = false;
        }
        if is_vault && !was_vault {
            self.vault_view_epoch += 1;
        }
        self.state = next;
        Ok(actions)
    }

    fn require_step(&self, step: WizardStep) -> Result<(), WizardError> {
        if matches!(self.state, WizardState::Deployed { .. }) {
            return Err(WizardError::DeploymentSealed);
        }
        if self.state.step() != Some(step) {
            return Err(WizardError::StepMismatch { expected: step });
        }
        Ok(())
    }

    pub fn add_guardian(&mut self, input: &str, now_ms: i64) -> Result<Guardian, WizardError> {
        self.require_step(WizardStep::Guardians)?;
        Ok(self.roster.add_at(input, now_ms)?)
    }

    pub fn remove_guardian(&mut self, id: &GuardianId) -> Result<Option<Guardian>, WizardError> {
        self.require_step(WizardStep::Guardians)?;
        Ok(self.roster.remove(id))
    }

    /// Toggle `method` and report whether it is selected afterwards.
    pub fn toggle_method(&mut self, method: VerificationMethod) -> Result<bool, WizardError> {
        self.require_step(WizardStep::Verification)?;
        self.methods.toggle(method);
        Ok(self.methods.is_selected(method))
    }

    /// Validate a deposit and mark it in flight. The ledger is unchanged
    /// until [`WizardSession::finish_deposit`].
    pub fn begin_deposit(
        &mut self,
        symbol: AssetSymbol,
        amount: TokenAmount,
        available: TokenAmount,
    ) -> Result<DepositTicket, WizardError> {
        self.require_step(WizardStep::Vault)?;
        if self.deposit_in_flight {
            return Err(WizardError::DepositInProgress);
        }
        self.ledger.check_deposit(symbol, amount, available)?;

        self.deposit_in_flight = true;
        Ok(DepositTicket {
            symbol,
            amount,
            available,
            epoch: self.vault_view_epoch,
        })
    }

    /// Land a settled deposit. Returns `Ok(None)` when the vault view the
    /// ticket came from has been left in the meantime.
    pub fn finish_deposit(
        &mut self,
        ticket: DepositTicket,
        prices: &PriceTable,
    ) -> Result<Option<VaultAsset>, WizardError> {
        if !self.is_current(&ticket) {
            return Ok(None);
        }
        self.deposit_in_flight = false;
        let asset = self
            .ledger
            .deposit(ticket.symbol, ticket.amount, ticket.available, prices)?;
        Ok(Some(asset))
    }

    /// Drop an in-flight deposit whose settlement failed.
    pub fn abort_deposit(&mut self, ticket: &DepositTicket) {
        if self.is_current(ticket) {
            self.deposit_in_flight = false;
        }
    }

    fn is_current(&self, ticket: &DepositTicket) -> bool {
        self.state == WizardState::Vault && ticket.epoch == self.vault_view_epoch
    }

    pub fn compose_snapshot(&self, creator: WalletAddress, timestamp: i64) -> WillSnapshot {
        WillSnapshot::compose(creator, &self.roster, &self.ledger, &self.methods, timestamp)
    }

    /// Settle the guardian's passing verification.
    ///
    /// On success the will record is replaced by a copy with the caller
    /// marked verified. Returns whether the verification went through.
    pub fn settle_passing_verification(
        &mut self,
        caller: Option<&WalletAddress>,
        settled: bool,
    ) -> Result<bool, WizardError> {
        let updated = match caller {
            Some(address) if settled => self.will_record.with_verified(address),
            _ => None,
        };
        let verified = updated.is_some();

        self.apply(WizardEvent::PassingVerificationSettled { verified }, caller)?;
        if let Some(record) = updated {
            self.will_record = record;
        }
        Ok(verified)
    }
}
