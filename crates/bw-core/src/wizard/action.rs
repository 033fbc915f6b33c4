/// Side-effects produced by wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Compose the will snapshot, request a wallet signature, wait for the
    /// deployment settlement and mint a contract address.
    SignAndDeploy,

    /// Wait for the guardian's verification to settle.
    SettlePassingVerification,
}
