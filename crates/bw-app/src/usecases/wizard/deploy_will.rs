use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use bw_core::deployment::deployment_message;
use bw_core::ports::{
    ContractAddressPort, SettlementKind, SettlementPort, SigningError, WalletPort,
};
use bw_core::{ContractAddress, DeploymentRecord, WillSnapshot};

/// Use case for signing and deploying a will snapshot.
///
/// The wallet signs a human-readable message embedding the snapshot, the
/// deployment settles, and a mock contract address is minted. Settlement
/// failures are reported as [`SigningError::Other`].
pub struct DeployWill {
    wallet: Arc<dyn WalletPort>,
    settlement: Arc<dyn SettlementPort>,
    contract_addresses: Arc<dyn ContractAddressPort>,
}

impl DeployWill {
    pub fn new(
        wallet: Arc<dyn WalletPort>,
        settlement: Arc<dyn SettlementPort>,
        contract_addresses: Arc<dyn ContractAddressPort>,
    ) -> Self {
        Self {
            wallet,
            settlement,
            contract_addresses,
        }
    }

    pub async fn execute(&self, snapshot: WillSnapshot) -> Result<DeploymentRecord, SigningError> {
        let span = info_span!(
            "usecase.deploy_will.execute",
            guardians = snapshot.guardians.len(),
            assets = snapshot.assets.len(),
            total = %snapshot.total_value,
        );
        async move {
            let message = deployment_message(&snapshot)
                .map_err(|err| SigningError::Other(format!("encode will snapshot: {err}")))?;

            let signature = self.wallet.sign_message(&message).await.map_err(|err| {
                warn!(detail = err.detail(), "will signature not obtained");
                err
            })?;
            debug!("will message signed");

            self.settlement
                .settle(SettlementKind::Deployment)
                .await
                .map_err(|err| {
                    warn!(error = %err, "deployment settlement failed");
                    SigningError::Other(err.to_string())
                })?;

            let contract_address =
                ContractAddress::from_hex_fragment(&self.contract_addresses.next_hex_fragment());
            info!(contract = %contract_address, "will deployed");

            Ok(DeploymentRecord {
                contract_address,
                signature,
                snapshot,
            })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_core::ports::SettlementError;
    use bw_core::{GuardianRoster, Signature, VaultLedger, VerificationMethodSet, WalletAddress};
    use mockall::predicate::*;

    mockall::mock! {
        pub Wallet {}

        #[async_trait::async_trait]
        impl WalletPort for Wallet {
            fn connected_address(&self) -> Option<WalletAddress>;
            async fn sign_message(&self, message: &str) -> Result<Signature, SigningError>;
        }
    }

    mockall::mock! {
        pub Settlement {}

        #[async_trait::async_trait]
        impl SettlementPort for Settlement {
            async fn settle(&self, kind: SettlementKind) -> Result<(), SettlementError>;
        }
    }

    mockall::mock! {
        pub Addresses {}

        impl ContractAddressPort for Addresses {
            fn next_hex_fragment(&self) -> String;
        }
    }

    fn snapshot() -> WillSnapshot {
        let mut roster = GuardianRoster::new();
        roster
            .add_at("0x0000000000000000000000000000000000000001", 1)
            .unwrap();
        WillSnapshot::compose(
            WalletAddress::parse("0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0").unwrap(),
            &roster,
            &VaultLedger::new(),
            &VerificationMethodSet::new(),
            0,
        )
    }

    fn addresses() -> MockAddresses {
        let mut addresses = MockAddresses::new();
        addresses
            .expect_next_hex_fragment()
            .returning(|| "abc123".to_string());
        addresses
    }

    #[tokio::test]
    async fn deploy_will_signs_settles_and_mints_address() {
        let mut wallet = MockWallet::new();
        wallet
            .expect_sign_message()
            .withf(|message: &str| message.starts_with("Base Will Digital Will Deployment"))
            .times(1)
            .returning(|_| Ok(Signature::new("0xsig".to_string())));
        let mut settlement = MockSettlement::new();
        settlement
            .expect_settle()
            .with(eq(SettlementKind::Deployment))
            .times(1)
            .returning(|_| Ok(()));

        let usecase = DeployWill::new(
            Arc::new(wallet),
            Arc::new(settlement),
            Arc::new(addresses()),
        );
        let record = usecase.execute(snapshot()).await.unwrap();

        assert_eq!(record.signature.as_str(), "0xsig");
        assert_eq!(record.contract_address.as_str().len(), 42);
        assert!(record.contract_address.as_str().starts_with("0xabc123"));
    }

    #[tokio::test]
    async fn deploy_will_rejection_skips_settlement() {
        let mut wallet = MockWallet::new();
        wallet
            .expect_sign_message()
            .returning(|_| Err(SigningError::UserRejected));
        let mut settlement = MockSettlement::new();
        settlement.expect_settle().times(0);

        let usecase = DeployWill::new(
            Arc::new(wallet),
            Arc::new(settlement),
            Arc::new(MockAddresses::new()),
        );
        let err = usecase.execute(snapshot()).await.unwrap_err();

        assert_eq!(err, SigningError::UserRejected);
    }

    #[tokio::test]
    async fn deploy_will_settlement_failure_is_reported_as_other() {
        let mut wallet = MockWallet::new();
        wallet
            .expect_sign_message()
            .returning(|_| Ok(Signature::new("0xsig".to_string())));
        let mut settlement = MockSettlement::new();
        settlement.expect_settle().returning(|_| {
            Err(SettlementError::Failed {
                kind: "deployment",
                reason: "reorg".to_string(),
            })
        });

        let usecase = DeployWill::new(
            Arc::new(wallet),
            Arc::new(settlement),
            Arc::new(MockAddresses::new()),
        );
        let err = usecase.execute(snapshot()).await.unwrap_err();

        assert!(matches!(err, SigningError::Other(_)));
        assert_eq!(err.to_string(), "Failed to deploy will. Please try again.");
    }
}
