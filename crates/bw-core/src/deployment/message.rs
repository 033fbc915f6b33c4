use chrono::{DateTime, SecondsFormat};

use crate::deployment::{DeploymentRecord, WillSnapshot};

pub const SHARE_HASHTAGS: &str = "#BaseWill #DigitalInheritance #Web3Legacy #Base";

/// Human-readable message the testator signs to deploy a will.
///
/// The snapshot JSON is embedded verbatim so the signature covers the full
/// configuration.
pub fn deployment_message(snapshot: &WillSnapshot) -> serde_json::Result<String> {
    let signed_at = DateTime::from_timestamp_millis(snapshot.timestamp)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| snapshot.timestamp.to_string());

    Ok(format!(
        "Base Will Digital Will Deployment\n\n\
         Creator: {creator}\n\
         Guardians: {guardians}\n\
         Assets: {assets} (Total: ${total})\n\
         Timestamp: {signed_at}\n\n\
         By signing this message, I confirm the deployment of my digital inheritance will \
         with the above configuration.\n\n\
         Data Hash: {json}",
        creator = snapshot.creator,
        guardians = snapshot.guardians.len(),
        assets = snapshot.assets.len(),
        total = snapshot.total_value,
        json = snapshot.to_json()?,
    ))
}

/// Text posted when the testator shares a deployed will.
pub fn share_text(record: &DeploymentRecord) -> String {
    let guardians = record.snapshot.guardians.len();
    format!(
        "Just secured my digital inheritance on Base!\n\n\
         Will Contract: {address}\n\
         Protected by {guardians} guardian{plural}\n\
         Vault Value: ${total} USD\n\n\
         {SHARE_HASHTAGS}",
        address = record.contract_address,
        plural = if guardians == 1 { "" } else { "s" },
        total = record.snapshot.total_value,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::WalletAddress;
    use crate::deployment::{ContractAddress, Signature};
    use crate::vault::UsdValue;

    fn snapshot(guardians: usize) -> WillSnapshot {
        WillSnapshot {
            creator: WalletAddress::parse("0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0").unwrap(),
            guardians: (1..=guardians)
                .map(|i| WalletAddress::parse(&format!("0x{i:040x}")).unwrap())
                .collect(),
            assets: Vec::new(),
            verification_methods: Vec::new(),
            timestamp: 0,
            total_value: UsdValue::from_dollars(4800),
        }
    }

    #[test]
    fn message_embeds_summary_and_json() {
        let message = deployment_message(&snapshot(2)).unwrap();
        assert!(message.contains("Creator: 0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0"));
        assert!(message.contains("Guardians: 2"));
        assert!(message.contains("(Total: $4800.00)"));
        assert!(message.contains("Timestamp: 1970-01-01T00:00:00.000Z"));
        assert!(message.contains(r#"Data Hash: {"creator":"#));
    }

    #[test]
    fn share_text_pluralizes_guardians() {
        let record = |n| DeploymentRecord {
            contract_address: ContractAddress::from_hex_fragment("ab"),
            signature: Signature::new("0xsig".to_string()),
            snapshot: snapshot(n),
        };
        assert!(share_text(&record(1)).contains("Protected by 1 guardian\n"));
        assert!(share_text(&record(3)).contains("Protected by 3 guardians\n"));
        assert!(share_text(&record(1)).contains("Vault Value: $4800.00 USD"));
    }
}
