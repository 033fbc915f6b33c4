//! Will deployment domain module.
//!
//! A deployment signs a [`WillSnapshot`] and yields a [`DeploymentRecord`]
//! with a mock contract address. Records live only in the session.

mod message;
mod record;
mod snapshot;

pub use message::{deployment_message, share_text, SHARE_HASHTAGS};
pub use record::{ContractAddress, DeploymentRecord, Signature};
pub use snapshot::{SnapshotAsset, WillSnapshot};
