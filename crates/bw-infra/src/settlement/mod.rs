mod tokio_settlement;

pub use tokio_settlement::{SettlementDelays, TokioSettlement};
