//! Guardian domain module.
//!
//! - [`GuardianRoster`]: guardians chosen by the testator while building a will.
//! - [`WillRecord`]: a deployed will as seen from a guardian's wallet.

mod roster;
mod will_record;

pub use roster::{Guardian, GuardianRoster};
pub use will_record::{WillGuardian, WillRecord};
