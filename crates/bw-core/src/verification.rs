//! Death-verification methods chosen for a will.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    /// Trusted guardians confirm the passing. Always required.
    Guardian,
    /// Government death registry check.
    Government,
    /// Periodic proof-of-life check-ins.
    Heartbeat,
}

impl VerificationMethod {
    pub const ALL: [VerificationMethod; 3] = [
        VerificationMethod::Guardian,
        VerificationMethod::Government,
        VerificationMethod::Heartbeat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMethod::Guardian => "guardian",
            VerificationMethod::Government => "government",
            VerificationMethod::Heartbeat => "heartbeat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationMethod::Guardian => "Guardian verification (required)",
            VerificationMethod::Government => "Government registry check",
            VerificationMethod::Heartbeat => "Activity heartbeat",
        }
    }
}

impl Display for VerificationMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guardian" => Ok(VerificationMethod::Guardian),
            "government" => Ok(VerificationMethod::Government),
            "heartbeat" => Ok(VerificationMethod::Heartbeat),
            other => Err(format!("unknown verification method: {other}")),
        }
    }
}

/// Selected verification methods. `guardian` is always a member.
///
/// Methods other than `guardian` are informational and never gate the
/// wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationMethodSet {
    selected: BTreeSet<VerificationMethod>,
}

impl VerificationMethodSet {
    pub fn new() -> Self {
        Self {
            selected: BTreeSet::from([VerificationMethod::Guardian]),
        }
    }

    /// Flip membership of `method`. Requests against `guardian` are ignored.
    pub fn toggle(&mut self, method: VerificationMethod) {
        if method == VerificationMethod::Guardian {
            return;
        }
        if !self.selected.remove(&method) {
            self.selected.insert(method);
        }
    }

    pub fn is_selected(&self, method: VerificationMethod) -> bool {
        self.selected.contains(&method)
    }

    pub fn iter(&self) -> impl Iterator<Item = VerificationMethod> + '_ {
        self.selected.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<VerificationMethod> {
        self.iter().collect()
    }
}

impl Default for VerificationMethodSet {
    fn default() -> Self {
        Self::new()
    }
}
