use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Guardian roster entry identifier
/// Format: "{unix_ms}-{random base36 suffix}"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuardianId(String);

impl GuardianId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Generate a time-based id with a random suffix.
    pub fn generate(now_ms: i64) -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{now_ms}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for GuardianId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GuardianId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GuardianId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
