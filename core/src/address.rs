//! Account addresses

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque account identifier.
///
/// The host environment guarantees authenticity of the caller address;
/// the stack only compares addresses for authorization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn new(id: impl Into<String>) -> Self {
        Address(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(id: &str) -> Self {
        Address(id.to_string())
    }
}

impl From<String> for Address {
    fn from(id: String) -> Self {
        Address(id)
    }
}
