//! Page session identifiers.

use std::fmt;

use rand::Rng;
use serde::Serialize;

/// Identifier for one page session, attached to every log entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a random session ID: `sess_` followed by 24 hex digits.
    pub fn generate() -> Self {
        let bytes: [u8; 12] = rand::thread_rng().gen();
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self(format!("sess_{hex}"))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert_eq!(SessionId::from_string("abc").as_str(), "abc");
    }

    #[test]
    fn test_generated_id_shape() {
        let id = SessionId::generate();
        let hex = id.as_str().strip_prefix("sess_").unwrap();
        assert_eq!(hex.len(), 24);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
