//! Session identity for log correlation.

use std::sync::atomic::{AtomicU32, Ordering};

/// Identifier for one storefront session (one mounted view).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

static NEXT_SEQUENCE: AtomicU32 = AtomicU32::new(1);

impl SessionId {
    /// Generate a new session ID.
    ///
    /// Unique within the process; not meant to be unguessable.
    pub fn generate() -> Self {
        let seq = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let mixed = seq.wrapping_mul(1103515245).wrapping_add(12345);
        Self(format!("sess-{:04x}-{:08x}", seq, mixed))
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

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
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
        assert!(a.as_str().starts_with("sess-"));
    }

    #[test]
    fn test_from_string() {
        let id = SessionId::from_string("abc");
        assert_eq!(id.to_string(), "abc");
    }
}
