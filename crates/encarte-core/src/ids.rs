//! String-backed identifiers.
//!
//! Both ids serialize as bare JSON strings so stored records keep the shape
//! other clients expect.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Fresh id, unique within this installation.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl<'a> From<&'a str> for $name {
            fn from(id: &'a str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id!(
    /// Identifies one product on the flyer.
    ProductId
);
string_id!(
    /// Identifies the stored flyer.
    FlyerId
);

impl FlyerId {
    /// The id of the one flyer kept per installation.
    pub fn singleton() -> Self {
        Self::new("1")
    }
}

impl Default for FlyerId {
    fn default() -> Self {
        Self::singleton()
    }
}

/// Short lowercase hex token from the clock and a process-wide counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    // Counter in the high bits keeps ids distinct even when the clock stalls
    let combined = timestamp.rotate_left(17) ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    format!("{:x}", combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("abc123");
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_id_generation_is_unique() {
        let ids: HashSet<ProductId> = (0..1000).map(|_| ProductId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_flyer_singleton() {
        assert_eq!(FlyerId::singleton().as_str(), "1");
        assert_eq!(FlyerId::default(), FlyerId::singleton());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("k9x")).unwrap();
        assert_eq!(json, "\"k9x\"");
        let id: ProductId = serde_json::from_str("\"k9x\"").unwrap();
        assert_eq!(id, ProductId::from("k9x"));
    }
}
