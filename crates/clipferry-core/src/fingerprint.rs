//! Content fingerprinting.
//!
//! Reduces an arbitrary byte payload to a fixed-size Blake3 digest used for
//! cheap equality comparison. Fingerprints have no ordering, only equality;
//! they are never used to reconstruct content.

use std::fmt;

/// A 32-byte Blake3 digest of a byte payload.
///
/// Two payloads with equal fingerprints are treated as identical content
/// (collision probability treated as negligible).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// Compute the fingerprint of the given payload.
    ///
    /// Pure, deterministic, and total, including for empty input.
    pub fn of(payload: &[u8]) -> Self {
        Self(*blake3::hash(payload).as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The zero fingerprint.
    ///
    /// Used as the "never observed" sentinel, indistinguishable from empty
    /// content by construction.
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Fingerprint {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fingerprint_deterministic() {
        let data = b"clipboard payload";
        let f1 = Fingerprint::of(data);
        let f2 = Fingerprint::of(data);
        assert_eq!(f1, f2);

        let different = b"other payload";
        let f3 = Fingerprint::of(different);
        assert_ne!(f1, f3);
    }

    #[test]
    fn test_fingerprint_total_on_empty_input() {
        let f = Fingerprint::of(b"");
        assert_eq!(f, Fingerprint::of(&[]));
        // Empty content does not hash to the zero sentinel.
        assert_ne!(f, Fingerprint::ZERO);
    }

    #[test]
    fn test_fingerprint_display() {
        let f = Fingerprint::from_bytes([0xab; 32]);
        assert_eq!(format!("{}", f), "abababababababab");
    }

    #[test]
    fn test_fingerprint_debug() {
        let f = Fingerprint::from_bytes([0xcd; 32]);
        assert!(format!("{:?}", f).starts_with("Fingerprint("));
    }

    proptest! {
        #[test]
        fn prop_fingerprint_deterministic(payload: Vec<u8>) {
            prop_assert_eq!(Fingerprint::of(&payload), Fingerprint::of(&payload));
        }

        #[test]
        fn prop_distinct_payloads_distinct_fingerprints(a: Vec<u8>, b: Vec<u8>) {
            prop_assume!(a != b);
            prop_assert_ne!(Fingerprint::of(&a), Fingerprint::of(&b));
        }
    }
}
