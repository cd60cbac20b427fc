//! Account and asset identities.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// A 20-byte ledger identity, used both for accounts (owner, providers,
/// traders, the pool itself) and for the two pooled assets.
///
/// All byte sequences are valid; the all-zero address is the "unset"
/// sentinel and is rejected wherever a real identity is required.
///
/// # Examples
///
/// ```
/// use cp_amm::domain::Address;
///
/// let addr: Address = "0x8B0180f2101c8260d49339abfEe87927412494B4".parse().expect("hex");
/// assert!(!addr.is_zero());
/// assert_eq!(addr.to_string(), "0x8b0180f2101c8260d49339abfee87927412494b4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Convenience constructor filling every byte with `byte`.
    ///
    /// Handy for fixtures: `Address::repeat(1)` is `0x0101…01`.
    #[must_use]
    pub const fn repeat(byte: u8) -> Self {
        Self([byte; 20])
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AmmError;

    /// Parses a hex address with or without the `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| AmmError::InvalidAsset("expected 40 hex digits"))?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default() {
        assert!(Address::ZERO.is_zero());
        assert_eq!(Address::default(), Address::ZERO);
        assert!(!Address::repeat(1).is_zero());
    }

    #[test]
    fn parse_with_and_without_prefix() {
        let Ok(a) = "0x0101010101010101010101010101010101010101".parse::<Address>() else {
            panic!("valid hex");
        };
        let Ok(b) = "0101010101010101010101010101010101010101".parse::<Address>() else {
            panic!("valid hex");
        };
        assert_eq!(a, Address::repeat(1));
        assert_eq!(a, b);
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("zz".repeat(20).parse::<Address>().is_err());
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(
            Address::repeat(0xab).to_string(),
            format!("0x{}", "ab".repeat(20))
        );
    }
}
