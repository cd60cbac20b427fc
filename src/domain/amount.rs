//! Raw asset amount backed by a 256-bit unsigned integer.

use core::fmt;

use primitive_types::U256;

use super::Rounding;

/// A raw asset amount in the smallest unit (wei or equivalent).
///
/// `Amount` is a 256-bit unsigned integer, the native width of the ledgers
/// the pool settles against.  It never interprets decimals; helpers such as
/// [`Amount::from_units`] exist for building human-scale values.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking or wrapping.
///
/// # Examples
///
/// ```
/// use cp_amm::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(b.checked_div(&Amount::new(3), Rounding::Down), Some(Amount::new(66)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Maximum representable amount (`2^256 - 1`).
    pub const MAX: Self = Self(U256::MAX);

    /// Creates a new `Amount` from a `u128` value.
    pub fn new(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Wraps a raw [`U256`].
    pub const fn from_raw(value: U256) -> Self {
        Self(value)
    }

    /// Builds `whole × 10^decimals`, e.g. `from_units(1_000, 18)` is 1 000
    /// tokens of an 18-decimal asset.
    ///
    /// Returns `None` if the result does not fit in 256 bits.
    #[must_use]
    pub fn from_units(whole: u128, decimals: u8) -> Option<Self> {
        let scale = U256::from(10u8).checked_pow(U256::from(decimals))?;
        U256::from(whole).checked_mul(scale).map(Self)
    }

    /// Returns the underlying [`U256`] value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns the value as `u128` if it fits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.0 > U256::from(u128::MAX) {
            return None;
        }
        Some(self.0.as_u128())
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Checked division with explicit rounding direction.
    ///
    /// - [`Rounding::Down`]: floor division (round towards zero).
    /// - [`Rounding::Up`]: ceiling division.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0.is_zero() {
            return None;
        }
        let (q, r) = self.0.div_mod(divisor.0);
        match rounding {
            Rounding::Down => Some(Self(q)),
            // q + 1 cannot overflow: a non-zero remainder implies divisor > 1.
            Rounding::Up if !r.is_zero() => Some(Self(q + U256::one())),
            Rounding::Up => Some(Self(q)),
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), U256::from(42u8));
    }

    #[test]
    fn constants() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::MAX.get(), U256::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn from_units_scales_by_decimals() {
        let Some(one_ether) = Amount::from_units(1, 18) else {
            panic!("fits");
        };
        assert_eq!(one_ether, Amount::new(1_000_000_000_000_000_000));
        let Some(big) = Amount::from_units(1_000_000, 18) else {
            panic!("fits");
        };
        assert_eq!(big.to_u128(), Some(1_000_000 * 10u128.pow(18)));
    }

    #[test]
    fn from_units_overflow() {
        assert_eq!(Amount::from_units(u128::MAX, 60), None);
    }

    #[test]
    fn to_u128_bounds() {
        assert_eq!(Amount::new(u128::MAX).to_u128(), Some(u128::MAX));
        let Some(above) = Amount::new(u128::MAX).checked_add(&Amount::new(1)) else {
            panic!("fits in 256 bits");
        };
        assert_eq!(above.to_u128(), None);
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn add_and_overflow() {
        assert_eq!(
            Amount::new(100).checked_add(&Amount::new(200)),
            Some(Amount::new(300))
        );
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_and_underflow() {
        assert_eq!(
            Amount::new(300).checked_sub(&Amount::new(100)),
            Some(Amount::new(200))
        );
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn mul_beyond_u128_fits_u256() {
        let a = Amount::new(u128::MAX);
        assert!(a.checked_mul(&a).is_some());
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    #[test]
    fn div_rounding() {
        let ten = Amount::new(10);
        let three = Amount::new(3);
        assert_eq!(ten.checked_div(&three, Rounding::Down), Some(Amount::new(3)));
        assert_eq!(ten.checked_div(&three, Rounding::Up), Some(Amount::new(4)));
        assert_eq!(
            Amount::new(9).checked_div(&three, Rounding::Up),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(Amount::new(1).checked_div(&Amount::ZERO, Rounding::Down), None);
        assert_eq!(Amount::new(1).checked_div(&Amount::ZERO, Rounding::Up), None);
    }

    #[test]
    fn div_max_round_up() {
        let Some(ceil) = Amount::MAX.checked_div(&Amount::new(2), Rounding::Up) else {
            panic!("non-zero divisor");
        };
        let Some(floor) = Amount::MAX.checked_div(&Amount::new(2), Rounding::Down) else {
            panic!("non-zero divisor");
        };
        assert_eq!(ceil.checked_sub(&floor), Some(Amount::new(1)));
    }
}
