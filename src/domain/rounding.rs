//! Explicit rounding direction for integer division.

/// Rounding direction for every division on [`Amount`](super::Amount).
///
/// Pool outputs (swap output, withdrawal amounts, minted shares) always use
/// [`Rounding::Down`] so truncation favours the pool.  [`Rounding::Up`] is
/// used only to compute upper tolerance bounds, such as the largest
/// acceptable counterpart of a ratio-matched deposit.
///
/// # Examples
///
/// ```
/// use cp_amm::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(Rounding::Up.is_up());
        assert!(Rounding::Down.is_down());
        assert_ne!(Rounding::Up, Rounding::Down);
    }
}
