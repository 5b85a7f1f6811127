//! Cipher key type and deterministic key derivation.
//!
//! The derived key is produced by a two-stage procedure: an accumulation
//! over a fixed pair of nested ranges, followed by a convergence loop that
//! walks the accumulated total to [`CONVERGENCE_TARGET`]. The output is
//! invariant (always 13); the stages are kept separate so the convergence
//! behaviour itself can be exercised from any starting point.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::CipherError;

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: i64 = 26;

/// Value the convergence loop settles on.
pub const CONVERGENCE_TARGET: i16 = 13;

/// Counter threshold that ends the convergence loop.
const CONVERGENCE_ROUNDS: u32 = 5;

/// Step applied to the counter while the total sits on the target.
const COUNTER_STEP: u32 = 2;

/// Integer shift applied by the Caesar cipher.
///
/// Any `i64` is a valid key. Negative values shift backwards and
/// magnitudes beyond the alphabet wrap; use [`normalized`](Self::normalized)
/// to obtain the equivalent shift in `[0, 25]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CipherKey(i64);

impl CipherKey {
    /// Wraps a raw shift value.
    pub const fn new(shift: i64) -> Self {
        CipherKey(shift)
    }

    /// Returns the key produced by [`derive_key`].
    pub fn derived() -> Self {
        CipherKey(derive_key())
    }

    /// Returns the raw, unnormalized shift.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the equivalent forward shift in `[0, 25]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesar_toolkit::CipherKey;
    ///
    /// assert_eq!(CipherKey::new(-1).normalized(), 25);
    /// assert_eq!(CipherKey::new(29).normalized(), 3);
    /// ```
    pub fn normalized(self) -> u8 {
        // rem_euclid keeps the result non-negative, so the cast cannot truncate
        self.0.rem_euclid(ALPHABET_LEN) as u8
    }

    /// Returns the key that undoes this one, congruent to `-self` modulo 26.
    ///
    /// Negates the normalized shift so that `i64::MIN` has an inverse.
    pub fn inverse(self) -> Self {
        CipherKey(-i64::from(self.normalized()))
    }
}

impl From<i64> for CipherKey {
    fn from(shift: i64) -> Self {
        CipherKey(shift)
    }
}

impl From<u8> for CipherKey {
    fn from(shift: u8) -> Self {
        CipherKey(i64::from(shift))
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CipherKey {
    type Err = CipherError;

    /// Parses a base-10 integer key, surrounding whitespace allowed.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidArgument`] if the text is empty or not
    /// an integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CipherError::InvalidArgument(
                "key must not be empty".to_string(),
            ));
        }
        trimmed.parse::<i64>().map(CipherKey).map_err(|_| {
            CipherError::InvalidArgument(format!("key '{}' is not an integer", trimmed))
        })
    }
}

/// Stage one: accumulates a total over `i in 0..5`, `j in 0..3`.
///
/// Pairs with `i + j == 5` add their sum; every other pair subtracts
/// `i - j`.
pub fn accumulate() -> i16 {
    let mut total: i16 = 0;
    for i in 0..5i16 {
        for j in 0..3i16 {
            if i + j == 5 {
                total += i + j;
            } else {
                total -= i - j;
            }
        }
    }
    total
}

/// Stage two: walks `total` one step at a time toward
/// [`CONVERGENCE_TARGET`] and returns once the counter reaches its limit.
///
/// The counter only advances while the total equals the target, so the
/// result is the target for every starting value.
///
/// # Performance
/// Takes one step per unit of distance from the target, so the start is
/// bounded to `i16`: the worst case (`i16::MIN`) is about 32k steps.
pub fn converge(start: i16) -> i16 {
    let mut total = start;
    let mut counter: u32 = 0;
    while counter < CONVERGENCE_ROUNDS {
        if total < CONVERGENCE_TARGET {
            total += 1;
        } else if total > CONVERGENCE_TARGET {
            total -= 1;
        } else {
            counter += COUNTER_STEP;
        }
    }
    total
}

/// Derives the fixed cipher key.
///
/// Deterministic and side-effect free; always returns 13.
///
/// # Examples
///
/// ```
/// assert_eq!(caesar_toolkit::derive_key(), 13);
/// ```
pub fn derive_key() -> i64 {
    let total = accumulate();
    debug!("key derivation: accumulated total {}", total);
    let key = converge(total);
    debug!("key derivation: converged to {}", key);
    i64::from(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_value() {
        // Sum of (i - j) over the grid is 15; the two pairs summing to 5
        // contribute +5 each instead of -(1) and -(3).
        assert_eq!(accumulate(), -1);
    }

    #[test]
    fn test_derive_key_is_thirteen() {
        assert_eq!(derive_key(), 13);
        assert_eq!(derive_key(), derive_key());
    }

    #[test]
    fn test_converge_from_below_and_above() {
        for start in [-500, -1, 0, 12, 13, 14, 26, 1000] {
            assert_eq!(converge(start), CONVERGENCE_TARGET, "start={}", start);
        }
    }

    #[test]
    fn test_converge_at_type_extremes() {
        assert_eq!(converge(i16::MIN), CONVERGENCE_TARGET);
        assert_eq!(converge(i16::MAX), CONVERGENCE_TARGET);
    }

    #[test]
    fn test_normalized_range() {
        assert_eq!(CipherKey::new(0).normalized(), 0);
        assert_eq!(CipherKey::new(26).normalized(), 0);
        assert_eq!(CipherKey::new(-26).normalized(), 0);
        assert_eq!(CipherKey::new(-27).normalized(), 25);
        assert_eq!(CipherKey::new(52 + 5).normalized(), 5);
        assert!(CipherKey::new(i64::MIN).normalized() < 26);
        assert!(CipherKey::new(i64::MAX).normalized() < 26);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(CipherKey::new(3).inverse(), CipherKey::new(-3));
        assert_eq!(CipherKey::new(0).inverse(), CipherKey::new(0));
        assert_eq!(CipherKey::new(29).inverse(), CipherKey::new(-3));
        assert_eq!(CipherKey::new(i64::MIN).inverse().normalized(), 8);
        let k = CipherKey::new(7);
        assert_eq!((k.normalized() + k.inverse().normalized()) % 26, 0);
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("13".parse::<CipherKey>(), Ok(CipherKey::new(13)));
        assert_eq!("  -4\n".parse::<CipherKey>(), Ok(CipherKey::new(-4)));
        assert_eq!("+30".parse::<CipherKey>(), Ok(CipherKey::new(30)));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(matches!(
            "three".parse::<CipherKey>(),
            Err(CipherError::InvalidArgument(_))
        ));
        assert!(matches!(
            "2.5".parse::<CipherKey>(),
            Err(CipherError::InvalidArgument(_))
        ));
        assert_eq!(
            "   ".parse::<CipherKey>(),
            Err(CipherError::InvalidArgument("key must not be empty".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CipherKey::new(-7).to_string(), "-7");
        assert_eq!(CipherKey::derived().to_string(), "13");
    }
}
