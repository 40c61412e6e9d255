//! Integers extended with positive and negative infinity.
//!
//! Search bounds start out unbounded, so node values and the alpha/beta window
//! are expressed as `ExtendedInteger` rather than with `i64::MIN`/`i64::MAX`
//! sentinels that could collide with real evaluations.

use std::fmt;

/// Either an infinity or a finite score.
///
/// The variant order defines the total order:
/// `NegInfinity < Number(_) < PosInfinity`, with numbers compared normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtendedInteger {
    NegInfinity,
    Number(i64),
    PosInfinity,
}

impl ExtendedInteger {
    pub fn is_finite(self) -> bool {
        matches!(self, ExtendedInteger::Number(_))
    }

    /// Returns the finite value, or `None` for either infinity.
    pub fn as_number(self) -> Option<i64> {
        match self {
            ExtendedInteger::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl From<i64> for ExtendedInteger {
    fn from(n: i64) -> Self {
        ExtendedInteger::Number(n)
    }
}

impl fmt::Display for ExtendedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedInteger::NegInfinity => write!(f, "-inf"),
            ExtendedInteger::Number(n) => write!(f, "{}", n),
            ExtendedInteger::PosInfinity => write!(f, "+inf"),
        }
    }
}
