//! European option kind.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Kind of European option.
///
/// A closed enumeration: string input goes through [`FromStr`], which
/// rejects anything other than `call` or `put` instead of defaulting.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, PricingError};
///
/// assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
/// assert_eq!(
///     "straddle".parse::<OptionKind>(),
///     Err(PricingError::InvalidOptionKind("straddle".to_string()))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Returns the lowercase name used on the wire and in the CLI.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(PricingError::InvalidOptionKind(s.to_string())),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
