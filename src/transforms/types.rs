//! Core shift types and error definitions
//!
//! Contains the small value types shared by every displacement variant
//! (`Axis`, `Sign`, `EquationForm`), the `ShiftKind` selector used by the
//! manager, and `ShiftError` for the image application pass.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

/// Errors that can occur while applying a shift pass to an image
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ShiftError {
    /// One shift value is required per row (horizontal) or column (vertical)
    #[error("expected {expected} shift values (one per line), got {actual}")]
    LineCountMismatch { expected: usize, actual: usize },

    /// Unknown variant name
    #[error("unknown shift type: {0}")]
    UnknownKind(String),

    /// Image dimension does not fit the signed pixel coordinate range
    #[error("dimension {0} exceeds the maximum of 2147483647")]
    DimensionTooLarge(u32),
}

/// Axis a shift pass operates along.
///
/// Horizontal passes displace pixels within a row (x is the primary
/// coordinate), vertical passes displace pixels within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Split `(x, y)` into `(primary, other)` for this axis.
    #[inline]
    pub fn split(self, x: i32, y: i32) -> (i32, i32) {
        match self {
            Axis::Horizontal => (x, y),
            Axis::Vertical => (y, x),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Direction of a signed term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Multiplier for this sign: `1.0` or `-1.0`
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Positive => write!(f, "+"),
            Sign::Negative => write!(f, "-"),
        }
    }
}

/// Which coordinate the linear equation is solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EquationForm {
    /// `y = m*x + shift`
    #[default]
    #[serde(rename = "y-of-x")]
    YOfX,
    /// `x = m*y + shift`
    #[serde(rename = "x-of-y")]
    XOfY,
}

impl EquationForm {
    /// Short tag used in step descriptions
    pub fn tag(self) -> &'static str {
        match self {
            EquationForm::YOfX => "yx",
            EquationForm::XOfY => "xy",
        }
    }
}

/// The closed set of displacement variants, in selector order.
///
/// The discriminants double as the index a UI drop-down reports, so the
/// order here is part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftKind {
    #[default]
    Default = 0,
    Scale = 1,
    Linear = 2,
    Skew = 3,
    XyMultiply = 4,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 5] = [
        ShiftKind::Default,
        ShiftKind::Scale,
        ShiftKind::Linear,
        ShiftKind::Skew,
        ShiftKind::XyMultiply,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a variant by selector index.
    ///
    /// Returns `None` for anything outside `0..5`.
    pub fn from_index(index: i64) -> Option<ShiftKind> {
        usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Like [`ShiftKind::from_index`], but out-of-range indices select `Default`.
    pub fn from_index_or_default(index: i64) -> ShiftKind {
        Self::from_index(index).unwrap_or_else(|| {
            debug!("shift index {} out of range, falling back to default", index);
            ShiftKind::Default
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            ShiftKind::Default => "default",
            ShiftKind::Scale => "scale",
            ShiftKind::Linear => "linear",
            ShiftKind::Skew => "skew",
            ShiftKind::XyMultiply => "xy-multiply",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShiftKind {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "none" => Ok(ShiftKind::Default),
            "scale" => Ok(ShiftKind::Scale),
            "linear" => Ok(ShiftKind::Linear),
            "skew" => Ok(ShiftKind::Skew),
            "xy-multiply" | "xymultiply" | "xy_multiply" | "xymult" => Ok(ShiftKind::XyMultiply),
            other => match other.parse::<i64>() {
                // A bare selector index clamps like any other index selection
                Ok(index) => Ok(ShiftKind::from_index_or_default(index)),
                Err(_) => Err(ShiftError::UnknownKind(s.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_split() {
        assert_eq!(Axis::Horizontal.split(3, 7), (3, 7));
        assert_eq!(Axis::Vertical.split(3, 7), (7, 3));
    }

    #[test]
    fn test_sign_factor() {
        assert_eq!(Sign::Positive.factor(), 1.0);
        assert_eq!(Sign::Negative.factor(), -1.0);
        assert_eq!(Sign::Negative.to_string(), "-");
    }

    #[test]
    fn test_kind_from_index() {
        assert_eq!(ShiftKind::from_index(0), Some(ShiftKind::Default));
        assert_eq!(ShiftKind::from_index(4), Some(ShiftKind::XyMultiply));
        assert_eq!(ShiftKind::from_index(5), None);
        assert_eq!(ShiftKind::from_index(-1), None);
        for kind in ShiftKind::ALL {
            assert_eq!(ShiftKind::from_index(kind.index() as i64), Some(kind));
        }
    }

    #[test]
    fn test_kind_from_index_or_default() {
        assert_eq!(ShiftKind::from_index_or_default(3), ShiftKind::Skew);
        assert_eq!(ShiftKind::from_index_or_default(99), ShiftKind::Default);
        assert_eq!(ShiftKind::from_index_or_default(-7), ShiftKind::Default);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Skew".parse::<ShiftKind>(), Ok(ShiftKind::Skew));
        assert_eq!("xy-multiply".parse::<ShiftKind>(), Ok(ShiftKind::XyMultiply));
        assert_eq!("2".parse::<ShiftKind>(), Ok(ShiftKind::Linear));
        assert_eq!("99".parse::<ShiftKind>(), Ok(ShiftKind::Default));
        assert_eq!("-1".parse::<ShiftKind>(), Ok(ShiftKind::Default));
        assert_eq!(
            "wobble".parse::<ShiftKind>(),
            Err(ShiftError::UnknownKind("wobble".to_string()))
        );
    }

    #[test]
    fn test_equation_form_serde_names() {
        let json = serde_json::to_string(&EquationForm::XOfY).unwrap();
        assert_eq!(json, "\"x-of-y\"");
        let kind: ShiftKind = serde_json::from_str("\"xy-multiply\"").unwrap();
        assert_eq!(kind, ShiftKind::XyMultiply);
    }
}
