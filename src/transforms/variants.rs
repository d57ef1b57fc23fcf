//! Displacement variants
//!
//! Each variant is a self-contained offset function with its own parameter
//! set. All arithmetic happens in `f64` and is truncated toward zero at the
//! end; the cast saturates, so infinities from a zero divisor land on
//! `i32::MIN`/`i32::MAX` and NaN lands on 0.

use serde::{Deserialize, Serialize};

use super::types::{Axis, EquationForm, Sign};

/// A pixel-displacement function.
///
/// `offset` is called once per pixel (or per line) by a render pass and must
/// stay allocation-free. `describe` produces a short, filename-safe tag for
/// the variant's current configuration.
pub trait Displacement {
    /// Compute the displaced coordinate along `axis` for pixel `(x, y)`.
    fn offset(&self, x: i32, y: i32, width: u32, height: u32, shift: i32, axis: Axis) -> i32;

    /// Short tag describing the current parameters.
    fn describe(&self) -> String;
}

/// Truncate toward zero, like a C integer cast.
#[inline]
fn truncate(value: f64) -> i32 {
    value as i32
}

/// Render a parameter for a step description.
///
/// At most three decimals with trailing zeros dropped; magnitudes outside
/// `[0.001, 1e6)` switch to scientific notation so the tag stays short.
fn tag_number(value: f64) -> String {
    if value != 0.0 && !(1e-3..1e6).contains(&value.abs()) {
        return format!("{:e}", value);
    }
    let fixed = format!("{:.3}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Identity plus shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity;

impl Displacement for Identity {
    #[inline]
    fn offset(&self, x: i32, y: i32, _width: u32, _height: u32, shift: i32, axis: Axis) -> i32 {
        let (primary, _) = axis.split(x, y);
        primary.saturating_add(shift)
    }

    fn describe(&self) -> String {
        String::new()
    }
}

/// Per-axis scale of the primary coordinate before the shift is added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scale {
    /// Multiplier used on the horizontal axis
    pub x: f64,
    /// Multiplier used on the vertical axis
    pub y: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self { x: 2.0, y: 2.0 }
    }
}

impl Scale {
    pub fn multiplier(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn set_multiplier(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}

impl Displacement for Scale {
    #[inline]
    fn offset(&self, x: i32, y: i32, _width: u32, _height: u32, shift: i32, axis: Axis) -> i32 {
        let (primary, _) = axis.split(x, y);
        truncate(primary as f64 * self.multiplier(axis)).saturating_add(shift)
    }

    fn describe(&self) -> String {
        format!("scale_x{}_y{}", tag_number(self.x), tag_number(self.y))
    }
}

/// A line equation where the shift acts as the intercept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Linear {
    /// Slope magnitude `m`
    pub coefficient: f64,
    pub sign: Sign,
    pub form: EquationForm,
}

impl Default for Linear {
    fn default() -> Self {
        Self { coefficient: 1.0, sign: Sign::Positive, form: EquationForm::YOfX }
    }
}

impl Linear {
    /// The signed slope `sign * m`
    #[inline]
    pub fn slope(&self) -> f64 {
        self.sign.factor() * self.coefficient
    }
}

impl Displacement for Linear {
    #[inline]
    fn offset(&self, x: i32, y: i32, _width: u32, _height: u32, shift: i32, axis: Axis) -> i32 {
        let m = self.slope();
        let (x_f, y_f, shift_f) = (x as f64, y as f64, shift as f64);
        match (self.form, axis) {
            // Solving the line for the primary coordinate divides by the slope
            (EquationForm::YOfX, Axis::Horizontal) => x.saturating_add(truncate((y_f - shift_f) / m)),
            (EquationForm::YOfX, Axis::Vertical) => y.saturating_add(truncate(m * x_f + shift_f)),
            (EquationForm::XOfY, Axis::Horizontal) => x.saturating_add(truncate(m * y_f + shift_f)),
            (EquationForm::XOfY, Axis::Vertical) => y.saturating_add(truncate((x_f - shift_f) / m)),
        }
    }

    fn describe(&self) -> String {
        format!("linear_{}_{}{}", self.form.tag(), self.sign, tag_number(self.coefficient))
    }
}

/// Cross-axis skew: the other coordinate leaks into the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skew {
    pub x: f64,
    pub y: f64,
    pub x_sign: Sign,
    pub y_sign: Sign,
}

impl Default for Skew {
    fn default() -> Self {
        Self { x: 2.0, y: 2.0, x_sign: Sign::Positive, y_sign: Sign::Positive }
    }
}

impl Skew {
    pub fn skew(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn set_skew(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }

    pub fn sign(&self, axis: Axis) -> Sign {
        match axis {
            Axis::Horizontal => self.x_sign,
            Axis::Vertical => self.y_sign,
        }
    }

    pub fn set_sign(&mut self, axis: Axis, sign: Sign) {
        match axis {
            Axis::Horizontal => self.x_sign = sign,
            Axis::Vertical => self.y_sign = sign,
        }
    }
}

impl Displacement for Skew {
    #[inline]
    fn offset(&self, x: i32, y: i32, _width: u32, _height: u32, shift: i32, axis: Axis) -> i32 {
        let (primary, other) = axis.split(x, y);
        let term = self.sign(axis).factor() * self.skew(axis) * other as f64;
        primary.saturating_add(shift).saturating_add(truncate(term))
    }

    fn describe(&self) -> String {
        let mut tag = String::from("skew");
        if self.x > 0.0 {
            tag.push_str(&format!("_x{}{}", self.x_sign, tag_number(self.x)));
        }
        if self.y > 0.0 {
            tag.push_str(&format!("_y{}{}", self.y_sign, tag_number(self.y)));
        }
        tag
    }
}

/// Cross-axis product term, normalized by the opposite image dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XyMultiply {
    /// Apply the product term on the horizontal axis
    pub x: bool,
    /// Apply the product term on the vertical axis
    pub y: bool,
    pub x_sign: Sign,
    pub y_sign: Sign,
}

impl Default for XyMultiply {
    fn default() -> Self {
        Self { x: true, y: true, x_sign: Sign::Positive, y_sign: Sign::Positive }
    }
}

impl XyMultiply {
    pub fn multiply(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn set_multiply(&mut self, axis: Axis, enabled: bool) {
        match axis {
            Axis::Horizontal => self.x = enabled,
            Axis::Vertical => self.y = enabled,
        }
    }

    pub fn sign(&self, axis: Axis) -> Sign {
        match axis {
            Axis::Horizontal => self.x_sign,
            Axis::Vertical => self.y_sign,
        }
    }

    pub fn set_sign(&mut self, axis: Axis, sign: Sign) {
        match axis {
            Axis::Horizontal => self.x_sign = sign,
            Axis::Vertical => self.y_sign = sign,
        }
    }
}

impl Displacement for XyMultiply {
    #[inline]
    fn offset(&self, x: i32, y: i32, width: u32, height: u32, shift: i32, axis: Axis) -> i32 {
        let (primary, other) = axis.split(x, y);
        let base = primary.saturating_add(shift);
        if !self.multiply(axis) {
            return base;
        }
        let opposite = match axis {
            Axis::Horizontal => height,
            Axis::Vertical => width,
        };
        let term = self.sign(axis).factor() * primary as f64 * other as f64 / opposite as f64;
        base.saturating_add(truncate(term))
    }

    fn describe(&self) -> String {
        let mut tag = String::from("xymult");
        if self.x {
            tag.push_str(&format!("_x{}", self.x_sign));
        }
        if self.y {
            tag.push_str(&format!("_y{}", self.y_sign));
        }
        tag
    }
}
