//! Variant selection and per-variant configuration
//!
//! `TransformManager` owns one instance of every displacement variant and a
//! selector for the active one. Switching variants never touches another
//! variant's parameters, so a variant can be configured before it is picked.

use super::types::{Axis, EquationForm, ShiftKind, Sign};
use super::variants::{Displacement, Identity, Linear, Scale, Skew, XyMultiply};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformManager {
    active: ShiftKind,
    identity: Identity,
    scale: Scale,
    linear: Linear,
    skew: Skew,
    xy_multiply: XyMultiply,
}

impl TransformManager {
    /// Create a manager with every variant at its defaults and `Default` active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset for pixel `(x, y)` under the active variant.
    ///
    /// No range checks are made on the coordinates or dimensions.
    #[inline]
    pub fn compute_offset(
        &self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        shift: i32,
        axis: Axis,
    ) -> i32 {
        match self.active {
            ShiftKind::Default => self.identity.offset(x, y, width, height, shift, axis),
            ShiftKind::Scale => self.scale.offset(x, y, width, height, shift, axis),
            ShiftKind::Linear => self.linear.offset(x, y, width, height, shift, axis),
            ShiftKind::Skew => self.skew.offset(x, y, width, height, shift, axis),
            ShiftKind::XyMultiply => self.xy_multiply.offset(x, y, width, height, shift, axis),
        }
    }

    /// Step description of the active variant (empty for `Default`).
    pub fn describe(&self) -> String {
        self.active_variant().describe()
    }

    /// The active variant as a trait object.
    pub fn active_variant(&self) -> &dyn Displacement {
        match self.active {
            ShiftKind::Default => &self.identity,
            ShiftKind::Scale => &self.scale,
            ShiftKind::Linear => &self.linear,
            ShiftKind::Skew => &self.skew,
            ShiftKind::XyMultiply => &self.xy_multiply,
        }
    }

    /// Select the active variant by selector index.
    ///
    /// Indices outside `0..5` fall back to `Default` instead of failing.
    pub fn set_active(&mut self, index: i64) {
        self.active = ShiftKind::from_index_or_default(index);
    }

    pub fn set_kind(&mut self, kind: ShiftKind) {
        self.active = kind;
    }

    pub fn active_kind(&self) -> ShiftKind {
        self.active
    }

    pub fn active_index(&self) -> usize {
        self.active.index()
    }

    pub fn is_default_active(&self) -> bool {
        self.active == ShiftKind::Default
    }

    // Scale

    pub fn scale_multiplier(&self, axis: Axis) -> f64 {
        self.scale.multiplier(axis)
    }

    pub fn set_scale_multiplier(&mut self, axis: Axis, value: f64) {
        self.scale.set_multiplier(axis, value);
    }

    // Linear

    pub fn linear_coefficient(&self) -> f64 {
        self.linear.coefficient
    }

    pub fn set_linear_coefficient(&mut self, value: f64) {
        self.linear.coefficient = value;
    }

    pub fn linear_sign(&self) -> Sign {
        self.linear.sign
    }

    pub fn set_linear_sign(&mut self, sign: Sign) {
        self.linear.sign = sign;
    }

    pub fn linear_form(&self) -> EquationForm {
        self.linear.form
    }

    pub fn set_linear_form(&mut self, form: EquationForm) {
        self.linear.form = form;
    }

    // Skew

    pub fn skew(&self, axis: Axis) -> f64 {
        self.skew.skew(axis)
    }

    pub fn set_skew(&mut self, axis: Axis, value: f64) {
        self.skew.set_skew(axis, value);
    }

    pub fn skew_sign(&self, axis: Axis) -> Sign {
        self.skew.sign(axis)
    }

    pub fn set_skew_sign(&mut self, axis: Axis, sign: Sign) {
        self.skew.set_sign(axis, sign);
    }

    // XY-Multiply

    pub fn xy_multiply(&self, axis: Axis) -> bool {
        self.xy_multiply.multiply(axis)
    }

    pub fn set_xy_multiply(&mut self, axis: Axis, enabled: bool) {
        self.xy_multiply.set_multiply(axis, enabled);
    }

    pub fn xy_sign(&self, axis: Axis) -> Sign {
        self.xy_multiply.sign(axis)
    }

    pub fn set_xy_sign(&mut self, axis: Axis, sign: Sign) {
        self.xy_multiply.set_sign(axis, sign);
    }

    // Whole-variant access, used by the config layer

    pub fn scale_params(&self) -> &Scale {
        &self.scale
    }

    pub fn scale_params_mut(&mut self) -> &mut Scale {
        &mut self.scale
    }

    pub fn linear_params(&self) -> &Linear {
        &self.linear
    }

    pub fn linear_params_mut(&mut self) -> &mut Linear {
        &mut self.linear
    }

    pub fn skew_params(&self) -> &Skew {
        &self.skew
    }

    pub fn skew_params_mut(&mut self) -> &mut Skew {
        &mut self.skew
    }

    pub fn xy_multiply_params(&self) -> &XyMultiply {
        &self.xy_multiply
    }

    pub fn xy_multiply_params_mut(&mut self) -> &mut XyMultiply {
        &mut self.xy_multiply
    }
}
