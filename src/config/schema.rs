//! Configuration schema types for `pxshift.toml`
//!
//! Defines the structure and validation rules for shift configuration.
//! Every section is optional; missing values fall back to the variant
//! defaults.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::transforms::{Linear, Scale, ShiftKind, Skew, TransformManager, XyMultiply};

/// Selector section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftSection {
    /// Variant answering offset queries
    pub active: ShiftKind,
}

/// Complete `pxshift.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PxsConfig {
    pub shift: ShiftSection,
    pub scale: Scale,
    pub linear: Linear,
    pub skew: Skew,
    pub xy_multiply: XyMultiply,
}

impl PxsConfig {
    /// Validate the configuration.
    ///
    /// Returns a list of validation errors, empty if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let floats = [
            ("scale.x", self.scale.x),
            ("scale.y", self.scale.y),
            ("linear.coefficient", self.linear.coefficient),
            ("skew.x", self.skew.x),
            ("skew.y", self.skew.y),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                errors.push(format!("{} must be a finite number, got {}", field, value));
            }
        }

        if self.linear.coefficient == 0.0 {
            warn!("linear.coefficient is 0; solved-for-primary offsets will saturate");
        }

        errors
    }

    /// Build a manager configured from this file.
    pub fn to_manager(&self) -> TransformManager {
        let mut manager = TransformManager::new();
        *manager.scale_params_mut() = self.scale;
        *manager.linear_params_mut() = self.linear;
        *manager.skew_params_mut() = self.skew;
        *manager.xy_multiply_params_mut() = self.xy_multiply;
        manager.set_kind(self.shift.active);
        manager
    }

    /// Capture a manager's current configuration.
    pub fn from_manager(manager: &TransformManager) -> Self {
        Self {
            shift: ShiftSection { active: manager.active_kind() },
            scale: *manager.scale_params(),
            linear: *manager.linear_params(),
            skew: *manager.skew_params(),
            xy_multiply: *manager.xy_multiply_params(),
        }
    }
}
