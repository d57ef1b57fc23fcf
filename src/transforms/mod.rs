//! Pixel-displacement transforms for row/column shift effects
//!
//! A render pass asks a [`TransformManager`] for one offset per pixel; the
//! manager forwards to whichever displacement variant is active.
//!
//! # Module Structure
//!
//! - [`types`] - Axis, sign and selector types plus error definitions
//! - [`variants`] - The five displacement variants
//! - [`manager`] - Variant selection and per-variant configuration
//! - [`shared`] - Snapshot sharing for multi-threaded hosts
//! - [`apply`] - Row/column shift pass over an image

pub mod apply;
pub mod manager;
pub mod shared;
pub mod types;
pub mod variants;

// Re-export main types at the module level for convenience
pub use apply::{line_offsets, shift_lines};
pub use manager::TransformManager;
pub use shared::SharedTransform;
pub use types::{Axis, EquationForm, ShiftError, ShiftKind, Sign};
pub use variants::{Displacement, Identity, Linear, Scale, Skew, XyMultiply};

/// Result type alias for shift operations.
pub type Result<T> = std::result::Result<T, ShiftError>;
