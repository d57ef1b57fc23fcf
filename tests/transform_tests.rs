//! Integration tests for the transform manager
//!
//! Exercises the public API the way a UI layer and a render pass would:
//! configure through typed setters, switch variants, query offsets.

use image::{Rgba, RgbaImage};
use pixelshift::transforms::{
    shift_lines, Axis, EquationForm, SharedTransform, ShiftKind, Sign, TransformManager,
};

const AXES: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

// ============================================================================
// Offset Properties
// ============================================================================

#[test]
fn test_default_is_primary_plus_shift() {
    let manager = TransformManager::new();
    for x in [-5, 0, 3, 17, 640] {
        for y in [-2, 0, 9, 480] {
            for shift in [-12, 0, 1, 40] {
                assert_eq!(manager.compute_offset(x, y, 640, 480, shift, Axis::Horizontal), x + shift);
                assert_eq!(manager.compute_offset(x, y, 640, 480, shift, Axis::Vertical), y + shift);
            }
        }
    }
}

#[test]
fn test_scale_example() {
    let mut manager = TransformManager::new();
    manager.set_active(ShiftKind::Scale.index() as i64);
    manager.set_scale_multiplier(Axis::Horizontal, 2.0);
    manager.set_scale_multiplier(Axis::Vertical, 3.0);

    assert_eq!(manager.compute_offset(5, 0, 100, 100, 10, Axis::Horizontal), 20);
    assert_eq!(manager.compute_offset(0, 5, 100, 100, 10, Axis::Vertical), 25);
}

#[test]
fn test_linear_example() {
    let mut manager = TransformManager::new();
    manager.set_kind(ShiftKind::Linear);
    manager.set_linear_coefficient(2.0);
    manager.set_linear_sign(Sign::Positive);
    manager.set_linear_form(EquationForm::YOfX);

    assert_eq!(manager.compute_offset(0, 10, 100, 100, 0, Axis::Horizontal), 5);
}

#[test]
fn test_negative_parameters_are_accepted() {
    let mut manager = TransformManager::new();
    manager.set_kind(ShiftKind::Skew);
    manager.set_skew(Axis::Vertical, -1.0);
    // 4 + 0 + trunc(1 * -1 * 6)
    assert_eq!(manager.compute_offset(6, 4, 10, 10, 0, Axis::Vertical), -2);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_out_of_range_selection_falls_back_to_default() {
    let mut manager = TransformManager::new();
    manager.set_active(4);
    assert!(!manager.is_default_active());
    manager.set_active(99);
    assert!(manager.is_default_active());
    assert_eq!(manager.active_index(), 0);
}

#[test]
fn test_switching_back_preserves_scale() {
    let mut manager = TransformManager::new();
    manager.set_kind(ShiftKind::Scale);
    manager.set_scale_multiplier(Axis::Horizontal, 1.25);
    manager.set_scale_multiplier(Axis::Vertical, 7.5);

    manager.set_kind(ShiftKind::Skew);
    manager.set_kind(ShiftKind::Scale);

    assert_eq!(manager.scale_multiplier(Axis::Horizontal), 1.25);
    assert_eq!(manager.scale_multiplier(Axis::Vertical), 7.5);
}

#[test]
fn test_every_index_selects_its_variant() {
    let mut manager = TransformManager::new();
    for kind in ShiftKind::ALL {
        manager.set_active(kind.index() as i64);
        assert_eq!(manager.active_kind(), kind);
        assert_eq!(manager.is_default_active(), kind == ShiftKind::Default);
    }
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_setters_round_trip_regardless_of_active() {
    for kind in ShiftKind::ALL {
        let mut manager = TransformManager::new();
        manager.set_kind(kind);

        for axis in AXES {
            manager.set_scale_multiplier(axis, 0.1);
            assert_eq!(manager.scale_multiplier(axis), 0.1);

            manager.set_skew(axis, -3.3);
            assert_eq!(manager.skew(axis), -3.3);

            manager.set_skew_sign(axis, Sign::Negative);
            assert_eq!(manager.skew_sign(axis), Sign::Negative);

            manager.set_xy_multiply(axis, false);
            assert!(!manager.xy_multiply(axis));

            manager.set_xy_sign(axis, Sign::Negative);
            assert_eq!(manager.xy_sign(axis), Sign::Negative);
        }

        manager.set_linear_coefficient(0.3);
        assert_eq!(manager.linear_coefficient(), 0.3);
        manager.set_linear_sign(Sign::Negative);
        assert_eq!(manager.linear_sign(), Sign::Negative);
        manager.set_linear_form(EquationForm::XOfY);
        assert_eq!(manager.linear_form(), EquationForm::XOfY);

        assert_eq!(manager.active_kind(), kind);
    }
}

// ============================================================================
// Descriptions
// ============================================================================

#[test]
fn test_describe_default_is_empty() {
    assert_eq!(TransformManager::new().describe(), "");
}

#[test]
fn test_describe_xy_multiply_x_only() {
    let mut manager = TransformManager::new();
    manager.set_kind(ShiftKind::XyMultiply);
    manager.set_xy_multiply(Axis::Horizontal, true);
    manager.set_xy_multiply(Axis::Vertical, false);
    manager.set_xy_sign(Axis::Horizontal, Sign::Positive);

    let tag = manager.describe();
    assert!(tag.contains("_x"), "missing x component in {:?}", tag);
    assert!(!tag.contains("_y"), "unexpected y component in {:?}", tag);
}

#[test]
fn test_describe_is_filename_safe() {
    let mut manager = TransformManager::new();
    manager.set_scale_multiplier(Axis::Vertical, -0.5);
    manager.set_linear_sign(Sign::Negative);
    for kind in ShiftKind::ALL {
        manager.set_kind(kind);
        let tag = manager.describe();
        assert!(
            tag.chars().all(|c| c.is_ascii_alphanumeric() || "_-+.".contains(c)),
            "{:?} is not filename safe",
            tag
        );
    }
}

// ============================================================================
// Shift Pass
// ============================================================================

#[test]
fn test_shift_pass_from_shared_snapshot() {
    let shared = SharedTransform::new(TransformManager::new());
    shared.update(|m| {
        m.set_kind(ShiftKind::Scale);
        m.set_scale_multiplier(Axis::Horizontal, 1.0);
    });

    let image = RgbaImage::from_fn(5, 2, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    let snapshot = shared.snapshot();
    let result = shift_lines(&image, &snapshot, Axis::Horizontal, &[2, 0]).unwrap();

    assert_eq!(result.get_pixel(0, 0).0[0], 2);
    assert_eq!(result.get_pixel(4, 0).0[0], 1);
    assert_eq!(result.get_pixel(4, 1).0[0], 4);
}
