//! Row/column shift pass over an image
//!
//! Runs the active displacement for every pixel and samples the source image
//! at the resulting coordinate, wrapping around the primary axis. The shift
//! magnitude for each line is supplied by the caller.

use image::RgbaImage;
use rayon::prelude::*;

use super::manager::TransformManager;
use super::types::{Axis, ShiftError};
use super::Result;

/// Convert an image dimension to the signed coordinate range.
fn signed_dimension(value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| ShiftError::DimensionTooLarge(value))
}

/// Offsets for every pixel of one line.
///
/// For `Axis::Horizontal` the line is row `line` and the result has `width`
/// entries; for `Axis::Vertical` it is column `line` with `height` entries.
///
/// # Errors
/// Returns `ShiftError::DimensionTooLarge` when `width` or `height` exceeds `i32::MAX`.
pub fn line_offsets(
    manager: &TransformManager,
    axis: Axis,
    line: i32,
    width: u32,
    height: u32,
    shift: i32,
) -> Result<Vec<i32>> {
    let (signed_width, signed_height) = (signed_dimension(width)?, signed_dimension(height)?);
    let offsets = match axis {
        Axis::Horizontal => (0..signed_width)
            .map(|x| manager.compute_offset(x, line, width, height, shift, axis))
            .collect(),
        Axis::Vertical => (0..signed_height)
            .map(|y| manager.compute_offset(line, y, width, height, shift, axis))
            .collect(),
    };
    Ok(offsets)
}

/// Displace every row (horizontal) or column (vertical) of `image`.
///
/// `shifts` holds one shift value per line: `height` values for a horizontal
/// pass, `width` values for a vertical one.
///
/// # Errors
/// Returns `ShiftError::LineCountMismatch` when `shifts` has the wrong length,
/// and `ShiftError::DimensionTooLarge` when a dimension exceeds `i32::MAX`.
pub fn shift_lines(
    image: &RgbaImage,
    manager: &TransformManager,
    axis: Axis,
    shifts: &[i32],
) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    let (signed_width, signed_height) = (signed_dimension(width)?, signed_dimension(height)?);
    let expected = match axis {
        Axis::Horizontal => height as usize,
        Axis::Vertical => width as usize,
    };
    if shifts.len() != expected {
        return Err(ShiftError::LineCountMismatch { expected, actual: shifts.len() });
    }
    if width == 0 || height == 0 {
        return Ok(image.clone());
    }

    let mut output = RgbaImage::new(width, height);
    let stride = width as usize * 4;
    let buffer: &mut [u8] = &mut output;

    buffer.par_chunks_mut(stride).enumerate().for_each(|(row, out_row)| {
        let y = row as i32;
        for x in 0..signed_width {
            let (src_x, src_y) = match axis {
                Axis::Horizontal => {
                    let offset =
                        manager.compute_offset(x, y, width, height, shifts[row], axis);
                    (offset.rem_euclid(signed_width), y)
                }
                Axis::Vertical => {
                    let offset =
                        manager.compute_offset(x, y, width, height, shifts[x as usize], axis);
                    (x, offset.rem_euclid(signed_height))
                }
            };
            let pixel = image.get_pixel(src_x as u32, src_y as u32);
            let start = x as usize * 4;
            out_row[start..start + 4].copy_from_slice(&pixel.0);
        }
    });

    Ok(output)
}
