//! Internal utility functions for imageops-composite.
//!
//! This module contains common functionality used across different image operations.

use image::{Pixel, Primitive};

use crate::error::Error;

/// Clamps a floating-point channel value to the unit range `[0, 1]`.
///
/// NaN collapses to 0 so that a degenerate input can never leak out of range.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Returns the pixel whose channels are all at the type minimum.
///
/// For `f32` subpixels this is black for RGB and fully transparent for RGBA.
#[inline]
pub fn zero_pixel<P: Pixel>() -> P {
    let channels = vec![P::Subpixel::DEFAULT_MIN_VALUE; P::CHANNEL_COUNT as usize];
    *P::from_slice(&channels)
}

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise `Error::EmptyImage`
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<(), Error> {
    if width == 0 || height == 0 {
        Err(Error::EmptyImage { width, height })
    } else {
        Ok(())
    }
}

/// Validates that two images have matching dimensions.
///
/// # Arguments
///
/// * `expected` - The (width, height) the operation requires
/// * `actual` - The (width, height) it received
///
/// # Returns
///
/// `Ok(())` if the dimensions match, otherwise `Error::DimensionMismatch`
pub fn validate_matching_dimensions(expected: (u32, u32), actual: (u32, u32)) -> Result<(), Error> {
    if expected != actual {
        Err(Error::DimensionMismatch { expected, actual })
    } else {
        Ok(())
    }
}
