//! Test utilities for imageops-composite
//!
//! This module provides common functionality for testing image operations.
//! It is only compiled when running tests.

use image::{ImageBuffer, Pixel, Rgb, Rgba};

use crate::Image;

/// Creates a test RGB image with predefined pixel values for testing.
///
/// This function creates a 2x2 test image with known pixel values:
/// - (0,0): [0.8, 0.6, 0.4]
/// - (1,0): [0.4, 0.8, 0.6]
/// - (0,1): [0.6, 0.4, 0.8]
/// - (1,1): [0.2, 0.3, 0.1]
pub fn create_test_rgb_image() -> Image<Rgb<f32>> {
    let mut image: Image<Rgb<f32>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgb([0.8, 0.6, 0.4]));
    image.put_pixel(1, 0, Rgb([0.4, 0.8, 0.6]));
    image.put_pixel(0, 1, Rgb([0.6, 0.4, 0.8]));
    image.put_pixel(1, 1, Rgb([0.2, 0.3, 0.1]));
    image
}

/// Creates a test RGBA image with predefined pixel values for testing.
///
/// Same colors as [`create_test_rgb_image`], with opacity
/// 1.0 / 0.5 / 0.25 / 0.0 in reading order.
pub fn create_test_rgba_image() -> Image<Rgba<f32>> {
    let mut image: Image<Rgba<f32>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([0.8, 0.6, 0.4, 1.0]));
    image.put_pixel(1, 0, Rgba([0.4, 0.8, 0.6, 0.5]));
    image.put_pixel(0, 1, Rgba([0.6, 0.4, 0.8, 0.25]));
    image.put_pixel(1, 1, Rgba([0.2, 0.3, 0.1, 0.0]));
    image
}

/// Creates an RGB image with a horizontal red and vertical green gradient.
pub fn create_gradient_rgb_image(width: u32, height: u32) -> Image<Rgb<f32>> {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            x as f32 / width.max(2).saturating_sub(1) as f32,
            y as f32 / height.max(2).saturating_sub(1) as f32,
            0.5,
        ])
    })
}

/// Compares two pixel values with a tolerance for floating-point precision errors.
pub fn pixels_approx_equal<P>(expected: P, actual: P, tolerance: f32) -> bool
where
    P: Pixel<Subpixel = f32>,
{
    expected.channels().len() == actual.channels().len()
        && expected
            .channels()
            .iter()
            .zip(actual.channels())
            .all(|(e, a)| (e - a).abs() <= tolerance)
}

/// Compares two images pixel by pixel with a tolerance for floating-point errors.
///
/// # Returns
/// `true` if all pixels are within tolerance and dimensions match, `false` otherwise
pub fn images_approx_equal<P>(expected: &Image<P>, actual: &Image<P>, tolerance: f32) -> bool
where
    P: Pixel<Subpixel = f32>,
{
    expected.dimensions() == actual.dimensions()
        && expected
            .pixels()
            .zip(actual.pixels())
            .all(|(e, a)| pixels_approx_equal(*e, *a, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgba_image_matches_rgb_colors() {
        let rgb = create_test_rgb_image();
        let rgba = create_test_rgba_image();
        for (Rgb([r, g, b]), Rgba([ra, ga, ba, _])) in rgb.pixels().zip(rgba.pixels()) {
            assert_eq!([r, g, b], [ra, ga, ba]);
        }
    }

    #[test]
    fn create_gradient_rgb_image_spans_unit_range() {
        let image = create_gradient_rgb_image(5, 3);
        assert_eq!(image.get_pixel(0, 0), &Rgb([0.0, 0.0, 0.5]));
        assert_eq!(image.get_pixel(4, 2), &Rgb([1.0, 1.0, 0.5]));
    }

    #[test]
    fn pixels_approx_equal_with_tolerant_comparison_returns_true() {
        let pixel1 = Rgb([0.10, 0.50, 0.90]);
        let pixel2 = Rgb([0.11, 0.49, 0.91]);
        let pixel3 = Rgb([0.20, 0.50, 0.90]);

        assert!(pixels_approx_equal(pixel1, pixel2, 0.015));
        assert!(!pixels_approx_equal(pixel1, pixel3, 0.015));
    }

    #[test]
    fn images_approx_equal_with_tolerant_comparison_returns_true() {
        let image1 = create_test_rgb_image();
        let mut image2 = create_test_rgb_image();
        image2.put_pixel(0, 0, Rgb([0.81, 0.6, 0.4]));

        assert!(images_approx_equal(&image1, &image2, 0.02));
        assert!(!images_approx_equal(&image1, &image2, 0.001));
        assert!(!images_approx_equal(
            &image1,
            &create_gradient_rgb_image(3, 3),
            1.0
        ));
    }
}
