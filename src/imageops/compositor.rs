use image::{ImageBuffer, Luma, Rgb, Rgba};
use itertools::izip;

use crate::error::Error;
use crate::imageops::alpha::{split_opacity, Opacity};
use crate::utils::{clamp_unit, validate_matching_dimensions, validate_non_empty_image};
use crate::Image;

/// Blends `overlay` over `base` using `opacity` as the per-pixel mix weight.
///
/// Each output channel is `overlay * opacity + base * (1 - opacity)`, clamped to
/// `[0, 1]`. The output has the resolution of the inputs.
///
/// # Errors
///
/// * `Error::DimensionMismatch` - When `overlay` or `opacity` differ in
///   resolution from `base`. Size matching exists to prevent this; hitting it
///   means that step was skipped.
/// * `Error::EmptyImage` - When the images have zero width or height
///
/// # Examples
///
/// ```no_run
/// use imageops_composite::{blend, Image, Opacity};
/// use image::{Luma, Rgb};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let base: Image<Rgb<f32>> = Image::from_pixel(4, 4, Rgb([0.0, 0.0, 0.0]));
/// let overlay: Image<Rgb<f32>> = Image::from_pixel(4, 4, Rgb([1.0, 1.0, 1.0]));
/// let opacity = Opacity::from_opacity(Image::from_pixel(4, 4, Luma([0.5])));
///
/// let result = blend(&base, &overlay, &opacity)?;
/// assert_eq!(result.get_pixel(0, 0), &Rgb([0.5, 0.5, 0.5]));
/// # Ok(())
/// # }
/// ```
pub fn blend(
    base: &Image<Rgb<f32>>,
    overlay: &Image<Rgb<f32>>,
    opacity: &Opacity,
) -> Result<Image<Rgb<f32>>, Error> {
    let (width, height) = base.dimensions();
    validate_matching_dimensions((width, height), overlay.dimensions())?;
    validate_matching_dimensions((width, height), opacity.dimensions())?;
    validate_non_empty_image(width, height)?;

    let blended = izip!(base.pixels(), overlay.pixels(), opacity.as_image().pixels())
        .flat_map(|(Rgb(under), Rgb(over), Luma([alpha]))| {
            let alpha = clamp_unit(*alpha);
            [0, 1, 2].map(|c| blend_channel(under[c], over[c], alpha))
        })
        .collect();

    ImageBuffer::from_raw(width, height, blended).ok_or(Error::ImageBufferCreationFailed)
}

/// Composites an RGBA overlay onto `base`, reading opacity from the overlay's
/// alpha channel.
///
/// The alpha channel is opacity already; it is not inverted here.
///
/// # Errors
///
/// Same as [`blend`].
pub fn composite(
    base: &Image<Rgb<f32>>,
    overlay: &Image<Rgba<f32>>,
) -> Result<Image<Rgb<f32>>, Error> {
    validate_matching_dimensions(base.dimensions(), overlay.dimensions())?;
    let (overlay_rgb, opacity) = split_opacity(overlay);
    blend(base, &overlay_rgb, &opacity)
}

#[inline]
fn blend_channel(base: f32, overlay: f32, alpha: f32) -> f32 {
    clamp_unit(overlay * alpha + base * (1.0 - alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        create_gradient_rgb_image, create_test_rgba_image, pixels_approx_equal,
    };

    fn solid_rgb(width: u32, height: u32, value: [f32; 3]) -> Image<Rgb<f32>> {
        Image::from_pixel(width, height, Rgb(value))
    }

    fn solid_opacity(width: u32, height: u32, value: f32) -> Opacity {
        Opacity::from_opacity(Image::from_pixel(width, height, Luma([value])))
    }

    #[test]
    fn blend_channel_is_linear_interpolation() {
        assert_eq!(blend_channel(0.2, 0.8, 0.0), 0.2);
        assert_eq!(blend_channel(0.2, 0.8, 1.0), 0.8);
        assert!((blend_channel(0.2, 0.8, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn blend_with_zero_opacity_returns_base() {
        let base = solid_rgb(3, 2, [0.1, 0.2, 0.3]);
        let overlay = solid_rgb(3, 2, [0.9, 0.8, 0.7]);
        let result = blend(&base, &overlay, &solid_opacity(3, 2, 0.0)).unwrap();
        assert_eq!(result, base);
    }

    #[test]
    fn blend_with_full_opacity_returns_overlay() {
        let base = solid_rgb(3, 2, [0.1, 0.2, 0.3]);
        let overlay = solid_rgb(3, 2, [0.9, 0.8, 0.7]);
        let result = blend(&base, &overlay, &solid_opacity(3, 2, 1.0)).unwrap();
        assert_eq!(result, overlay);
    }

    #[test]
    fn blend_with_half_opacity_averages() {
        let base = solid_rgb(1, 1, [0.0, 0.5, 1.0]);
        let overlay = solid_rgb(1, 1, [1.0, 0.5, 0.0]);
        let result = blend(&base, &overlay, &solid_opacity(1, 1, 0.5)).unwrap();
        assert_eq!(result.get_pixel(0, 0), &Rgb([0.5, 0.5, 0.5]));
    }

    #[test]
    fn blend_rejects_mismatched_overlay() {
        let base = solid_rgb(4, 4, [0.0; 3]);
        let overlay = solid_rgb(4, 3, [0.0; 3]);
        assert_eq!(
            blend(&base, &overlay, &solid_opacity(4, 4, 1.0)),
            Err(Error::DimensionMismatch {
                expected: (4, 4),
                actual: (4, 3)
            })
        );
    }

    #[test]
    fn blend_rejects_mismatched_opacity() {
        let base = solid_rgb(4, 4, [0.0; 3]);
        let overlay = solid_rgb(4, 4, [0.0; 3]);
        assert!(matches!(
            blend(&base, &overlay, &solid_opacity(2, 4, 1.0)),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn composite_uses_embedded_alpha_without_inversion() {
        let base = solid_rgb(2, 2, [0.0, 0.0, 0.0]);
        let overlay: Image<Rgba<f32>> = Image::from_pixel(2, 2, Rgba([1.0, 1.0, 1.0, 0.25]));
        let result = composite(&base, &overlay).unwrap();
        for channel in result.get_pixel(1, 0).0 {
            assert!((channel - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn composite_rejects_mismatched_dimensions() {
        let base = solid_rgb(5, 5, [0.0; 3]);
        let overlay: Image<Rgba<f32>> = Image::new(5, 6);
        assert_eq!(
            composite(&base, &overlay),
            Err(Error::DimensionMismatch {
                expected: (5, 5),
                actual: (5, 6)
            })
        );
    }

    #[test]
    fn composite_test_image_over_gradient() {
        let base = create_gradient_rgb_image(2, 2);
        let overlay = create_test_rgba_image();
        let result = composite(&base, &overlay).unwrap();

        // Opaque, half, quarter and fully transparent overlay pixels
        assert!(pixels_approx_equal(*result.get_pixel(0, 0), Rgb([0.8, 0.6, 0.4]), 1e-6));
        assert!(pixels_approx_equal(*result.get_pixel(1, 0), Rgb([0.7, 0.4, 0.55]), 1e-6));
        assert!(pixels_approx_equal(*result.get_pixel(0, 1), Rgb([0.15, 0.85, 0.575]), 1e-6));
        assert!(pixels_approx_equal(*result.get_pixel(1, 1), *base.get_pixel(1, 1), 1e-6));
    }
}
