use image::{Luma, Rgb, Rgba};
use imageproc::map::{map_colors, map_colors2};

use crate::error::Error;
use crate::utils::{clamp_unit, validate_matching_dimensions};
use crate::Image;

/// Per-pixel foreground opacity in `[0, 1]` (1 = opaque cutout, 0 = base shows
/// through).
///
/// Host masks usually store transparency instead of opacity. The only way to
/// turn such a mask into an `Opacity` is [`Opacity::from_inverted_mask`], and no
/// operation inverts an `Opacity` again, so the inversion happens exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Opacity(Image<Luma<f32>>);

impl Opacity {
    /// Builds opacity from a transparency mask: `opacity = 1 - mask`.
    ///
    /// Mask values are clamped to `[0, 1]` first.
    pub fn from_inverted_mask(mask: &Image<Luma<f32>>) -> Self {
        Self(map_colors(mask, |Luma([transparency])| {
            Luma([1.0 - clamp_unit(transparency)])
        }))
    }

    /// Wraps an image that already holds opacity values, clamping to `[0, 1]`.
    pub fn from_opacity(image: Image<Luma<f32>>) -> Self {
        let mut image = image;
        image
            .pixels_mut()
            .for_each(|Luma([value])| *value = clamp_unit(*value));
        Self(image)
    }

    /// Opacity of the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.0.get_pixel(x, y)[0]
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    pub fn as_image(&self) -> &Image<Luma<f32>> {
        &self.0
    }

    pub fn into_image(self) -> Image<Luma<f32>> {
        self.0
    }
}

/// Trait recombining an RGB cutout with its opacity into a single RGBA image
///
/// Keeping opacity embedded lets size matching resize, crop and pad color and
/// opacity together in one pass.
pub trait ApplyOpacity {
    /// Attaches `opacity` as the alpha channel.
    ///
    /// # Errors
    ///
    /// * `Error::DimensionMismatch` - When image and opacity dimensions don't match
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use imageops_composite::{ApplyOpacity, Image, Opacity};
    /// use image::{Luma, Rgb};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let cutout: Image<Rgb<f32>> = Image::new(10, 10);
    /// let mask: Image<Luma<f32>> = Image::new(10, 10);
    ///
    /// let rgba = cutout.apply_opacity(&Opacity::from_inverted_mask(&mask))?;
    /// # Ok(())
    /// # }
    /// ```
    fn apply_opacity(&self, opacity: &Opacity) -> Result<Image<Rgba<f32>>, Error>;
}

impl ApplyOpacity for Image<Rgb<f32>> {
    fn apply_opacity(&self, opacity: &Opacity) -> Result<Image<Rgba<f32>>, Error> {
        validate_matching_dimensions(self.dimensions(), opacity.dimensions())?;

        Ok(map_colors2(
            self,
            opacity.as_image(),
            |Rgb([red, green, blue]), Luma([alpha])| Rgba([red, green, blue, alpha]),
        ))
    }
}

/// Splits an RGBA image into its color channels and its (clamped) opacity.
///
/// The alpha channel is taken as opacity as-is; it is not inverted.
pub fn split_opacity(image: &Image<Rgba<f32>>) -> (Image<Rgb<f32>>, Opacity) {
    let rgb = map_colors(image, |Rgba([red, green, blue, _])| Rgb([red, green, blue]));
    let alpha = map_colors(image, |Rgba([_, _, _, alpha])| Luma([clamp_unit(alpha)]));
    (rgb, Opacity(alpha))
}
