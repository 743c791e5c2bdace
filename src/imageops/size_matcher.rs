use image::Pixel;
use tracing::debug;

use crate::error::Error;
use crate::imageops::crop::Crop;
use crate::imageops::padding::{Padding, Position};
use crate::imageops::policy::SizeMatchPolicy;
use crate::imageops::resize::BilinearResizeExt;
use crate::utils::{validate_non_empty_image, zero_pixel};
use crate::Image;

/// Brings a base image and an overlay to the same resolution according to a
/// [`SizeMatchPolicy`].
///
/// The outcome depends only on the two resolutions and the policy, never on
/// pixel content. Channel counts are preserved; padded areas are filled with
/// the all-zero pixel, which is fully transparent for RGBA overlays.
///
/// For the scaling policies the image with the smaller area is transformed and
/// the other is the canvas; on an area tie the overlay is transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeMatcher {
    policy: SizeMatchPolicy,
}

impl SizeMatcher {
    pub const fn new(policy: SizeMatchPolicy) -> Self {
        Self { policy }
    }

    /// Creates a matcher from a policy name (canonical or legacy alias).
    ///
    /// # Errors
    ///
    /// * `Error::UnsupportedPolicy` - When the name is not recognized
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.parse().map(Self::new)
    }

    pub const fn policy(&self) -> SizeMatchPolicy {
        self.policy
    }

    /// Returns `(base', overlay')` with identical width and height.
    ///
    /// Inputs that already share a resolution are returned unchanged.
    ///
    /// # Errors
    ///
    /// * `Error::EmptyImage` - When either image has zero width or height
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use imageops_composite::{Image, SizeMatchPolicy, SizeMatcher};
    /// use image::{Rgb, Rgba};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let base: Image<Rgb<f32>> = Image::new(200, 100);
    /// let overlay: Image<Rgba<f32>> = Image::new(50, 50);
    ///
    /// let matcher = SizeMatcher::new(SizeMatchPolicy::FitPad);
    /// let (base, overlay) = matcher.resolve(base, overlay)?;
    /// assert_eq!(overlay.dimensions(), (200, 100));
    /// # Ok(())
    /// # }
    /// ```
    pub fn resolve<B, O>(
        &self,
        base: Image<B>,
        overlay: Image<O>,
    ) -> Result<(Image<B>, Image<O>), Error>
    where
        B: Pixel<Subpixel = f32> + 'static,
        O: Pixel<Subpixel = f32> + 'static,
    {
        let base_size = base.dimensions();
        let overlay_size = overlay.dimensions();
        validate_non_empty_image(base_size.0, base_size.1)?;
        validate_non_empty_image(overlay_size.0, overlay_size.1)?;

        if base_size == overlay_size {
            return Ok((base, overlay));
        }

        debug!(
            policy = %self.policy,
            ?base_size,
            ?overlay_size,
            "matching image sizes"
        );

        match self.policy {
            SizeMatchPolicy::FitPad => scale_smaller(base, overlay, Scaling::Fit),
            SizeMatchPolicy::CoverCropCenter => {
                scale_smaller(base, overlay, Scaling::Cover(Position::Center))
            }
            SizeMatchPolicy::CoverCropTopLeft => {
                scale_smaller(base, overlay, Scaling::Cover(Position::TopLeft))
            }
            SizeMatchPolicy::CoverDistort => scale_smaller(base, overlay, Scaling::Distort),
            SizeMatchPolicy::CropLargerCenter => crop_larger(base, overlay, Position::Center),
            SizeMatchPolicy::CropLargerTopLeft => crop_larger(base, overlay, Position::TopLeft),
            SizeMatchPolicy::PadSmaller => pad_smaller(base, overlay),
        }
    }
}

/// Resolves `base` and `overlay` to a common size with `policy`.
///
/// Shorthand for `SizeMatcher::new(policy).resolve(base, overlay)`.
pub fn resolve<B, O>(
    base: Image<B>,
    overlay: Image<O>,
    policy: SizeMatchPolicy,
) -> Result<(Image<B>, Image<O>), Error>
where
    B: Pixel<Subpixel = f32> + 'static,
    O: Pixel<Subpixel = f32> + 'static,
{
    SizeMatcher::new(policy).resolve(base, overlay)
}

/// Size of `src` scaled uniformly to fit inside `target`.
///
/// The scale is the smaller of the two per-axis ratios `target / src`; the
/// limiting axis matches `target` exactly and the other is rounded and never
/// exceeds `target`.
pub fn fit_dimensions(src: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (ratio_w, ratio_h) = axis_ratios(src, target);
    if ratio_w <= ratio_h {
        (target.0, scale_axis(src.1, ratio_w).clamp(1, target.1))
    } else {
        (scale_axis(src.0, ratio_h).clamp(1, target.0), target.1)
    }
}

/// Size of `src` scaled uniformly to cover `target`.
///
/// The scale is the larger of the two per-axis ratios `target / src`; the
/// limiting axis matches `target` exactly and the other is rounded and never
/// falls below `target`.
pub fn cover_dimensions(src: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (ratio_w, ratio_h) = axis_ratios(src, target);
    if ratio_w >= ratio_h {
        (target.0, scale_axis(src.1, ratio_w).max(target.1))
    } else {
        (scale_axis(src.0, ratio_h).max(target.0), target.1)
    }
}

fn axis_ratios(src: (u32, u32), target: (u32, u32)) -> (f64, f64) {
    (
        f64::from(target.0) / f64::from(src.0),
        f64::from(target.1) / f64::from(src.1),
    )
}

#[inline]
fn scale_axis(length: u32, ratio: f64) -> u32 {
    (f64::from(length) * ratio).round() as u32
}

#[inline]
fn area((width, height): (u32, u32)) -> u64 {
    u64::from(width) * u64::from(height)
}

#[derive(Debug, Clone, Copy)]
enum Scaling {
    Fit,
    Cover(Position),
    Distort,
}

impl Scaling {
    fn apply<P>(self, image: Image<P>, target: (u32, u32)) -> Result<Image<P>, Error>
    where
        P: Pixel<Subpixel = f32> + 'static,
    {
        let source = image.dimensions();
        let scaled_size = match self {
            Self::Fit => fit_dimensions(source, target),
            Self::Cover(_) => cover_dimensions(source, target),
            Self::Distort => target,
        };
        debug!(?source, ?scaled_size, ?target, scaling = ?self, "scaling image");

        let scaled = image.resize_bilinear(scaled_size.0, scaled_size.1)?;
        match self {
            Self::Fit => {
                let (padded, _) = scaled.add_padding(target, Position::Center, zero_pixel())?;
                Ok(padded)
            }
            Self::Cover(position) => Ok(scaled.crop_to(target, position)?),
            Self::Distort => Ok(scaled),
        }
    }
}

fn scale_smaller<B, O>(
    base: Image<B>,
    overlay: Image<O>,
    scaling: Scaling,
) -> Result<(Image<B>, Image<O>), Error>
where
    B: Pixel<Subpixel = f32> + 'static,
    O: Pixel<Subpixel = f32> + 'static,
{
    let base_size = base.dimensions();
    let overlay_size = overlay.dimensions();

    if area(overlay_size) <= area(base_size) {
        let overlay = scaling.apply(overlay, base_size)?;
        Ok((base, overlay))
    } else {
        let base = scaling.apply(base, overlay_size)?;
        Ok((base, overlay))
    }
}

fn crop_larger<B, O>(
    base: Image<B>,
    overlay: Image<O>,
    position: Position,
) -> Result<(Image<B>, Image<O>), Error>
where
    B: Pixel + 'static,
    O: Pixel + 'static,
{
    let (base_width, base_height) = base.dimensions();
    let (overlay_width, overlay_height) = overlay.dimensions();
    let target = (base_width.min(overlay_width), base_height.min(overlay_height));
    debug!(?target, ?position, "cropping larger axes");

    Ok((
        base.crop_to(target, position)?,
        overlay.crop_to(target, position)?,
    ))
}

fn pad_smaller<B, O>(base: Image<B>, overlay: Image<O>) -> Result<(Image<B>, Image<O>), Error>
where
    B: Pixel,
    O: Pixel,
{
    let (base_width, base_height) = base.dimensions();
    let (overlay_width, overlay_height) = overlay.dimensions();
    let target = (base_width.max(overlay_width), base_height.max(overlay_height));
    debug!(?target, "padding smaller axes");

    let (base, _) = base.add_padding(target, Position::Center, zero_pixel())?;
    let (overlay, _) = overlay.add_padding(target, Position::Center, zero_pixel())?;
    Ok((base, overlay))
}
