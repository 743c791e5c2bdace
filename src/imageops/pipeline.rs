use image::{Rgb, Rgba};
use tracing::debug;

use crate::error::Error;
use crate::imageops::alpha::{ApplyOpacity, Opacity};
use crate::imageops::compositor::composite;
use crate::imageops::policy::SizeMatchPolicy;
use crate::imageops::raster::Raster;
use crate::imageops::size_matcher::resolve;
use crate::Image;

/// Options for compositing a cutout onto a base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompositeOptions {
    /// How base and cutout are brought to the same size.
    pub policy: SizeMatchPolicy,
}

impl CompositeOptions {
    pub const fn new(policy: SizeMatchPolicy) -> Self {
        Self { policy }
    }

    /// # Errors
    ///
    /// * `Error::UnsupportedPolicy` - When the name is not recognized
    pub fn from_policy_name(name: &str) -> Result<Self, Error> {
        name.parse().map(Self::new)
    }
}

/// Composites a cutout over a base image, matching their sizes first.
///
/// * With `mask`, the cutout must be RGB and the mask a single channel of the
///   cutout's resolution. The mask stores transparency and is turned into
///   opacity with `1 - mask`.
/// * Without `mask`, the cutout must be RGBA with opacity in the last channel,
///   used as-is.
///
/// Returns an RGB raster at the resolution chosen by the size-matching policy.
///
/// # Errors
///
/// * `Error::InvalidChannelCount` - When an input has the wrong channel depth
/// * `Error::DimensionMismatch` - When the mask and cutout resolutions differ
/// * `Error::EmptyImage` - When an input has zero width or height
///
/// # Examples
///
/// ```no_run
/// use imageops_composite::{composite_alpha_to_base, CompositeOptions, Raster};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let base = Raster::new(4, 2, 3, vec![0.0; 24])?;
/// let cutout = Raster::new(2, 2, 3, vec![1.0; 12])?;
/// let mask = Raster::new(2, 2, 1, vec![0.0; 4])?;
///
/// let options = CompositeOptions::from_policy_name("fit_pad")?;
/// let output = composite_alpha_to_base(&base, &cutout, Some(&mask), &options)?;
/// assert_eq!(output.dimensions(), (4, 2));
/// # Ok(())
/// # }
/// ```
pub fn composite_alpha_to_base(
    base: &Raster,
    cutout: &Raster,
    mask: Option<&Raster>,
    options: &CompositeOptions,
) -> Result<Raster, Error> {
    debug!(
        policy = %options.policy,
        base = ?base.dimensions(),
        cutout = ?cutout.dimensions(),
        separate_mask = mask.is_some(),
        "compositing cutout onto base"
    );

    let base = base.to_rgb()?;
    let overlay = match mask {
        Some(mask) => {
            let cutout = cutout.to_rgb()?;
            let opacity = Opacity::from_inverted_mask(&mask.to_mask()?);
            cutout.apply_opacity(&opacity)?
        }
        None => cutout.to_rgba()?,
    };

    composite_images(base, overlay, options.policy).map(Raster::from)
}

/// Typed core of [`composite_alpha_to_base`]: size matching followed by
/// blending with the overlay's embedded opacity.
///
/// # Errors
///
/// * `Error::EmptyImage` - When an input has zero width or height
pub fn composite_images(
    base: Image<Rgb<f32>>,
    overlay: Image<Rgba<f32>>,
    policy: SizeMatchPolicy,
) -> Result<Image<Rgb<f32>>, Error> {
    let (base, overlay) = resolve(base, overlay, policy)?;
    composite(&base, &overlay)
}
