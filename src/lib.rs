//! Size matching and alpha compositing of a cutout over a base image.
//!
//! Images are `f32` rasters with samples in `[0, 1]`, stored channel-last.
//! A cutout is first brought to the base's size (or the base to the cutout's)
//! by a [`SizeMatchPolicy`], then blended with its opacity as mix weight.

mod error;
mod imageops;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

pub use error::{CropError, Error, PaddingError, ResizeError};
pub use imageops::alpha::{split_opacity, ApplyOpacity, Opacity};
pub use imageops::batch::composite_batch;
pub use imageops::compositor::{blend, composite};
pub use imageops::crop::Crop;
pub use imageops::padding::{calculate_position, Padding, Position};
pub use imageops::pipeline::{composite_alpha_to_base, composite_images, CompositeOptions};
pub use imageops::policy::SizeMatchPolicy;
pub use imageops::raster::Raster;
pub use imageops::resize::{BilinearResize, BilinearResizeExt, InterpolationWeight};
pub use imageops::size_matcher::{cover_dimensions, fit_dimensions, resolve, SizeMatcher};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
