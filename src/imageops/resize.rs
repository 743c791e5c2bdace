use image::{GenericImageView, ImageBuffer, Pixel};
use tracing::trace;

use crate::error::ResizeError;
use crate::utils::clamp_unit;
use crate::Image;

/// Element of the per-axis weight table for bilinear interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationWeight {
    /// Leading source index
    pub source_index: u32,
    /// Trailing source index (equal to `source_index` at the edge)
    pub next_index: u32,
    /// Weight of the trailing sample; the leading sample gets `1 - weight`
    pub weight: f32,
}

/// Bilinear resampling with half-pixel centers.
///
/// Sample positions follow `src = (dst + 0.5) * scale - 0.5`, clamped at the
/// image edges, which matches the usual "align corners off" convention. The
/// same kernel is used for enlarging and reducing.
pub struct BilinearResize {
    /// New width
    pub new_width: u32,
    /// New height
    pub new_height: u32,
}

impl BilinearResize {
    /// Create a new bilinear resizer.
    pub const fn new(new_width: u32, new_height: u32) -> Result<Self, ResizeError> {
        if new_width == 0 || new_height == 0 {
            return Err(ResizeError::InvalidTargetDimensions {
                width: new_width,
                height: new_height,
            });
        }
        Ok(Self {
            new_width,
            new_height,
        })
    }

    /// Resize image using bilinear interpolation.
    ///
    /// Every output channel is clamped to `[0, 1]`.
    pub fn resize<I, P>(&self, src: &I) -> Result<Image<P>, ResizeError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = f32>,
    {
        let (src_width, src_height) = src.dimensions();

        if src_width == 0 || src_height == 0 {
            return Err(ResizeError::EmptyImage {
                width: src_width,
                height: src_height,
            });
        }

        trace!(
            "bilinear resize {}x{} -> {}x{}",
            src_width,
            src_height,
            self.new_width,
            self.new_height
        );

        let x_weights = compute_interpolation_weights_impl(src_width, self.new_width);
        let y_weights = compute_interpolation_weights_impl(src_height, self.new_height);

        let channels = P::CHANNEL_COUNT as usize;
        let mut output_channels = vec![0.0f32; channels];

        let output = ImageBuffer::from_fn(self.new_width, self.new_height, |dx, dy| {
            let xw = x_weights[dx as usize];
            let yw = y_weights[dy as usize];

            let top_left = src.get_pixel(xw.source_index, yw.source_index);
            let top_right = src.get_pixel(xw.next_index, yw.source_index);
            let bottom_left = src.get_pixel(xw.source_index, yw.next_index);
            let bottom_right = src.get_pixel(xw.next_index, yw.next_index);

            for (c, out) in output_channels.iter_mut().enumerate() {
                let top = lerp(top_left.channels()[c], top_right.channels()[c], xw.weight);
                let bottom = lerp(
                    bottom_left.channels()[c],
                    bottom_right.channels()[c],
                    xw.weight,
                );
                *out = clamp_unit(lerp(top, bottom, yw.weight));
            }

            *P::from_slice(&output_channels)
        });

        Ok(output)
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Compute the bilinear weight table for one axis.
fn compute_interpolation_weights_impl(src_size: u32, dst_size: u32) -> Vec<InterpolationWeight> {
    let scale = f64::from(src_size) / f64::from(dst_size);
    let last = src_size - 1;

    (0..dst_size)
        .map(|d| {
            let position = ((f64::from(d) + 0.5) * scale - 0.5).max(0.0);
            let source_index = (position.floor() as u32).min(last);
            let next_index = (source_index + 1).min(last);
            let weight = if source_index == last {
                0.0
            } else {
                (position - f64::from(source_index)) as f32
            };

            InterpolationWeight {
                source_index,
                next_index,
                weight,
            }
        })
        .collect()
}

/// Extension trait for ImageBuffer to provide bilinear resize methods.
pub trait BilinearResizeExt<P>
where
    P: Pixel,
{
    /// Resize image using bilinear interpolation.
    fn resize_bilinear(self, new_width: u32, new_height: u32) -> Result<Self, ResizeError>
    where
        Self: Sized;
}

impl<P> BilinearResizeExt<P> for Image<P>
where
    P: Pixel<Subpixel = f32>,
{
    fn resize_bilinear(self, new_width: u32, new_height: u32) -> Result<Self, ResizeError> {
        if self.dimensions() == (new_width, new_height) && new_width > 0 && new_height > 0 {
            return Ok(self);
        }
        let resizer = BilinearResize::new(new_width, new_height)?;
        resizer.resize(&self)
    }
}
