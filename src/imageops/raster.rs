use image::{ImageBuffer, Luma, Pixel, Rgb, Rgba};

use crate::error::Error;
use crate::Image;

/// A decoded raster as handed over by a host: `f32` samples in `[0, 1]`,
/// laid out height × width × channel (row-major, channel-last).
///
/// This is the only place the storage convention is fixed. Hosts with a
/// channel-first layout reorder axes before building a `Raster`.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<f32>,
}

impl Raster {
    /// Wraps a channel-last buffer.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidBufferLength` - When `data.len()` is not
    ///   `width * height * channels`. A shape whose size overflows `usize`
    ///   reports `usize::MAX` as expected length.
    pub fn new(width: u32, height: u32, channels: usize, data: Vec<f32>) -> Result<Self, Error> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(channels))
            .unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(Error::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub const fn channels(&self) -> usize {
        self.channels
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Copies the raster into an RGB image.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidChannelCount` - Unless the raster has 3 channels
    pub fn to_rgb(&self) -> Result<Image<Rgb<f32>>, Error> {
        self.to_image()
    }

    /// Copies the raster into an RGBA image (opacity in the last channel).
    ///
    /// # Errors
    ///
    /// * `Error::InvalidChannelCount` - Unless the raster has 4 channels
    pub fn to_rgba(&self) -> Result<Image<Rgba<f32>>, Error> {
        self.to_image()
    }

    /// Copies the raster into a single-channel mask.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidChannelCount` - Unless the raster has 1 channel
    pub fn to_mask(&self) -> Result<Image<Luma<f32>>, Error> {
        self.to_image()
    }

    fn to_image<P>(&self) -> Result<Image<P>, Error>
    where
        P: Pixel<Subpixel = f32>,
    {
        let expected = P::CHANNEL_COUNT as usize;
        if self.channels != expected {
            return Err(Error::InvalidChannelCount {
                expected,
                actual: self.channels,
            });
        }

        ImageBuffer::from_raw(self.width, self.height, self.data.clone())
            .ok_or(Error::ImageBufferCreationFailed)
    }
}

impl<P> From<Image<P>> for Raster
where
    P: Pixel<Subpixel = f32>,
{
    fn from(image: Image<P>) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            channels: P::CHANNEL_COUNT as usize,
            data: image.into_raw(),
        }
    }
}
