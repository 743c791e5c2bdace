use image::{imageops, Pixel};

use crate::error::CropError;
use crate::imageops::padding::{anchor_offset, Position};
use crate::Image;

/// Trait for cutting an image down to a smaller rectangle
pub trait Crop<P: Pixel> {
    /// Crops the image to `size`, keeping the region selected by `position`.
    ///
    /// With [`Position::Center`] the leading offset on each axis is
    /// `floor(difference / 2)`, so an odd remainder is removed from the
    /// bottom/right edge. With [`Position::TopLeft`] everything is removed from
    /// the bottom/right.
    ///
    /// # Errors
    ///
    /// * `CropError::CropWidthTooLarge` / `CropError::CropHeightTooLarge` - When
    ///   the requested size exceeds the image on either axis
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use imageops_composite::{Crop, Image, Position};
    /// use image::Rgb;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let base: Image<Rgb<f32>> = Image::new(200, 100);
    /// let cropped = base.crop_to((50, 50), Position::Center)?;
    /// assert_eq!(cropped.dimensions(), (50, 50));
    /// # Ok(())
    /// # }
    /// ```
    fn crop_to(self, size: (u32, u32), position: Position) -> Result<Image<P>, CropError>;

    /// Top-left corner of the region [`Crop::crop_to`] would keep.
    fn calculate_crop_position(
        &self,
        size: (u32, u32),
        position: Position,
    ) -> Result<(u32, u32), CropError>;
}

impl<P: Pixel + 'static> Crop<P> for Image<P> {
    fn crop_to(self, size: (u32, u32), position: Position) -> Result<Self, CropError> {
        let (x, y) = self.calculate_crop_position(size, position)?;
        if size == self.dimensions() {
            return Ok(self);
        }

        let (crop_width, crop_height) = size;
        Ok(imageops::crop_imm(&self, x, y, crop_width, crop_height).to_image())
    }

    fn calculate_crop_position(
        &self,
        size: (u32, u32),
        position: Position,
    ) -> Result<(u32, u32), CropError> {
        let (width, height) = self.dimensions();
        let (crop_width, crop_height) = size;

        if crop_width > width {
            return Err(CropError::CropWidthTooLarge { width, crop_width });
        }

        if crop_height > height {
            return Err(CropError::CropHeightTooLarge {
                height,
                crop_height,
            });
        }

        Ok(anchor_offset(size, (width, height), position))
    }
}
