use crate::error::PaddingError;
use crate::Image;
use image::{imageops, Pixel};

/// Anchor used when an image is placed inside (padding) or cut out of
/// (cropping) a differently sized rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Centered. An odd remainder goes to the bottom/right side.
    #[default]
    Center,
    /// Top-left corner aligned; all of the difference is on the bottom/right side.
    TopLeft,
}

/// Leading offset of an `inner` extent placed in an `outer` extent.
///
/// Callers guarantee `inner <= outer` on both axes.
#[inline]
pub(crate) const fn anchor_offset(
    inner: (u32, u32),
    outer: (u32, u32),
    position: Position,
) -> (u32, u32) {
    match position {
        Position::Center => ((outer.0 - inner.0) / 2, (outer.1 - inner.1) / 2),
        Position::TopLeft => (0, 0),
    }
}

/// Calculates where an image of `size` lands inside a canvas of `pad_size`
///
/// # Arguments
///
/// * `size` - Source image size (width, height)
/// * `pad_size` - Size after padding (width, height)
/// * `position` - Placement anchor
///
/// # Returns
///
/// The top-left position (x, y) of the source image on the canvas
///
/// # Errors
///
/// * When the padding size is smaller than the source image size
pub fn calculate_position(
    size: (u32, u32),
    pad_size: (u32, u32),
    position: Position,
) -> Result<(u32, u32), PaddingError> {
    let (width, height) = size;
    let (pad_width, pad_height) = pad_size;

    if pad_width < width {
        return Err(PaddingError::PaddingWidthTooSmall { width, pad_width });
    }

    if pad_height < height {
        return Err(PaddingError::PaddingHeightTooSmall { height, pad_height });
    }

    Ok(anchor_offset(size, pad_size, position))
}

/// Trait providing padding operations
pub trait Padding<P: Pixel> {
    /// Adds padding up to the given size at the given position
    ///
    /// # Arguments
    ///
    /// * `pad_size` - Size after padding (width, height)
    /// * `position` - Placement anchor
    /// * `color` - Fill color of the padded area
    ///
    /// # Returns
    ///
    /// Tuple of the padded image and where the source image was placed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use imageops_composite::{Image, Padding, Position};
    /// use image::Rgba;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let cutout: Image<Rgba<f32>> = Image::new(50, 50);
    /// let (padded, offset) =
    ///     cutout.add_padding((100, 50), Position::Center, Rgba([0.0, 0.0, 0.0, 0.0]))?;
    /// assert_eq!(offset, (25, 0));
    /// # Ok(())
    /// # }
    /// ```
    fn add_padding(
        self,
        pad_size: (u32, u32),
        position: Position,
        color: P,
    ) -> Result<(Image<P>, (u32, u32)), PaddingError>;

    /// Calculates the padding position
    fn calculate_padding_position(
        &self,
        pad_size: (u32, u32),
        position: Position,
    ) -> Result<(u32, u32), PaddingError>;
}

impl<P: Pixel> Padding<P> for Image<P> {
    fn add_padding(
        self,
        pad_size: (u32, u32),
        position: Position,
        color: P,
    ) -> Result<(Self, (u32, u32)), PaddingError> {
        let (x, y) = self.calculate_padding_position(pad_size, position)?;
        if pad_size == self.dimensions() {
            return Ok((self, (x, y)));
        }

        let (pad_width, pad_height) = pad_size;
        let mut canvas = Self::from_pixel(pad_width, pad_height, color);
        // `replace` copies pixels verbatim; `overlay` would alpha-blend them.
        imageops::replace(&mut canvas, &self, i64::from(x), i64::from(y));
        Ok((canvas, (x, y)))
    }

    fn calculate_padding_position(
        &self,
        pad_size: (u32, u32),
        position: Position,
    ) -> Result<(u32, u32), PaddingError> {
        calculate_position(self.dimensions(), pad_size, position)
    }
}
