use thiserror::Error;

/// Error type for compositing operations
///
/// This is the error surfaced by size matching, alpha recombination,
/// blending and the raster boundary. Operation-level errors convert into it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The size-matching policy name is not one of the known policies
    #[error("Unsupported size matching policy: {0}")]
    UnsupportedPolicy(String),

    /// Two images that must share a resolution do not
    ///
    /// Seen by the compositor this means size matching was skipped or
    /// misapplied upstream.
    #[error("Image dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Actual dimensions (width, height)
        actual: (u32, u32),
    },

    /// An input raster does not have the channel depth the operation needs
    #[error("Invalid channel count: expected {expected}, got {actual}")]
    InvalidChannelCount { expected: usize, actual: usize },

    /// A raw buffer length disagrees with its declared shape
    #[error("Buffer length {actual} does not match declared shape ({expected} values)")]
    InvalidBufferLength { expected: usize, actual: usize },

    /// An input image has zero width or height
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Batch inputs have lengths that cannot be broadcast together
    #[error("Batch sizes cannot be broadcast: base {bases}, cutout {cutouts}, mask {masks}")]
    BatchSizeMismatch {
        bases: usize,
        cutouts: usize,
        masks: usize,
    },

    /// Failed to create ImageBuffer from processed pixels
    #[error("Failed to create ImageBuffer from processed pixels")]
    ImageBufferCreationFailed,

    #[error(transparent)]
    Padding(#[from] PaddingError),

    #[error(transparent)]
    Crop(#[from] CropError),

    #[error(transparent)]
    Resize(#[from] ResizeError),
}

/// Error type for padding operations
///
/// Raised when the requested canvas is smaller than the image placed on it.
/// Size matching only pads up to the larger of the two extents, so seeing
/// this from `resolve` means the target was computed wrongly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaddingError {
    /// Canvas narrower than the image
    #[error("Canvas width {pad_width} is smaller than image width {width}")]
    PaddingWidthTooSmall { width: u32, pad_width: u32 },

    /// Canvas shorter than the image
    #[error("Canvas height {pad_height} is smaller than image height {height}")]
    PaddingHeightTooSmall { height: u32, pad_height: u32 },
}

/// Error type for crop operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CropError {
    /// Crop width exceeds the image width
    #[error("Crop width ({crop_width}) must be less than or equal to image width ({width})")]
    CropWidthTooLarge { width: u32, crop_width: u32 },

    /// Crop height exceeds the image height
    #[error("Crop height ({crop_height}) must be less than or equal to image height ({height})")]
    CropHeightTooLarge { height: u32, crop_height: u32 },
}

/// Error type for bilinear resize operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// Target dimensions are invalid (zero width or height)
    #[error("Invalid target dimensions: width={width}, height={height}")]
    InvalidTargetDimensions { width: u32, height: u32 },

    /// Source image is empty
    #[error("Source image is empty: width={width}, height={height}")]
    EmptyImage { width: u32, height: u32 },
}
