use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How two images of different resolution are brought to a common size
/// before compositing.
///
/// "Smaller" and "larger" refer to pixel area for the scaling policies and
/// to each axis independently for the crop/pad policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeMatchPolicy {
    /// Scale the smaller image uniformly to fit inside the larger one, then pad
    /// it (centered) with zero pixels up to the larger size.
    FitPad,
    /// Scale the smaller image uniformly to cover the larger one, then crop the
    /// overflow symmetrically around the center.
    #[default]
    CoverCropCenter,
    /// Same scaling as [`SizeMatchPolicy::CoverCropCenter`], but the overflow is
    /// cropped from the bottom/right only.
    CoverCropTopLeft,
    /// Scale the smaller image independently per axis to exactly the larger
    /// size. The only policy that distorts aspect ratio.
    CoverDistort,
    /// No scaling; every axis that is larger than its counterpart is cropped
    /// symmetrically around the center.
    CropLargerCenter,
    /// No scaling; every axis that is larger than its counterpart is cropped
    /// from the bottom/right only.
    CropLargerTopLeft,
    /// No scaling; every axis that is smaller than its counterpart is padded
    /// symmetrically with zero pixels.
    PadSmaller,
}

impl SizeMatchPolicy {
    /// All policies, in the order a host should present them.
    pub const ALL: [Self; 7] = [
        Self::FitPad,
        Self::CoverCropCenter,
        Self::CoverCropTopLeft,
        Self::CoverDistort,
        Self::CropLargerCenter,
        Self::CropLargerTopLeft,
        Self::PadSmaller,
    ];

    /// Canonical identifier of the policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FitPad => "fit_pad",
            Self::CoverCropCenter => "cover_crop_center",
            Self::CoverCropTopLeft => "cover_crop_topleft",
            Self::CoverDistort => "cover_distort",
            Self::CropLargerCenter => "crop_larger_center",
            Self::CropLargerTopLeft => "crop_larger_topleft",
            Self::PadSmaller => "pad_smaller",
        }
    }
}

impl fmt::Display for SizeMatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeMatchPolicy {
    type Err = Error;

    /// Parses a canonical policy name or one of the legacy host aliases
    /// (`fit_center`, `cover_crop`, `fill`, `center_dont_resize`).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fit_pad" | "fit_center" => Ok(Self::FitPad),
            "cover_crop_center" => Ok(Self::CoverCropCenter),
            "cover_crop_topleft" | "cover_crop" => Ok(Self::CoverCropTopLeft),
            "cover_distort" | "fill" => Ok(Self::CoverDistort),
            "crop_larger_center" => Ok(Self::CropLargerCenter),
            "crop_larger_topleft" => Ok(Self::CropLargerTopLeft),
            "pad_smaller" | "center_dont_resize" => Ok(Self::PadSmaller),
            other => Err(Error::UnsupportedPolicy(other.to_owned())),
        }
    }
}
