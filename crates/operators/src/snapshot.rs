//! Image file I/O for [`ImageField`].
//!
//! Feature-gated behind `png` (default on) so library users that only need
//! the operators do not pull in the `image` crate. The pixel buffer
//! conversion itself lives in [`crate::pixel`] (always available).

use crate::pixel::{field_to_rgb, rgb_to_field};
use pde_filter_core::{FilterError, ImageField};
use std::path::Path;

/// Loads an image file and converts it to a floating-point field.
///
/// Any format the `image` crate's PNG-enabled build can decode is accepted;
/// the pixels are converted to RGB8 first. Returns `FilterError::Io` on
/// decode failure.
pub fn read_image(path: &Path) -> Result<ImageField, FilterError> {
    let img = image::open(path)
        .map_err(|e| FilterError::Io(e.to_string()))?
        .to_rgb8();
    rgb_to_field(img.width() as usize, img.height() as usize, img.as_raw())
}

/// Clamps a field to displayable RGB8 and writes it as an image file.
///
/// Returns `FilterError::InvalidDimensions` if the field dimensions overflow
/// `u32`, or `FilterError::Io` on encode/write failure.
pub fn write_image(field: &ImageField, path: &Path) -> Result<(), FilterError> {
    let rgb = field_to_rgb(field);
    let w = u32::try_from(field.width()).map_err(|_| FilterError::InvalidDimensions)?;
    let h = u32::try_from(field.height()).map_err(|_| FilterError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, rgb)
        .ok_or_else(|| FilterError::Io("RGB buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FilterError::Io(e.to_string()))
}
