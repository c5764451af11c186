//! Pure conversion between 8-bit RGB pixel buffers and [`ImageField`].
//!
//! Always available (no feature gate) so the feature-gated image I/O path and
//! any in-memory caller share the same conversion. The field works in 0-255
//! units; clamping to the display range happens **only** here, on the way out.

use pde_filter_core::{FilterError, ImageField};

/// Builds a field from a row-major interleaved RGB8 buffer.
///
/// Returns `FilterError::InvalidDimensions` for a zero dimension and
/// `FilterError::ShapeMismatch` if the buffer length is not
/// `width * height * 3`.
pub fn rgb_to_field(width: usize, height: usize, rgb: &[u8]) -> Result<ImageField, FilterError> {
    let data = rgb.iter().map(|&b| f64::from(b)).collect();
    ImageField::from_data(width, height, data)
}

/// Converts a field to an RGB8 buffer, rounding and clamping each value to
/// [0, 255]. This is the single place where out-of-range integration results
/// are brought back to displayable pixels.
pub fn field_to_rgb(field: &ImageField) -> Vec<u8> {
    field
        .data()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pde_filter_core::CHANNELS;

    #[test]
    fn rgb_to_field_preserves_values_and_layout() {
        let rgb: Vec<u8> = (0..2 * 2 * CHANNELS).map(|i| (i * 10) as u8).collect();
        let field = rgb_to_field(2, 2, &rgb).unwrap();
        assert_eq!(field.get(0, 0, 0), 0.0);
        assert_eq!(field.get(1, 0, 1), 40.0);
        assert_eq!(field.get(1, 1, 2), 110.0);
    }

    #[test]
    fn rgb_to_field_rejects_wrong_buffer_length() {
        assert!(rgb_to_field(2, 2, &[0u8; 11]).is_err());
    }

    #[test]
    fn rgb_to_field_rejects_zero_dimension() {
        assert!(matches!(
            rgb_to_field(0, 4, &[]),
            Err(FilterError::InvalidDimensions)
        ));
    }

    #[test]
    fn field_to_rgb_round_trips_in_range_values() {
        let rgb: Vec<u8> = vec![0, 17, 99, 128, 200, 255, 1, 2, 3, 4, 5, 6];
        let field = rgb_to_field(2, 2, &rgb).unwrap();
        assert_eq!(field_to_rgb(&field), rgb);
    }

    #[test]
    fn field_to_rgb_clamps_out_of_range_values() {
        let mut field = ImageField::new(2, 1).unwrap();
        field.set(0, 0, 0, -40.0);
        field.set(0, 0, 1, 300.0);
        field.set(0, 0, 2, f64::NEG_INFINITY);
        field.set(1, 0, 0, 254.6);
        let rgb = field_to_rgb(&field);
        assert_eq!(rgb[0], 0);
        assert_eq!(rgb[1], 255);
        assert_eq!(rgb[2], 0);
        assert_eq!(rgb[3], 255);
    }

    #[test]
    fn field_to_rgb_rounds_to_nearest() {
        let mut field = ImageField::new(1, 1).unwrap();
        field.set(0, 0, 0, 99.4);
        field.set(0, 0, 1, 99.5);
        field.set(0, 0, 2, 99.6);
        assert_eq!(field_to_rgb(&field), vec![99, 100, 100]);
    }

    #[test]
    fn buffer_length_is_three_bytes_per_pixel() {
        let field = ImageField::new(7, 5).unwrap();
        assert_eq!(field_to_rgb(&field).len(), 7 * 5 * CHANNELS);
    }
}
