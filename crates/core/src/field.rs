//! Three-dimensional image field with replicated borders and unclamped values.
//!
//! An `ImageField` stores `width * height * 3` f64 values in row-major
//! interleaved layout (`(y * width + x) * 3 + c`). Coordinate access clamps
//! out-of-range positions to the nearest edge pixel, so the virtual neighbor
//! outside the grid equals the border value. Values are deliberately **not**
//! clamped to a display range: intermediate states of a PDE integration are
//! allowed to go negative or above 255, and only the final pixel-buffer
//! conversion clamps.

use crate::error::FilterError;

/// Number of color channels per pixel. Fixed: the filter operates on RGB.
pub const CHANNELS: usize = 3;

/// A 2D color field (three f64 channels per pixel) with replicated-border
/// coordinate access and no value clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageField {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ImageField {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `FilterError::InvalidDimensions` if either dimension is zero
    /// or if `width * height * 3` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, FilterError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a field with every channel of every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self, FilterError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Creates a field from a pre-built data vector, validating that
    /// `data.len() == width * height * 3`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, FilterError> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(FilterError::ShapeMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: data.len() / CHANNELS,
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn checked_len(width: usize, height: usize) -> Result<usize, FilterError> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidDimensions);
        }
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(FilterError::InvalidDimensions)
    }

    /// Field width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` when `other` has the same width and height.
    pub fn same_shape(&self, other: &ImageField) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Read-only access to the underlying row-major interleaved data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the underlying row-major interleaved data.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Converts signed pixel coordinates to a flat index, clamping to the
    /// nearest in-grid pixel (replicated-border policy).
    fn index(&self, x: isize, y: isize, c: usize) -> usize {
        let xi = x.clamp(0, self.width as isize - 1) as usize;
        let yi = y.clamp(0, self.height as isize - 1) as usize;
        (yi * self.width + xi) * CHANNELS + c
    }

    /// Gets channel `c` at `(x, y)`. Out-of-range coordinates are clamped to
    /// the nearest edge pixel, so neighbors outside the grid read the border
    /// value.
    pub fn get(&self, x: isize, y: isize, c: usize) -> f64 {
        self.data[self.index(x, y, c)]
    }

    /// Sets channel `c` at `(x, y)`, clamping coordinates to the grid.
    /// The value itself is stored as-is.
    pub fn set(&mut self, x: isize, y: isize, c: usize, value: f64) {
        let idx = self.index(x, y, c);
        self.data[idx] = value;
    }

    /// `self + factor * other`, element-wise. Used for the RK4 probe states.
    ///
    /// Returns `FilterError::ShapeMismatch` if the fields differ in size.
    pub fn axpy(&self, factor: f64, other: &ImageField) -> Result<ImageField, FilterError> {
        if !self.same_shape(other) {
            return Err(FilterError::ShapeMismatch {
                lhs_w: self.width,
                lhs_h: self.height,
                rhs_w: other.width,
                rhs_h: other.height,
            });
        }
        Ok(ImageField {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + factor * b)
                .collect(),
        })
    }

    /// The classical RK4 update `self + (h/6) * (k1 + 2*k2 + 2*k3 + k4)`.
    ///
    /// Returns `FilterError::ShapeMismatch` if any stage differs in size.
    pub fn rk4_combine(
        &self,
        h: f64,
        k1: &ImageField,
        k2: &ImageField,
        k3: &ImageField,
        k4: &ImageField,
    ) -> Result<ImageField, FilterError> {
        for k in [k1, k2, k3, k4] {
            if !self.same_shape(k) {
                return Err(FilterError::ShapeMismatch {
                    lhs_w: self.width,
                    lhs_h: self.height,
                    rhs_w: k.width,
                    rhs_h: k.height,
                });
            }
        }
        let w = h / 6.0;
        let data = (0..self.data.len())
            .map(|i| {
                self.data[i] + w * (k1.data[i] + 2.0 * k2.data[i] + 2.0 * k3.data[i] + k4.data[i])
            })
            .collect();
        Ok(ImageField {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// `true` when every value is finite (no NaN, no infinity).
    ///
    /// The RK4 stepper never calls this; it is a post-integration divergence
    /// probe for callers that want to detect blow-up.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Returns a copy with channels reordered per `perm` (e.g. `[2, 0, 1]`
    /// moves channel 2 into slot 0). Used to verify channel independence.
    pub fn permute_channels(&self, perm: [usize; CHANNELS]) -> ImageField {
        let mut data = vec![0.0; self.data.len()];
        for px in 0..self.width * self.height {
            for (slot, &src) in perm.iter().enumerate() {
                data[px * CHANNELS + slot] = self.data[px * CHANNELS + src];
            }
        }
        ImageField {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Constructor tests --

    #[test]
    fn new_creates_zero_filled_field() {
        let field = ImageField::new(4, 3).unwrap();
        assert_eq!(field.width(), 4);
        assert_eq!(field.height(), 3);
        assert_eq!(field.data().len(), 4 * 3 * CHANNELS);
        assert!(field.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn new_with_zero_dimension_returns_error() {
        assert!(matches!(
            ImageField::new(0, 5),
            Err(FilterError::InvalidDimensions)
        ));
        assert!(matches!(
            ImageField::new(5, 0),
            Err(FilterError::InvalidDimensions)
        ));
    }

    #[test]
    fn new_with_overflow_dimensions_returns_error() {
        assert!(ImageField::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn filled_stores_value_unclamped() {
        let field = ImageField::filled(3, 2, 300.0).unwrap();
        assert!(field.data().iter().all(|&v| v == 300.0));
        let field = ImageField::filled(3, 2, -17.5).unwrap();
        assert!(field.data().iter().all(|&v| v == -17.5));
    }

    #[test]
    fn from_data_creates_field_from_vec() {
        let data: Vec<f64> = (0..2 * 2 * CHANNELS).map(|i| i as f64).collect();
        let field = ImageField::from_data(2, 2, data).unwrap();
        assert_eq!(field.get(0, 0, 0), 0.0);
        assert_eq!(field.get(1, 0, 2), 5.0);
        assert_eq!(field.get(1, 1, 1), 10.0);
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        assert!(ImageField::from_data(2, 2, vec![0.0; 11]).is_err());
    }

    #[test]
    fn from_data_rejects_zero_dimensions() {
        assert!(ImageField::from_data(0, 5, vec![]).is_err());
    }

    // -- get/set and border replication --

    #[test]
    fn get_and_set_round_trip() {
        let mut field = ImageField::new(4, 4).unwrap();
        field.set(2, 3, 1, 0.42);
        assert_eq!(field.get(2, 3, 1), 0.42);
    }

    #[test]
    fn set_does_not_clamp_values() {
        let mut field = ImageField::new(2, 2).unwrap();
        field.set(0, 0, 0, 512.0);
        field.set(1, 1, 2, -64.0);
        assert_eq!(field.get(0, 0, 0), 512.0);
        assert_eq!(field.get(1, 1, 2), -64.0);
    }

    #[test]
    fn get_replicates_left_border() {
        let mut field = ImageField::new(4, 4).unwrap();
        field.set(0, 1, 0, 0.8);
        assert_eq!(field.get(-1, 1, 0), 0.8);
        assert_eq!(field.get(-100, 1, 0), 0.8);
    }

    #[test]
    fn get_replicates_right_border() {
        let mut field = ImageField::new(4, 4).unwrap();
        field.set(3, 2, 1, 0.3);
        assert_eq!(field.get(4, 2, 1), 0.3);
        assert_eq!(field.get(99, 2, 1), 0.3);
    }

    #[test]
    fn get_replicates_top_and_bottom_borders() {
        let mut field = ImageField::new(4, 4).unwrap();
        field.set(1, 0, 2, 0.6);
        field.set(1, 3, 2, 0.9);
        assert_eq!(field.get(1, -1, 2), 0.6);
        assert_eq!(field.get(1, 4, 2), 0.9);
    }

    #[test]
    fn get_replicates_corner_diagonally() {
        let mut field = ImageField::new(3, 3).unwrap();
        field.set(0, 0, 0, 7.0);
        assert_eq!(field.get(-1, -1, 0), 7.0);
    }

    // -- axpy --

    #[test]
    fn axpy_computes_self_plus_scaled_other() {
        let a = ImageField::filled(2, 2, 1.0).unwrap();
        let b = ImageField::filled(2, 2, 2.0).unwrap();
        let c = a.axpy(0.5, &b).unwrap();
        assert!(c.data().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn axpy_does_not_clamp() {
        let a = ImageField::filled(2, 2, 200.0).unwrap();
        let b = ImageField::filled(2, 2, 200.0).unwrap();
        let c = a.axpy(1.0, &b).unwrap();
        assert!(c.data().iter().all(|&v| v == 400.0));
    }

    #[test]
    fn axpy_does_not_mutate_operands() {
        let a = ImageField::filled(2, 2, 1.0).unwrap();
        let b = ImageField::filled(2, 2, 2.0).unwrap();
        let _ = a.axpy(3.0, &b).unwrap();
        assert!(a.data().iter().all(|&v| v == 1.0));
        assert!(b.data().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn axpy_returns_error_on_shape_mismatch() {
        let a = ImageField::new(2, 3).unwrap();
        let b = ImageField::new(3, 2).unwrap();
        assert!(matches!(
            a.axpy(1.0, &b),
            Err(FilterError::ShapeMismatch { .. })
        ));
    }

    // -- rk4_combine --

    #[test]
    fn rk4_combine_applies_classical_weights() {
        let u = ImageField::filled(2, 2, 10.0).unwrap();
        let k1 = ImageField::filled(2, 2, 1.0).unwrap();
        let k2 = ImageField::filled(2, 2, 2.0).unwrap();
        let k3 = ImageField::filled(2, 2, 3.0).unwrap();
        let k4 = ImageField::filled(2, 2, 4.0).unwrap();
        // 10 + (0.6/6) * (1 + 4 + 6 + 4) = 10 + 0.1 * 15 = 11.5
        let next = u.rk4_combine(0.6, &k1, &k2, &k3, &k4).unwrap();
        assert!(next.data().iter().all(|&v| (v - 11.5).abs() < 1e-12));
    }

    #[test]
    fn rk4_combine_rejects_mismatched_stage() {
        let u = ImageField::new(2, 2).unwrap();
        let k = ImageField::new(2, 2).unwrap();
        let bad = ImageField::new(3, 3).unwrap();
        assert!(matches!(
            u.rk4_combine(0.1, &k, &k, &bad, &k),
            Err(FilterError::ShapeMismatch { .. })
        ));
    }

    // -- is_finite --

    #[test]
    fn is_finite_true_for_ordinary_values() {
        let field = ImageField::filled(3, 3, -1e9).unwrap();
        assert!(field.is_finite());
    }

    #[test]
    fn is_finite_false_on_nan_or_infinity() {
        let mut field = ImageField::new(3, 3).unwrap();
        field.set(1, 1, 0, f64::NAN);
        assert!(!field.is_finite());
        let mut field = ImageField::new(3, 3).unwrap();
        field.set(0, 2, 2, f64::INFINITY);
        assert!(!field.is_finite());
    }

    // -- permute_channels --

    #[test]
    fn permute_channels_reorders_per_pixel() {
        let mut field = ImageField::new(2, 1).unwrap();
        field.set(0, 0, 0, 1.0);
        field.set(0, 0, 1, 2.0);
        field.set(0, 0, 2, 3.0);
        let p = field.permute_channels([2, 0, 1]);
        assert_eq!(p.get(0, 0, 0), 3.0);
        assert_eq!(p.get(0, 0, 1), 1.0);
        assert_eq!(p.get(0, 0, 2), 2.0);
    }

    #[test]
    fn identity_permutation_is_noop() {
        let field = ImageField::filled(3, 2, 0.25).unwrap();
        assert_eq!(field.permute_channels([0, 1, 2]), field);
    }

    // -- Clone --

    #[test]
    fn clone_produces_independent_copy() {
        let mut original = ImageField::new(3, 3).unwrap();
        original.set(1, 1, 0, 0.5);
        let clone = original.clone();
        original.set(1, 1, 0, 0.9);
        assert_eq!(clone.get(1, 1, 0), 0.5);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn dimension() -> impl Strategy<Value = usize> {
            1_usize..=32
        }

        fn any_coord() -> impl Strategy<Value = isize> {
            -100_isize..=100
        }

        proptest! {
            #[test]
            fn get_after_set_returns_exact_value(
                w in dimension(),
                h in dimension(),
                x in any_coord(),
                y in any_coord(),
                c in 0_usize..CHANNELS,
                v in -1e6_f64..1e6,
            ) {
                let mut field = ImageField::new(w, h).unwrap();
                field.set(x, y, c, v);
                prop_assert_eq!(field.get(x, y, c), v);
            }

            #[test]
            fn out_of_range_reads_match_clamped_coordinate(
                w in dimension(),
                h in dimension(),
                x in any_coord(),
                y in any_coord(),
                c in 0_usize..CHANNELS,
            ) {
                let mut field = ImageField::new(w, h).unwrap();
                let cx = x.clamp(0, w as isize - 1);
                let cy = y.clamp(0, h as isize - 1);
                field.set(cx, cy, c, 0.77);
                prop_assert_eq!(field.get(x, y, c), 0.77);
            }

            #[test]
            fn axpy_zero_factor_is_identity(
                w in dimension(),
                h in dimension(),
                fill in -255.0_f64..512.0,
            ) {
                let a = ImageField::filled(w, h, fill).unwrap();
                let b = ImageField::filled(w, h, 99.0).unwrap();
                let c = a.axpy(0.0, &b).unwrap();
                prop_assert_eq!(c, a);
            }
        }
    }
}
