//! Validated scale sets for multi-scale sweeps.

use crate::error::WaveletError;
use crate::lut::validate_scale;

/// Largest number of scales a constructed set may hold.
pub const MAX_SCALES: usize = 100_000;

fn check_count(count: usize) -> Result<(), WaveletError> {
    if count > MAX_SCALES {
        return Err(WaveletError::InvalidScaleRange(format!(
            "{count} scales requested, at most {MAX_SCALES} allowed"
        )));
    }
    Ok(())
}

/// An ordered, non-empty list of positive scales.
///
/// Scale order is preserved; it is the order coefficient images come back
/// in from [`transform`](crate::transform).
///
/// # Example
///
/// ```
/// use ridgewave_wavelet::ScaleSet;
///
/// let scales = ScaleSet::linear(2.0, 32.0, 2.0).unwrap();
/// assert_eq!(scales.len(), 16);
/// assert_eq!(scales.as_slice()[0], 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleSet {
    scales: Vec<f64>,
}

impl ScaleSet {
    /// Wraps an explicit list of scales.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::NoScales`] | `scales` is empty |
    /// | [`WaveletError::InvalidScale`] | any scale is invalid |
    /// | [`WaveletError::InvalidScaleRange`] | more than [`MAX_SCALES`] scales |
    pub fn new(scales: Vec<f64>) -> Result<Self, WaveletError> {
        if scales.is_empty() {
            return Err(WaveletError::NoScales);
        }
        check_count(scales.len())?;
        for &s in &scales {
            validate_scale(s)?;
        }
        Ok(Self { scales })
    }

    /// Scales `start, start + step, ...` up to and including `stop`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidScaleRange`] if `step` is not positive,
    /// `stop < start`, or the range holds more than [`MAX_SCALES`] scales,
    /// and [`WaveletError::InvalidScale`] if `start` or `stop` is not a
    /// valid scale.
    pub fn linear(start: f64, stop: f64, step: f64) -> Result<Self, WaveletError> {
        validate_scale(start)?;
        if !step.is_finite() || step <= 0.0 {
            return Err(WaveletError::InvalidScaleRange(format!(
                "step must be finite and > 0, got {step}"
            )));
        }
        if !stop.is_finite() || stop < start {
            return Err(WaveletError::InvalidScaleRange(format!(
                "stop {stop} is below start {start}"
            )));
        }
        validate_scale(stop)?;
        // Tolerate accumulated rounding when stop is an exact multiple.
        let steps = ((stop - start) / step + 1e-9).floor();
        if steps >= MAX_SCALES as f64 {
            return Err(WaveletError::InvalidScaleRange(format!(
                "step {step} over {start}..={stop} yields more than {MAX_SCALES} scales"
            )));
        }
        let count = steps as usize + 1;
        let scales = (0..count).map(|i| start + i as f64 * step).collect();
        Ok(Self { scales })
    }

    /// Every integer scale in `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidScaleRange`] if `min` is zero,
    /// `max < min`, or the range holds more than [`MAX_SCALES`] scales, and
    /// [`WaveletError::InvalidScale`] if `max` is above the largest scale.
    pub fn integer(min: usize, max: usize) -> Result<Self, WaveletError> {
        if min == 0 || max < min {
            return Err(WaveletError::InvalidScaleRange(format!(
                "integer range {min}..={max} must satisfy 1 <= min <= max"
            )));
        }
        validate_scale(max as f64)?;
        check_count(max - min + 1)?;
        Ok(Self {
            scales: (min..=max).map(|s| s as f64).collect(),
        })
    }

    /// Geometric scales `s0 * 2^(j * dj)` for `j = 0..=j_max`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidScale`] if `s0` or the last scale is
    /// invalid, and [`WaveletError::InvalidScaleRange`] if `dj` is not
    /// positive or `j_max` exceeds the scale count limit.
    pub fn geometric(s0: f64, dj: f64, j_max: usize) -> Result<Self, WaveletError> {
        validate_scale(s0)?;
        if !dj.is_finite() || dj <= 0.0 {
            return Err(WaveletError::InvalidScaleRange(format!(
                "dj must be finite and > 0, got {dj}"
            )));
        }
        check_count(j_max.saturating_add(1))?;
        let scales: Vec<f64> = (0..=j_max)
            .map(|j| s0 * 2.0_f64.powf(j as f64 * dj))
            .collect();
        if let Some(&last) = scales.last() {
            validate_scale(last)?;
        }
        Ok(Self { scales })
    }

    /// Returns the scales as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.scales
    }

    /// Returns the number of scales.
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Always `false` for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

impl AsRef<[f64]> for ScaleSet {
    fn as_ref(&self) -> &[f64] {
        &self.scales
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn explicit_scales_keep_order() {
        let set = ScaleSet::new(vec![8.0, 2.0, 4.0]).unwrap();
        assert_eq!(set.as_slice(), &[8.0, 2.0, 4.0]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn explicit_empty_rejected() {
        assert!(matches!(
            ScaleSet::new(vec![]).unwrap_err(),
            WaveletError::NoScales
        ));
    }

    #[test]
    fn explicit_invalid_rejected() {
        assert!(matches!(
            ScaleSet::new(vec![2.0, 0.0]).unwrap_err(),
            WaveletError::InvalidScale(s) if s == 0.0
        ));
    }

    #[test]
    fn linear_inclusive_stop() {
        let set = ScaleSet::linear(2.0, 32.0, 1.0).unwrap();
        assert_eq!(set.len(), 31);
        assert_relative_eq!(set.as_slice()[30], 32.0);
    }

    #[test]
    fn linear_stop_not_on_grid() {
        let set = ScaleSet::linear(2.0, 32.0, 4.0).unwrap();
        assert_eq!(set.as_slice(), &[2.0, 6.0, 10.0, 14.0, 18.0, 22.0, 26.0, 30.0]);
    }

    #[test]
    fn linear_fractional_step() {
        let set = ScaleSet::linear(1.0, 2.0, 0.1).unwrap();
        assert_eq!(set.len(), 11);
        assert_relative_eq!(set.as_slice()[10], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_single_scale() {
        let set = ScaleSet::linear(3.0, 3.0, 1.0).unwrap();
        assert_eq!(set.as_slice(), &[3.0]);
    }

    #[test]
    fn linear_invalid() {
        assert!(matches!(
            ScaleSet::linear(2.0, 10.0, 0.0).unwrap_err(),
            WaveletError::InvalidScaleRange(_)
        ));
        assert!(matches!(
            ScaleSet::linear(10.0, 2.0, 1.0).unwrap_err(),
            WaveletError::InvalidScaleRange(_)
        ));
        assert!(matches!(
            ScaleSet::linear(-1.0, 2.0, 1.0).unwrap_err(),
            WaveletError::InvalidScale(_)
        ));
    }

    #[test]
    fn linear_too_many_scales_rejected() {
        assert!(matches!(
            ScaleSet::linear(1.0, 2.0, 1e-12).unwrap_err(),
            WaveletError::InvalidScaleRange(_)
        ));
        assert_eq!(
            ScaleSet::linear(1.0, MAX_SCALES as f64, 1.0).unwrap().len(),
            MAX_SCALES
        );
    }

    #[test]
    fn oversized_scales_rejected() {
        assert!(matches!(
            ScaleSet::new(vec![2.0, 1e19]).unwrap_err(),
            WaveletError::InvalidScale(_)
        ));
        assert!(matches!(
            ScaleSet::linear(2.0, 1e12, 1e6).unwrap_err(),
            WaveletError::InvalidScale(_)
        ));
        assert!(ScaleSet::integer(1, usize::MAX).is_err());
        assert!(matches!(
            ScaleSet::geometric(2.0, 1.0, 64).unwrap_err(),
            WaveletError::InvalidScale(_)
        ));
        assert!(matches!(
            ScaleSet::geometric(2.0, 1e-9, usize::MAX).unwrap_err(),
            WaveletError::InvalidScaleRange(_)
        ));
    }

    #[test]
    fn integer_range() {
        let set = ScaleSet::integer(2, 5).unwrap();
        assert_eq!(set.as_slice(), &[2.0, 3.0, 4.0, 5.0]);
        assert!(ScaleSet::integer(0, 5).is_err());
        assert!(ScaleSet::integer(6, 5).is_err());
    }

    #[test]
    fn geometric_scales() {
        let s0 = 2.0;
        let dj = 0.25;
        let set = ScaleSet::geometric(s0, dj, 8).unwrap();
        assert_eq!(set.len(), 9);
        for (j, &scale) in set.as_slice().iter().enumerate() {
            let expected = s0 * 2.0_f64.powf(j as f64 * dj);
            assert_relative_eq!(scale, expected, epsilon = 1e-12);
        }
        assert_relative_eq!(set.as_slice()[8], 8.0, epsilon = 1e-12);
    }

    #[test]
    fn geometric_invalid_dj() {
        assert!(matches!(
            ScaleSet::geometric(2.0, -0.1, 4).unwrap_err(),
            WaveletError::InvalidScaleRange(_)
        ));
    }
}
