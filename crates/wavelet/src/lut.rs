//! Per-scale lookup table of mother-wavelet samples.

use crate::error::WaveletError;
use crate::kernel::MotherWavelet;

/// Mother-wavelet samples over the discrete kernel support of one scale.
///
/// For scale `s` with half-width `h = floor(s)` the table holds
/// `2h + 1` entries, entry `i` being `psi((i - h) / s)`.
///
/// # Example
///
/// ```
/// use ridgewave_wavelet::{KernelLut, MexicanHat};
///
/// let lut = KernelLut::new(&MexicanHat::new(1.0).unwrap(), 3.7).unwrap();
/// assert_eq!(lut.half_width(), 3);
/// assert_eq!(lut.len(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct KernelLut {
    values: Vec<f64>,
    half_width: usize,
    scale: f64,
}

impl KernelLut {
    /// Samples `wavelet` over the support of `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidScale`] if `scale` is not finite or
    /// lies outside `(0, MAX_SCALE]`.
    pub fn new<W: MotherWavelet + ?Sized>(wavelet: &W, scale: f64) -> Result<Self, WaveletError> {
        validate_scale(scale)?;
        let half_width = scale.floor() as usize;
        let values = (0..=2 * half_width)
            .map(|i| wavelet.evaluate((i as f64 - half_width as f64) / scale))
            .collect();
        Ok(Self {
            values,
            half_width,
            scale,
        })
    }

    /// Returns the table entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of entries (`2 * floor(scale) + 1`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a table has at least the centre entry.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `floor(scale)`, the index of the centre entry.
    pub fn half_width(&self) -> usize {
        self.half_width
    }

    /// Returns the scale the table was sampled at.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Correlates `input` with the table over the clamped window.
    ///
    /// For every output position `tau`, sums `input[t] * lut[t - tau + h]`
    /// for `t` in `[tau - h + 1, tau + h - 1]` intersected with the input
    /// bounds, then divides by `divisor`. Clamping is equivalent to
    /// zero-padding `input` outside its bounds.
    pub(crate) fn convolve(&self, input: &[f64], divisor: f64) -> Vec<f64> {
        let n = input.len();
        let h = self.half_width;
        let mut out = vec![0.0; n];
        if h == 0 {
            // Window [tau + 1, tau - 1] is empty.
            return out;
        }
        let reach = h - 1;
        for (tau, out_tau) in out.iter_mut().enumerate() {
            let lo = tau.saturating_sub(reach);
            let hi = (tau + reach).min(n - 1);
            let mut acc = 0.0;
            for (t, &x) in input.iter().enumerate().take(hi + 1).skip(lo) {
                acc += x * self.values[t + h - tau];
            }
            *out_tau = acc / divisor;
        }
        out
    }
}

/// Largest accepted scale. Its table holds `2 * MAX_SCALE + 1` samples.
pub const MAX_SCALE: f64 = 1.0e6;

/// Checks that a scale is finite and in `(0, MAX_SCALE]`.
pub(crate) fn validate_scale(scale: f64) -> Result<(), WaveletError> {
    if !scale.is_finite() || scale <= 0.0 || scale > MAX_SCALE {
        return Err(WaveletError::InvalidScale(scale));
    }
    Ok(())
}
