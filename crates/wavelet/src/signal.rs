//! Validated signal wrapper.

use crate::error::WaveletError;

/// A validated one-dimensional signal of finite `f64` samples.
///
/// The sample index is the position (e.g. scan number). Wraps a `Vec<f64>`
/// and guarantees:
/// - length >= 1
/// - all values are finite (no NaN or infinity)
///
/// # Example
///
/// ```
/// use ridgewave_wavelet::Signal;
///
/// let signal = Signal::new(vec![0.0, 10.0, 0.0]).unwrap();
/// assert_eq!(signal.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    data: Vec<f64>,
}

impl Signal {
    /// Creates a new `Signal` after validating the data.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::EmptySignal`] | `data` is empty |
    /// | [`WaveletError::NonFiniteData`] | any element is NaN or infinite |
    pub fn new(data: Vec<f64>) -> Result<Self, WaveletError> {
        if data.is_empty() {
            return Err(WaveletError::EmptySignal);
        }
        if !data.iter().all(|v| v.is_finite()) {
            return Err(WaveletError::NonFiniteData);
        }
        Ok(Self { data })
    }

    /// Returns the samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the signal is empty.
    ///
    /// Note: a valid `Signal` is never empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the signal and returns the underlying samples.
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl TryFrom<Vec<f64>> for Signal {
    type Error = WaveletError;

    fn try_from(data: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}
