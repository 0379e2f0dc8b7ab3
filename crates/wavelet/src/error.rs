//! Error types for the ridgewave-wavelet crate.

/// Error type for all fallible operations in the ridgewave-wavelet crate.
///
/// Covers parameter validation for mother wavelets, scale sets and signals,
/// and shape checks on the inputs of the inverse transform.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WaveletError {
    /// Returned when the input signal has no samples.
    #[error("signal is empty")]
    EmptySignal,

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a scale is not finite or lies outside `(0, MAX_SCALE]`.
    #[error("invalid scale {0}: must be finite, > 0 and <= 1e6")]
    InvalidScale(f64),

    /// Returned when a wavelet parameter fails validation.
    #[error("invalid wavelet parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Value that was rejected.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// Returned when a scale range cannot produce any scale.
    #[error("invalid scale range: {0}")]
    InvalidScaleRange(String),

    /// Returned when an operation needs at least one scale and got none.
    #[error("no scales provided")]
    NoScales,

    /// Returned when coefficient images and scales are not index-aligned.
    #[error("scale/image count mismatch: {images} images for {scales} scales")]
    ScaleImageMismatch {
        /// Number of coefficient images.
        images: usize,
        /// Number of scales.
        scales: usize,
    },

    /// Returned when a coefficient image length differs from the first image.
    #[error("coefficient image {index} has length {len}, expected {expected}")]
    ImageLengthMismatch {
        /// Index of the offending image.
        index: usize,
        /// Its length.
        len: usize,
        /// Length of the first image.
        expected: usize,
    },

    /// Returned when an unsupported mother-wavelet name is provided.
    #[error("unsupported wavelet: {0}")]
    UnsupportedWavelet(String),
}
