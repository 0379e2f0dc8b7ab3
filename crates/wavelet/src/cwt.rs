//! Continuous Wavelet Transform (CWT) by LUT-based windowed convolution.
//!
//! The forward transform correlates the signal with a per-scale table of
//! mother-wavelet samples ([`KernelLut`]) and normalizes by `sqrt(scale)`.
//! The inverse runs the same convolution over each coefficient image,
//! normalizes by `scale^2`, sums across scales and divides by the squared
//! admissibility constant. No integration weights are applied across scales,
//! so reconstruction quality depends only on how densely the caller samples
//! them.

use rayon::prelude::*;
use tracing::debug;

use crate::error::WaveletError;
use crate::kernel::MotherWavelet;
use crate::lut::KernelLut;
use crate::scales::ScaleSet;
use crate::signal::Signal;

/// Computes the coefficient image of `signal` at one scale.
///
/// Output length equals the signal length; cost is `O(N * scale)`.
///
/// # Errors
///
/// Returns [`WaveletError::InvalidScale`] if `scale` is non-finite or <= 0.
///
/// # Example
///
/// ```
/// use ridgewave_wavelet::{MexicanHat, Signal, apply};
///
/// let hat = MexicanHat::new(1.0).unwrap();
/// let signal = Signal::new(vec![0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0]).unwrap();
/// let coeffs = apply(&hat, &signal, 3.0).unwrap();
/// assert_eq!(coeffs.len(), 7);
/// ```
pub fn apply<W: MotherWavelet + ?Sized>(
    wavelet: &W,
    signal: &Signal,
    scale: f64,
) -> Result<Vec<f64>, WaveletError> {
    let lut = KernelLut::new(wavelet, scale)?;
    Ok(lut.convolve(signal.as_slice(), scale.sqrt()))
}

/// Reconstructs a signal from coefficient images taken at `scales`.
///
/// `images[k]` must be the coefficient image at `scales[k]`, and all images
/// must share one length, which is the output length.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::NoScales`] | `scales` is empty |
/// | [`WaveletError::ScaleImageMismatch`] | `images.len() != scales.len()` |
/// | [`WaveletError::ImageLengthMismatch`] | images differ in length |
/// | [`WaveletError::EmptySignal`] | images have length 0 |
/// | [`WaveletError::InvalidScale`] | any scale is non-finite or <= 0 |
#[tracing::instrument(skip_all, fields(n_scales = scales.len()))]
pub fn apply_inverse<W: MotherWavelet + ?Sized>(
    wavelet: &W,
    images: &[Vec<f64>],
    scales: &[f64],
) -> Result<Vec<f64>, WaveletError> {
    let n = validate_images(images, scales)?;

    let mut acc = vec![0.0; n];
    for (image, &scale) in images.iter().zip(scales) {
        let lut = KernelLut::new(wavelet, scale)?;
        for (a, c) in acc.iter_mut().zip(lut.convolve(image, scale * scale)) {
            *a += c;
        }
    }

    let c = wavelet.admissibility_constant();
    let c2 = c * c;
    for a in &mut acc {
        *a /= c2;
    }
    debug!(n, "inverse transform done");
    Ok(acc)
}

/// Checks index alignment and shared length of coefficient images.
fn validate_images(images: &[Vec<f64>], scales: &[f64]) -> Result<usize, WaveletError> {
    if scales.is_empty() {
        return Err(WaveletError::NoScales);
    }
    if images.len() != scales.len() {
        return Err(WaveletError::ScaleImageMismatch {
            images: images.len(),
            scales: scales.len(),
        });
    }
    let n = images[0].len();
    if n == 0 {
        return Err(WaveletError::EmptySignal);
    }
    if let Some((index, image)) = images.iter().enumerate().find(|(_, im)| im.len() != n) {
        return Err(WaveletError::ImageLengthMismatch {
            index,
            len: image.len(),
            expected: n,
        });
    }
    Ok(n)
}

/// Coefficient images of one signal over a set of scales.
///
/// `image(k)` is the coefficient image at `scales()[k]`.
#[derive(Clone, Debug)]
pub struct ScaleSpace {
    scales: Vec<f64>,
    images: Vec<Vec<f64>>,
}

impl ScaleSpace {
    /// Wraps externally computed images.
    ///
    /// # Errors
    ///
    /// Same shape checks as [`apply_inverse`].
    pub fn new(scales: Vec<f64>, images: Vec<Vec<f64>>) -> Result<Self, WaveletError> {
        validate_images(&images, &scales)?;
        Ok(Self { scales, images })
    }

    /// Returns the scales, in image order.
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Returns all coefficient images `[n_scales][n_positions]`.
    pub fn images(&self) -> &[Vec<f64>] {
        &self.images
    }

    /// Returns the coefficient image at scale index `k`, if any.
    pub fn image(&self, k: usize) -> Option<&[f64]> {
        self.images.get(k).map(|v| v.as_slice())
    }

    /// Returns the coefficient at scale index `k` and position `tau`, if any.
    pub fn coefficient(&self, k: usize, tau: usize) -> Option<f64> {
        self.images.get(k).and_then(|im| im.get(tau)).copied()
    }

    /// Returns the number of scales.
    pub fn n_scales(&self) -> usize {
        self.scales.len()
    }

    /// Returns the number of positions per image.
    pub fn n_positions(&self) -> usize {
        self.images.first().map_or(0, Vec::len)
    }

    /// Runs [`apply_inverse`] over this scale space.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`apply_inverse`].
    pub fn reconstruct<W: MotherWavelet + ?Sized>(
        &self,
        wavelet: &W,
    ) -> Result<Vec<f64>, WaveletError> {
        apply_inverse(wavelet, &self.images, &self.scales)
    }

    /// Consumes the scale space and returns `(scales, images)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<Vec<f64>>) {
        (self.scales, self.images)
    }
}

/// Forward transform of `signal` at every scale in `scales`.
///
/// Scales are independent and run in parallel, each with its own LUT.
/// Image order follows scale order.
///
/// # Errors
///
/// Propagates [`WaveletError::InvalidScale`] from [`apply`]; a constructed
/// [`ScaleSet`] never triggers it.
#[tracing::instrument(skip_all, fields(n = signal.len(), n_scales = scales.len()))]
pub fn transform<W: MotherWavelet + ?Sized>(
    wavelet: &W,
    signal: &Signal,
    scales: &ScaleSet,
) -> Result<ScaleSpace, WaveletError> {
    let images = scales
        .as_slice()
        .par_iter()
        .map(|&scale| {
            let image = apply(wavelet, signal, scale)?;
            debug!(scale, "coefficient image computed");
            Ok(image)
        })
        .collect::<Result<Vec<_>, WaveletError>>()?;

    Ok(ScaleSpace {
        scales: scales.as_slice().to_vec(),
        images,
    })
}

/// Applies the forward transform at one scale to every line of a 2D
/// chromatogram, independently and in parallel.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::EmptySignal`] | a line has no samples |
/// | [`WaveletError::NonFiniteData`] | a line contains NaN or infinity |
/// | [`WaveletError::InvalidScale`] | `scale` is non-finite or <= 0 |
#[tracing::instrument(skip_all, fields(n_lines = lines.len(), scale = scale))]
pub fn transform_lines<W: MotherWavelet + ?Sized>(
    wavelet: &W,
    lines: &[Vec<f64>],
    scale: f64,
) -> Result<Vec<Vec<f64>>, WaveletError> {
    let lut = KernelLut::new(wavelet, scale)?;
    let divisor = scale.sqrt();
    lines
        .par_iter()
        .map(|line| {
            if line.is_empty() {
                return Err(WaveletError::EmptySignal);
            }
            if !line.iter().all(|v| v.is_finite()) {
                return Err(WaveletError::NonFiniteData);
            }
            Ok(lut.convolve(line, divisor))
        })
        .collect()
}
