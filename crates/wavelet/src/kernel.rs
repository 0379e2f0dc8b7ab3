//! Mother wavelets.
//!
//! A mother wavelet is anything implementing [`MotherWavelet`]: a real-valued
//! prototype function plus the admissibility constant needed to invert the
//! transform. Parameters live in the implementing type and are validated when
//! it is constructed, so evaluation itself is infallible.

use std::f64::consts::PI;

use crate::error::WaveletError;

/// Capability set of a mother wavelet used by the CWT engine.
pub trait MotherWavelet: Send + Sync {
    /// Evaluates the mother wavelet at dimensionless offset `t`.
    fn evaluate(&self, t: f64) -> f64;

    /// Admissibility constant used to normalize the inverse transform.
    fn admissibility_constant(&self) -> f64;
}

/// Mexican-hat wavelet with shape parameter `sigma`.
///
/// `psi(t) = norm * (1 - t^2 / sigma) * exp(-t^2 * sigma / 2)` with
/// `norm = 2 / (sqrt(3 * sqrt(sigma)) * pi^0.25)`.
///
/// The exponent multiplies by `sigma` rather than dividing by `sigma^2` as in
/// the textbook Ricker form. Coefficients produced here must stay comparable
/// with existing peak tables, so the form is kept as is.
///
/// # Example
///
/// ```
/// use ridgewave_wavelet::{MexicanHat, MotherWavelet};
///
/// let hat = MexicanHat::new(1.0).unwrap();
/// assert!(hat.evaluate(0.0) > 0.0);
/// assert!(hat.evaluate(2.0) < 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MexicanHat {
    sigma: f64,
    norm: f64,
}

impl MexicanHat {
    /// Creates a Mexican-hat wavelet.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidParameter`] if `sigma` is not finite
    /// and strictly positive.
    pub fn new(sigma: f64) -> Result<Self, WaveletError> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(WaveletError::InvalidParameter {
                name: "sigma",
                value: sigma,
                reason: "must be finite and > 0",
            });
        }
        let norm = 2.0 / ((3.0 * sigma.sqrt()).sqrt() * PI.powf(0.25));
        Ok(Self { sigma, norm })
    }

    /// Returns the shape parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl MotherWavelet for MexicanHat {
    fn evaluate(&self, t: f64) -> f64 {
        let t2 = t * t;
        self.norm * (1.0 - t2 / self.sigma) * (-t2 * self.sigma / 2.0).exp()
    }

    /// `4 * sqrt(pi) / 3`, independent of `sigma`.
    fn admissibility_constant(&self) -> f64 {
        4.0 * PI.sqrt() / 3.0
    }
}

/// Mother wavelets selectable by name.
///
/// Dispatches to the concrete [`MotherWavelet`] implementation so callers
/// configured from text (e.g. a TOML file) can hold one value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wavelet {
    /// See [`MexicanHat`].
    MexicanHat(MexicanHat),
}

impl Wavelet {
    /// Builds a wavelet from a case-insensitive name and its shape parameter.
    ///
    /// # Supported Names
    ///
    /// | Input | Wavelet |
    /// |-------|---------|
    /// | `"mexican_hat"`, `"mexican-hat"`, `"ricker"` | [`MexicanHat`] |
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::UnsupportedWavelet`] | name is not recognized |
    /// | [`WaveletError::InvalidParameter`] | `sigma` rejected by the variant |
    pub fn from_name(name: &str, sigma: f64) -> Result<Self, WaveletError> {
        match name.to_lowercase().as_str() {
            "mexican_hat" | "mexican-hat" | "ricker" => {
                Ok(Self::MexicanHat(MexicanHat::new(sigma)?))
            }
            _ => Err(WaveletError::UnsupportedWavelet(name.to_string())),
        }
    }

    /// Canonical name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MexicanHat(_) => "mexican_hat",
        }
    }
}

impl MotherWavelet for Wavelet {
    fn evaluate(&self, t: f64) -> f64 {
        match self {
            Self::MexicanHat(w) => w.evaluate(t),
        }
    }

    fn admissibility_constant(&self) -> f64 {
        match self {
            Self::MexicanHat(w) => w.admissibility_constant(),
        }
    }
}

impl From<MexicanHat> for Wavelet {
    fn from(w: MexicanHat) -> Self {
        Self::MexicanHat(w)
    }
}
