//! # ridgewave-wavelet
//!
//! Continuous wavelet transform for locating peaks in chromatographic
//! intensity signals.
//!
//! ## Analysis Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Signal::new(data)?"] -->|"validate"| B["Signal"]
//!     B -->|"apply(&w, &signal, scale)?"| C["coefficient image"]
//!     B -->|"transform(&w, &signal, &scales)?"| D["ScaleSpace"]
//!     D -->|"reconstruct(&w)?"| E["reconstructed signal"]
//!     C -->|"apply_inverse(&w, &images, &scales)?"| E
//! ```
//!
//! ## Supported Wavelets
//!
//! | Wavelet | Parameters | Admissibility constant |
//! |---------|------------|------------------------|
//! | [`MexicanHat`] | `sigma` | `4 * sqrt(pi) / 3` |
//!
//! New wavelets implement [`MotherWavelet`] and get a [`Wavelet`] variant.
//!
//! ## Quick Start
//!
//! ```
//! use ridgewave_wavelet::{MexicanHat, ScaleSet, Signal, transform};
//!
//! let hat = MexicanHat::new(1.0).unwrap();
//! let signal = Signal::new((0..64).map(|i| (-((i as f64 - 32.0) / 4.0).powi(2)).exp()).collect()).unwrap();
//! let scales = ScaleSet::integer(2, 16).unwrap();
//!
//! let space = transform(&hat, &signal, &scales).unwrap();
//! assert_eq!(space.n_scales(), 15);
//! let recon = space.reconstruct(&hat).unwrap();
//! assert_eq!(recon.len(), 64);
//! ```

mod cwt;
mod error;
mod kernel;
mod lut;
mod scales;
mod signal;

pub use cwt::{ScaleSpace, apply, apply_inverse, transform, transform_lines};
pub use error::WaveletError;
pub use kernel::{MexicanHat, MotherWavelet, Wavelet};
pub use lut::{KernelLut, MAX_SCALE};
pub use scales::{MAX_SCALES, ScaleSet};
pub use signal::Signal;
