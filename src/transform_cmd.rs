//! Transform command: forward CWT across scales, then reconstruction.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use ridgewave_stats::{argmax_abs, normalized_rms_error, pearson_correlation};
use ridgewave_wavelet::{ScaleSpace, transform};

use crate::cli::TransformArgs;
use crate::config;
use crate::convert;
use crate::output;

/// Transform report written as JSON.
#[derive(Debug, Serialize)]
pub struct TransformReport {
    pub wavelet: String,
    pub sigma: f64,
    pub n_positions: usize,
    pub scales: Vec<f64>,
    /// Strongest coefficient per scale, in scale order.
    pub maxima: Vec<ScaleMaximum>,
    /// `None` when the signal is identically zero.
    pub reconstruction_nrms: Option<f64>,
    /// Shape agreement between signal and reconstruction; `None` for
    /// constant input or fewer than 3 samples.
    pub reconstruction_correlation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconstructed: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleMaximum {
    pub scale: f64,
    pub position: usize,
    pub value: f64,
}

/// Run the transform pipeline.
pub fn run(args: TransformArgs) -> Result<()> {
    let _cmd = info_span!("transform").entered();
    let config = config::load(&args.config)?;

    let wavelet = convert::build_wavelet(&config.wavelet)?;
    let scales = convert::build_scales(&config.scales)?;
    let seed = args.seed.or(config.signal.seed);
    let signal = convert::build_signal(&config.signal, seed)?;
    info!(
        wavelet = wavelet.name(),
        n = signal.len(),
        n_scales = scales.len(),
        "signal and scales ready"
    );

    let space = transform(&wavelet, &signal, &scales).context("forward transform failed")?;
    let reconstructed = space
        .reconstruct(&wavelet)
        .context("inverse transform failed")?;
    let nrms = normalized_rms_error(signal.as_slice(), &reconstructed);
    let correlation = pearson_correlation(signal.as_slice(), &reconstructed);
    match nrms {
        Some(e) => info!(nrms = e, "reconstruction complete"),
        None => warn!("signal has zero energy; reconstruction error undefined"),
    }

    let report = TransformReport {
        wavelet: wavelet.name().to_string(),
        sigma: config.wavelet.sigma,
        n_positions: space.n_positions(),
        scales: space.scales().to_vec(),
        maxima: scale_maxima(&space),
        reconstruction_nrms: nrms,
        reconstruction_correlation: correlation,
        coefficients: args.coefficients.then(|| space.images().to_vec()),
        reconstructed: args.coefficients.then_some(reconstructed),
    };

    let path = args.output.or(config.output);
    output::write_json(&report, path.as_deref())
}

fn scale_maxima(space: &ScaleSpace) -> Vec<ScaleMaximum> {
    space
        .scales()
        .iter()
        .zip(space.images())
        .filter_map(|(&scale, image)| {
            argmax_abs(image).map(|(position, value)| ScaleMaximum {
                scale,
                position,
                value,
            })
        })
        .collect()
}
