//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use ridgewave_ridge::{Ridge, RidgePoint};
use ridgewave_wavelet::{ScaleSet, Signal, Wavelet};

use crate::config::*;

/// Builds the mother wavelet named in the TOML wavelet configuration.
pub fn build_wavelet(wavelet: &WaveletToml) -> Result<Wavelet> {
    Wavelet::from_name(&wavelet.name, wavelet.sigma).context("invalid [wavelet] configuration")
}

/// Builds a [`ScaleSet`] from explicit values or the `min`/`max`/`step` range.
pub fn build_scales(scales: &ScalesToml) -> Result<ScaleSet> {
    let set = match scales.values {
        Some(ref values) => ScaleSet::new(values.clone()),
        None => ScaleSet::linear(scales.min, scales.max, scales.step),
    };
    set.context("invalid [scales] configuration")
}

/// Builds the input [`Signal`].
///
/// Inline values are used as-is. Otherwise a synthetic chromatogram of
/// `length` samples is drawn: baseline plus Gaussian peaks plus normal
/// noise seeded from `seed` (OS entropy when `None`).
pub fn build_signal(signal: &SignalToml, seed: Option<u64>) -> Result<Signal> {
    let data = match signal.values {
        Some(ref values) => values.clone(),
        None => synthesize(signal, seed)?,
    };
    Signal::new(data).context("invalid [signal] configuration")
}

fn synthesize(signal: &SignalToml, seed: Option<u64>) -> Result<Vec<f64>> {
    for (i, p) in signal.peaks.iter().enumerate() {
        if !(p.width.is_finite() && p.width > 0.0) {
            bail!("signal.peaks[{i}]: width must be finite and > 0, got {}", p.width);
        }
    }
    if !(signal.noise_sd.is_finite() && signal.noise_sd >= 0.0) {
        bail!("signal.noise_sd must be finite and >= 0, got {}", signal.noise_sd);
    }

    let mut data: Vec<f64> = (0..signal.length)
        .map(|i| {
            let x = i as f64;
            signal.baseline
                + signal
                    .peaks
                    .iter()
                    .map(|p| {
                        let z = (x - p.center) / p.width;
                        p.height * (-0.5 * z * z).exp()
                    })
                    .sum::<f64>()
        })
        .collect();

    if signal.noise_sd > 0.0 {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let noise = Normal::new(0.0, signal.noise_sd)
            .map_err(|e| anyhow::anyhow!("invalid noise distribution: {e}"))?;
        for v in &mut data {
            *v += noise.sample(&mut rng);
        }
    }
    Ok(data)
}

/// Builds one [`Ridge`] per `[[rank.ridges]]` entry. Empty ridges are rejected.
pub fn build_ridges(rank: &RankToml) -> Result<Vec<Ridge>> {
    rank.ridges
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if r.points.is_empty() {
                bail!("rank.ridges[{i}] has no points");
            }
            Ok(r.points
                .iter()
                .map(|&[position, response]| RidgePoint::new(position, response))
                .collect::<Ridge>())
        })
        .collect()
}
