use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Ridgewave configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RidgewaveConfig {
    /// Output JSON path; stdout when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Mother wavelet settings.
    #[serde(default)]
    pub wavelet: WaveletToml,

    /// Scales to analyse.
    #[serde(default)]
    pub scales: ScalesToml,

    /// Input signal, inline or synthetic.
    #[serde(default)]
    pub signal: SignalToml,

    /// Ridge candidates and sort priority.
    #[serde(default)]
    pub rank: RankToml,
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<RidgewaveConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveletToml {
    #[serde(default = "default_wavelet_name")]
    pub name: String,
    #[serde(default = "default_sigma")]
    pub sigma: f64,
}

impl Default for WaveletToml {
    fn default() -> Self {
        Self {
            name: default_wavelet_name(),
            sigma: default_sigma(),
        }
    }
}

fn default_wavelet_name() -> String {
    "mexican_hat".to_string()
}
fn default_sigma() -> f64 {
    1.0
}

/// Either explicit `values`, or an inclusive `min..=max` range by `step`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalesToml {
    #[serde(default)]
    pub values: Option<Vec<f64>>,
    #[serde(default = "default_scale_min")]
    pub min: f64,
    #[serde(default = "default_scale_max")]
    pub max: f64,
    #[serde(default = "default_scale_step")]
    pub step: f64,
}

impl Default for ScalesToml {
    fn default() -> Self {
        Self {
            values: None,
            min: default_scale_min(),
            max: default_scale_max(),
            step: default_scale_step(),
        }
    }
}

fn default_scale_min() -> f64 {
    2.0
}
fn default_scale_max() -> f64 {
    32.0
}
fn default_scale_step() -> f64 {
    1.0
}

/// Inline `values` take precedence over the synthetic chromatogram.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalToml {
    #[serde(default)]
    pub values: Option<Vec<f64>>,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default)]
    pub baseline: f64,
    #[serde(default)]
    pub noise_sd: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub peaks: Vec<PeakToml>,
}

impl Default for SignalToml {
    fn default() -> Self {
        Self {
            values: None,
            length: default_length(),
            baseline: 0.0,
            noise_sd: 0.0,
            seed: None,
            peaks: Vec::new(),
        }
    }
}

fn default_length() -> usize {
    256
}

/// Gaussian peak: `height * exp(-0.5 * ((i - center) / width)^2)`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeakToml {
    pub center: f64,
    pub height: f64,
    pub width: f64,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RankToml {
    /// Feature names, most important first, each sorted ascending. Empty
    /// sorts by the features every candidate shares.
    #[serde(default)]
    pub priority: Vec<String>,
    #[serde(default)]
    pub ridges: Vec<RidgeToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RidgeToml {
    #[serde(default)]
    pub label: Option<String>,
    /// `[position, response]` pairs in scale order.
    pub points: Vec<[f64; 2]>,
}
