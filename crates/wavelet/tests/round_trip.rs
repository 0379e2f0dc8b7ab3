//! Forward/inverse behaviour over realistic scale sweeps.

use approx::assert_relative_eq;
use ridgewave_stats::{argmax_abs, normalized_rms_error};
use ridgewave_wavelet::{
    MexicanHat, ScaleSet, Signal, Wavelet, apply, apply_inverse, transform, transform_lines,
};

/// Single Gaussian peak of height 10 and width 4 centred in 128 scans.
fn gaussian_peak() -> Signal {
    let data = (0..128)
        .map(|i| {
            let z = (i as f64 - 64.0) / 4.0;
            10.0 * (-z * z / 2.0).exp()
        })
        .collect();
    Signal::new(data).unwrap()
}

/// Two overlapping-free peaks of different width and height.
fn two_peaks() -> Signal {
    let data = (0..128)
        .map(|i| {
            let x = i as f64;
            let a = (x - 40.0) / 3.0;
            let b = (x - 90.0) / 5.0;
            10.0 * (-a * a / 2.0).exp() + 6.0 * (-b * b / 2.0).exp()
        })
        .collect();
    Signal::new(data).unwrap()
}

fn reconstruction_error(signal: &Signal, scales: &ScaleSet) -> f64 {
    let hat = MexicanHat::new(1.0).unwrap();
    let space = transform(&hat, signal, scales).unwrap();
    let recon = space.reconstruct(&hat).unwrap();
    assert_eq!(recon.len(), signal.len());
    normalized_rms_error(signal.as_slice(), &recon).unwrap()
}

#[test]
fn error_decreases_with_scale_density() {
    for signal in [gaussian_peak(), two_peaks()] {
        let coarse = reconstruction_error(&signal, &ScaleSet::linear(2.0, 32.0, 4.0).unwrap());
        let medium = reconstruction_error(&signal, &ScaleSet::linear(2.0, 32.0, 2.0).unwrap());
        let dense = reconstruction_error(&signal, &ScaleSet::linear(2.0, 32.0, 1.0).unwrap());
        assert!(
            coarse > medium && medium > dense,
            "errors not decreasing: {coarse} {medium} {dense}"
        );
    }
}

#[test]
fn reconstruction_peaks_where_signal_peaks() {
    let signal = gaussian_peak();
    let hat = MexicanHat::new(1.0).unwrap();
    let space = transform(&hat, &signal, &ScaleSet::integer(2, 16).unwrap()).unwrap();
    let recon = space.reconstruct(&hat).unwrap();
    let (imax, vmax) = argmax_abs(&recon).unwrap();
    assert_eq!(imax, 64);
    assert!(vmax > 0.0);
}

#[test]
fn impulse_end_to_end() {
    let hat = MexicanHat::new(1.0).unwrap();
    let signal = Signal::new(vec![0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0]).unwrap();
    let coeffs = apply(&hat, &signal, 3.0).unwrap();

    assert_eq!(argmax_abs(&coeffs).map(|(i, _)| i), Some(3));
    for d in 1..=3 {
        assert_relative_eq!(coeffs[3 - d], coeffs[3 + d], epsilon = 1e-12);
        assert!(coeffs[3 - d].abs() < coeffs[3 - d + 1].abs());
    }
}

#[test]
fn gaussian_peak_response_strongest_at_apex() {
    let hat = MexicanHat::new(1.0).unwrap();
    let signal = gaussian_peak();
    for scale in [4.0, 8.0, 12.0] {
        let coeffs = apply(&hat, &signal, scale).unwrap();
        assert_eq!(argmax_abs(&coeffs).map(|(i, _)| i), Some(64), "scale {scale}");
    }
}

#[test]
fn enum_wavelet_matches_concrete() {
    let hat = MexicanHat::new(0.8).unwrap();
    let named = Wavelet::from_name("mexican_hat", 0.8).unwrap();
    let signal = two_peaks();
    assert_eq!(
        apply(&hat, &signal, 5.0).unwrap(),
        apply(&named, &signal, 5.0).unwrap()
    );
}

#[test]
fn inverse_accepts_images_from_lines() {
    // Lines of a 2D chromatogram transformed at one scale can be inverted
    // per line with that single scale.
    let hat = MexicanHat::new(1.0).unwrap();
    let lines = vec![gaussian_peak().into_inner(), two_peaks().into_inner()];
    let images = transform_lines(&hat, &lines, 6.0).unwrap();
    for image in &images {
        let recon = apply_inverse(&hat, std::slice::from_ref(image), &[6.0]).unwrap();
        assert_eq!(recon.len(), 128);
    }
}
