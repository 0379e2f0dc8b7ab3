//! Numeric helpers for reconstruction diagnostics and coefficient summaries.

/// Root mean square of a slice. Returns 0.0 if empty.
pub fn rms(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = data.iter().map(|&x| x * x).sum();
    (sum_sq / data.len() as f64).sqrt()
}

/// Normalized RMS error between an original signal and its reconstruction:
/// `rms(original - reconstructed) / rms(original)`.
///
/// Pairs beyond the shorter of the two slices are ignored.
/// Returns `None` if the slices are empty or the original has zero energy.
pub fn normalized_rms_error(original: &[f64], reconstructed: &[f64]) -> Option<f64> {
    let n = original.len().min(reconstructed.len());
    if n == 0 {
        return None;
    }
    let reference = rms(&original[..n]);
    if reference == 0.0 {
        return None;
    }
    let residual: Vec<f64> = original[..n]
        .iter()
        .zip(&reconstructed[..n])
        .map(|(o, r)| o - r)
        .collect();
    Some(rms(&residual) / reference)
}

/// Index and value of the entry with the largest magnitude.
///
/// Ties resolve to the lowest index. NaN entries are skipped.
/// Returns `None` if the slice is empty or contains only NaN.
pub fn argmax_abs(data: &[f64]) -> Option<(usize, f64)> {
    data.iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best, (i, v)| match best {
            Some((_, b)) if f64::abs(b) >= v.abs() => best,
            _ => Some((i, v)),
        })
}

/// Pearson correlation coefficient.
///
/// Filters to indices where both `x[i]` and `y[i]` are finite.
/// Returns `None` if fewer than 3 finite pairs or if the denominator is zero
/// (constant input).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 3 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = (sum_xx * sum_yy).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some(sum_xy / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rms() {
        // sqrt((9 + 16) / 2)
        assert_relative_eq!(rms(&[3.0, -4.0]), 12.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_rms_empty() {
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn test_nrms_perfect_reconstruction() {
        let x = [1.0, -2.0, 3.0];
        assert_relative_eq!(normalized_rms_error(&x, &x).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nrms_zero_reconstruction_is_one() {
        let x = [1.0, -2.0, 3.0];
        let zeros = [0.0; 3];
        assert_relative_eq!(
            normalized_rms_error(&x, &zeros).unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_nrms_half_amplitude() {
        let x = [2.0, 4.0, -6.0];
        let half = [1.0, 2.0, -3.0];
        assert_relative_eq!(normalized_rms_error(&x, &half).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_nrms_degenerate() {
        assert!(normalized_rms_error(&[], &[]).is_none());
        assert!(normalized_rms_error(&[0.0, 0.0], &[1.0, 1.0]).is_none());
    }

    #[test]
    fn test_argmax_abs_negative_wins() {
        assert_eq!(argmax_abs(&[1.0, -5.0, 4.0]), Some((1, -5.0)));
    }

    #[test]
    fn test_argmax_abs_tie_lowest_index() {
        assert_eq!(argmax_abs(&[0.0, 2.0, -2.0, 2.0]), Some((1, 2.0)));
    }

    #[test]
    fn test_argmax_abs_skips_nan() {
        assert_eq!(argmax_abs(&[f64::NAN, 1.0]), Some((1, 1.0)));
        assert_eq!(argmax_abs(&[f64::NAN]), None);
        assert_eq!(argmax_abs(&[]), None);
    }

    #[test]
    fn test_pearson_correlation_perfect() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        let r = pearson_correlation(&x, &y);
        assert_relative_eq!(r.unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pearson_correlation_insufficient() {
        let x = [1.0, 2.0];
        let y = [3.0, 4.0];
        assert!(pearson_correlation(&x, &y).is_none());
    }

    #[test]
    fn test_pearson_correlation_with_nan() {
        let x = [1.0, f64::NAN, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, f64::NAN, 8.0, 10.0];
        // Finite pairs: (1,2), (4,8), (5,10)
        let r = pearson_correlation(&x, &y);
        assert_relative_eq!(r.unwrap(), 1.0, epsilon = 1e-6);
    }
}
