//! # 梯形积分

use crate::models::SpectralSample;

/// 梯形法则 ∫y dx
///
/// 少于两个点时返回 0.0；`x` 与 `y` 长度不同时按较短者截断。
pub fn trapz(y: &[f64], x: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n - 1 {
        // Area of trapezoid = (width) * (average height)
        sum += (x[i + 1] - x[i]) * (y[i] + y[i + 1]) / 2.0;
    }
    sum
}

/// 对采样序列按波数积分 f(sample)
pub fn trapz_samples<F>(samples: &[SpectralSample], f: F) -> f64
where
    F: Fn(&SpectralSample) -> f64,
{
    let x: Vec<f64> = samples.iter().map(|s| s.wavenumber).collect();
    let y: Vec<f64> = samples.iter().map(f).collect();
    trapz(&y, &x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trapz_piecewise() {
        let x = [300.0, 400.0, 500.0, 600.0];
        let y = [0.0, 0.5, 0.5, 0.0];
        // 25 + 50 + 25
        assert_relative_eq!(trapz(&y, &x), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapz_degenerate() {
        assert_eq!(trapz(&[], &[]), 0.0);
        assert_eq!(trapz(&[3.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_trapz_descending_is_negated() {
        let x = [1.0, 2.0, 4.0];
        let y = [1.0, 3.0, 2.0];
        let xr: Vec<f64> = x.iter().rev().copied().collect();
        let yr: Vec<f64> = y.iter().rev().copied().collect();
        assert_relative_eq!(trapz(&yr, &xr), -trapz(&y, &x), epsilon = 1e-12);
    }

    #[test]
    fn test_trapz_samples_matches_trapz() {
        let samples = vec![
            SpectralSample::new(2000.0, 0.5, 1.0, 0.0),
            SpectralSample::new(2500.0, 0.8, 1.0, 0.0),
            SpectralSample::new(3000.0, 0.5, 1.0, 0.0),
        ];
        assert_relative_eq!(
            trapz_samples(&samples, |s| s.transmittance),
            trapz(&[0.5, 0.8, 0.5], &[2000.0, 2500.0, 3000.0]),
            epsilon = 1e-12
        );
        assert_relative_eq!(trapz_samples(&samples, |s| s.boa_sun()), 650.0, epsilon = 1e-9);
    }
}
