//! # 单位换算
//!
//! 面积单位换算 (/cm² → /m²) 与能量率 ↔ 光子率换算。
//! 所有函数均为纯函数，返回新序列，不修改输入。
//!
//! ## 依赖关系
//! - 被 `integration/` 使用
//! - 使用 `physics/constants.rs`, `models/sample.rs`

use super::constants::{PER_CM2_TO_PER_M2, PER_CM_TO_PER_M, PLANCK, SPEED_OF_LIGHT};
use crate::models::SpectralSample;

/// 波数 ν (cm⁻¹) 处单个光子的能量 (J)：h·c·ν·1e2
pub fn photon_energy(wavenumber: f64) -> f64 {
    wavenumber * PLANCK * SPEED_OF_LIGHT * PER_CM_TO_PER_M
}

/// 能量率 → 光子率
///
/// 零波数处光子能量为零，返回 0.0。
pub fn energy_to_photon(value: f64, wavenumber: f64) -> f64 {
    let e = photon_energy(wavenumber);
    if e == 0.0 {
        0.0
    } else {
        value / e
    }
}

/// 辐照度与辐亮度列 /cm² → /m²，透过率不变
pub fn area_cm2_to_m2(samples: &[SpectralSample]) -> Vec<SpectralSample> {
    samples
        .iter()
        .map(|s| SpectralSample {
            toa_sun: s.toa_sun * PER_CM2_TO_PER_M2,
            path_radiance: s.path_radiance * PER_CM2_TO_PER_M2,
            ..*s
        })
        .collect()
}

/// 辐照度与辐亮度列转换到光子域，透过率不变
pub fn to_photon_domain(samples: &[SpectralSample]) -> Vec<SpectralSample> {
    samples
        .iter()
        .map(|s| SpectralSample {
            toa_sun: energy_to_photon(s.toa_sun, s.wavenumber),
            path_radiance: energy_to_photon(s.path_radiance, s.wavenumber),
            ..*s
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_photon_energy_at_1um() {
        // 1 µm = 10000 cm⁻¹, E = hc/λ ≈ 1.986e-19 J
        assert_relative_eq!(photon_energy(1.0e4), 1.986_445_857e-19, max_relative = 1e-9);
    }

    #[test]
    fn test_energy_photon_round_trip() {
        for (value, nu) in [(1.0, 2000.0), (3.5e-3, 10_000.0), (42.0, 833.3)] {
            let q = energy_to_photon(value, nu);
            assert_relative_eq!(q * photon_energy(nu), value, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_energy_to_photon_zero_wavenumber() {
        assert_eq!(energy_to_photon(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_area_conversion_leaves_transmittance() {
        let samples = vec![SpectralSample::new(2000.0, 0.7, 2.0, 3.0)];
        let converted = area_cm2_to_m2(&samples);
        assert_eq!(converted[0].wavenumber, 2000.0);
        assert_eq!(converted[0].transmittance, 0.7);
        assert_eq!(converted[0].toa_sun, 2.0e4);
        assert_eq!(converted[0].path_radiance, 3.0e4);
        // 输入未被修改
        assert_eq!(samples[0].toa_sun, 2.0);
    }

    #[test]
    fn test_photon_domain_conversion() {
        let samples = vec![SpectralSample::new(2000.0, 0.7, 1.0, 2.0)];
        let q = to_photon_domain(&samples);
        let e = photon_energy(2000.0);
        assert_relative_eq!(q[0].toa_sun, 1.0 / e, max_relative = 1e-12);
        assert_relative_eq!(q[0].path_radiance, 2.0 / e, max_relative = 1e-12);
        assert_eq!(q[0].transmittance, 0.7);
    }
}
