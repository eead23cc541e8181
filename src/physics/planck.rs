//! # 普朗克黑体辐射
//!
//! 波数域黑体光谱辐亮度，能量单位 W/(m²·sr·cm⁻¹)。
//!
//! ## 依赖关系
//! - 被 `integration/engine.rs` 用于有效透过率加权
//! - 使用 `physics/constants.rs`

use super::constants::{BOLTZMANN, PER_CM_TO_PER_M, PLANCK, SPEED_OF_LIGHT};

/// 太阳光谱近似温度 (K)
pub const SUN_TEMPERATURE: f64 = 6000.0;

/// 环境热背景温度 (K)
pub const AMBIENT_TEMPERATURE: f64 = 300.0;

/// 黑体光谱辐亮度 L(ν, T)
///
/// # 参数
/// - `wavenumber`: 波数 (cm⁻¹)
/// - `temperature`: 温度 (K)
///
/// # 返回
/// W/(m²·sr·cm⁻¹)；非正波数或温度返回 0.0，指数溢出时趋于 0.0
pub fn planck_radiance(wavenumber: f64, temperature: f64) -> f64 {
    if wavenumber <= 0.0 || temperature <= 0.0 {
        return 0.0;
    }

    let nu_m = wavenumber * PER_CM_TO_PER_M;
    let exponent = PLANCK * SPEED_OF_LIGHT * nu_m / (BOLTZMANN * temperature);
    let numerator = 2.0 * PLANCK * SPEED_OF_LIGHT * SPEED_OF_LIGHT * nu_m.powi(3);

    // 每 m⁻¹ → 每 cm⁻¹
    numerator / exponent.exp_m1() * PER_CM_TO_PER_M
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::trapz::trapz;
    use approx::assert_relative_eq;

    #[test]
    fn test_planck_reference_value() {
        assert_relative_eq!(
            planck_radiance(1000.0, 300.0),
            0.099_240_333,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_planck_peak_near_wien() {
        // 波数域峰值约 1.961 T cm⁻¹
        let peak = 1.961 * AMBIENT_TEMPERATURE;
        let l = planck_radiance(peak, AMBIENT_TEMPERATURE);
        assert!(l > planck_radiance(peak - 50.0, AMBIENT_TEMPERATURE));
        assert!(l > planck_radiance(peak + 50.0, AMBIENT_TEMPERATURE));
    }

    #[test]
    fn test_planck_stefan_boltzmann() {
        // ∫L dν = σT⁴/π
        let nu: Vec<f64> = (1..=20_000).map(|n| n as f64).collect();
        let l: Vec<f64> = nu
            .iter()
            .map(|&x| planck_radiance(x, AMBIENT_TEMPERATURE))
            .collect();
        let expected = 5.670_374_419e-8 * AMBIENT_TEMPERATURE.powi(4) / std::f64::consts::PI;
        assert_relative_eq!(trapz(&l, &nu), expected, max_relative = 1e-4);
    }

    #[test]
    fn test_planck_degenerate_inputs() {
        assert_eq!(planck_radiance(0.0, 300.0), 0.0);
        assert_eq!(planck_radiance(1000.0, 0.0), 0.0);
        // 指数溢出
        assert_eq!(planck_radiance(1.0e6, 1.0), 0.0);
    }
}
