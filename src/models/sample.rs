//! # 光谱采样数据模型
//!
//! tape7 输出的一行：波数、总透过率、大气顶太阳辐照度、总路径辐亮度。
//!
//! ## 依赖关系
//! - 被 `parsers/tape7.rs` 构造
//! - 被 `physics/units.rs`, `integration/` 使用

/// 单个光谱采样点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralSample {
    /// 波数 (cm⁻¹)
    pub wavenumber: f64,

    /// 总透过率 (0-1)
    pub transmittance: f64,

    /// 大气顶太阳光谱辐照度
    pub toa_sun: f64,

    /// 总路径光谱辐亮度
    pub path_radiance: f64,
}

impl SpectralSample {
    pub fn new(wavenumber: f64, transmittance: f64, toa_sun: f64, path_radiance: f64) -> Self {
        SpectralSample {
            wavenumber,
            transmittance,
            toa_sun,
            path_radiance,
        }
    }

    /// 大气底辐照度：透过率 × 大气顶辐照度
    pub fn boa_sun(&self) -> f64 {
        self.transmittance * self.toa_sun
    }
}

/// 按波数升序排序后的新序列
///
/// tape7 的波数方向取决于求解器约定，积分前统一升序以保证符号正确。
pub fn sorted_by_wavenumber(samples: &[SpectralSample]) -> Vec<SpectralSample> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.wavenumber.total_cmp(&b.wavenumber));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_wavenumber_reverses_descending() {
        let samples = vec![
            SpectralSample::new(3000.0, 0.5, 1.0, 0.0),
            SpectralSample::new(2500.0, 0.8, 1.0, 0.0),
            SpectralSample::new(2000.0, 0.5, 1.0, 0.0),
        ];
        let sorted = sorted_by_wavenumber(&samples);
        let nu: Vec<f64> = sorted.iter().map(|s| s.wavenumber).collect();
        assert_eq!(nu, vec![2000.0, 2500.0, 3000.0]);
        // 原序列不变
        assert_eq!(samples[0].wavenumber, 3000.0);
    }

    #[test]
    fn test_boa_sun() {
        let s = SpectralSample::new(2000.0, 0.25, 8.0, 0.0);
        assert_eq!(s.boa_sun(), 2.0);
    }
}
