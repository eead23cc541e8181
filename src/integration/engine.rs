//! # 波段积分引擎
//!
//! 对每个光谱波段计算全谱与波段内的大气顶/大气底/路径辐射积分
//! （能量域与光子域），以及 6000 K 和 300 K 黑体加权的有效透过率。
//!
//! ## 算法
//! 1. 采样按波数升序排序（tape7 可能降序，梯形积分对方向敏感）
//! 2. 能量域序列保持不变，光子域序列为其换算后的新副本
//! 3. 波段 [λ_min, λ_max] µm → 波数 [1e4/λ_max, 1e4/λ_min] cm⁻¹，闭区间选点
//! 4. 梯形积分；少于两个点的波段结果为 0.0
//!
//! 输入采样应已完成面积单位换算（见 `integration/dataset.rs`）。
//! 路径辐亮度只报告波段内积分，不计算全谱值。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/` 使用
//! - 使用 `physics/`, `models/`, `integration/trapz.rs`

use super::trapz::trapz_samples;
use crate::models::sample::sorted_by_wavenumber;
use crate::models::{IntegratedResult, RunKey, SpectralBand, SpectralSample};
use crate::physics::units::to_photon_domain;
use crate::physics::{planck_radiance, AMBIENT_TEMPERATURE, SUN_TEMPERATURE};

/// 全谱积分量（与波段无关）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct SpectrumTotals {
    toa: f64,
    boa: f64,
}

impl SpectrumTotals {
    fn of(samples: &[SpectralSample]) -> Self {
        SpectrumTotals {
            toa: trapz_samples(samples, |s| s.toa_sun),
            boa: trapz_samples(samples, |s| s.boa_sun()),
        }
    }
}

/// 波段内积分量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct BandIntegrals {
    toa: f64,
    boa: f64,
    path: f64,
}

impl BandIntegrals {
    fn of(samples: &[SpectralSample]) -> Self {
        BandIntegrals {
            toa: trapz_samples(samples, |s| s.toa_sun),
            boa: trapz_samples(samples, |s| s.boa_sun()),
            path: trapz_samples(samples, |s| s.path_radiance),
        }
    }
}

/// 选出波数落在波段内的采样（保持输入顺序）
pub fn select_band(samples: &[SpectralSample], band: &SpectralBand) -> Vec<SpectralSample> {
    samples
        .iter()
        .filter(|s| band.contains_wavenumber(s.wavenumber))
        .copied()
        .collect()
}

/// 黑体加权有效透过率 ∫L(ν,T)τ(ν)dν / ∫L(ν,T)dν
///
/// 分母为零（空波段、单点波段）时返回 0.0。
pub fn effective_transmittance(samples: &[SpectralSample], temperature: f64) -> f64 {
    let weighted = trapz_samples(samples, |s| {
        planck_radiance(s.wavenumber, temperature) * s.transmittance
    });
    let weight = trapz_samples(samples, |s| planck_radiance(s.wavenumber, temperature));

    if weight == 0.0 {
        0.0
    } else {
        weighted / weight
    }
}

/// 波段积分器
///
/// 构造时完成排序和光子域换算，之后可对任意波段重复积分，
/// 各波段之间不共享可变状态。
pub struct BandIntegrator {
    energy: Vec<SpectralSample>,
    photon: Vec<SpectralSample>,
    energy_totals: SpectrumTotals,
    photon_totals: SpectrumTotals,
}

impl BandIntegrator {
    /// 从面积换算后的采样创建积分器
    pub fn new(samples: &[SpectralSample]) -> Self {
        let energy = sorted_by_wavenumber(samples);
        let photon = to_photon_domain(&energy);
        let energy_totals = SpectrumTotals::of(&energy);
        let photon_totals = SpectrumTotals::of(&photon);

        BandIntegrator {
            energy,
            photon,
            energy_totals,
            photon_totals,
        }
    }

    /// 对单个波段积分
    pub fn integrate_band(&self, band: &SpectralBand, key: &RunKey) -> IntegratedResult {
        if self.energy.is_empty() {
            return IntegratedResult::empty(key, &band.name);
        }

        let energy_band = select_band(&self.energy, band);
        let photon_band = select_band(&self.photon, band);

        let watt = BandIntegrals::of(&energy_band);
        let quanta = BandIntegrals::of(&photon_band);

        IntegratedResult {
            scenario: key.scenario.clone(),
            altitude: key.altitude,
            zenith: key.angle,
            band: band.name.clone(),
            toa_watt_tot: self.energy_totals.toa,
            toa_watt: watt.toa,
            boa_watt_tot: self.energy_totals.boa,
            boa_watt: watt.boa,
            lpath_watt: watt.path,
            toa_q_tot: self.photon_totals.toa,
            toa_q: quanta.toa,
            boa_q_tot: self.photon_totals.boa,
            boa_q: quanta.boa,
            lpath_q: quanta.path,
            eff_tau_sun: effective_transmittance(&energy_band, SUN_TEMPERATURE),
            eff_tau_300: effective_transmittance(&energy_band, AMBIENT_TEMPERATURE),
        }
    }

    /// 对多个波段积分，结果顺序与波段顺序一致
    pub fn integrate<'a, I>(&self, bands: I, key: &RunKey) -> Vec<IntegratedResult>
    where
        I: IntoIterator<Item = &'a SpectralBand>,
    {
        bands
            .into_iter()
            .map(|band| self.integrate_band(band, key))
            .collect()
    }
}

/// 对一次运行的采样按所有波段积分
pub fn integrate<'a, I>(samples: &[SpectralSample], bands: I, key: &RunKey) -> Vec<IntegratedResult>
where
    I: IntoIterator<Item = &'a SpectralBand>,
{
    BandIntegrator::new(samples).integrate(bands, key)
}
