//! # 1 km 归一化透过率
//!
//! 从 tape7 的光学厚度 (DEPTH) 计算 1 km 斜程透过率，
//! 以三角窗平滑后重采样到等间隔波长网格。
//!
//! ## 流程
//! 1. τ_1km = exp(-depth · 1e3 / (altitude / cos(slant)))
//! 2. Bartlett 窗卷积（窗口点数 round(2·out/(in·res))，取奇数，"same" 模式零填充）
//! 3. 波长 = 1e4/ν，线性插值到 [1e4/ν_max, 1e4/ν_min] 上的 `points` 个点，范围外为 0
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 使用
//! - 使用 `models/band.rs` 的波长换算

use crate::error::{BandradError, Result};
use crate::models::band::invert_spectral;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 1 km 归一化参数
#[derive(Debug, Clone, Copy)]
pub struct NormalizeConfig {
    /// 观测高度 (m)，斜程长度 = altitude / cos(slant)
    pub altitude_m: f64,
    /// 斜程天顶角 (度)
    pub slant_deg: f64,
    /// 输出波长点数
    pub points: usize,
    /// 原始采样分辨率 (cm⁻¹)
    pub sampling_resolution: f64,
    /// 原始窗口宽度
    pub in_width: f64,
    /// 平滑后窗口宽度
    pub out_width: f64,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        NormalizeConfig {
            altitude_m: 305.0,
            slant_deg: 45.0,
            // 约 10 nm 波长间隔
            points: 1500,
            sampling_resolution: 1.0,
            in_width: 1.0,
            out_width: 8.0,
        }
    }
}

/// 波长域透过率
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthSpectrum {
    /// 波长 (µm)，升序
    pub wavelength_um: Vec<f64>,
    /// 1 km 透过率
    pub transmittance: Vec<f64>,
}

/// 斜程长度 (m)
pub fn slant_path_m(altitude_m: f64, slant_deg: f64) -> f64 {
    altitude_m / slant_deg.to_radians().cos()
}

/// 光学厚度换算为 1 km 透过率
pub fn one_km_transmittance(depth: &[f64], path_m: f64) -> Vec<f64> {
    depth.iter().map(|d| (-d * 1.0e3 / path_m).exp()).collect()
}

/// Bartlett (三角) 窗
pub fn bartlett(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let m = (n - 1) as f64;
    (0..n)
        .map(|k| 1.0 - ((2.0 * k as f64 - m) / m).abs())
        .collect()
}

/// 离散卷积，返回与 `signal` 等长的居中部分（边缘零填充）
pub fn convolve_same(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let m = kernel.len();
    if n == 0 || m == 0 {
        return vec![0.0; n];
    }

    let offset = (m - 1) / 2;
    (0..n)
        .map(|i| {
            let full_idx = i + offset;
            kernel
                .iter()
                .enumerate()
                .filter_map(|(j, k)| {
                    full_idx
                        .checked_sub(j)
                        .and_then(|s| signal.get(s))
                        .map(|v| v * k)
                })
                .sum()
        })
        .collect()
}

/// 以归一化 Bartlett 窗平滑光谱
pub fn smooth(
    spectrum: &[f64],
    sampling_resolution: f64,
    in_width: f64,
    out_width: f64,
) -> Vec<f64> {
    let mut bins = (2.0 * out_width / (in_width * sampling_resolution)).round() as usize;
    if bins % 2 == 0 {
        bins += 1;
    }

    let window = bartlett(bins);
    let norm: f64 = sampling_resolution * window.iter().sum::<f64>();
    let kernel: Vec<f64> = window.iter().map(|w| w / norm).collect();
    convolve_same(spectrum, &kernel)
}

/// 等间隔网格
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut v: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            v[n - 1] = end;
            v
        }
    }
}

/// 线性插值，`x` 升序，范围外返回 0.0
fn interp(x: &[f64], y: &[f64], at: f64) -> f64 {
    let n = x.len();
    if n == 0 || at < x[0] || at > x[n - 1] {
        return 0.0;
    }
    if n == 1 {
        return y[0];
    }

    let hi = x.partition_point(|&v| v < at).clamp(1, n - 1);
    let lo = hi - 1;
    let dx = x[hi] - x[lo];
    if dx == 0.0 {
        return y[lo];
    }
    y[lo] + (y[hi] - y[lo]) * (at - x[lo]) / dx
}

/// 波数域数据重采样到等间隔波长网格
pub fn resample_to_wavelength(
    wavenumber: &[f64],
    values: &[f64],
    points: usize,
) -> WavelengthSpectrum {
    // 按波长升序（即波数降序）排列
    let mut pairs: Vec<(f64, f64)> = wavenumber
        .iter()
        .zip(values)
        .filter(|(nu, _)| **nu > 0.0)
        .map(|(&nu, &v)| (invert_spectral(nu), v))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    if pairs.is_empty() {
        return WavelengthSpectrum {
            wavelength_um: vec![],
            transmittance: vec![],
        };
    }

    let x: Vec<f64> = pairs.iter().map(|p| p.0).collect();
    let y: Vec<f64> = pairs.iter().map(|p| p.1).collect();
    let grid = linspace(x[0], x[x.len() - 1], points);
    let resampled = grid.iter().map(|&wl| interp(&x, &y, wl)).collect();

    WavelengthSpectrum {
        wavelength_um: grid,
        transmittance: resampled,
    }
}

/// 完整流程：光学厚度 → 1 km 透过率 → 平滑 → 波长网格
pub fn normalize(
    wavenumber: &[f64],
    depth: &[f64],
    config: &NormalizeConfig,
) -> Result<WavelengthSpectrum> {
    if config.altitude_m <= 0.0 {
        return Err(BandradError::InvalidArgument(format!(
            "altitude must be positive for path normalisation, got {} m",
            config.altitude_m
        )));
    }
    if config.slant_deg.abs() >= 90.0 {
        return Err(BandradError::InvalidArgument(format!(
            "slant angle must be within (-90, 90) degrees, got {}",
            config.slant_deg
        )));
    }

    // 平滑沿波数方向进行，先按波数升序
    let mut order: Vec<usize> = (0..wavenumber.len()).collect();
    order.sort_by(|&a, &b| wavenumber[a].total_cmp(&wavenumber[b]));
    let nu: Vec<f64> = order.iter().map(|&i| wavenumber[i]).collect();
    let d: Vec<f64> = order.iter().map(|&i| depth[i]).collect();

    let path = slant_path_m(config.altitude_m, config.slant_deg);
    let tau = one_km_transmittance(&d, path);
    let tau = smooth(&tau, config.sampling_resolution, config.in_width, config.out_width);

    Ok(resample_to_wavelength(&nu, &tau, config.points))
}

/// 写出 `<scenario>-<alt>m.1km` 文件
pub fn write_spectrum(
    path: &Path,
    scenario: &str,
    altitude_m: f64,
    spectrum: &WavelengthSpectrum,
) -> Result<()> {
    let write_err = |e| BandradError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "scenario {}, altitude {} m", scenario, altitude_m).map_err(write_err)?;
    for (wl, t) in spectrum.wavelength_um.iter().zip(&spectrum.transmittance) {
        writeln!(out, "{:.18e} {:.18e}", wl, t).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;

    Ok(())
}
