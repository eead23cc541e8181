//! # 光谱波段数据模型
//!
//! 命名光谱波段（波长区间，µm）及按插入顺序保存的波段目录。
//!
//! ## 依赖关系
//! - 被 `parsers/ranges.rs` 构造
//! - 被 `integration/`, `store/`, `commands/` 使用

use serde::{Deserialize, Serialize};

/// 波长 (µm) 与波数 (cm⁻¹) 的换算常数：λ = 1e4 / ν
pub const UM_CM1: f64 = 1.0e4;

/// 波长 (µm) 转波数 (cm⁻¹)，反之亦然
pub fn invert_spectral(x: f64) -> f64 {
    UM_CM1 / x
}

/// 命名光谱波段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralBand {
    /// 波段名称
    #[serde(rename = "SpecBand")]
    pub name: String,

    /// 波长下限 (µm)
    #[serde(rename = "LowerUm")]
    pub lower_um: f64,

    /// 波长上限 (µm)
    #[serde(rename = "UpperUm")]
    pub upper_um: f64,
}

impl SpectralBand {
    /// 创建波段，要求 0 < lower < upper
    pub fn new(name: impl Into<String>, lower_um: f64, upper_um: f64) -> Result<Self, String> {
        if !lower_um.is_finite() || !upper_um.is_finite() {
            return Err(format!(
                "bounds must be finite, got [{}, {}]",
                lower_um, upper_um
            ));
        }
        if lower_um <= 0.0 {
            return Err(format!("lower bound must be positive, got {}", lower_um));
        }
        if lower_um >= upper_um {
            return Err(format!(
                "lower bound {} must be less than upper bound {}",
                lower_um, upper_um
            ));
        }
        Ok(SpectralBand {
            name: name.into(),
            lower_um,
            upper_um,
        })
    }

    /// 波数区间 (ν_min, ν_max)，波长上限对应波数下限
    pub fn wavenumber_bounds(&self) -> (f64, f64) {
        (invert_spectral(self.upper_um), invert_spectral(self.lower_um))
    }

    /// 波数是否落在闭区间 [ν_min, ν_max] 内
    pub fn contains_wavenumber(&self, wavenumber: f64) -> bool {
        let (nu_min, nu_max) = self.wavenumber_bounds();
        wavenumber >= nu_min && wavenumber <= nu_max
    }
}

/// 光谱波段目录
///
/// 按首次出现顺序保存波段。同名波段后出现者覆盖先出现者的边界，
/// 但保留首次出现的位置；被覆盖的名称记录在 `overridden` 中供调用方告警。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectralCatalog {
    bands: Vec<SpectralBand>,
    overridden: Vec<String>,
}

impl SpectralCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入波段（同名则覆盖）
    pub fn insert(&mut self, band: SpectralBand) {
        match self.bands.iter_mut().find(|b| b.name == band.name) {
            Some(existing) => {
                self.overridden.push(band.name.clone());
                *existing = band;
            }
            None => self.bands.push(band),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SpectralBand> {
        self.bands.iter().find(|b| b.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpectralBand> {
        self.bands.iter()
    }

    pub fn bands(&self) -> &[SpectralBand] {
        &self.bands
    }

    /// 被后续同名行覆盖过的波段名称
    pub fn overridden(&self) -> &[String] {
        &self.overridden
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl FromIterator<SpectralBand> for SpectralCatalog {
    fn from_iter<I: IntoIterator<Item = SpectralBand>>(iter: I) -> Self {
        let mut catalog = SpectralCatalog::new();
        for band in iter {
            catalog.insert(band);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a SpectralCatalog {
    type Item = &'a SpectralBand;
    type IntoIter = std::slice::Iter<'a, SpectralBand>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}
