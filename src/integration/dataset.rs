//! # tape7 数据集
//!
//! 读取 tape7 并将辐照度/辐亮度从 /cm² 换算到 /m²。每个数据集只换算一次。
//!
//! ## 依赖关系
//! - 被 `commands/integrate.rs`, `batch/runner.rs` 使用
//! - 使用 `parsers/tape7.rs`, `physics/units.rs`, `integration/engine.rs`

use super::engine;
use crate::error::Result;
use crate::models::{IntegratedResult, RunKey, SpectralCatalog, SpectralSample};
use crate::parsers::tape7;
use crate::physics::units::area_cm2_to_m2;
use std::path::Path;

/// 读取 tape7 采样并换算到 /m²
pub fn load_dataset(path: &Path) -> Result<Vec<SpectralSample>> {
    let raw = tape7::load_samples(path)?;
    Ok(area_cm2_to_m2(&raw))
}

/// 读取单个 tape7 并对目录中所有波段积分
pub fn integrate_file(
    path: &Path,
    catalog: &SpectralCatalog,
    key: &RunKey,
) -> Result<Vec<IntegratedResult>> {
    let samples = load_dataset(path)?;
    Ok(engine::integrate(&samples, catalog, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpectralBand;
    use approx::assert_relative_eq;
    use std::fs;

    const TAPE7: &str = " FREQ TOT_TRANS TOTAL_RAD TOA_SUN\n CM-1\n 3000. 0.5 0.0 1.0E-04\n 2500. 0.8 0.0 1.0E-04\n 2000. 0.5 0.0 1.0E-04\n -9999.\n";

    #[test]
    fn test_integrate_file_applies_area_conversion_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tape7");
        fs::write(&path, TAPE7).unwrap();

        let catalog: SpectralCatalog = vec![SpectralBand::new("MWIR", 3.0, 5.0).unwrap()]
            .into_iter()
            .collect();
        let key = RunKey::new("TropicalRural", 30000.0, 90.0);
        let results = integrate_file(&path, &catalog, &key).unwrap();

        assert_eq!(results.len(), 1);
        // 1e-4 W/cm² × 1e4 = 1 W/m²，面积 1000 cm⁻¹
        assert_relative_eq!(results[0].toa_watt, 1000.0, max_relative = 1e-12);
        assert_relative_eq!(results[0].boa_watt, 650.0, max_relative = 1e-12);
        assert_eq!(results[0].altitude, 30000.0);
    }

    #[test]
    fn test_load_dataset_missing_file() {
        assert!(load_dataset(Path::new("/nonexistent/tape7")).is_err());
    }
}
