//! # 物理常数 (SI, CODATA 2018)

/// 普朗克常数 (J·s)
pub const PLANCK: f64 = 6.626_070_15e-34;

/// 真空光速 (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// 玻尔兹曼常数 (J/K)
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// cm⁻¹ 到 m⁻¹
pub const PER_CM_TO_PER_M: f64 = 1.0e2;

/// /cm² 到 /m²
pub const PER_CM2_TO_PER_M2: f64 = 1.0e4;
