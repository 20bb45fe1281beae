//! # Grid Calculation Engine
//!
//! 單核心星石組合列舉與排序

pub mod generator;

// Re-export 主要類型
pub use generator::ComboGenerator;
