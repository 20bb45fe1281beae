//! # ArkGrid
//!
//! 星石 / 核心組合優化引擎
//!
//! 為三個核心各自列舉可放入的星石組合，再在共用庫存下聯合搜尋戰力最高的三元組。

pub use grid_calc::ComboGenerator;
pub use grid_core::*;
pub use grid_optimizer::{
    GridPlan, GridPlanner, JointOptimizer, OptimizationResult, TripleScore, TripleScorer,
};

/// 戰力與戰鬥力提升的數值類型
pub use rust_decimal::Decimal;
