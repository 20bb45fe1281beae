//! # Grid Optimizer
//!
//! 三核心聯合優化（共用庫存約束、戰力評分、並行搜尋）

pub mod joint;
pub mod planner;
pub mod scorer;

// Re-export 主要類型
pub use joint::JointOptimizer;
pub use planner::{GridPlan, GridPlanner};
pub use scorer::{TripleScore, TripleScorer};

use grid_core::{Candidate, CORE_COUNT};
use rust_decimal::Decimal;
use serde::Serialize;

/// 優化結果
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// 是否找到可行解
    pub found: bool,

    /// 最佳候選解
    pub best: Option<Candidate>,

    /// 每個核心的候選組合數
    pub candidate_counts: [usize; CORE_COUNT],

    /// 通過共用庫存檢查的三元組數量
    pub feasible_triples: u64,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl OptimizationResult {
    /// 創建找到解的結果
    pub fn found(
        best: Candidate,
        candidate_counts: [usize; CORE_COUNT],
        feasible_triples: u64,
    ) -> Self {
        Self {
            found: true,
            best: Some(best),
            candidate_counts,
            feasible_triples,
            calculation_time_ms: None,
        }
    }

    /// 創建無解的結果
    pub fn not_found(candidate_counts: [usize; CORE_COUNT], feasible_triples: u64) -> Self {
        Self {
            found: false,
            best: None,
            candidate_counts,
            feasible_triples,
            calculation_time_ms: None,
        }
    }

    /// 戰鬥力提升（無解時為 0）
    pub fn combat_power_increase(&self) -> Decimal {
        self.best
            .as_ref()
            .map(|c| c.combat_power_increase)
            .unwrap_or(Decimal::ZERO)
    }
}
