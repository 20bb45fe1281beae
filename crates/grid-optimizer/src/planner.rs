//! 秩序 / 混沌雙星核格規劃

use grid_core::{Alignment, GridRequest, GridSnapshot, OptimizerConfig, Role};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{JointOptimizer, OptimizationResult};

/// 雙星核格的優化結果
#[derive(Debug, Clone, Serialize)]
pub struct GridPlan {
    /// 秩序星核格
    pub order: OptimizationResult,

    /// 混沌星核格
    pub chaos: OptimizationResult,
}

impl GridPlan {
    /// 兩個星核格合計的戰鬥力提升
    pub fn total_combat_power_increase(&self) -> Decimal {
        self.order.combat_power_increase() + self.chaos.combat_power_increase()
    }
}

/// 雙星核格規劃器
pub struct GridPlanner {
    optimizer: JointOptimizer,
}

impl GridPlanner {
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            optimizer: JointOptimizer::new(config),
        }
    }

    /// 分別優化秩序與混沌星核格（兩者庫存互不共用）
    pub fn plan(&self, snapshot: &GridSnapshot) -> grid_core::Result<GridPlan> {
        Ok(GridPlan {
            order: self.run(&snapshot.order, Alignment::Order, snapshot.role)?,
            chaos: self.run(&snapshot.chaos, Alignment::Chaos, snapshot.role)?,
        })
    }

    fn run(
        &self,
        request: &GridRequest,
        alignment: Alignment,
        role: Role,
    ) -> grid_core::Result<OptimizationResult> {
        self.optimizer
            .optimize(&request.inventory, &request.cores, alignment, role)
    }
}

impl Default for GridPlanner {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}
