//! 星石目錄

use serde::{Deserialize, Serialize};

/// 星石種類數量
pub const GEM_KIND_COUNT: usize = 14;

/// 單一星石種類的固定屬性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemStats {
    /// 意志力消耗
    pub cost: u32,

    /// 提供點數
    pub value: u32,
}

impl GemStats {
    pub const fn new(cost: u32, value: u32) -> Self {
        Self { cost, value }
    }

    /// 顯示用標籤，例如 `4W/5P`
    pub fn label(&self) -> String {
        format!("{}W/{}P", self.cost, self.value)
    }
}

/// 固定的星石目錄（順序即列舉順序）
pub const GEM_CATALOG: [GemStats; GEM_KIND_COUNT] = [
    GemStats::new(3, 5),
    GemStats::new(3, 4),
    GemStats::new(3, 3),
    GemStats::new(4, 5),
    GemStats::new(4, 4),
    GemStats::new(4, 3),
    GemStats::new(5, 5),
    GemStats::new(5, 4),
    GemStats::new(5, 3),
    GemStats::new(6, 5),
    GemStats::new(6, 4),
    GemStats::new(6, 3),
    GemStats::new(7, 5),
    GemStats::new(4, 2),
];
