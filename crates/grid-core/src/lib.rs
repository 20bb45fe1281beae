//! # Grid Core
//!
//! 核心資料模型與類型定義

pub mod candidate;
pub mod catalog;
pub mod combination;
pub mod config;
pub mod inventory;
pub mod power;
pub mod slot;
pub mod snapshot;

// Re-export 主要類型
pub use candidate::{Candidate, COMBAT_POWER_SCALE};
pub use catalog::{GemStats, GEM_CATALOG, GEM_KIND_COUNT};
pub use combination::{Combination, GemCounts};
pub use config::OptimizerConfig;
pub use inventory::GemInventory;
pub use power::{Alignment, PowerTable, Role};
pub use slot::{into_core_array, CoreSlot, Rarity, CORE_COUNT};
pub use snapshot::{GridRequest, GridSnapshot};

/// 星核格錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("無效的庫存: {0}")]
    InvalidInventory(String),

    #[error("無效的稀有度: {0}")]
    InvalidRarity(u8),

    #[error("核心數量必須為 3，實際為 {0}")]
    InvalidCoreCount(usize),

    #[error("無效的優化配置: {0}")]
    InvalidConfig(String),

    #[error("快照解析錯誤: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
