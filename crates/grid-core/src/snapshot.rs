//! 庫存快照（JSON）
//!
//! 一份快照同時保存秩序與混沌兩個星核格的庫存與核心設定。

use serde::{Deserialize, Serialize};

use crate::{CoreSlot, GemInventory, Role, CORE_COUNT};

/// 單一星核格的優化請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRequest {
    /// 星石庫存
    pub inventory: GemInventory,

    /// 三個核心的約束
    pub cores: [CoreSlot; CORE_COUNT],
}

impl GridRequest {
    pub fn new(inventory: GemInventory, cores: [CoreSlot; CORE_COUNT]) -> Self {
        Self { inventory, cores }
    }
}

/// 完整快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// 職業定位
    pub role: Role,

    /// 秩序星核格
    pub order: GridRequest,

    /// 混沌星核格
    pub chaos: GridRequest,
}

impl GridSnapshot {
    /// 解析 JSON 快照
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 輸出 JSON 快照
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
