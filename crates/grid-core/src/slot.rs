//! 核心槽位模型

use serde::{Deserialize, Serialize};

use crate::GridError;

/// 每次優化固定的核心數量
pub const CORE_COUNT: usize = 3;

/// 核心稀有度
///
/// 數值順序與宿主端傳入的索引一致：0 = Legendary, 1 = Relic, 2 = Ancient, 3 = None。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    /// 傳說
    Legendary,
    /// 遺物
    Relic,
    /// 古代
    Ancient,
    /// 未裝備
    None,
}

impl Rarity {
    /// 意志力容量
    pub const fn cost_capacity(self) -> u32 {
        match self {
            Rarity::Legendary => 12,
            Rarity::Relic => 15,
            Rarity::Ancient => 17,
            Rarity::None => 0,
        }
    }

    /// 點數上限（超過上限的點數不再提升戰力）
    pub const fn value_cap(self) -> u32 {
        match self {
            Rarity::Legendary => 14,
            Rarity::Relic | Rarity::Ancient => 20,
            Rarity::None => 0,
        }
    }
}

impl TryFrom<u8> for Rarity {
    type Error = GridError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Rarity::Legendary),
            1 => Ok(Rarity::Relic),
            2 => Ok(Rarity::Ancient),
            3 => Ok(Rarity::None),
            other => Err(GridError::InvalidRarity(other)),
        }
    }
}

/// 單一核心的約束
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreSlot {
    /// 稀有度
    pub rarity: Rarity,

    /// 目標點數（原樣保留，不參與評分）
    pub target: i32,

    /// 最低累計點數
    pub min_value: u32,
}

impl CoreSlot {
    /// 創建新的核心約束
    pub fn new(rarity: Rarity, min_value: u32) -> Self {
        Self {
            rarity,
            target: 20,
            min_value,
        }
    }

    /// 建構器模式：設置目標點數
    pub fn with_target(mut self, target: i32) -> Self {
        self.target = target;
        self
    }

    /// 從宿主端的原始欄位建立
    pub fn from_raw(rarity: u8, target: i32, min_value: u32) -> crate::Result<Self> {
        Ok(Self {
            rarity: Rarity::try_from(rarity)?,
            target,
            min_value,
        })
    }

    pub fn cost_capacity(&self) -> u32 {
        self.rarity.cost_capacity()
    }

    pub fn value_cap(&self) -> u32 {
        self.rarity.value_cap()
    }

    /// 將累計點數截斷到上限
    pub fn cap_value(&self, value: u32) -> u32 {
        value.min(self.value_cap())
    }
}

/// 將任意長度的核心列表轉為固定三個
pub fn into_core_array(cores: Vec<CoreSlot>) -> crate::Result<[CoreSlot; CORE_COUNT]> {
    let len = cores.len();
    cores
        .try_into()
        .map_err(|_| GridError::InvalidCoreCount(len))
}
