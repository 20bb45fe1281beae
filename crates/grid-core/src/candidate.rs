//! 候選解模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Combination, CORE_COUNT, GEM_KIND_COUNT};

/// 戰力換算比例（戰力 / 10000 = 戰鬥力提升百分比）
pub const COMBAT_POWER_SCALE: u32 = 10_000;

/// 三核心組合的候選解
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// 每個核心選定的組合
    pub combinations: [Combination; CORE_COUNT],

    /// 三個核心合計的每種類使用量
    pub usage: [u32; GEM_KIND_COUNT],

    /// 每個核心截斷後的點數
    pub capped_values: [u32; CORE_COUNT],

    /// 每個核心的意志力
    pub costs: [u32; CORE_COUNT],

    /// 消耗單位的副節點加成總和
    pub bonus_total: u64,

    /// 總戰力分數
    pub power: Decimal,

    /// 戰鬥力提升（power / 10000）
    pub combat_power_increase: Decimal,
}

impl Candidate {
    /// 以評分階段算好的使用量、點數與百分位定點分數建立候選解
    pub fn new(
        combinations: [Combination; CORE_COUNT],
        usage: [u32; GEM_KIND_COUNT],
        capped_values: [u32; CORE_COUNT],
        bonus_total: u64,
        score_centi: i64,
    ) -> Self {
        let power = Decimal::new(score_centi, 2);
        let combat_power_increase = power / Decimal::from(COMBAT_POWER_SCALE);

        Self {
            combinations,
            usage,
            capped_values,
            costs: combinations.map(|c| c.cost),
            bonus_total,
            power,
            combat_power_increase,
        }
    }

    /// 使用的星石總數
    pub fn total_gems(&self) -> u32 {
        self.usage.iter().sum()
    }
}
