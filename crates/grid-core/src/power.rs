//! 核心戰力表
//!
//! 點數對應戰力為階梯函數：`>=10, >=14, >=17, >=18, >=19, >=20` 依序對應表中六個欄位。
//! 第 0、1 號核心共用同一列，第 2 號核心使用獨立一列。

use serde::{Deserialize, Serialize};

use crate::CORE_COUNT;

/// 階梯門檻，由高到低，對應欄位索引
const STEP_THRESHOLDS: [(u32, usize); 6] = [(20, 5), (19, 4), (18, 3), (17, 2), (14, 1), (10, 0)];

/// 職業定位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// 輸出
    Damage,
    /// 輔助
    Support,
}

impl Role {
    pub fn from_flag(is_support: bool) -> Self {
        if is_support {
            Role::Support
        } else {
            Role::Damage
        }
    }

    /// 每點副節點加成換算的戰力（百分位定點數）
    ///
    /// 輸出 0.000314 × 10000 = 3.14，輔助 0.00052 × 10000 = 5.20。
    pub const fn bonus_multiplier_centi(self) -> i64 {
        match self {
            Role::Damage => 314,
            Role::Support => 520,
        }
    }
}

/// 星核格陣營
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// 秩序
    Order,
    /// 混沌
    Chaos,
}

impl Alignment {
    pub fn from_flag(is_order: bool) -> Self {
        if is_order {
            Alignment::Order
        } else {
            Alignment::Chaos
        }
    }
}

/// 戰力表：每個核心位置一列，每列六個階梯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerTable {
    rows: [[u32; 6]; CORE_COUNT],
}

pub static DAMAGE_ORDER: PowerTable = PowerTable {
    rows: [
        [150, 400, 850, 867, 883, 900],
        [150, 400, 850, 867, 883, 900],
        [100, 250, 550, 567, 583, 600],
    ],
};

pub static DAMAGE_CHAOS: PowerTable = PowerTable {
    rows: [
        [50, 100, 350, 367, 383, 400],
        [50, 100, 350, 367, 383, 400],
        [50, 100, 350, 367, 383, 400],
    ],
};

pub static SUPPORT_ORDER: PowerTable = PowerTable {
    rows: [
        [120, 120, 900, 918, 930, 942],
        [120, 120, 900, 918, 930, 942],
        [0, 60, 300, 310, 320, 330],
    ],
};

pub static SUPPORT_CHAOS: PowerTable = PowerTable {
    rows: [
        [60, 120, 540, 558, 576, 600],
        [60, 120, 540, 558, 576, 600],
        [30, 67, 200, 211, 222, 233],
    ],
};

impl PowerTable {
    /// 依職業與陣營選表
    pub fn select(role: Role, alignment: Alignment) -> &'static PowerTable {
        match (role, alignment) {
            (Role::Damage, Alignment::Order) => &DAMAGE_ORDER,
            (Role::Damage, Alignment::Chaos) => &DAMAGE_CHAOS,
            (Role::Support, Alignment::Order) => &SUPPORT_ORDER,
            (Role::Support, Alignment::Chaos) => &SUPPORT_CHAOS,
        }
    }

    /// 某核心位置在指定點數下的戰力
    pub fn power_for(&self, position: usize, capped_value: u32) -> u32 {
        step_slot(capped_value)
            .map(|slot| self.rows[position][slot])
            .unwrap_or(0)
    }

    /// 三個核心的戰力總和
    pub fn total_power(&self, capped_values: &[u32; CORE_COUNT]) -> u32 {
        capped_values
            .iter()
            .enumerate()
            .map(|(position, &value)| self.power_for(position, value))
            .sum()
    }
}

/// 點數所在的階梯欄位；低於 10 點時無戰力
pub fn step_slot(value: u32) -> Option<usize> {
    STEP_THRESHOLDS
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|&(_, slot)| slot)
}
