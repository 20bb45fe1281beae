//! 三元組評分
//!
//! 分數以百分位定點整數計算：`戰力 × 100 + 副節點加成 × 每點倍率`。

use grid_core::{
    Alignment, Combination, CoreSlot, GemInventory, PowerTable, Role, CORE_COUNT, GEM_KIND_COUNT,
};

/// 每種類使用量
pub type Usage = [u32; GEM_KIND_COUNT];

/// 單一三元組的評分明細
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripleScore {
    pub usage: Usage,
    pub capped_values: [u32; CORE_COUNT],
    pub bonus_total: u64,
    pub score_centi: i64,
}

/// 三元組評分器（每次優化建立一次）
pub struct TripleScorer<'a> {
    availability: Usage,
    bonus_sums: [Vec<u64>; GEM_KIND_COUNT],
    cores: &'a [CoreSlot; CORE_COUNT],
    table: &'static PowerTable,
    multiplier_centi: i64,
}

impl<'a> TripleScorer<'a> {
    pub fn new(
        inventory: &GemInventory,
        cores: &'a [CoreSlot; CORE_COUNT],
        alignment: Alignment,
        role: Role,
    ) -> Self {
        let availability = inventory.availability().map(|count| count as u32);
        Self {
            availability,
            bonus_sums: inventory.bonus_prefix_sums(),
            cores,
            table: PowerTable::select(role, alignment),
            multiplier_centi: role.bonus_multiplier_centi(),
        }
    }

    /// 累加一個組合的使用量；超出庫存時返回 None
    pub fn accumulate(&self, base: &Usage, combo: &Combination) -> Option<Usage> {
        let mut usage = *base;
        for kind in 0..GEM_KIND_COUNT {
            usage[kind] += combo.counts[kind] as u32;
            if usage[kind] > self.availability[kind] {
                return None;
            }
        }
        Some(usage)
    }

    /// 依使用量取加成最高的單位，計算副節點加成總和
    pub fn bonus_total(&self, usage: &Usage) -> u64 {
        usage
            .iter()
            .zip(self.bonus_sums.iter())
            .map(|(&used, sums)| sums[used as usize])
            .sum()
    }

    /// 每個核心截斷後的點數
    pub fn capped_values(&self, combos: [&Combination; CORE_COUNT]) -> [u32; CORE_COUNT] {
        std::array::from_fn(|position| self.cores[position].cap_value(combos[position].value))
    }

    /// 百分位定點總分
    ///
    /// 三個核心至多 24 個 u32 單位，加成乘上倍率仍遠小於 i64 上限。
    pub fn score_centi(&self, capped_values: &[u32; CORE_COUNT], bonus_total: u64) -> i64 {
        let power = i64::from(self.table.total_power(capped_values));
        power * 100 + bonus_total as i64 * self.multiplier_centi
    }

    /// 在已知使用量可行的前提下評分
    pub fn score_usage(&self, usage: Usage, combos: [&Combination; CORE_COUNT]) -> TripleScore {
        let capped_values = self.capped_values(combos);
        let bonus_total = self.bonus_total(&usage);
        TripleScore {
            usage,
            capped_values,
            bonus_total,
            score_centi: self.score_centi(&capped_values, bonus_total),
        }
    }

    /// 完整評估一個三元組；共用庫存不足時返回 None
    pub fn evaluate(&self, combos: [&Combination; CORE_COUNT]) -> Option<TripleScore> {
        let mut usage = [0; GEM_KIND_COUNT];
        for combo in combos {
            usage = self.accumulate(&usage, combo)?;
        }
        Some(self.score_usage(usage, combos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_core::Rarity;

    fn combo(kinds: &[usize]) -> Combination {
        let mut combo = Combination::EMPTY;
        for &kind in kinds {
            combo.push(kind);
        }
        combo
    }

    #[test]
    fn test_shared_inventory_rejection() {
        let inventory = GemInventory::empty().with_units(0, vec![5, 4, 3]).unwrap();
        let cores = [CoreSlot::new(Rarity::Relic, 0); 3];
        let scorer = TripleScorer::new(&inventory, &cores, Alignment::Order, Role::Damage);

        let two = combo(&[0, 0]);
        let one = combo(&[0]);

        // 各自可行，合計 4 顆超出庫存 3 顆
        assert!(scorer.evaluate([&two, &one, &one]).is_none());
        assert!(scorer.evaluate([&two, &one, &Combination::EMPTY]).is_some());
    }

    #[test]
    fn test_bonus_takes_highest_units_first() {
        let inventory = GemInventory::empty()
            .with_units(0, vec![1, 9, 4, 7])
            .unwrap()
            .with_units(1, vec![2, 3])
            .unwrap();
        let cores = [CoreSlot::new(Rarity::Relic, 0); 3];
        let scorer = TripleScorer::new(&inventory, &cores, Alignment::Order, Role::Damage);

        let score = scorer
            .evaluate([&combo(&[0]), &combo(&[0, 1]), &Combination::EMPTY])
            .unwrap();

        // 種類 0 取 9 + 7，種類 1 取 3
        assert_eq!(score.bonus_total, 19);
        assert_eq!(score.usage[0], 2);
        assert_eq!(score.usage[1], 1);
    }

    #[test]
    fn test_value_cap_and_score() {
        let inventory = GemInventory::empty()
            .with_units(0, vec![0; 8])
            .unwrap()
            .with_units(3, vec![0; 4])
            .unwrap();
        let cores = [
            CoreSlot::new(Rarity::Legendary, 0),
            CoreSlot::new(Rarity::Relic, 0),
            CoreSlot::new(Rarity::Relic, 0),
        ];
        let scorer = TripleScorer::new(&inventory, &cores, Alignment::Order, Role::Damage);

        let fifteen = combo(&[0, 0, 0]);
        let twenty = combo(&[0, 0, 3, 3]);
        let score = scorer
            .evaluate([&fifteen, &twenty, &combo(&[0, 0])])
            .unwrap();

        // 傳說核心上限 14 點
        assert_eq!(score.capped_values, [14, 20, 10]);
        // 400 + 900 + 100
        assert_eq!(score.score_centi, 1400 * 100);
    }

    #[test]
    fn test_support_multiplier() {
        let inventory = GemInventory::empty().with_units(2, vec![10]).unwrap();
        let cores = [CoreSlot::new(Rarity::Legendary, 0); 3];
        let damage = TripleScorer::new(&inventory, &cores, Alignment::Chaos, Role::Damage);
        let support = TripleScorer::new(&inventory, &cores, Alignment::Chaos, Role::Support);

        let combos = [&combo(&[2]), &Combination::EMPTY, &Combination::EMPTY];
        // 3 點不足 10 點，無核心戰力，只剩加成
        assert_eq!(damage.evaluate(combos).unwrap().score_centi, 10 * 314);
        assert_eq!(support.evaluate(combos).unwrap().score_centi, 10 * 520);
    }

    #[test]
    fn test_bonus_total_beyond_u32() {
        let inventory = GemInventory::empty()
            .with_units(0, vec![3_000_000_000])
            .unwrap()
            .with_units(1, vec![3_000_000_000])
            .unwrap();
        let cores = [CoreSlot::new(Rarity::Relic, 0); 3];
        let scorer = TripleScorer::new(&inventory, &cores, Alignment::Order, Role::Damage);

        let score = scorer
            .evaluate([&combo(&[0]), &combo(&[1]), &Combination::EMPTY])
            .unwrap();

        // 5 點與 4 點都不足 10 點，只剩加成
        assert_eq!(score.bonus_total, 6_000_000_000);
        assert_eq!(score.score_centi, 6_000_000_000 * 314);
    }
}
