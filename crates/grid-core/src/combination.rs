//! 星石組合模型

use serde::{Deserialize, Serialize};

use crate::{GEM_CATALOG, GEM_KIND_COUNT};

/// 每種類的使用數量
pub type GemCounts = [u8; GEM_KIND_COUNT];

/// 單一核心的星石組合（多重集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    /// 每種類使用數量
    pub counts: GemCounts,

    /// 累計意志力
    pub cost: u32,

    /// 累計點數
    pub value: u32,
}

impl Combination {
    /// 空組合
    pub const EMPTY: Combination = Combination {
        counts: [0; GEM_KIND_COUNT],
        cost: 0,
        value: 0,
    };

    /// 從使用數量建立，意志力與點數由目錄推導
    pub fn from_counts(counts: GemCounts) -> Self {
        let (cost, value) = counts
            .iter()
            .zip(GEM_CATALOG.iter())
            .fold((0, 0), |(cost, value), (&count, gem)| {
                (
                    cost + gem.cost * count as u32,
                    value + gem.value * count as u32,
                )
            });
        Self { counts, cost, value }
    }

    /// 加入一顆星石
    pub fn push(&mut self, kind: usize) {
        let gem = GEM_CATALOG[kind];
        self.counts[kind] += 1;
        self.cost += gem.cost;
        self.value += gem.value;
    }

    /// 移除一顆星石（回溯用）
    pub fn pop(&mut self, kind: usize) {
        let gem = GEM_CATALOG[kind];
        self.counts[kind] -= 1;
        self.cost -= gem.cost;
        self.value -= gem.value;
    }

    /// 星石總數
    pub fn item_count(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// 展開為種類索引序列（非遞減）
    pub fn kinds(&self) -> Vec<usize> {
        self.counts
            .iter()
            .enumerate()
            .flat_map(|(kind, &count)| std::iter::repeat(kind).take(count as usize))
            .collect()
    }
}

impl Default for Combination {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut combo = Combination::EMPTY;
        combo.push(0);
        combo.push(0);
        combo.push(12);

        assert_eq!(combo.cost, 3 + 3 + 7);
        assert_eq!(combo.value, 5 + 5 + 5);
        assert_eq!(combo.item_count(), 3);
        assert_eq!(combo.kinds(), vec![0, 0, 12]);

        combo.pop(12);
        assert_eq!(combo.cost, 6);
        assert_eq!(combo.value, 10);
        assert_eq!(combo, Combination::from_counts(combo.counts));
    }

    #[test]
    fn test_from_counts() {
        let mut counts = [0u8; GEM_KIND_COUNT];
        counts[13] = 2;
        counts[4] = 1;

        let combo = Combination::from_counts(counts);
        assert_eq!(combo.cost, 4 + 4 + 4);
        assert_eq!(combo.value, 2 + 2 + 4);
        assert!(!combo.is_empty());
        assert!(Combination::EMPTY.is_empty());
    }
}
