//! 單核心組合生成

use grid_core::{Combination, CoreSlot, GemInventory, OptimizerConfig, GEM_CATALOG, GEM_KIND_COUNT};

/// 組合生成器
pub struct ComboGenerator;

impl ComboGenerator {
    /// 為單一核心生成已排序、已截斷的候選組合
    pub fn for_core(
        inventory: &GemInventory,
        core: &CoreSlot,
        config: &OptimizerConfig,
    ) -> Vec<Combination> {
        Self::generate(
            &inventory.availability(),
            core.cost_capacity(),
            core.min_value,
            config,
        )
    }

    /// 列舉、排序並截斷
    pub fn generate(
        availability: &[usize; GEM_KIND_COUNT],
        max_cost: u32,
        min_value: u32,
        config: &OptimizerConfig,
    ) -> Vec<Combination> {
        let mut combos =
            Self::enumerate(availability, max_cost, min_value, config.max_items_per_core);
        let total = combos.len();

        Self::rank(&mut combos);

        if let Some(limit) = config.candidate_limit {
            if combos.len() > limit {
                tracing::info!("候選組合截斷：{} → {}", combos.len(), limit);
                combos.truncate(limit);
            }
        }

        tracing::debug!(
            "組合生成：意志力上限 {}, 最低點數 {}, 可行 {} 個, 保留 {} 個",
            max_cost,
            min_value,
            total,
            combos.len()
        );

        combos
    }

    /// 列舉所有可行組合（不排序、不截斷）
    ///
    /// 種類以非遞減順序挑選，每個多重集合只出現一次；空組合也會被記錄。
    pub fn enumerate(
        availability: &[usize; GEM_KIND_COUNT],
        max_cost: u32,
        min_value: u32,
        max_items: usize,
    ) -> Vec<Combination> {
        let mut out = Vec::new();
        let mut current = Combination::EMPTY;
        Self::backtrack(
            0,
            max_items,
            availability,
            max_cost,
            min_value,
            &mut current,
            &mut out,
        );
        out
    }

    fn backtrack(
        start: usize,
        remaining: usize,
        availability: &[usize; GEM_KIND_COUNT],
        max_cost: u32,
        min_value: u32,
        current: &mut Combination,
        out: &mut Vec<Combination>,
    ) {
        if current.cost <= max_cost && current.value >= min_value {
            out.push(*current);
        }

        if remaining == 0 {
            return;
        }

        for kind in start..GEM_KIND_COUNT {
            if current.counts[kind] as usize >= availability[kind] {
                continue;
            }
            // 意志力只增不減，超出容量的分支不會再產生可行組合
            if current.cost + GEM_CATALOG[kind].cost > max_cost {
                continue;
            }

            current.push(kind);
            Self::backtrack(
                kind,
                remaining - 1,
                availability,
                max_cost,
                min_value,
                current,
                out,
            );
            current.pop(kind);
        }
    }

    /// 點數降序，同點數時意志力升序
    ///
    /// 使用穩定排序：點數與意志力都相同的組合保留列舉順序，
    /// 截斷結果與聯合搜尋的同分勝者因此固定不變。
    pub fn rank(combos: &mut [Combination]) {
        combos.sort_by(|a, b| b.value.cmp(&a.value).then(a.cost.cmp(&b.cost)));
    }
}
