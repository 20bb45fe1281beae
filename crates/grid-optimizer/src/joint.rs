//! 三核心聯合優化器

use grid_calc::ComboGenerator;
use grid_core::{
    Alignment, Candidate, Combination, CoreSlot, GemInventory, OptimizerConfig, Role, CORE_COUNT,
    GEM_KIND_COUNT,
};
use rayon::prelude::*;

use crate::scorer::{TripleScore, TripleScorer};
use crate::OptimizationResult;

/// 搜尋中的最佳三元組（索引與評分明細）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BestTriple {
    indices: [usize; CORE_COUNT],
    score: TripleScore,
}

impl BestTriple {
    /// 分數較高者勝；同分時列舉順序較前者勝
    fn beats(&self, other: &BestTriple) -> bool {
        self.score.score_centi > other.score.score_centi
            || (self.score.score_centi == other.score.score_centi && self.indices < other.indices)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SearchOutcome {
    best: Option<BestTriple>,
    feasible: u64,
}

impl SearchOutcome {
    /// 嚴格大於才更新，確保同分時先看到的保留
    fn offer(&mut self, candidate: BestTriple) -> bool {
        match self.best {
            Some(current) if candidate.score.score_centi <= current.score.score_centi => false,
            _ => {
                self.best = Some(candidate);
                true
            }
        }
    }

    /// 合併兩段搜尋結果，與循序搜尋的結果一致
    fn merge(self, other: SearchOutcome) -> SearchOutcome {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => Some(if b.beats(&a) { b } else { a }),
            (a, b) => a.or(b),
        };
        SearchOutcome {
            best,
            feasible: self.feasible + other.feasible,
        }
    }
}

/// 聯合優化器
pub struct JointOptimizer {
    config: OptimizerConfig,
}

impl JointOptimizer {
    /// 創建新的聯合優化器
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// 取得配置
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// 主優化入口
    pub fn optimize(
        &self,
        inventory: &GemInventory,
        cores: &[CoreSlot; CORE_COUNT],
        alignment: Alignment,
        role: Role,
    ) -> grid_core::Result<OptimizationResult> {
        self.config.validate()?;

        tracing::info!(
            "開始星核格優化：{:?}/{:?}，庫存 {} 顆，並行 {}",
            role,
            alignment,
            inventory.total_units(),
            self.config.parallel
        );
        let start_time = std::time::Instant::now();

        // Step 1: 每種類依加成降序排序
        let sorted = inventory.sorted();

        // Step 2: 每個核心生成候選組合
        let lists: [Vec<Combination>; CORE_COUNT] = std::array::from_fn(|position| {
            ComboGenerator::for_core(&sorted, &cores[position], &self.config)
        });
        let candidate_counts = [lists[0].len(), lists[1].len(), lists[2].len()];
        tracing::debug!("候選組合數: {:?}", candidate_counts);

        // Step 3: 選擇戰力表
        let scorer = TripleScorer::new(&sorted, cores, alignment, role);

        // Step 4: 三重迴圈搜尋
        let outcome = if lists.iter().any(Vec::is_empty) {
            tracing::debug!("存在無候選組合的核心，跳過搜尋");
            SearchOutcome::default()
        } else if self.config.parallel {
            Self::search_parallel(&lists, &scorer)
        } else {
            Self::search_sequential(&lists, &scorer)
        };

        // Step 5: 重建最佳候選解
        let mut result = match outcome.best {
            Some(BestTriple { indices, score }) => {
                let combinations =
                    std::array::from_fn(|position| lists[position][indices[position]]);
                let candidate = Candidate::new(
                    combinations,
                    score.usage,
                    score.capped_values,
                    score.bonus_total,
                    score.score_centi,
                );
                OptimizationResult::found(candidate, candidate_counts, outcome.feasible)
            }
            None => OptimizationResult::not_found(candidate_counts, outcome.feasible),
        };
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        match &result.best {
            Some(best) => tracing::info!(
                "星核格優化完成，耗時 {:?}，戰力 {}，可行三元組 {}",
                start_time.elapsed(),
                best.power,
                result.feasible_triples
            ),
            None => tracing::info!("星核格優化完成，耗時 {:?}，無可行解", start_time.elapsed()),
        }

        Ok(result)
    }

    fn search_sequential(
        lists: &[Vec<Combination>; CORE_COUNT],
        scorer: &TripleScorer<'_>,
    ) -> SearchOutcome {
        let mut outcome = SearchOutcome::default();
        for i0 in 0..lists[0].len() {
            Self::scan_row(i0, lists, scorer, &mut outcome, true);
        }
        outcome
    }

    fn search_parallel(
        lists: &[Vec<Combination>; CORE_COUNT],
        scorer: &TripleScorer<'_>,
    ) -> SearchOutcome {
        (0..lists[0].len())
            .into_par_iter()
            .map(|i0| {
                let mut outcome = SearchOutcome::default();
                Self::scan_row(i0, lists, scorer, &mut outcome, false);
                outcome
            })
            .reduce(SearchOutcome::default, SearchOutcome::merge)
    }

    /// 固定第 0 號核心的組合，掃描其餘兩個核心的所有組合
    fn scan_row(
        i0: usize,
        lists: &[Vec<Combination>; CORE_COUNT],
        scorer: &TripleScorer<'_>,
        outcome: &mut SearchOutcome,
        log_improvements: bool,
    ) {
        let a = &lists[0][i0];
        let Some(base) = scorer.accumulate(&[0; GEM_KIND_COUNT], a) else {
            return;
        };

        for (i1, b) in lists[1].iter().enumerate() {
            // 前兩個核心已超出庫存，第三個核心無論選什麼都不可行
            let Some(pair) = scorer.accumulate(&base, b) else {
                continue;
            };

            for (i2, c) in lists[2].iter().enumerate() {
                let Some(usage) = scorer.accumulate(&pair, c) else {
                    continue;
                };
                outcome.feasible += 1;

                let score = scorer.score_usage(usage, [a, b, c]);
                let candidate = BestTriple {
                    indices: [i0, i1, i2],
                    score,
                };
                if outcome.offer(candidate) && log_improvements {
                    tracing::debug!(
                        "新的最佳解：分數 {} (點數 {:?}，加成 {})",
                        score.score_centi,
                        score.capped_values,
                        score.bonus_total
                    );
                }
            }
        }
    }
}

impl Default for JointOptimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}
