//! Python 綁定實現

use grid_core::{
    into_core_array, Alignment, Candidate, Combination, CoreSlot, GemInventory, GridError,
    GridSnapshot, OptimizerConfig, Role,
};
use grid_optimizer::{GridPlanner, JointOptimizer, OptimizationResult};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rust_decimal::prelude::ToPrimitive;

fn to_py_err(err: GridError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python 核心配置
#[pyclass(name = "CoreConfig")]
#[derive(Clone)]
pub struct PyCoreConfig {
    #[pyo3(get, set)]
    pub rarity: u8, // 0 = Legendary, 1 = Relic, 2 = Ancient, 3 = None
    #[pyo3(get, set)]
    pub target: i32,
    #[pyo3(get, set)]
    pub min_value: u32,
}

#[pymethods]
impl PyCoreConfig {
    #[new]
    #[pyo3(signature = (rarity, target=20, min_value=0))]
    fn new(rarity: u8, target: i32, min_value: u32) -> Self {
        Self {
            rarity,
            target,
            min_value,
        }
    }
}

/// 內部方法實現（不暴露給 Python）
impl PyCoreConfig {
    pub(crate) fn to_rust_slot(&self) -> PyResult<CoreSlot> {
        CoreSlot::from_raw(self.rarity, self.target, self.min_value).map_err(to_py_err)
    }
}

/// Python 星石組合
#[pyclass(name = "Combo")]
#[derive(Clone)]
pub struct PyCombo {
    #[pyo3(get)]
    pub counts: Vec<u8>,
    #[pyo3(get)]
    pub cost: u32,
    #[pyo3(get)]
    pub value: u32,
}

impl From<&Combination> for PyCombo {
    fn from(combo: &Combination) -> Self {
        Self {
            counts: combo.counts.to_vec(),
            cost: combo.cost,
            value: combo.value,
        }
    }
}

/// Python 候選解
#[pyclass(name = "Candidate")]
#[derive(Clone)]
pub struct PyCandidate {
    #[pyo3(get)]
    pub combos: Vec<PyCombo>,
    #[pyo3(get)]
    pub counts: Vec<u32>,
    #[pyo3(get)]
    pub capped_values: Vec<u32>,
    #[pyo3(get)]
    pub costs: Vec<u32>,
    #[pyo3(get)]
    pub bonus_total: u64,
    #[pyo3(get)]
    pub power: f64,
    #[pyo3(get)]
    pub combat_power_increase: f64,
}

impl From<&Candidate> for PyCandidate {
    fn from(candidate: &Candidate) -> Self {
        Self {
            combos: candidate.combinations.iter().map(PyCombo::from).collect(),
            counts: candidate.usage.to_vec(),
            capped_values: candidate.capped_values.to_vec(),
            costs: candidate.costs.to_vec(),
            bonus_total: candidate.bonus_total,
            power: candidate.power.to_f64().unwrap_or_default(),
            combat_power_increase: candidate.combat_power_increase.to_f64().unwrap_or_default(),
        }
    }
}

/// Python 優化結果
#[pyclass(name = "OptimizationResult")]
pub struct PyOptimizationResult {
    #[pyo3(get)]
    pub has_best: bool,
    #[pyo3(get)]
    pub best: Option<PyCandidate>,
    #[pyo3(get)]
    pub candidate_counts: Vec<usize>,
    #[pyo3(get)]
    pub calculation_time_ms: Option<u64>,
}

impl From<OptimizationResult> for PyOptimizationResult {
    fn from(result: OptimizationResult) -> Self {
        Self {
            has_best: result.found,
            best: result.best.as_ref().map(PyCandidate::from),
            candidate_counts: result.candidate_counts.to_vec(),
            calculation_time_ms: result
                .calculation_time_ms
                .map(|ms| u64::try_from(ms).unwrap_or(u64::MAX)),
        }
    }
}

/// 三核心優化（庫存為 14 串加成值）
#[pyfunction]
#[pyo3(signature = (inventory, cores, is_order, is_support, parallel=false))]
pub fn optimize_three_cores(
    py: Python<'_>,
    inventory: Vec<Vec<u32>>,
    cores: Vec<PyCoreConfig>,
    is_order: bool,
    is_support: bool,
    parallel: bool,
) -> PyResult<PyOptimizationResult> {
    let inventory = GemInventory::from_units(inventory).map_err(to_py_err)?;
    let slots = cores
        .iter()
        .map(PyCoreConfig::to_rust_slot)
        .collect::<PyResult<Vec<_>>>()?;
    let slots = into_core_array(slots).map_err(to_py_err)?;

    let config = OptimizerConfig::new().with_parallel(parallel);
    let optimizer = JointOptimizer::new(config);

    // 搜尋期間釋放 GIL
    let result = py
        .allow_threads(|| {
            optimizer.optimize(
                &inventory,
                &slots,
                Alignment::from_flag(is_order),
                Role::from_flag(is_support),
            )
        })
        .map_err(to_py_err)?;

    Ok(result.into())
}

/// 以 JSON 快照優化秩序與混沌星核格，返回 JSON 結果
#[pyfunction]
pub fn optimize_snapshot_json(py: Python<'_>, json: &str) -> PyResult<String> {
    let snapshot = GridSnapshot::from_json(json).map_err(to_py_err)?;
    let plan = py
        .allow_threads(|| GridPlanner::default().plan(&snapshot))
        .map_err(to_py_err)?;

    serde_json::to_string(&plan).map_err(|e| PyValueError::new_err(e.to_string()))
}
