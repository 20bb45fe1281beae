//! # Grid FFI
//!
//! Python 綁定層（PyO3）

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn arkgrid_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyCoreConfig>()?;
    m.add_class::<python::PyCombo>()?;
    m.add_class::<python::PyCandidate>()?;
    m.add_class::<python::PyOptimizationResult>()?;
    m.add_function(wrap_pyfunction!(python::optimize_three_cores, m)?)?;
    m.add_function(wrap_pyfunction!(python::optimize_snapshot_json, m)?)?;
    Ok(())
}
