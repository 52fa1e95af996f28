//! Python bindings for perk-randomizer.
//!
//! # Quick Start
//!
//! ```python
//! import perk_randomizer as pr
//!
//! hand = pr.pick(4, ["a", "b", "c", "d", "e"])
//!
//! result = pr.allocate(
//!     ["alice", "bob"],
//!     {"alice": ["a", "b", "c"], "bob": ["a", "b", "c"]},
//!     avoid_overlap=True,
//! )
//! result.get("alice")   # up to 3 perks
//! result.is_disjoint()  # True
//! ```

use pyo3::prelude::*;

mod py_allocator;

pub use py_allocator::*;

/// perk_randomizer: unbiased perk draws for a roster of players.
#[pymodule]
fn perk_randomizer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAllocation>()?;

    m.add_function(wrap_pyfunction!(pick, m)?)?;
    m.add_function(wrap_pyfunction!(shuffle, m)?)?;
    m.add_function(wrap_pyfunction!(allocate, m)?)?;
    m.add_function(wrap_pyfunction!(allocate_pooled, m)?)?;

    Ok(())
}
