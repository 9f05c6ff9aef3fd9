//! Python bindings for the rust-bowling score engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_bowling as bowling
//!
//! game = bowling.ScoreEngine()
//! for pins in [10, 7, 3, 9, 0]:
//!     game.receive_throw(pins)
//!
//! game.total_after(1)      # 20
//! game.total_after(3)      # 29
//! game.reported_state(2)   # "7|/"
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// rust-bowling: ten-pin score engine.
#[pymodule]
fn rust_bowling(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyScoreEngine>()?;
    m.add_class::<PyRandomBowler>()?;
    Ok(())
}
