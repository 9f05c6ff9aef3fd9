//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::bowler::RandomBowler;
use crate::core::ScoreError;
use crate::scoring::ScoreEngine;

fn to_py_err(err: ScoreError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for ScoreEngine.
///
/// One instance scores one game.
#[pyclass(name = "ScoreEngine")]
#[derive(Clone)]
pub struct PyScoreEngine(pub ScoreEngine);

#[pymethods]
impl PyScoreEngine {
    /// Start a new game.
    #[new]
    fn new() -> Self {
        Self(ScoreEngine::new())
    }

    /// Record the next throw. Raises ValueError on an illegal throw.
    fn receive_throw(&mut self, pins: i32) -> PyResult<()> {
        self.0.receive_throw(pins).map_err(to_py_err)
    }

    /// Cumulative total after a frame, or None while it is pending.
    fn total_after(&self, ordinal: u8) -> PyResult<Option<u16>> {
        self.0
            .total_after(ordinal)
            .map(|total| total.value())
            .map_err(to_py_err)
    }

    /// A frame's throws as score sheet symbols.
    fn reported_state(&self, ordinal: u8) -> PyResult<String> {
        self.0.reported_state(ordinal).map_err(to_py_err)
    }

    /// Check if frame 10 is done.
    fn is_game_complete(&self) -> bool {
        self.0.is_game_complete()
    }

    /// Final score, or None while the game is in progress.
    fn final_score(&self) -> Option<u16> {
        self.0.final_score()
    }

    /// Frame the next throw goes to, or None once complete.
    #[getter]
    fn current_frame(&self) -> Option<u8> {
        self.0.current_frame().map(|frame| frame.get())
    }

    /// Every throw so far.
    fn throws(&self) -> Vec<u8> {
        self.0.throws().map(|pins| pins.value()).collect()
    }

    /// Bowl the rest of the game with a seeded random bowler.
    fn play_random(&mut self, bowler: &mut PyRandomBowler) -> PyResult<()> {
        self.0.play(&mut bowler.0).map_err(to_py_err)
    }

    /// Copy the game for what-if analysis.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        match self.0.final_score() {
            Some(score) => format!("ScoreEngine(final={})", score),
            None => format!(
                "ScoreEngine(frame={})",
                self.0.current_frame().map_or(0, |frame| frame.get())
            ),
        }
    }
}

/// Python wrapper for RandomBowler.
#[pyclass(name = "RandomBowler")]
pub struct PyRandomBowler(pub RandomBowler);

#[pymethods]
impl PyRandomBowler {
    #[new]
    #[pyo3(signature = (seed = 42, clear_rate = RandomBowler::DEFAULT_CLEAR_RATE))]
    fn new(seed: u64, clear_rate: f64) -> Self {
        Self(RandomBowler::new(seed).with_clear_rate(clear_rate))
    }
}
