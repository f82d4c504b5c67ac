//! Core automaton logic.
//!
//! This module contains the grid topology, the transition rules and the
//! generation stepper. The `Engine` in `state` and the FFI layer in `ffi/`
//! call into these.

pub mod grid;
pub mod rules;
pub mod stepping;

pub use grid::Grid;
pub use rules::{decide, random_revival_due, RANDOM_REVIVAL_PERIOD, REVIVAL_DORMANCY};
pub use stepping::step_automaton;
