//! Hexlife - modified Game of Life on a hexagonal grid
//!
//! Cells live on an odd-row-offset hexagonal grid and evolve under the
//! classic birth/death rules plus two revival rules: a dead cell comes back
//! after six generations of dormancy, and every fourth generation one random
//! dead cell is revived. The simulation ends once no dead cell is left
//! awaiting revival.
//!
//! The library exposes a Rust API ([`Engine`]) and a C ABI (`ffi`).

pub mod automaton;
pub mod cell;
pub mod config;
pub mod driver;
pub mod error;
pub mod ffi;
pub mod picker;
pub mod state;


pub use automaton::Grid;
pub use cell::{Cell, CellState, DeathCause, ResurrectionCause, Transition};
pub use config::{DeathClock, SimulationConfig};
pub use driver::{run, run_async, RunSummary};
pub use error::{EngineError, Result};
pub use picker::{CellPicker, SeededPicker};
pub use state::Engine;
