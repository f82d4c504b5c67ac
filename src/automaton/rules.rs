//! Per-cell transition rules.
//!
//! Rules are checked in priority order and the first match wins:
//! 1. Underpopulation: alive with fewer than 2 live neighbors dies
//! 2. Stasis: alive with 2 or 3 live neighbors stays alive
//! 3. Overpopulation: alive with more than 3 live neighbors dies
//! 4. Reproduction: dead with exactly 3 live neighbors comes alive
//! 5. Timeout: dead for exactly 6 generations comes alive
//!
//! The periodic random revival is applied by the stepper after the batch.

use crate::cell::{Cell, DeathCause, ResurrectionCause, Transition};

/// Dormancy after which a stamped dead cell is revived.
pub const REVIVAL_DORMANCY: u64 = 6;

/// Every this many generations a random dead cell is revived.
pub const RANDOM_REVIVAL_PERIOD: u64 = 4;

/// Decide the transition for one cell from its current-generation snapshot.
///
/// `generation` is the number of the generation being produced.
pub fn decide(cell: &Cell, live_neighbors: usize, generation: u64) -> Transition {
    let last_death = cell.cause_of_death();

    if cell.is_alive() {
        // A cell last killed by the same cause is left alone by that rule.
        if live_neighbors < 2 && last_death != Some(DeathCause::Underpopulation) {
            return Transition::Kill(DeathCause::Underpopulation);
        }
        if live_neighbors == 2 || live_neighbors == 3 {
            return Transition::NoOp;
        }
        if live_neighbors > 3 && last_death != Some(DeathCause::Overpopulation) {
            return Transition::Kill(DeathCause::Overpopulation);
        }
        return Transition::NoOp;
    }

    if live_neighbors == 3 {
        return Transition::Resurrect(ResurrectionCause::Reproduction);
    }
    if cell.dormancy(generation) == Some(REVIVAL_DORMANCY) {
        return Transition::Resurrect(ResurrectionCause::SixGenTimeout);
    }

    Transition::NoOp
}

/// Whether the periodic random revival fires for this generation.
pub fn random_revival_due(generation: u64) -> bool {
    generation % RANDOM_REVIVAL_PERIOD == 0
}
