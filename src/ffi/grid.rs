//! Cell access, toggling, neighbor queries and stepping.

use crate::cell::{DeathCause, ResurrectionCause};
use crate::state::Engine;

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn hx_get_cell(ptr: *const Engine, row: u32, column: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    match (*ptr).cell_at(row as usize, column as usize) {
        Ok(cell) => cell.is_alive() as u8,
        Err(_) => 0,
    }
}

/// Flips a cell between alive and dead, before the first step only.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 if the id is unknown or the simulation has started,
/// -1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn hx_toggle_cell(ptr: *mut Engine, id: u32) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    match (*ptr).toggle_cell(id as usize) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Writes the ids of a cell's neighbors into `out_buf`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out_buf` must point to at least `capacity` writable `u32`s
///
/// # Returns
/// Number of ids written (at most `capacity`, at most 6), or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn hx_neighbors(
    ptr: *const Engine,
    id: u32,
    out_buf: *mut u32,
    capacity: u32,
) -> u32 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let neighbors = match engine.cell(id as usize).and_then(|c| engine.neighbors_of(c)) {
        Ok(neighbors) => neighbors,
        Err(_) => return 0,
    };

    let out = std::slice::from_raw_parts_mut(out_buf, capacity as usize);
    let mut written = 0;
    for (slot, neighbor) in out.iter_mut().zip(neighbors) {
        *slot = neighbor.id() as u32;
        written += 1;
    }

    written
}

/// Last cause of death: 0 = underpopulation, 1 = overpopulation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// -1 if the cell never died, the id is unknown, or ptr is null.
#[no_mangle]
pub unsafe extern "C" fn hx_death_cause(ptr: *const Engine, id: u32) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    match (*ptr).cell(id as usize).map(|c| c.cause_of_death()) {
        Ok(Some(DeathCause::Underpopulation)) => 0,
        Ok(Some(DeathCause::Overpopulation)) => 1,
        _ => -1,
    }
}

/// Last cause of resurrection: 0 = reproduction, 1 = six-generation timeout,
/// 2 = random.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// -1 if the cell was never resurrected, the id is unknown, or ptr is null.
#[no_mangle]
pub unsafe extern "C" fn hx_resurrection_cause(ptr: *const Engine, id: u32) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    match (*ptr).cell(id as usize).map(|c| c.cause_of_resurrection()) {
        Ok(Some(ResurrectionCause::Reproduction)) => 0,
        Ok(Some(ResurrectionCause::SixGenTimeout)) => 1,
        Ok(Some(ResurrectionCause::Random)) => 2,
        _ => -1,
    }
}

/// Advances the simulation by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 1 if converged, 0 if the simulation continues, -1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn hx_step(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    if (*ptr).step() {
        1
    } else {
        0
    }
}
