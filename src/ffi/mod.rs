//! C FFI layer for non-Rust hosts.
//!
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//! The engine is handed out as an opaque pointer from `hx_create()`.
//!
//! The actual logic is in `state` and `automaton`. These functions are thin
//! wrappers that handle null checks and map errors to sentinel values.

pub mod grid;
pub mod lifecycle;

pub use grid::{
    hx_death_cause, hx_get_cell, hx_neighbors, hx_resurrection_cause, hx_step, hx_toggle_cell,
};
pub use lifecycle::{hx_create, hx_destroy, hx_get_generation};
