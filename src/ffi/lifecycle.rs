//! Engine creation, destruction, and generation queries.

use crate::state::Engine;

/// Creates a new engine and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new Engine, or null if either dimension is zero.
///
/// # Safety
/// The returned pointer must eventually be freed with `hx_destroy()`.
#[no_mangle]
pub extern "C" fn hx_create(rows: u32, columns: u32, seed: u64) -> *mut Engine {
    match Engine::seeded(rows as usize, columns as usize, seed) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(err) => {
            tracing::debug!(%err, "hx_create rejected");
            std::ptr::null_mut()
        }
    }
}

/// Destroys an engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `hx_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn hx_destroy(ptr: *mut Engine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn hx_get_generation(ptr: *const Engine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
