//! Aligned allocation entry points for embedding hosts.
//!
//! The C side has no layout bookkeeping, so this module keeps a registry
//! mapping each live pointer to the layout it was allocated with; `sf_free`
//! recovers it from there. The registry mutex sits on the host boundary
//! only — never on the render path, which receives its buffers in advance.

use rustc_hash::FxHashMap;
use soundfield_core::Allocator;
use std::ffi::c_void;
use std::sync::{LazyLock, Mutex};

use crate::SfStatus;

/// (size, align) per live allocation, keyed by address
static ALLOCATIONS: LazyLock<Mutex<FxHashMap<usize, (usize, usize)>>> =
    LazyLock::new(|| Mutex::new(FxHashMap::default()));

/// Allocate `size` zero-initialized bytes at `align` alignment.
///
/// Returns null when the request cannot be satisfied (zero size,
/// non-power-of-two alignment, or exhaustion); no partial resource is
/// retained on failure. The region stays exclusively owned by the caller
/// until released through [`sf_free`].
#[no_mangle]
pub extern "C" fn sf_alloc(size: usize, align: usize) -> *mut c_void {
    let allocator = Allocator::standalone();
    match allocator.allocate(size, align) {
        Some(ptr) => {
            ALLOCATIONS
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .insert(ptr.as_ptr() as usize, (size, align));
            ptr.as_ptr().cast::<c_void>()
        }
        None => std::ptr::null_mut(),
    }
}

/// Release a region from [`sf_alloc`] and null the caller's pointer slot.
///
/// A null `slot` yields `NullPointer`. A slot already holding null is a
/// safe no-op, so the free-then-free-again pattern cannot double-free.
/// A pointer that was not produced by `sf_alloc` is ignored (the slot is
/// still nulled) rather than handed to the allocator.
///
/// # Safety
/// `slot` must be null or a valid pointer to the caller's pointer
/// variable. A non-null `*slot` must not be in use by any other thread.
#[no_mangle]
pub unsafe extern "C" fn sf_free(slot: *mut *mut c_void) -> SfStatus {
    if slot.is_null() {
        return SfStatus::NullPointer;
    }
    let ptr = *slot;
    if ptr.is_null() {
        return SfStatus::Ok;
    }

    let entry = ALLOCATIONS
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .remove(&(ptr as usize));
    if let Some((size, align)) = entry {
        let allocator = Allocator::standalone();
        let mut raw = ptr.cast::<u8>();
        allocator.free(&mut raw, size, align);
    }
    *slot = std::ptr::null_mut();
    SfStatus::Ok
}
