//! Aligned memory allocation abstraction.
//!
//! All per-block working memory of the rendering engine comes through
//! here, in one of two modes selected by the build configuration:
//!
//! - **Standalone**: the platform allocator via `std::alloc`, zeroed at
//!   allocation time.
//! - **Host-delegated**: every allocate/free is forwarded to a
//!   caller-supplied [`HostAllocator`] capability; the abstraction zeroes
//!   the region itself and treats alignment as best-effort by the host.
//!
//! Failure is always a `None`/null result — nothing here panics past the
//! API boundary and nothing is raised across FFI. Allocation happens on
//! the control thread only; the render path works exclusively on buffers
//! obtained in advance.

use crate::config::EngineConfig;
use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ffi::c_void;
use std::ptr::NonNull;
use tracing::{debug, warn};

/// Host-side allocation entry point: returns a zero-or-more-aligned
/// region of `size` bytes or null.
pub type HostAllocFn =
    unsafe extern "C" fn(context: *mut c_void, size: usize, align: usize) -> *mut c_void;

/// Host-side release entry point for pointers produced by the paired
/// [`HostAllocFn`].
pub type HostFreeFn = unsafe extern "C" fn(context: *mut c_void, ptr: *mut c_void);

/// Opaque allocation capability supplied by the embedding host.
///
/// The function pair and context are handed over once at initialization;
/// the abstraction never inspects how the host satisfies requests beyond
/// the size guarantee (alignment is honored best-effort by the host).
#[derive(Debug, Clone, Copy)]
pub struct HostAllocator {
    /// Opaque host state passed back on every call
    pub context: *mut c_void,
    /// Allocation callback
    pub alloc: HostAllocFn,
    /// Release callback
    pub free: HostFreeFn,
}

// Capability contract: the host allocator must be callable from any
// control thread, like the platform allocator it stands in for.
unsafe impl Send for HostAllocator {}
unsafe impl Sync for HostAllocator {}

/// Allocation front end, either standalone or host-delegated.
#[derive(Debug, Clone, Copy)]
pub struct Allocator {
    host: Option<HostAllocator>,
}

impl Allocator {
    /// Standalone mode: platform aligned allocation.
    pub fn standalone() -> Self {
        Allocator { host: None }
    }

    /// Host-delegated mode: forward everything to `host`.
    pub fn host(host: HostAllocator) -> Self {
        Allocator { host: Some(host) }
    }

    /// Build the allocator the configuration asks for. A configuration
    /// requesting host delegation without a host capability falls back to
    /// standalone mode with a warning rather than failing initialization.
    pub fn for_config(config: &EngineConfig, host: Option<HostAllocator>) -> Self {
        match (config.host_allocator, host) {
            (true, Some(host)) => Allocator::host(host),
            (true, None) => {
                warn!("config requests host-delegated allocation but no host allocator was supplied; using standalone mode");
                Allocator::standalone()
            }
            (false, _) => Allocator::standalone(),
        }
    }

    /// True when allocations are forwarded to the host.
    pub fn is_host_delegated(&self) -> bool {
        self.host.is_some()
    }

    /// Allocate `size` bytes at `align` alignment, zero-initialized.
    ///
    /// Returns `None` on zero size, non-power-of-two alignment, layout
    /// overflow or underlying allocation failure; no partial resource is
    /// retained on any failure path.
    pub fn allocate(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        let layout = Layout::from_size_align(size, align).ok()?;
        if size == 0 {
            return None;
        }

        let ptr = match self.host {
            Some(host) => {
                let raw = unsafe { (host.alloc)(host.context, size, align) };
                match NonNull::new(raw.cast::<u8>()) {
                    Some(ptr) => {
                        // The host primitive is not assumed to zero memory
                        unsafe { std::ptr::write_bytes(ptr.as_ptr(), 0, size) };
                        ptr
                    }
                    None => {
                        warn!(size, align, "host allocation failed");
                        return None;
                    }
                }
            }
            None => {
                let raw = unsafe { alloc_zeroed(layout) };
                match NonNull::new(raw) {
                    Some(ptr) => ptr,
                    None => {
                        warn!(size, align, "standalone allocation failed");
                        return None;
                    }
                }
            }
        };

        debug!(size, align, host = self.is_host_delegated(), "allocated buffer");
        Some(ptr)
    }

    /// Release a region previously returned by [`Allocator::allocate`]
    /// with the same `size` and `align`, and null the caller's pointer
    /// slot. No-op when the slot already holds null, so a second call on
    /// the same slot is safe.
    ///
    /// # Safety
    /// A non-null `*slot` must have come from `allocate(size, align)` on
    /// an allocator of the same mode and host, and must not be in use.
    pub unsafe fn free(&self, slot: &mut *mut u8, size: usize, align: usize) {
        let ptr = *slot;
        if ptr.is_null() {
            return;
        }
        match self.host {
            Some(host) => (host.free)(host.context, ptr.cast::<c_void>()),
            None => {
                // allocate() produced this layout, so it re-validates
                if let Ok(layout) = Layout::from_size_align(size, align) {
                    dealloc(ptr, layout);
                }
            }
        }
        *slot = std::ptr::null_mut();
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Allocator::standalone()
    }
}

/// Owned, zero-initialized, alignment-guaranteed buffer.
///
/// The RAII form of the allocation contract for Rust-side engine code:
/// exclusively owned, freed through the allocator that produced it, never
/// implicitly duplicated.
#[derive(Debug)]
pub struct AlignedBuffer {
    ptr: NonNull<u8>,
    len: usize,
    align: usize,
    allocator: Allocator,
}

impl AlignedBuffer {
    /// Allocate `len` zeroed bytes at `align` alignment, or `None` when
    /// the underlying allocation fails.
    pub fn new(allocator: &Allocator, len: usize, align: usize) -> Option<Self> {
        let ptr = allocator.allocate(len, align)?;
        Some(AlignedBuffer {
            ptr,
            len,
            align,
            allocator: *allocator,
        })
    }

    /// Allocate a zeroed buffer of `count` floats at SIMD alignment, the
    /// shape the render engine uses for block working memory.
    pub fn zeroed_f32(allocator: &Allocator, count: usize) -> Option<Self> {
        Self::new(allocator, count.checked_mul(std::mem::size_of::<f32>())?, 16)
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the buffer holds no bytes. Allocation rejects zero
    /// sizes, so this only holds for moved-from internals.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alignment guaranteed by the allocation.
    pub fn align(&self) -> usize {
        self.align
    }

    /// Raw base pointer, valid for `len` bytes.
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Raw mutable base pointer, valid for `len` bytes.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// Byte view.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutable byte view.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Float view for SIMD block processing. The buffer must have been
    /// sized in whole floats and allocated at float alignment or better.
    pub fn as_f32(&self) -> &[f32] {
        assert!(self.align >= std::mem::align_of::<f32>());
        assert_eq!(self.len % std::mem::size_of::<f32>(), 0);
        unsafe {
            std::slice::from_raw_parts(
                self.ptr.as_ptr().cast::<f32>(),
                self.len / std::mem::size_of::<f32>(),
            )
        }
    }

    /// Mutable float view for SIMD block processing.
    pub fn as_f32_mut(&mut self) -> &mut [f32] {
        assert!(self.align >= std::mem::align_of::<f32>());
        assert_eq!(self.len % std::mem::size_of::<f32>(), 0);
        unsafe {
            std::slice::from_raw_parts_mut(
                self.ptr.as_ptr().cast::<f32>(),
                self.len / std::mem::size_of::<f32>(),
            )
        }
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        let mut slot = self.ptr.as_ptr();
        unsafe { self.allocator.free(&mut slot, self.len, self.align) };
    }
}

// Exclusive ownership of a raw region; safe to move across threads as
// long as the allocator is (HostAllocator is Send + Sync by contract).
unsafe impl Send for AlignedBuffer {}
unsafe impl Sync for AlignedBuffer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_allocate_is_zeroed_and_aligned() {
        let allocator = Allocator::standalone();
        let ptr = allocator.allocate(256, 16).expect("allocation");
        assert_eq!(ptr.as_ptr() as usize % 16, 0);
        let bytes = unsafe { std::slice::from_raw_parts(ptr.as_ptr(), 256) };
        assert!(bytes.iter().all(|&b| b == 0));

        let mut slot = ptr.as_ptr();
        unsafe { allocator.free(&mut slot, 256, 16) };
        assert!(slot.is_null());
    }

    #[test]
    fn test_double_free_on_nulled_slot_is_noop() {
        let allocator = Allocator::standalone();
        let ptr = allocator.allocate(64, 16).expect("allocation");
        let mut slot = ptr.as_ptr();
        unsafe {
            allocator.free(&mut slot, 64, 16);
            // slot is now null; second free must be a safe no-op
            allocator.free(&mut slot, 64, 16);
        }
        assert!(slot.is_null());
    }

    #[test]
    fn test_invalid_requests_return_none() {
        let allocator = Allocator::standalone();
        assert!(allocator.allocate(0, 16).is_none());
        assert!(allocator.allocate(64, 3).is_none());
        // Layout overflow
        assert!(allocator.allocate(usize::MAX - 8, 16).is_none());
    }

    #[test]
    fn test_aligned_buffer_float_view() {
        let allocator = Allocator::standalone();
        let mut buffer = AlignedBuffer::zeroed_f32(&allocator, 128).expect("allocation");
        assert_eq!(buffer.len(), 512);
        assert_eq!(buffer.as_ptr() as usize % 16, 0);
        assert!(buffer.as_f32().iter().all(|&x| x == 0.0));

        buffer.as_f32_mut()[7] = 1.5;
        assert_eq!(buffer.as_f32()[7], 1.5);
    }

    // Minimal host allocator backed by the platform allocator, with a
    // layout registry so free() can recover what alloc() handed out and
    // counters proving the delegation actually happened
    mod host_fixture {
        use std::alloc::Layout;
        use std::collections::HashMap;
        use std::ffi::c_void;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Mutex;

        pub static ALLOCS: AtomicUsize = AtomicUsize::new(0);
        pub static FREES: AtomicUsize = AtomicUsize::new(0);
        static LAYOUTS: Mutex<Option<HashMap<usize, Layout>>> = Mutex::new(None);

        pub unsafe extern "C" fn alloc(
            _context: *mut c_void,
            size: usize,
            align: usize,
        ) -> *mut c_void {
            ALLOCS.fetch_add(1, Ordering::SeqCst);
            let layout = Layout::from_size_align(size, align).unwrap();
            // Deliberately not zeroed: the abstraction must zero it
            let ptr = std::alloc::alloc(layout);
            if !ptr.is_null() {
                LAYOUTS
                    .lock()
                    .unwrap()
                    .get_or_insert_with(HashMap::new)
                    .insert(ptr as usize, layout);
            }
            ptr.cast::<c_void>()
        }

        pub unsafe extern "C" fn failing_alloc(
            _context: *mut c_void,
            _size: usize,
            _align: usize,
        ) -> *mut c_void {
            std::ptr::null_mut()
        }

        pub unsafe extern "C" fn free(_context: *mut c_void, ptr: *mut c_void) {
            FREES.fetch_add(1, Ordering::SeqCst);
            let layout = LAYOUTS
                .lock()
                .unwrap()
                .get_or_insert_with(HashMap::new)
                .remove(&(ptr as usize));
            if let Some(layout) = layout {
                std::alloc::dealloc(ptr.cast::<u8>(), layout);
            }
        }
    }

    #[test]
    fn test_host_delegated_allocate_zeroes_and_counts() {
        use std::sync::atomic::Ordering;

        let host = HostAllocator {
            context: std::ptr::null_mut(),
            alloc: host_fixture::alloc,
            free: host_fixture::free,
        };
        let allocator = Allocator::host(host);
        assert!(allocator.is_host_delegated());

        let before = host_fixture::ALLOCS.load(Ordering::SeqCst);
        let ptr = allocator.allocate(128, 16).expect("host allocation");
        assert_eq!(host_fixture::ALLOCS.load(Ordering::SeqCst), before + 1);

        let bytes = unsafe { std::slice::from_raw_parts(ptr.as_ptr(), 128) };
        assert!(bytes.iter().all(|&b| b == 0));

        let frees_before = host_fixture::FREES.load(Ordering::SeqCst);
        let mut slot = ptr.as_ptr();
        unsafe { allocator.free(&mut slot, 128, 16) };
        assert!(slot.is_null());
        assert_eq!(host_fixture::FREES.load(Ordering::SeqCst), frees_before + 1);
    }

    #[test]
    fn test_host_allocation_failure_returns_none() {
        let host = HostAllocator {
            context: std::ptr::null_mut(),
            alloc: host_fixture::failing_alloc,
            free: host_fixture::free,
        };
        let allocator = Allocator::host(host);
        assert!(allocator.allocate(64, 16).is_none());
    }

    #[test]
    fn test_for_config_mode_selection() {
        use crate::config::{EngineConfig, EngineTarget};

        let unity = EngineConfig::for_target(EngineTarget::Unity);
        assert!(!Allocator::for_config(&unity, None).is_host_delegated());

        let wwise = EngineConfig::for_target(EngineTarget::Wwise);
        // Requested host delegation without a capability: falls back
        assert!(!Allocator::for_config(&wwise, None).is_host_delegated());

        let host = HostAllocator {
            context: std::ptr::null_mut(),
            alloc: host_fixture::alloc,
            free: host_fixture::free,
        };
        assert!(Allocator::for_config(&wwise, Some(host)).is_host_delegated());
    }
}
