use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Owns an allocation of `cap` slots of `T`, nothing more. Doesn't know
/// which slots are initialised.
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawBuf<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// # Panics
    /// Panics if the allocation size overflows `isize::MAX`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        buf.resize(capacity);
        buf
    }

    /// Resize to exactly `new_cap` slots. The leading
    /// `min(cap, new_cap)` slots keep their contents.
    ///
    /// # Panics
    /// Panics if the allocation size overflows `isize::MAX`.
    pub fn resize(&mut self, new_cap: usize) {
        if new_cap == self.cap {
            return;
        }

        if self.cap == 0 {
            self.allocate(new_cap);
        } else if new_cap == 0 {
            self.free();
        } else {
            self.reallocate(new_cap);
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn allocate(&mut self, slots: usize) {
        let layout = slots_layout::<T>(slots);

        let ptr = unsafe { alloc::alloc(layout) };
        if ptr.is_null() {
            alloc::handle_alloc_error(layout);
        }

        self.ptr = unsafe { NonNull::new_unchecked(ptr.cast()) };
        self.cap = slots;
    }

    fn reallocate(&mut self, slots: usize) {
        let old_layout = slots_layout::<T>(self.cap);
        let new_layout = slots_layout::<T>(slots);

        let ptr = unsafe { alloc::realloc(self.as_ptr().cast(), old_layout, new_layout.size()) };
        if ptr.is_null() {
            alloc::handle_alloc_error(new_layout);
        }

        self.ptr = unsafe { NonNull::new_unchecked(ptr.cast()) };
        self.cap = slots;
    }

    fn free(&mut self) {
        unsafe { alloc::dealloc(self.as_ptr().cast(), slots_layout::<T>(self.cap)) };

        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

/// # Panics
/// Panics if `slots * size_of::<T>()` overflows `isize::MAX`.
fn slots_layout<T>(slots: usize) -> Layout {
    Layout::array::<T>(slots).expect("allocation size overflows `isize::MAX`")
}

impl<T> From<Vec<T>> for RawBuf<T> {
    /// Take over a vec's allocation, retaining excess capacity.
    ///
    /// The caller becomes responsible for the contained values; `RawBuf`
    /// only ever frees the allocation itself.
    fn from(v: Vec<T>) -> Self {
        // `Vec` also uses a dangling pointer when unallocated.
        let cap = v.capacity();
        let ptr = NonNull::from(v.leak()).cast();
        Self { ptr, cap }
    }
}

impl<T> Drop for RawBuf<T> {
    #[inline]
    fn drop(&mut self) {
        if self.cap > 0 {
            self.free();
        }
    }
}
