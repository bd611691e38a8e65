use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

const MAX_SIZE: usize = isize::MAX as usize;

/// The raw allocation behind a [`Stack`](super::Stack): a pointer to `cap` possibly
/// uninitialized values. A Buffer tracks no initialization state of its own; dropping one
/// releases the allocation without touching the values, which remain the owning collection's
/// responsibility.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with capacity 0 and no allocation behind it.
    pub(crate) const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a Buffer with the provided capacity, allocating unless the layout is zero-sized.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn with_cap(cap: usize) -> Buffer<T> {
        let layout = Self::make_layout(cap);

        Buffer {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    /// A helper function to create a [`Layout`] holding `cap` values of `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(cap).expect("Capacity overflow!")
    }

    /// A helper function to allocate for the provided [`Layout`]. Returns a dangling pointer for
    /// a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    /// Changes the capacity to `new_cap`, moving the allocation as required. Values beyond the
    /// new capacity are discarded without being dropped; the caller must drop them first.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_cap * size_of::<T>() > isize::MAX`)
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        self.ptr = match (self.cap, new_cap) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized values never need backing memory, so the dangling pointer can be
                // kept through every resize. Only the recorded capacity changes.
                self.ptr
            },
            (old, new) if old == new => return,
            (0, _) => Self::make_ptr(Self::make_layout(new_cap)),
            (_, 0) => {
                self.dealloc();
                NonNull::dangling()
            },
            (_, _) => {
                let layout = Self::make_layout(self.cap);

                if new_cap * size_of::<T>() > MAX_SIZE {
                    panic!("Capacity overflow!")
                }

                // SAFETY: ptr was allocated in the global allocator with this exact layout, and
                // the new size is non-zero and no greater than isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        layout,
                        new_cap * size_of::<T>(),
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout))
            },
        };
        self.cap = new_cap;
    }

    /// Releases the allocation if one exists. The pointer and capacity are left behind, so the
    /// Buffer must not be used again until they are replaced.
    pub(crate) fn dealloc(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this exact layout, and
            // zero-sized layouts are never allocated.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        self.dealloc();
    }
}
