use std::cell::RefCell;
use std::rc::Rc;

/// A unit struct for exercising the zero-sized code paths of a collection.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A value which increments a counter, shared between all of its clones, whenever one of them is
/// dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    #[allow(unused)]
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(0)))
    }

    /// Returns the number of drops recorded so far, resetting the count to zero.
    #[allow(unused)]
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|count| *count + 1);
    }
}
