use std::cell::RefCell;
use std::rc::Rc;

/// An equality stub which records every comparison it takes part in against a shared counter,
/// for verifying that an algorithm stops comparing when it should.
#[derive(Debug, Clone)]
pub struct CountedEq<T> {
    value: T,
    counter: Rc<RefCell<usize>>,
}

impl<T> CountedEq<T> {
    #[allow(unused)]
    pub fn new(value: T, counter: &Rc<RefCell<usize>>) -> CountedEq<T> {
        CountedEq {
            value,
            counter: Rc::clone(counter),
        }
    }
}

impl<T: PartialEq> PartialEq for CountedEq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counter.replace_with(|count| *count + 1);
        self.value == other.value
    }
}
