use std::cell::RefCell;
use std::rc::Rc;

/// Counts how many of its clones have been dropped, for verifying collection cleanup in tests.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(0)))
    }

    /// The number of clones of this value dropped so far.
    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

impl Default for CountedDrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
