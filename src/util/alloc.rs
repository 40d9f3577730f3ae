use std::cell::Cell;
use std::rc::Rc;

/// A payload which counts how many of its clones have been dropped. All clones share the same
/// counter.
#[derive(Debug, Clone, Default)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop::default()
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A payload whose [`Clone`] implementation panics once a shared countdown reaches zero. Without a
/// countdown it clones freely.
#[derive(Debug, Default)]
pub struct ThrowOnClone {
    pub countdown: Option<Rc<Cell<usize>>>,
}

impl ThrowOnClone {
    pub fn with_countdown(countdown: usize) -> ThrowOnClone {
        ThrowOnClone {
            countdown: Some(Rc::new(Cell::new(countdown))),
        }
    }
}

impl Clone for ThrowOnClone {
    fn clone(&self) -> Self {
        if let Some(countdown) = &self.countdown {
            match countdown.get() {
                0 => panic!("clone countdown exhausted"),
                remaining => countdown.set(remaining - 1),
            }
        }
        ThrowOnClone {
            countdown: self.countdown.clone(),
        }
    }
}
