use std::cell::Cell;
use std::rc::Rc;

/// Shared count of completed frames for one window.
///
/// Clones share the same counter. Not `Send`; all users live on the event
/// loop thread.
#[derive(Debug, Clone, Default)]
pub struct FrameCounter(Rc<Cell<u64>>);

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }

    pub fn increment(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_count() {
        let a = FrameCounter::new();
        let b = a.clone();
        a.increment();
        b.increment();
        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), 2);
    }
}
