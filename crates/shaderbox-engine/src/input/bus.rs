use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::PointerEvent;

type Listener = Rc<RefCell<dyn FnMut(&PointerEvent)>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Per-window pointer event fan-out.
///
/// Listeners are registered with [`subscribe`](Self::subscribe) and removed by
/// releasing the returned [`Subscription`]. Single-threaded; listeners may
/// subscribe or release (including themselves) while an event is dispatched.
#[derive(Clone, Default)]
pub struct PointerBus {
    listeners: Rc<RefCell<Listeners>>,
}

impl PointerBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for every subsequent event.
    pub fn subscribe(&self, listener: impl FnMut(&PointerEvent) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        listeners.entries.push((id, listener));

        Subscription {
            target: Some((Rc::downgrade(&self.listeners), id)),
        }
    }

    /// Delivers `event` to the listeners registered when dispatch starts.
    pub fn dispatch(&self, event: &PointerEvent) {
        let snapshot: Vec<(u64, Listener)> = self.listeners.borrow().entries.clone();

        for (id, listener) in snapshot {
            // Skip listeners released by an earlier listener of this dispatch.
            if !self.is_registered(id) {
                continue;
            }
            (&mut *listener.borrow_mut())(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_registered(&self, id: u64) -> bool {
        self.listeners.borrow().entries.iter().any(|(i, _)| *i == id)
    }
}

/// Handle to a registered listener bundle.
///
/// [`release`](Self::release) detaches it; calling it again, or after the bus
/// is gone, does nothing. Dropping the handle releases it too.
#[must_use = "dropping a Subscription releases it immediately"]
#[derive(Default)]
pub struct Subscription {
    target: Option<(Weak<RefCell<Listeners>>, u64)>,
}

impl Subscription {
    /// A subscription that is already released.
    pub fn released() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.target
            .as_ref()
            .and_then(|(bus, _)| bus.upgrade())
            .is_some()
    }

    pub fn release(&mut self) {
        let Some((bus, id)) = self.target.take() else { return };
        let Some(listeners) = bus.upgrade() else { return };

        // The listener is dropped after the borrow ends; it may own subscriptions.
        let removed = {
            let mut listeners = listeners.borrow_mut();
            let index = listeners.entries.iter().position(|(i, _)| *i == id);
            index.map(|i| listeners.entries.remove(i))
        };
        drop(removed);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
