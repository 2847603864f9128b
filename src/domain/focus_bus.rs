//! Focus requests from reveal triggers to whatever surface holds the input.
//!
//! The bus lives on the UI loop. Triggers that fire on other threads must
//! marshal onto the loop before calling [`FocusBus::signal`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::trace;

type Handler = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

#[derive(Clone, Default)]
pub struct FocusBus {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for FocusBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl FocusBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every handler subscribed at the time of the call, in
    /// subscription order. Handlers may subscribe or cancel while running;
    /// those changes take effect from the next signal.
    pub fn signal(&self) {
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        if handlers.is_empty() {
            trace!("Focus request dropped: no subscribers");
            return;
        }

        for handler in handlers {
            handler();
        }
    }

    pub fn subscribe(&self, handler: impl Fn() + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Rc::new(handler)));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Keeps a handler registered. Cancelling is idempotent and also happens
/// on drop.
#[must_use = "dropping a Subscription unsubscribes its handler"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn cancel(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_signal_without_subscribers_is_dropped() {
        let bus = FocusBus::new();
        bus.signal();
        assert_eq!(bus.subscriber_count(), 0);

        // No replay for late subscribers.
        let (count, handler) = counter();
        let _sub = bus.subscribe(handler);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_signal_runs_in_subscription_order() {
        let bus = FocusBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let _a = bus.subscribe(move || first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        let _b = bus.subscribe(move || second.borrow_mut().push("second"));

        bus.signal();
        bus.signal();
        assert_eq!(*order.borrow(), vec!["first", "second", "first", "second"]);
    }

    #[test]
    fn test_cancelled_handler_is_not_invoked() {
        let bus = FocusBus::new();
        let (count, handler) = counter();
        let sub = bus.subscribe(handler);

        bus.signal();
        sub.cancel();
        sub.cancel();
        bus.signal();

        assert_eq!(count.get(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_cancels() {
        let bus = FocusBus::new();
        let (count, handler) = counter();
        {
            let _sub = bus.subscribe(handler);
            bus.signal();
        }
        bus.signal();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cancel_after_bus_dropped() {
        let bus = FocusBus::new();
        let (_count, handler) = counter();
        let sub = bus.subscribe(handler);
        drop(bus);
        sub.cancel();
    }

    #[test]
    fn test_cancel_during_signal_applies_next_signal() {
        let bus = FocusBus::new();
        let (count, handler) = counter();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let inner_slot = Rc::clone(&slot);
        let _first = bus.subscribe(move || {
            inner_slot.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(bus.subscribe(handler));

        // The second handler was cancelled by the first but still runs
        // for the signal already in progress.
        bus.signal();
        assert_eq!(count.get(), 1);
        assert_eq!(bus.subscriber_count(), 1);

        bus.signal();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_reentrant_subscribe_applies_next_signal() {
        let bus = FocusBus::new();
        let (count, handler) = counter();
        let handler = Rc::new(handler);
        let late: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let inner_bus = bus.clone();
        let inner_late = Rc::clone(&late);
        let inner_handler = Rc::clone(&handler);
        let _sub = bus.subscribe(move || {
            if inner_late.borrow().is_empty() {
                let h = Rc::clone(&inner_handler);
                inner_late
                    .borrow_mut()
                    .push(inner_bus.subscribe(move || (*h)()));
            }
        });

        bus.signal();
        assert_eq!(count.get(), 0);
        bus.signal();
        assert_eq!(count.get(), 1);
    }
}
