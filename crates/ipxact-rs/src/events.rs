// crates/ipxact-rs/src/events.rs

//! Content-changed notification for code that edits a [`Component`](crate::Component).
//!
//! The model types never emit events themselves. An editing layer owns a
//! `ChangeNotifier`, mutates the component through its plain accessors and
//! then calls [`ChangeNotifier::notify`] with the section it touched.

use log::trace;

/// The part of a component that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ComponentSection {
    Identity,
    BusInterfaces,
    Channels,
    RemapStates,
    AddressSpaces,
    MemoryMaps,
    Model,
    ComponentGenerators,
    Choices,
    FileSets,
    Cpus,
    OtherClockDrivers,
    Parameters,
    VendorExtensions,
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(usize);

type Listener<'a> = Box<dyn FnMut(ComponentSection) + 'a>;

/// A list of callbacks invoked in subscription order.
#[derive(Default)]
pub struct ChangeNotifier<'a> {
    listeners: Vec<(SubscriptionId, Listener<'a>)>,
    next_id: usize,
}

impl<'a> ChangeNotifier<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for every subsequent notification.
    pub fn subscribe(&mut self, listener: impl FnMut(ComponentSection) + 'a) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a callback. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Calls every subscribed callback with `section`.
    pub fn notify(&mut self, section: ComponentSection) {
        trace!(
            "Notifying {} listener(s) of {:?} change",
            self.listeners.len(),
            section
        );
        for (_, listener) in &mut self.listeners {
            listener(section);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl core::fmt::Debug for ChangeNotifier<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_notify_reaches_all_listeners_in_order() {
        let seen = RefCell::new(Vec::new());
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(|s| seen.borrow_mut().push(("first", s)));
        notifier.subscribe(|s| seen.borrow_mut().push(("second", s)));

        notifier.notify(ComponentSection::Model);

        assert_eq!(
            *seen.borrow(),
            vec![
                ("first", ComponentSection::Model),
                ("second", ComponentSection::Model)
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let count = RefCell::new(0);
        let mut notifier = ChangeNotifier::new();
        let id = notifier.subscribe(|_| *count.borrow_mut() += 1);

        notifier.notify(ComponentSection::FileSets);
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify(ComponentSection::FileSets);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(notifier.listener_count(), 0);
    }
}
