//! # ListenerSet: ordered synchronous fan-out
//!
//! [`ListenerSet`] stores the callbacks of one channel and calls each of them
//! for every activation.
//!
//! ## What it guarantees
//! - Registration order is invocation order.
//! - `emit` runs every listener to completion before returning.
//! - Listeners may attach/detach on the same set while being called: `emit`
//!   works on a snapshot, so changes apply from the next activation.
//!
//! ## Diagram
//! ```text
//!    emit(name, &payload)
//!        │  snapshot (Arc-clone per listener)
//!        ├──► L1.on_event()
//!        ├──► L2.on_event()
//!        └──► LN.on_event()
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use super::listener::{Listen, ListenerId};

/// Shared listener handle.
pub type ListenerRef<T> = Arc<dyn Listen<T>>;

struct Slot<T> {
    id: ListenerId,
    listener: ListenerRef<T>,
}

/// Ordered collection of listeners for one channel.
pub(crate) struct ListenerSet<T> {
    slots: RwLock<Vec<Slot<T>>>,
}

impl<T: 'static> ListenerSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: RwLock::new(Vec::new()),
        }
    }

    /// Appends a listener and returns its id.
    pub(crate) fn attach(&self, listener: ListenerRef<T>) -> ListenerId {
        let id = ListenerId::next();
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Slot { id, listener });
        id
    }

    /// Removes the listener with `id`; returns whether it was present.
    pub(crate) fn detach(&self, id: ListenerId) -> bool {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        match slots.iter().position(|s| s.id == id) {
            Some(pos) => {
                slots.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drops every listener.
    pub(crate) fn clear(&self) {
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Calls every listener in order; returns how many were called.
    pub(crate) fn emit(&self, event: &str, payload: &T) -> usize {
        let snapshot: Vec<ListenerRef<T>> = {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            slots.iter().map(|s| Arc::clone(&s.listener)).collect()
        };
        for listener in &snapshot {
            tracing::trace!(event, listener = listener.name(), "dispatch");
            listener.on_event(event, payload);
        }
        snapshot.len()
    }

    /// Number of attached listeners.
    pub(crate) fn len(&self) -> usize {
        self.slots.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
