//! # Typed event channel.
//!
//! [`TypedEvent<T>`] delivers one value of `T` to every listener. Activating
//! without a payload ([`Channel::activate`]) delivers `T::default()`.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use eventree::{Channel, TypedEvent};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let scored = TypedEvent::<u32>::arc("Scored");
//!
//! let s = seen.clone();
//! scored.subscribe(move |points: &u32| s.lock().unwrap().push(*points));
//!
//! scored.activate_with(&10);
//! scored.activate(); // u32::default()
//!
//! assert_eq!(*seen.lock().unwrap(), vec![10, 0]);
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use crate::events::channel::{Channel, EventRef, PayloadKind};
use crate::listeners::{FnListener, Listen, ListenerId, ListenerSet};

/// Named channel whose listeners take a `&T`.
pub struct TypedEvent<T> {
    name: Cow<'static, str>,
    enabled: AtomicBool,
    listeners: ListenerSet<T>,
}

impl<T: Send + Sync + 'static> TypedEvent<T> {
    /// Creates an enabled channel with no listeners.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            enabled: AtomicBool::new(true),
            listeners: ListenerSet::new(),
        }
    }

    /// Creates the channel and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>) -> Arc<Self> {
        Arc::new(Self::new(name))
    }

    /// Attaches a closure listener.
    pub fn subscribe<F>(&self, f: F) -> ListenerId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.listeners.attach(Arc::new(FnListener::new(f)))
    }

    /// Attaches a listener object.
    pub fn attach(&self, listener: Arc<dyn Listen<T>>) -> ListenerId {
        self.listeners.attach(listener)
    }

    /// Removes a listener; returns `false` if it was not attached here.
    pub fn detach(&self, id: ListenerId) -> bool {
        self.listeners.detach(id)
    }

    /// Removes every listener.
    pub fn clear_listeners(&self) {
        self.listeners.clear();
    }

    /// Calls every listener with `payload` if enabled.
    pub fn activate_with(&self, payload: &T) {
        if !self.enabled.load(AtomicOrdering::Acquire) {
            tracing::trace!(event = %self.name, "activation suppressed: disabled");
            return;
        }
        let called = self.listeners.emit(&self.name, payload);
        tracing::trace!(
            event = %self.name,
            payload = std::any::type_name::<T>(),
            listeners = called,
            "activated"
        );
    }

    /// Recovers a `TypedEvent<T>` from a shared handle.
    ///
    /// Returns `None` when the channel does not declare payload `T`.
    pub fn downcast(event: &EventRef) -> Option<Arc<Self>> {
        if !event.payload_kind().accepts::<T>() {
            return None;
        }
        Arc::clone(event).into_any().downcast::<Self>().ok()
    }
}

impl<T> Channel for TypedEvent<T>
where
    T: Default + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(AtomicOrdering::Acquire)
    }

    fn enable(&self) {
        self.enabled.store(true, AtomicOrdering::Release);
    }

    fn disable(&self) {
        self.enabled.store(false, AtomicOrdering::Release);
    }

    fn activate(&self) {
        self.activate_with(&T::default());
    }

    fn payload_kind(&self) -> PayloadKind {
        PayloadKind::of::<T>()
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl<T> fmt::Debug for TypedEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedEvent")
            .field("name", &self.name)
            .field("payload", &std::any::type_name::<T>())
            .field("enabled", &self.enabled.load(AtomicOrdering::Acquire))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::events::Event;

    fn recorded<T: Clone + Send + Sync + 'static>(ev: &TypedEvent<T>) -> Arc<Mutex<Vec<T>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        ev.subscribe(move |v: &T| s.lock().unwrap().push(v.clone()));
        seen
    }

    #[test]
    fn test_activate_without_payload_uses_default() {
        let ev = TypedEvent::<String>::new("Renamed");
        let seen = recorded(&ev);

        ev.activate();
        ev.activate_with(&"main".to_string());

        assert_eq!(*seen.lock().unwrap(), vec![String::new(), "main".to_string()]);
    }

    #[test]
    fn test_disabled_typed_is_silent() {
        let ev = TypedEvent::<i32>::new("Scored");
        let seen = recorded(&ev);

        ev.disable();
        ev.activate_with(&5);
        ev.activate();
        assert!(seen.lock().unwrap().is_empty());

        ev.enable();
        ev.activate_with(&5);
        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[test]
    fn test_downcast_by_declared_type() {
        let ints: EventRef = TypedEvent::<i32>::arc("Ints");
        let plain: EventRef = Event::arc("Plain");

        assert!(TypedEvent::<i32>::downcast(&ints).is_some());
        assert!(TypedEvent::<i64>::downcast(&ints).is_none());
        assert!(TypedEvent::<i32>::downcast(&plain).is_none());
    }

    #[test]
    fn test_downcast_shares_listeners() {
        let ev = TypedEvent::<i32>::arc("Ints");
        let seen = recorded(&ev);
        let handle: EventRef = ev.clone();

        let typed = TypedEvent::<i32>::downcast(&handle).unwrap();
        typed.activate_with(&9);

        assert!(Arc::ptr_eq(&typed, &ev));
        assert_eq!(*seen.lock().unwrap(), vec![9]);
    }
}
