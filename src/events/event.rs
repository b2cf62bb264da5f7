//! # Untyped event channel.
//!
//! [`Event`] is the payload-free channel variant: listeners are plain `Fn()`
//! closures (or [`Listen<()>`] implementors).
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use eventree::{Channel, Event};
//!
//! let clicks = Arc::new(AtomicUsize::new(0));
//! let click = Event::arc("Click");
//!
//! let c = clicks.clone();
//! click.subscribe(move || { c.fetch_add(1, Ordering::Relaxed); });
//!
//! click.activate();
//! click.disable();
//! click.activate(); // gated: no listener runs
//! click.enable();
//! click.activate();
//!
//! assert_eq!(clicks.load(Ordering::Relaxed), 2);
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use crate::events::channel::{Channel, PayloadKind};
use crate::listeners::{FnListener, Listen, ListenerId, ListenerSet};

/// Named channel whose listeners take no payload.
pub struct Event {
    name: Cow<'static, str>,
    enabled: AtomicBool,
    listeners: ListenerSet<()>,
}

impl Event {
    /// Creates an enabled channel with no listeners.
    ///
    /// Prefer [`Event::arc`] when the channel goes straight into a group.
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
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners
            .attach(Arc::new(FnListener::new(move |_: &()| f())))
    }

    /// Attaches a listener object.
    pub fn attach(&self, listener: Arc<dyn Listen<()>>) -> ListenerId {
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
}

impl Channel for Event {
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
        if !self.is_enabled() {
            tracing::trace!(event = %self.name, "activation suppressed: disabled");
            return;
        }
        let called = self.listeners.emit(&self.name, &());
        tracing::trace!(event = %self.name, listeners = called, "activated");
    }

    fn payload_kind(&self) -> PayloadKind {
        PayloadKind::Unit
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("enabled", &self.is_enabled())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
