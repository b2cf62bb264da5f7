//! # Listener trait.
//!
//! Provides [`Listen`] the extension point for plugging callbacks into a channel.
//!
//! Each listener:
//! - is invoked **synchronously** on the caller's thread, inside `activate()`;
//! - sees every activation of the channel it is attached to, in registration order;
//! - receives the channel name and a borrowed payload (`()` for untyped channels).
//!
//! Closures are the common case and do not need this trait: use
//! [`Event::subscribe`](crate::Event::subscribe) or
//! [`TypedEvent::subscribe`](crate::TypedEvent::subscribe). Implement `Listen`
//! when the callback carries state or wants a stable name in logs.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use eventree::{Listen, TypedEvent};
//!
//! #[derive(Default)]
//! struct Total(AtomicU64);
//!
//! impl Listen<u64> for Total {
//!     fn on_event(&self, _event: &str, payload: &u64) {
//!         self.0.fetch_add(*payload, Ordering::Relaxed);
//!     }
//!
//!     fn name(&self) -> &'static str { "total" }
//! }
//!
//! let total = Arc::new(Total::default());
//! let ev = TypedEvent::<u64>::new("Scored");
//! ev.attach(total.clone());
//! ev.activate_with(&3);
//! ev.activate_with(&4);
//! assert_eq!(total.0.load(Ordering::Relaxed), 7);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Global sequence counter for listener ids.
static LISTENER_SEQ: AtomicU64 = AtomicU64::new(1);

/// Callback attached to a channel carrying payloads of type `T`.
///
/// ### Implementation requirements
/// - Do not block for long: the activating caller waits for every listener.
/// - Do not activate the channel you are attached to from inside `on_event`
///   unless you bound the recursion yourself.
pub trait Listen<T>: Send + Sync + 'static {
    /// Handles one activation.
    fn on_event(&self, event: &str, payload: &T);

    /// Returns the listener name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Handle returned by `attach`/`subscribe`; pass it to `detach` to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next() -> Self {
        Self(LISTENER_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Closure-backed listener.
pub(crate) struct FnListener<F> {
    f: F,
}

impl<F> FnListener<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Listen<T> for FnListener<F>
where
    F: Fn(&T) + Send + Sync + 'static,
{
    fn on_event(&self, _event: &str, payload: &T) {
        (self.f)(payload)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}
