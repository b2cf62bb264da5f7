//! # Channel listeners.
//!
//! This module provides the [`Listen`] trait and the ordered fan-out used by
//! every channel to call its listeners.
//!
//! ## Architecture
//! ```text
//!   Event::activate() / TypedEvent::activate_with(&T)
//!        │   (enabled?)
//!        ▼
//!   ListenerSet::emit(name, &payload)
//!        ├──► closure listener   (Event::subscribe / TypedEvent::subscribe)
//!        ├──► Arc<dyn Listen<T>> (attach)
//!        └──► LogWriter          (feature = "logging")
//! ```

mod listener;
#[cfg(feature = "logging")]
mod log;
mod set;

pub use listener::{Listen, ListenerId};
#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use set::ListenerRef;

pub(crate) use listener::FnListener;
pub(crate) use set::ListenerSet;
