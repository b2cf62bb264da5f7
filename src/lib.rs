//! # eventree
//!
//! **eventree** is an in-process, hierarchical event-dispatch registry.
//!
//! Named event channels (optionally typed over a payload) live in named groups
//! that nest arbitrarily. A [`Registry`] owns the root group and resolves
//! slash-delimited paths to groups and channels. All dispatch is synchronous:
//! `activate()` returns once every listener has run.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!                     ┌───────────────────────────────┐
//!  "UI/Buttons:Click" │ Registry                      │
//!  ─────────────────► │  - RegistryConfig (separators)│
//!                     │  - EventPath parser           │
//!                     └───────────────┬───────────────┘
//!                                     ▼
//!                     ┌───────────────────────────────┐
//!                     │ EventGroup "Root"             │
//!                     │  events: name → EventRef      │
//!                     │  groups: name → EventGroup ───┼──► EventGroup "UI" ──► ...
//!                     └───────────────┬───────────────┘
//!                                     ▼
//!                     ┌───────────────────────────────┐
//!                     │ Channel (Event / TypedEvent)  │
//!                     │  - enabled gate               │
//!                     │  - ListenerSet (ordered)      │
//!                     └───────────────┬───────────────┘
//!                           ┌─────────┼─────────┐
//!                           ▼         ▼         ▼
//!                         Fn()    Fn(&T)   dyn Listen<T>
//! ```
//!
//! ### Cascade
//! ```text
//! group.activate()
//!   ├─► every child event: activate()          (disabled channels stay silent)
//!   └─► every subgroup:    activate()          (recursive)
//!
//! group.activate_with(&payload: T)
//!   ├─► child event declaring T: activate_with(&payload)
//!   ├─► any other child event:   activate()    (T::default() for typed ones)
//!   └─► every subgroup:          activate()    (payload stops here)
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                      |
//! |-------------------|----------------------------------------------------------|-----------------------------------------|
//! | **Channels**      | Named, enable-gated broadcast points.                    | [`Event`], [`TypedEvent`], [`Channel`]  |
//! | **Listeners**     | Attach/detach callbacks, closures or objects.            | [`Listen`], [`ListenerId`]              |
//! | **Groups**        | Composite nodes with independent name namespaces.        | [`EventGroup`], [`GroupId`]             |
//! | **Registry**      | Root group plus `a/b/group:event` path resolution.       | [`Registry`], [`EventPath`]             |
//! | **Errors**        | Typed errors for duplicates, misses and bad paths.       | [`EventError`]                          |
//! | **Configuration** | Root name and path separators.                           | [`RegistryConfig`]                      |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] listener _(demo/reference only)_.
//!
//! Structural changes are reported through `tracing` at `debug` level and
//! activations at `trace` level; install any subscriber to see them.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use eventree::{Event, EventGroup, Registry, TypedEvent};
//!
//! fn main() -> Result<(), eventree::EventError> {
//!     let mut registry = Registry::new();
//!
//!     let click = Event::arc("Click");
//!     let volume = TypedEvent::<u32>::arc("Volume");
//!
//!     let last = Arc::new(AtomicU32::new(0));
//!     let l = last.clone();
//!     volume.subscribe(move |v: &u32| l.store(*v, Ordering::Relaxed));
//!     click.subscribe(|| println!("clicked"));
//!
//!     let ui = registry.root_mut().add_group(EventGroup::new("UI"))?;
//!     ui.add_group(EventGroup::new("Buttons"))?.add_event(click)?;
//!     ui.add_group(EventGroup::new("Audio"))?.add_event(volume)?;
//!
//!     registry.activate("UI/Buttons:Click")?;
//!     registry.activate_with("UI/Audio:Volume", &11u32)?;
//!     assert_eq!(last.load(Ordering::Relaxed), 11);
//!
//!     // Cascade from "UI": every channel below fires (Volume with u32::default()).
//!     registry.group("UI")?.activate();
//!     assert_eq!(last.load(Ordering::Relaxed), 0);
//!     Ok(())
//! }
//! ```
mod config;
mod error;
mod events;
mod listeners;
mod tree;

// ---- Public re-exports ----

pub use config::RegistryConfig;
pub use error::{EventError, NodeKind, Result};
pub use events::{Channel, Event, EventRef, PayloadKind, TypedEvent};
pub use listeners::{Listen, ListenerId, ListenerRef};
pub use tree::{EventGroup, EventPath, GroupId, Registry};

// Optional: expose a simple built-in printing listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
