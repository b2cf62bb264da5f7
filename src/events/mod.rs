//! Event channels: the trait, both variants and payload tagging.
//!
//! ## Contents
//! - [`Channel`] object-safe channel interface; groups store [`EventRef`] (`Arc<dyn Channel>`)
//! - [`Event`] untyped channel (listeners take no payload)
//! - [`TypedEvent`] channel typed over one payload type
//! - [`PayloadKind`] declared payload tag used for typed dispatch
//!
//! ## Quick reference
//! ```text
//! Event::arc("Click")            ── activate()          ──► Fn()
//! TypedEvent::<u32>::arc("Hit")  ── activate_with(&42)  ──► Fn(&u32)
//!                                └─ activate()          ──► Fn(&u32) with u32::default()
//! ```

mod channel;
mod event;
mod typed;

pub use channel::{Channel, EventRef, PayloadKind};
pub use event::Event;
pub use typed::TypedEvent;
