//! # Channel trait and payload tagging.
//!
//! [`Channel`] is the object-safe interface shared by [`Event`](crate::Event)
//! (no payload) and [`TypedEvent<T>`](crate::TypedEvent). Groups store channels
//! as [`EventRef`] (`Arc<dyn Channel>`), so one group can hold both variants.
//!
//! Every channel declares a [`PayloadKind`]. Typed dispatch through a group
//! compares the declared kind with the payload's kind before downcasting, so a
//! mismatch is an explicit comparison rather than a failed runtime check.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Shared handle to a channel of either variant.
pub type EventRef = Arc<dyn Channel>;

/// Declared payload of a channel.
#[derive(Clone, Copy)]
pub enum PayloadKind {
    /// Untyped channel: listeners take no payload.
    Unit,
    /// Channel typed over one payload type.
    Typed {
        /// Identity used for matching.
        type_id: TypeId,
        /// Human-readable name, for logs only.
        type_name: &'static str,
    },
}

impl PayloadKind {
    /// Kind declared by a channel typed over `T`.
    pub fn of<T: 'static>() -> Self {
        PayloadKind::Typed {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// True if a payload of type `T` can be delivered to this kind as-is.
    pub fn accepts<T: 'static>(&self) -> bool {
        *self == Self::of::<T>()
    }

    /// Type name for logs (`"()"` for untyped channels).
    pub fn type_name(&self) -> &'static str {
        match self {
            PayloadKind::Unit => "()",
            PayloadKind::Typed { type_name, .. } => type_name,
        }
    }
}

impl PartialEq for PayloadKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PayloadKind::Unit, PayloadKind::Unit) => true,
            (PayloadKind::Typed { type_id: a, .. }, PayloadKind::Typed { type_id: b, .. }) => {
                a == b
            }
            _ => false,
        }
    }
}

impl Eq for PayloadKind {}

impl fmt::Debug for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Unit => f.write_str("Unit"),
            PayloadKind::Typed { type_name, .. } => write!(f, "Typed({type_name})"),
        }
    }
}

/// # Named, enable-gated broadcast point.
///
/// A channel has two externally visible states, enabled and disabled.
/// Activating a disabled channel is a silent no-op.
///
/// The name never changes after construction. State lives behind interior
/// mutability so channels can be shared (`Arc`) between a group and the code
/// that attaches listeners to them.
pub trait Channel: Send + Sync + 'static {
    /// Channel name, used as its key inside a group.
    fn name(&self) -> &str;

    /// Current gate state.
    fn is_enabled(&self) -> bool;

    /// Opens the gate.
    fn enable(&self);

    /// Closes the gate; later activations call no listener.
    fn disable(&self);

    /// Calls every listener in registration order if enabled.
    ///
    /// Typed channels deliver their payload type's default value.
    fn activate(&self);

    /// Payload type declared at construction.
    fn payload_kind(&self) -> PayloadKind;

    /// Number of attached listeners.
    fn listener_count(&self) -> usize;

    /// Upcast used by typed lookups to recover the concrete channel.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl fmt::Debug for dyn Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name())
            .field("enabled", &self.is_enabled())
            .field("payload", &self.payload_kind())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
