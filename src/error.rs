//! Error types raised by groups and path resolution.
//!
//! A single enum, [`EventError`], covers every failure in the crate:
//!
//! - [`EventError::DuplicateName`]: `add_*` hit a name already present in the
//!   relevant namespace (events and subgroups are checked independently).
//! - [`EventError::EventNotFound`]: an event lookup missed.
//! - [`EventError::GroupNotFound`]: a subgroup lookup missed (also raised by
//!   path resolution for any unresolvable group segment).
//! - [`EventError::PathFormat`]: a registry path could not be parsed.
//! - [`EventError::InvalidConfig`]: a [`RegistryConfig`](crate::RegistryConfig)
//!   failed validation.
//!
//! Disabling a channel or a group is never an error: dispatch is silently
//! suppressed instead.
//!
//! Like the rest of the crate the enum provides `as_label`/`as_message` helpers
//! for logs.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EventError>;

/// Which namespace of a group a name collided in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The child-event mapping.
    Event,
    /// The child-group mapping.
    Group,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Event => f.write_str("event"),
            NodeKind::Group => f.write_str("group"),
        }
    }
}

/// # Errors produced by the event tree.
///
/// All of them are programmer-visible misconfiguration, not transient faults:
/// nothing in the crate retries or recovers locally.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// A child with this name already exists in the group's namespace for `kind`.
    #[error("group {group:?} already has {kind} {name:?}")]
    DuplicateName {
        /// Name of the group that rejected the insert.
        group: String,
        /// The conflicting child name.
        name: String,
        /// Namespace the collision happened in.
        kind: NodeKind,
    },

    /// The group has no child event with this name.
    #[error("event {event:?} not found in group {group:?}")]
    EventNotFound {
        /// Name of the group that was searched.
        group: String,
        /// Requested event name.
        event: String,
    },

    /// The group has no subgroup with this name.
    #[error("group {name:?} not found in group {group:?}")]
    GroupNotFound {
        /// Name of the group that was searched.
        group: String,
        /// Requested (offending) subgroup name.
        name: String,
    },

    /// A registry path is malformed.
    #[error("malformed path {path:?}: {reason}")]
    PathFormat {
        /// The path as supplied by the caller.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A registry configuration was rejected by validation.
    #[error("invalid config (separators {group_separator:?} {event_separator:?}): {reason}")]
    InvalidConfig {
        /// What is wrong with it.
        reason: &'static str,
        /// The configured group separator.
        group_separator: char,
        /// The configured event separator.
        event_separator: char,
    },
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use eventree::EventError;
    ///
    /// let err = EventError::EventNotFound { group: "UI".into(), event: "Click".into() };
    /// assert_eq!(err.as_label(), "event_not_found");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::DuplicateName { .. } => "duplicate_name",
            EventError::EventNotFound { .. } => "event_not_found",
            EventError::GroupNotFound { .. } => "group_not_found",
            EventError::PathFormat { .. } => "path_format",
            EventError::InvalidConfig { .. } => "invalid_config",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EventError::DuplicateName { group, name, kind } => {
                format!("duplicate {kind} name={name} group={group}")
            }
            EventError::EventNotFound { group, event } => {
                format!("missing event={event} group={group}")
            }
            EventError::GroupNotFound { group, name } => {
                format!("missing group={name} parent={group}")
            }
            EventError::PathFormat { path, reason } => format!("bad path={path}: {reason}"),
            EventError::InvalidConfig {
                reason,
                group_separator,
                event_separator,
            } => format!(
                "bad config group_separator={group_separator:?} event_separator={event_separator:?}: {reason}"
            ),
        }
    }

    /// True for the two lookup misses ([`EventNotFound`](Self::EventNotFound) and
    /// [`GroupNotFound`](Self::GroupNotFound)).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EventError::EventNotFound { .. } | EventError::GroupNotFound { .. }
        )
    }
}
