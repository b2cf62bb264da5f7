//! # Registry configuration.
//!
//! Provides [`RegistryConfig`] the settings that shape a [`Registry`](crate::Registry):
//! the root group's name and the two separators of the path syntax.
//!
//! ## Path syntax
//! ```text
//!   "UI/Panels/Buttons:Click"
//!    └┬┘ └─┬──┘ └──┬──┘ └─┬─┘
//!     │    │       │      └─ event (after `event_separator`)
//!     │    │       └──────── group holding the event
//!     └────┴──────────────── nested groups (split on `group_separator`)
//! ```

use crate::error::{EventError, Result};

/// Configuration for a [`Registry`](crate::Registry).
///
/// ## Field semantics
/// - `root_name`: name of the root group (`"Root"` by default)
/// - `group_separator`: splits path segments (`'/'` by default)
/// - `event_separator`: splits the last segment into `group:event` (`':'` by default)
///
/// All fields are public; call [`RegistryConfig::validate`] after editing them
/// by hand (the registry constructors do it for you).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Name given to the root group.
    pub root_name: String,

    /// Separator between group segments of a path.
    pub group_separator: char,

    /// Separator between the group and event halves of a path's last segment.
    pub event_separator: char,
}

impl RegistryConfig {
    /// Checks that the separators can produce an unambiguous path.
    ///
    /// Both separators must differ and neither may be whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.group_separator == self.event_separator {
            return Err(self.invalid("group and event separators must differ"));
        }
        if self.group_separator.is_whitespace() || self.event_separator.is_whitespace() {
            return Err(self.invalid("separators must not be whitespace"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &'static str) -> EventError {
        EventError::InvalidConfig {
            reason,
            group_separator: self.group_separator,
            event_separator: self.event_separator,
        }
    }
}

impl Default for RegistryConfig {
    /// Default configuration:
    ///
    /// - `root_name = "Root"`
    /// - `group_separator = '/'`
    /// - `event_separator = ':'`
    fn default() -> Self {
        Self {
            root_name: "Root".to_string(),
            group_separator: '/',
            event_separator: ':',
        }
    }
}
