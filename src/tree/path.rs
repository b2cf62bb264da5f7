//! # Registry path parsing.
//!
//! An event path is a `group_separator`-delimited list of segments whose last
//! segment names a `group:event` pair:
//!
//! ```text
//! "A/B/C:D"  ──► groups = ["A", "B"], group = "C", event = "D"
//!                resolved as Root → A → B → (C → event D)
//! "UI:Click" ──► groups = [],         group = "UI", event = "Click"
//! ```
//!
//! A path therefore always ends in a subgroup of the last navigated group; an
//! event sitting directly in the root cannot be addressed.
//!
//! Group paths (used by [`Registry::group`](crate::Registry::group)) contain
//! only group segments; the empty string addresses the root itself.

use crate::config::RegistryConfig;
use crate::error::{EventError, Result};

/// Parsed `seg/seg/.../group:event` address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPath {
    groups: Vec<String>,
    group: String,
    event: String,
}

impl EventPath {
    /// Parses `path` with the separators of `cfg`.
    ///
    /// # Example
    /// ```
    /// use eventree::{EventPath, RegistryConfig};
    ///
    /// let p = EventPath::parse("UI/Buttons:Click", &RegistryConfig::default()).unwrap();
    /// assert_eq!(p.groups(), ["UI".to_string()]);
    /// assert_eq!(p.group(), "Buttons");
    /// assert_eq!(p.event(), "Click");
    /// ```
    pub fn parse(path: &str, cfg: &RegistryConfig) -> Result<Self> {
        if path.is_empty() {
            return Err(malformed(path, "path is empty"));
        }

        let mut segments: Vec<&str> = path.split(cfg.group_separator).collect();
        let last = segments.pop().unwrap_or_default();

        let groups = segments
            .into_iter()
            .map(|seg| check_group_segment(path, seg))
            .collect::<Result<Vec<String>>>()?;

        let mut halves = last.split(cfg.event_separator);
        let (group, event) = match (halves.next(), halves.next(), halves.next()) {
            (Some(group), Some(event), None) => (group, event),
            (_, None, _) => {
                return Err(malformed(path, "final segment has no event separator"));
            }
            _ => {
                return Err(malformed(path, "final segment has more than one event separator"));
            }
        };
        if group.is_empty() {
            return Err(malformed(path, "final segment has an empty group name"));
        }
        if event.is_empty() {
            return Err(malformed(path, "final segment has an empty event name"));
        }

        Ok(Self {
            groups,
            group: group.to_string(),
            event: event.to_string(),
        })
    }

    /// Groups navigated from the root before the final segment.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Group named in the final segment (holds the event).
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Event named in the final segment.
    pub fn event(&self) -> &str {
        &self.event
    }
}

/// Splits a path made only of group segments; `""` yields no segments (the root).
pub(crate) fn parse_group_path(path: &str, cfg: &RegistryConfig) -> Result<Vec<String>> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    path.split(cfg.group_separator)
        .map(|seg| check_group_segment(path, seg))
        .collect()
}

/// Only the final segment is split on the event separator; group segments are
/// plain names and may contain it.
fn check_group_segment(path: &str, seg: &str) -> Result<String> {
    if seg.is_empty() {
        return Err(malformed(path, "empty group segment"));
    }
    Ok(seg.to_string())
}

fn malformed(path: &str, reason: &'static str) -> EventError {
    EventError::PathFormat {
        path: path.to_string(),
        reason,
    }
}
