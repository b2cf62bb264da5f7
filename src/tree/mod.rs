//! Event tree: groups, path parsing and the root registry.
//!
//! Internal modules:
//! - [`group`]: the composite node owning child events and child groups;
//! - [`path`]: parsing of `seg/seg/.../group:event` addresses;
//! - [`registry`]: the root group plus path resolution and the global instance.

mod group;
mod path;
mod registry;

pub use group::{EventGroup, GroupId};
pub use path::EventPath;
pub use registry::Registry;
