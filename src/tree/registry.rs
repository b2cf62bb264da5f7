//! # Registry - root group plus path resolution.
//!
//! [`Registry`] owns the root [`EventGroup`] and resolves slash-delimited paths
//! against it.
//!
//! ## Architecture
//! ```text
//! registry.event("UI/Buttons:Click")
//!   └─► EventPath::parse      → groups=["UI"], group="Buttons", event="Click"
//!         └─► root.get_group("UI")            (GroupNotFound on miss)
//!               └─► .get_group("Buttons")     (GroupNotFound on miss)
//!                     └─► .get_event("Click") (EventNotFound on miss)
//! ```
//!
//! ## Rules
//! - Registries are plain values: build one per application context with
//!   [`Registry::new`] and pass it around.
//! - [`Registry::global`] offers a single lazily created process-wide instance
//!   behind a mutex; [`Registry::reset_global`] swaps in a fresh root (tests).
//! - Resolution never runs a listener before it succeeds: a failing path
//!   returns its error with nothing activated.
//! - Writes through a path replace or insert (no duplicate check), exactly as
//!   [`EventGroup::set_event`].

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::events::{EventRef, TypedEvent};
use crate::tree::group::EventGroup;
use crate::tree::path::{EventPath, parse_group_path};

/// Process-wide instance used by [`Registry::global`].
static GLOBAL: OnceLock<Mutex<Registry>> = OnceLock::new();

/// Root event group with path-addressed access.
///
/// ## Example
/// ```rust
/// use eventree::{Channel, Event, EventGroup, Registry};
///
/// let mut registry = Registry::new();
/// registry
///     .root_mut()
///     .add_group(EventGroup::new("UI"))?
///     .add_group(EventGroup::new("Buttons"))?
///     .add_event(Event::arc("Click"))?;
///
/// let click = registry.event("UI/Buttons:Click")?;
/// assert_eq!(click.name(), "Click");
/// assert!(registry.event("UI/Buttons:Missing").is_err());
/// # Ok::<(), eventree::EventError>(())
/// ```
#[derive(Debug)]
pub struct Registry {
    config: RegistryConfig,
    root: EventGroup,
}

impl Registry {
    /// Creates a registry with the default configuration (root `"Root"`, `/` and `:`).
    pub fn new() -> Self {
        let config = RegistryConfig::default();
        let root = EventGroup::new(config.root_name.clone());
        Self { config, root }
    }

    /// Creates a registry with a custom configuration.
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        let root = EventGroup::new(config.root_name.clone());
        Ok(Self { config, root })
    }

    /// Locks and returns the process-wide registry, creating it on first use.
    ///
    /// Listeners run while the guard is held: a listener fired through the
    /// global registry must not call `global()` itself.
    pub fn global() -> MutexGuard<'static, Registry> {
        GLOBAL
            .get_or_init(|| Mutex::new(Registry::new()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the process-wide registry with an empty one.
    pub fn reset_global() {
        *Self::global() = Registry::new();
        tracing::debug!("global registry reset");
    }

    /// Configuration the registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The root group.
    pub fn root(&self) -> &EventGroup {
        &self.root
    }

    /// Mutable access to the root group, for building the tree.
    pub fn root_mut(&mut self) -> &mut EventGroup {
        &mut self.root
    }

    /// Resolves an event path (`"A/B/C:D"`) to its channel.
    pub fn event(&self, path: &str) -> Result<EventRef> {
        self.resolve(path)
            .and_then(|(holder, parsed)| holder.get_event(parsed.event()))
            .inspect_err(|e| log_miss(path, e))
    }

    /// Resolves an event path to a typed channel.
    ///
    /// `Ok(None)` means the event exists but does not declare payload `T`.
    pub fn typed_event<T>(&self, path: &str) -> Result<Option<Arc<TypedEvent<T>>>>
    where
        T: Send + Sync + 'static,
    {
        self.event(path).map(|ev| TypedEvent::<T>::downcast(&ev))
    }

    /// Stores `event` at `path`, replacing whatever was there.
    ///
    /// Every group on the path must exist. Returns the replaced channel, if any.
    pub fn set_event(&mut self, path: &str, event: EventRef) -> Result<Option<EventRef>> {
        let parsed = EventPath::parse(path, &self.config).inspect_err(|e| log_miss(path, e))?;
        let holder = self
            .walk_mut(parsed.groups())
            .and_then(|g| g.get_group_mut(parsed.group()))
            .inspect_err(|e| log_miss(path, e))?;
        Ok(holder.set_event(parsed.event(), event))
    }

    /// Resolves a path made only of group segments (`"UI/Buttons"`); `""` is the root.
    pub fn group(&self, path: &str) -> Result<&EventGroup> {
        let segments = parse_group_path(path, &self.config)?;
        self.walk(&segments).inspect_err(|e| log_miss(path, e))
    }

    /// Mutable variant of [`group`](Self::group).
    pub fn group_mut(&mut self, path: &str) -> Result<&mut EventGroup> {
        let segments = parse_group_path(path, &self.config)?;
        self.walk_mut(&segments).inspect_err(|e| log_miss(path, e))
    }

    /// Resolves `path` and activates the channel.
    pub fn activate(&self, path: &str) -> Result<()> {
        self.event(path)?.activate();
        Ok(())
    }

    /// Resolves `path` and activates the channel with `payload`.
    ///
    /// Follows the group cascade rule: a channel that does not declare payload
    /// `T` gets a plain activation instead.
    pub fn activate_with<T>(&self, path: &str, payload: &T) -> Result<()>
    where
        T: Send + Sync + 'static,
    {
        let event = self.event(path)?;
        match TypedEvent::<T>::downcast(&event) {
            Some(typed) => typed.activate_with(payload),
            None => event.activate(),
        }
        Ok(())
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    /// Parses an event path and returns the group that holds the event.
    fn resolve(&self, path: &str) -> Result<(&EventGroup, EventPath)> {
        let parsed = EventPath::parse(path, &self.config)?;
        let holder = self.walk(parsed.groups())?.get_group(parsed.group())?;
        Ok((holder, parsed))
    }

    fn walk(&self, segments: &[String]) -> Result<&EventGroup> {
        segments
            .iter()
            .try_fold(&self.root, |group, seg| group.get_group(seg))
    }

    fn walk_mut(&mut self, segments: &[String]) -> Result<&mut EventGroup> {
        segments
            .iter()
            .try_fold(&mut self.root, |group, seg| group.get_group_mut(seg))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn log_miss(path: &str, err: &crate::error::EventError) {
    tracing::debug!(path, error = %err, label = err.as_label(), "path resolution failed");
}
