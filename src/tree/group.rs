//! # Event group - named composite node of the event tree.
//!
//! An [`EventGroup`] owns two independent namespaces:
//! - child **events** (`name → EventRef`), and
//! - child **groups** (`name → EventGroup`).
//!
//! An event and a subgroup may share a name; names are unique only inside
//! their own namespace.
//!
//! ## Architecture
//! ```text
//! EventGroup "Root"
//!   ├─ events: { "Tick" → Event, "Resize" → TypedEvent<(u32, u32)> }
//!   └─ groups: { "UI" → EventGroup "UI"
//!                         ├─ events: { ... }
//!                         └─ groups: { "Buttons" → ... } }
//! ```
//!
//! ## Rules
//! - A group owns its subgroups by value: the tree cannot contain cycles, and
//!   dropping a group drops its subtree unless a child was taken out first
//!   ([`EventGroup::take_group`]).
//! - Channels are shared handles ([`EventRef`]); the group holds one clone,
//!   callers may keep others to attach listeners.
//! - `add_*` rejects duplicates and leaves the mapping unchanged;
//!   [`EventGroup::set_event`] replaces or inserts without a check.
//! - [`EventGroup::activate`] cascades to every child event, then every
//!   subgroup. The group's own `enabled` flag is stored and settable but is
//!   **not** consulted by the cascade; only channel gates suppress dispatch.
//! - Batch adds stop at the first duplicate; earlier items stay added.

use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::error::{EventError, NodeKind, Result};
use crate::events::{Channel, EventRef, TypedEvent};

/// Global sequence counter for group identities.
static GROUP_SEQ: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a group, used for removal by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// Named node holding child events and child groups.
pub struct EventGroup {
    id: GroupId,
    name: Cow<'static, str>,
    enabled: bool,
    events: HashMap<String, EventRef>,
    groups: HashMap<String, EventGroup>,
}

impl EventGroup {
    /// Creates an empty, enabled group.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: GroupId(GROUP_SEQ.fetch_add(1, AtomicOrdering::Relaxed)),
            name: name.into(),
            enabled: true,
            events: HashMap::new(),
            groups: HashMap::new(),
        }
    }

    /// Identity of this group; stays the same when the group is moved into a parent.
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Name of the group, as given to [`new`](Self::new).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value of the group flag (not consulted by the cascade).
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the group flag.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Clears the group flag; child channels still fire.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    // ---------------------------
    // Events
    // ---------------------------

    /// Adds a channel under its own name.
    ///
    /// Fails with [`EventError::DuplicateName`] if an event with that name exists.
    pub fn add_event(&mut self, event: EventRef) -> Result<()> {
        match self.events.entry(event.name().to_string()) {
            Entry::Occupied(_) => Err(EventError::DuplicateName {
                group: self.name.to_string(),
                name: event.name().to_string(),
                kind: NodeKind::Event,
            }),
            Entry::Vacant(slot) => {
                tracing::debug!(group = %self.name, event = event.name(), "event added");
                slot.insert(event);
                Ok(())
            }
        }
    }

    /// Adds channels in order, stopping at the first duplicate.
    ///
    /// Channels added before the failing one stay in the group.
    pub fn add_events<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = EventRef>,
    {
        for event in events {
            self.add_event(event)?;
        }
        Ok(())
    }

    /// Returns the child event `name`.
    pub fn get_event(&self, name: &str) -> Result<EventRef> {
        self.events
            .get(name)
            .cloned()
            .ok_or_else(|| EventError::EventNotFound {
                group: self.name.to_string(),
                event: name.to_string(),
            })
    }

    /// Returns the child event `name` as a typed channel.
    ///
    /// `Ok(None)` means the event exists but does not declare payload `T`.
    pub fn get_typed_event<T>(&self, name: &str) -> Result<Option<Arc<TypedEvent<T>>>>
    where
        T: Send + Sync + 'static,
    {
        let event = self.get_event(name)?;
        Ok(TypedEvent::<T>::downcast(&event))
    }

    /// Indexer read: same as [`get_event`](Self::get_event).
    pub fn event(&self, name: &str) -> Result<EventRef> {
        self.get_event(name)
    }

    /// Indexer write: stores `event` under `name`, replacing any previous one.
    ///
    /// No duplicate check is made. Returns the replaced channel, if any.
    ///
    /// `name` becomes the map key and may differ from `event.name()`. Every
    /// name-based operation on the group (`get_event`, `remove_event_by_name`,
    /// `take_event`, `contains_event`, `event_names`) uses the key.
    pub fn set_event(&mut self, name: impl Into<String>, event: EventRef) -> Option<EventRef> {
        let name = name.into();
        tracing::debug!(group = %self.name, event = %name, "event set");
        self.events.insert(name, event)
    }

    /// Removes the child event that is the same channel as `event`.
    ///
    /// Identity is pointer equality of the shared handle, not name equality.
    pub fn remove_event<C>(&mut self, event: &Arc<C>) -> bool
    where
        C: Channel + ?Sized,
    {
        let target = Arc::as_ptr(event);
        let key = self
            .events
            .iter()
            .find(|(_, held)| std::ptr::addr_eq(Arc::as_ptr(*held), target))
            .map(|(key, _)| key.clone());
        match key {
            Some(key) => self.remove_event_by_name(&key),
            None => false,
        }
    }

    /// Removes the child event stored under key `name`; `false` if there was none.
    ///
    /// The key is the name the event was added or [`set`](Self::set_event) under,
    /// not necessarily the channel's own [`name`](Channel::name).
    pub fn remove_event_by_name(&mut self, name: &str) -> bool {
        self.take_event(name).is_some()
    }

    /// Detaches and returns the child event `name`.
    pub fn take_event(&mut self, name: &str) -> Option<EventRef> {
        let taken = self.events.remove(name);
        if taken.is_some() {
            tracing::debug!(group = %self.name, event = name, "event removed");
        }
        taken
    }

    /// True if a child event is stored under `name`.
    pub fn contains_event(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    /// Sorted names of the child events.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of child events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Iterates over the child events in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &EventRef> {
        self.events.values()
    }

    // ---------------------------
    // Groups
    // ---------------------------

    /// Adds a subgroup under its own name and returns it for further building.
    ///
    /// Fails with [`EventError::DuplicateName`] if a subgroup with that name exists.
    pub fn add_group(&mut self, group: EventGroup) -> Result<&mut EventGroup> {
        match self.groups.entry(group.name.to_string()) {
            Entry::Occupied(_) => Err(EventError::DuplicateName {
                group: self.name.to_string(),
                name: group.name.to_string(),
                kind: NodeKind::Group,
            }),
            Entry::Vacant(slot) => {
                tracing::debug!(parent = %self.name, group = %group.name, "group added");
                Ok(slot.insert(group))
            }
        }
    }

    /// Adds subgroups in order, stopping at the first duplicate.
    pub fn add_groups<I>(&mut self, groups: I) -> Result<()>
    where
        I: IntoIterator<Item = EventGroup>,
    {
        for group in groups {
            self.add_group(group)?;
        }
        Ok(())
    }

    /// Returns the subgroup `name`.
    pub fn get_group(&self, name: &str) -> Result<&EventGroup> {
        self.groups.get(name).ok_or_else(|| self.group_not_found(name))
    }

    /// Returns the subgroup `name` for mutation.
    pub fn get_group_mut(&mut self, name: &str) -> Result<&mut EventGroup> {
        let parent = &self.name;
        self.groups
            .get_mut(name)
            .ok_or_else(|| EventError::GroupNotFound {
                group: parent.to_string(),
                name: name.to_string(),
            })
    }

    /// Removes the direct subgroup with identity `id`.
    pub fn remove_group(&mut self, id: GroupId) -> bool {
        let key = self
            .groups
            .iter()
            .find(|(_, g)| g.id == id)
            .map(|(key, _)| key.clone());
        match key {
            Some(key) => self.remove_group_by_name(&key),
            None => false,
        }
    }

    /// Removes the subgroup `name` together with its subtree; `false` if there was none.
    pub fn remove_group_by_name(&mut self, name: &str) -> bool {
        self.take_group(name).is_some()
    }

    /// Detaches and returns the subgroup `name` with its subtree intact.
    pub fn take_group(&mut self, name: &str) -> Option<EventGroup> {
        let taken = self.groups.remove(name);
        if taken.is_some() {
            tracing::debug!(parent = %self.name, group = name, "group removed");
        }
        taken
    }

    /// True if a subgroup is stored under `name`.
    pub fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Sorted names of the subgroups.
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of subgroups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Iterates over the subgroups in no particular order.
    pub fn groups(&self) -> impl Iterator<Item = &EventGroup> {
        self.groups.values()
    }

    /// True when the group has neither events nor subgroups.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.groups.is_empty()
    }

    // ---------------------------
    // Cascade
    // ---------------------------

    /// Activates every child event, then cascades into every subgroup.
    ///
    /// Disabled channels stay silent; the group flags along the way are not checked.
    pub fn activate(&self) {
        tracing::trace!(group = %self.name, "cascade");
        for event in self.events.values() {
            event.activate();
        }
        for group in self.groups.values() {
            group.activate();
        }
    }

    /// Typed cascade over direct children.
    ///
    /// Child events declaring payload `T` receive `payload`; every other child
    /// event gets a plain [`Channel::activate`]. Subgroups receive an untyped
    /// [`activate`](Self::activate): the payload does not propagate past this level.
    pub fn activate_with<T>(&self, payload: &T)
    where
        T: Send + Sync + 'static,
    {
        tracing::trace!(
            group = %self.name,
            payload = std::any::type_name::<T>(),
            "typed cascade"
        );
        for event in self.events.values() {
            match TypedEvent::<T>::downcast(event) {
                Some(typed) => typed.activate_with(payload),
                None => event.activate(),
            }
        }
        for group in self.groups.values() {
            group.activate();
        }
    }

    fn group_not_found(&self, name: &str) -> EventError {
        EventError::GroupNotFound {
            group: self.name.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Debug for EventGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventGroup")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("events", &self.event_names())
            .field("groups", &self.groups)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::events::Event;

    fn counted(name: &'static str) -> (Arc<Event>, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let ev = Event::arc(name);
        let h = hits.clone();
        ev.subscribe(move || {
            h.fetch_add(1, AtomicOrdering::Relaxed);
        });
        (ev, hits)
    }

    #[test]
    fn test_event_and_group_namespaces_are_independent() {
        let mut g = EventGroup::new("G");
        g.add_group(EventGroup::new("n1")).unwrap();
        g.add_event(Event::arc("n1")).unwrap();
        g.add_event(Event::arc("n2")).unwrap();

        assert!(g.contains_event("n1"));
        assert!(g.contains_group("n1"));
        assert_eq!(g.event_names(), vec!["n1".to_string(), "n2".to_string()]);
    }

    #[test]
    fn test_duplicate_event_rejected_and_original_kept() {
        let mut g = EventGroup::new("G");
        let first = Event::arc("Click");
        g.add_event(first.clone()).unwrap();

        let err = g.add_event(Event::arc("Click")).unwrap_err();
        assert_eq!(
            err,
            EventError::DuplicateName {
                group: "G".into(),
                name: "Click".into(),
                kind: NodeKind::Event,
            }
        );

        let held = g.get_event("Click").unwrap();
        assert!(std::ptr::addr_eq(Arc::as_ptr(&held), Arc::as_ptr(&first)));
        assert_eq!(g.event_count(), 1);
    }

    #[test]
    fn test_duplicate_group_rejected_and_original_kept() {
        let mut g = EventGroup::new("G");
        let original = EventGroup::new("UI");
        let original_id = original.id();
        g.add_group(original).unwrap();

        let err = g.add_group(EventGroup::new("UI")).unwrap_err();
        assert_eq!(err.as_label(), "duplicate_name");
        assert_eq!(g.get_group("UI").unwrap().id(), original_id);
        assert_eq!(g.group_count(), 1);
    }

    #[test]
    fn test_batch_add_stops_at_duplicate_without_rollback() {
        let mut g = EventGroup::new("G");
        let batch: Vec<EventRef> = vec![
            Event::arc("a"),
            Event::arc("b"),
            Event::arc("a"),
            Event::arc("c"),
        ];

        assert!(g.add_events(batch).is_err());
        assert_eq!(g.event_names(), vec!["a".to_string(), "b".to_string()]);

        let groups = vec![
            EventGroup::new("x"),
            EventGroup::new("x"),
            EventGroup::new("y"),
        ];
        assert!(g.add_groups(groups).is_err());
        assert_eq!(g.group_names(), vec!["x".to_string()]);
    }

    #[test]
    fn test_lookup_misses_are_errors() {
        let g = EventGroup::new("G");
        assert_eq!(
            g.get_event("nope").unwrap_err(),
            EventError::EventNotFound {
                group: "G".into(),
                event: "nope".into()
            }
        );
        assert_eq!(
            g.get_group("nope").unwrap_err(),
            EventError::GroupNotFound {
                group: "G".into(),
                name: "nope".into()
            }
        );
        assert!(g.event("nope").is_err());
    }

    #[test]
    fn test_typed_lookup() {
        let mut g = EventGroup::new("G");
        g.add_event(TypedEvent::<i32>::arc("Ints")).unwrap();
        g.add_event(Event::arc("Plain")).unwrap();

        assert!(g.get_typed_event::<i32>("Ints").unwrap().is_some());
        assert!(g.get_typed_event::<String>("Ints").unwrap().is_none());
        assert!(g.get_typed_event::<i32>("Plain").unwrap().is_none());
        assert!(g.get_typed_event::<i32>("Missing").is_err());
    }

    #[test]
    fn test_remove_event_by_reference() {
        let mut g = EventGroup::new("G");
        let click = Event::arc("Click");
        let stranger = Event::arc("Click");
        g.add_event(click.clone()).unwrap();

        assert!(!g.remove_event(&stranger));
        assert!(g.contains_event("Click"));

        assert!(g.remove_event(&click));
        assert!(matches!(
            g.get_event("Click"),
            Err(EventError::EventNotFound { .. })
        ));
        assert!(!g.remove_event(&click));
    }

    #[test]
    fn test_remove_event_by_dyn_reference() {
        let mut g = EventGroup::new("G");
        g.add_event(TypedEvent::<u8>::arc("Byte")).unwrap();

        let handle = g.get_event("Byte").unwrap();
        assert!(g.remove_event(&handle));
        assert!(g.is_empty());
    }

    #[test]
    fn test_remove_event_by_name() {
        let mut g = EventGroup::new("G");
        g.add_event(Event::arc("Click")).unwrap();
        assert!(!g.remove_event_by_name("Other"));
        assert!(g.remove_event_by_name("Click"));
        assert!(!g.remove_event_by_name("Click"));
    }

    #[test]
    fn test_name_operations_use_map_key() {
        let mut g = EventGroup::new("G");
        let real = Event::arc("Real");
        assert!(g.set_event("alias", real.clone()).is_none());

        assert_eq!(g.event_names(), vec!["alias".to_string()]);
        assert!(!g.contains_event("Real"));
        assert_eq!(g.get_event("alias").unwrap().name(), "Real");

        assert!(!g.remove_event_by_name("Real"));
        assert!(g.remove_event_by_name("alias"));
        assert!(g.is_empty());

        g.set_event("alias", real.clone());
        assert!(g.remove_event(&real));
        assert!(!g.contains_event("alias"));
    }

    #[test]
    fn test_group_removal_touches_group_namespace_only() {
        let mut g = EventGroup::new("G");
        g.add_event(Event::arc("Shared")).unwrap();
        let sub = EventGroup::new("Shared");
        let sub_id = sub.id();
        g.add_group(sub).unwrap();

        assert!(g.remove_group(sub_id));
        assert!(!g.contains_group("Shared"));
        assert!(g.contains_event("Shared"));

        g.add_group(EventGroup::new("Shared")).unwrap();
        assert!(g.remove_group_by_name("Shared"));
        assert!(g.contains_event("Shared"));
        assert!(!g.remove_group_by_name("Shared"));
        assert!(!g.remove_group(sub_id));
    }

    #[test]
    fn test_take_group_keeps_subtree() {
        let mut root = EventGroup::new("Root");
        let (click, hits) = counted("Click");
        root.add_group(EventGroup::new("UI"))
            .unwrap()
            .add_event(click)
            .unwrap();

        let ui = root.take_group("UI").unwrap();
        assert!(root.is_empty());

        let mut other = EventGroup::new("Other");
        other.add_group(ui).unwrap();
        other.activate();
        assert_eq!(hits.load(AtomicOrdering::Relaxed), 1);
    }

    #[test]
    fn test_indexer_round_trip_and_replace() {
        let mut g = EventGroup::new("G");
        let x: EventRef = Event::arc("x");
        assert!(g.set_event("x", x.clone()).is_none());

        let read = g.event("x").unwrap();
        assert!(Arc::ptr_eq(&read, &x));

        let replacement: EventRef = Event::arc("x");
        let previous = g.set_event("x", replacement.clone()).unwrap();
        assert!(Arc::ptr_eq(&previous, &x));
        assert!(Arc::ptr_eq(&g.event("x").unwrap(), &replacement));
        assert_eq!(g.event_count(), 1);
    }

    #[test]
    fn test_cascade_reaches_whole_tree() {
        let (a, a_hits) = counted("a");
        let (b, b_hits) = counted("b");
        let (c, c_hits) = counted("c");

        let mut root = EventGroup::new("Root");
        root.add_event(a).unwrap();
        let ui = root.add_group(EventGroup::new("UI")).unwrap();
        ui.add_event(b).unwrap();
        ui.add_group(EventGroup::new("Buttons"))
            .unwrap()
            .add_event(c)
            .unwrap();

        root.activate();

        assert_eq!(a_hits.load(AtomicOrdering::Relaxed), 1);
        assert_eq!(b_hits.load(AtomicOrdering::Relaxed), 1);
        assert_eq!(c_hits.load(AtomicOrdering::Relaxed), 1);
    }

    #[test]
    fn test_cascade_ignores_group_flag_but_respects_channel_gate() {
        let (a, a_hits) = counted("a");
        let (b, b_hits) = counted("b");
        b.disable();

        let mut g = EventGroup::new("G");
        g.add_event(a).unwrap();
        g.add_event(b).unwrap();
        g.disable();
        assert!(!g.is_enabled());

        g.activate();

        assert_eq!(a_hits.load(AtomicOrdering::Relaxed), 1);
        assert_eq!(b_hits.load(AtomicOrdering::Relaxed), 0);
    }

    #[test]
    fn test_typed_cascade_matches_declared_type() {
        let ints = TypedEvent::<i32>::arc("Ints");
        let strings = TypedEvent::<String>::arc("Strings");
        let got_int = Arc::new(Mutex::new(Vec::new()));
        let got_str = Arc::new(Mutex::new(Vec::new()));
        {
            let s = got_int.clone();
            ints.subscribe(move |v: &i32| s.lock().unwrap().push(*v));
            let s = got_str.clone();
            strings.subscribe(move |v: &String| s.lock().unwrap().push(v.clone()));
        }
        let (plain, plain_hits) = counted("Plain");

        let mut g = EventGroup::new("G");
        g.add_event(ints).unwrap();
        g.add_event(strings).unwrap();
        g.add_event(plain).unwrap();

        g.activate_with(&42i32);

        assert_eq!(*got_int.lock().unwrap(), vec![42]);
        assert_eq!(*got_str.lock().unwrap(), vec![String::new()]);
        assert_eq!(plain_hits.load(AtomicOrdering::Relaxed), 1);
    }

    #[test]
    fn test_typed_cascade_sends_untyped_into_subgroups() {
        let nested = TypedEvent::<i32>::arc("Nested");
        let got = Arc::new(Mutex::new(Vec::new()));
        let s = got.clone();
        nested.subscribe(move |v: &i32| s.lock().unwrap().push(*v));

        let mut g = EventGroup::new("G");
        g.add_group(EventGroup::new("Sub"))
            .unwrap()
            .add_event(nested)
            .unwrap();

        g.activate_with(&7i32);
        assert_eq!(*got.lock().unwrap(), vec![0]);
    }

    #[test]
    fn test_get_group_mut_allows_nested_building() {
        let mut root = EventGroup::new("Root");
        root.add_group(EventGroup::new("UI")).unwrap();
        root.get_group_mut("UI")
            .unwrap()
            .add_event(Event::arc("Click"))
            .unwrap();

        assert!(root.get_group("UI").unwrap().contains_event("Click"));
        assert!(root.get_group_mut("Nope").is_err());
    }
}
