//! The host-to-guest binding table and its reverse lookup.
//!
//! [`EventMap`] maps each [`HostInput`] to the [`GuestEvent`] it drives.
//! Display code works the other way round: given a guest control, it asks
//! which host input (if any) is bound to it. [`EventMap::find_binding`] is
//! that reverse lookup — a linear scan, which is fine at controller-binding
//! scale.
//!
//! # Semantics
//! - Keys are unique; `insert` on an existing key replaces the value **in
//!   place**, keeping the entry's position.
//! - Iteration order is insertion order. When several host inputs are bound
//!   to the same guest control, `find_binding` returns the earliest-inserted
//!   one — deterministic, not implementation-defined.
//! - Lookups never mutate the table. An absent binding is a normal outcome,
//!   reported as `None`.

use crate::event::GuestEvent;
use crate::host::HostInput;

/// Table of host-input → guest-event bindings, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventMap {
    entries: Vec<(HostInput, GuestEvent)>,
}

impl EventMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `host` to `guest`.
    ///
    /// Returns the previously bound event if `host` was already present; the
    /// entry keeps its original position in that case.
    pub fn insert(&mut self, host: HostInput, guest: GuestEvent) -> Option<GuestEvent> {
        for (h, g) in &mut self.entries {
            if *h == host {
                return Some(std::mem::replace(g, guest));
            }
        }
        self.entries.push((host, guest));
        None
    }

    /// Removes the binding for `host`, returning the event it drove.
    pub fn remove(&mut self, host: &HostInput) -> Option<GuestEvent> {
        let pos = self.entries.iter().position(|(h, _)| h == host)?;
        Some(self.entries.remove(pos).1)
    }

    /// Forward lookup: what is `host` bound to?
    pub fn get(&self, host: &HostInput) -> Option<&GuestEvent> {
        self.entries.iter().find(|(h, _)| h == host).map(|(_, g)| g)
    }

    /// Reverse lookup: the first host input bound to `target`.
    ///
    /// Matches by structural equality (controller, button/axis id, and
    /// polarity where applicable). `None` means the control is unbound.
    pub fn find_binding(&self, target: &GuestEvent) -> Option<&HostInput> {
        self.entries
            .iter()
            .find(|(_, g)| g == target)
            .map(|(h, _)| h)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&HostInput, &GuestEvent)> {
        self.entries.iter().map(|(h, g)| (h, g))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
