use crate::binding::EventMap;
use crate::event::GuestEvent;
use crate::eventbus::{BindingChange, BindingListener, ChangeBus, ChangeFilter};
use crate::host::HostInput;

/// Owns the live binding table and notifies listeners of changes.
///
/// Display code never touches the live table: it takes a [`snapshot`]
/// (an owned, read-only copy) and resolves its lookups against that.
///
/// [`snapshot`]: BindingManager::snapshot
pub struct BindingManager {
    map: EventMap,
    bus: ChangeBus,
}

impl BindingManager {
    pub fn new() -> Self {
        Self::with_map(EventMap::new())
    }

    /// Starts from an existing table, e.g. one rebuilt from a profile.
    pub fn with_map(map: EventMap) -> Self {
        Self {
            map,
            bus: ChangeBus::new(),
        }
    }

    /// Binds `host` to `guest`, returning the replaced event on a rebind.
    pub fn bind(&mut self, host: HostInput, guest: GuestEvent) -> Option<GuestEvent> {
        let replaced = self.map.insert(host.clone(), guest);
        self.bus
            .emit(&BindingChange::Bound { host, guest, replaced });
        replaced
    }

    /// Removes the binding for `host`, if any.
    pub fn unbind(&mut self, host: &HostInput) -> Option<GuestEvent> {
        let removed = self.map.remove(host);
        if let Some(guest) = removed {
            self.bus.emit(&BindingChange::Unbound {
                host: host.clone(),
                guest,
            });
        }
        removed
    }

    /// Empties the table. No-op (and no notification) when already empty.
    pub fn clear(&mut self) {
        if self.map.is_empty() {
            return;
        }
        self.map.clear();
        self.bus.emit(&BindingChange::Cleared);
    }

    /// Borrow the live table for same-thread reads.
    pub fn map(&self) -> &EventMap {
        &self.map
    }

    /// Owned snapshot of the current table for the rendering side.
    pub fn snapshot(&self) -> EventMap {
        self.map.clone()
    }

    pub fn add_listener(
        &mut self,
        listener: impl BindingListener + 'static,
        filter: ChangeFilter,
        tag: Option<u8>,
    ) -> u64 {
        self.bus.add_listener(listener, filter, tag)
    }

    pub fn enable_listener(&mut self, id: u64) {
        self.bus.enable(id);
    }

    pub fn disable_listener(&mut self, id: u64) {
        self.bus.disable(id);
    }

    pub fn remove_listener(&mut self, id: u64) {
        self.bus.remove_listener(id);
    }
}

impl Default for BindingManager {
    fn default() -> Self {
        Self::new()
    }
}
