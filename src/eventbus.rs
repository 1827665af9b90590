//! Change notification for binding tables.

use crate::event::GuestEvent;
use crate::host::HostInput;
use std::collections::HashMap;

/// A mutation applied to the live binding table.
#[derive(Clone, Debug, PartialEq)]
pub enum BindingChange {
    /// A host input was bound to a guest control.
    Bound {
        host: HostInput,
        guest: GuestEvent,
        /// The event previously bound to `host`, if this was a rebind.
        replaced: Option<GuestEvent>,
    },
    /// A host input lost its binding.
    Unbound { host: HostInput, guest: GuestEvent },
    /// The whole table was emptied.
    Cleared,
}

impl BindingChange {
    /// The controller the change concerns, when there is exactly one.
    pub fn controller(&self) -> Option<u8> {
        match self {
            BindingChange::Bound { guest, .. } | BindingChange::Unbound { guest, .. } => {
                Some(guest.controller())
            }
            BindingChange::Cleared => None,
        }
    }
}

/// Trait for reacting to binding changes.
pub trait BindingListener: Send {
    fn on_change(&mut self, change: &BindingChange);
}

/// Determines which kinds of changes a listener wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFilter {
    All,
    BoundOnly,
    UnboundOnly,
    Custom(fn(&BindingChange) -> bool),
}

/// Metadata-wrapped listener with filters and control flags.
struct ListenerEntry {
    listener: Box<dyn BindingListener>,
    enabled: bool,
    filter: ChangeFilter,
    tag: Option<u8>, // restrict delivery to one controller's changes
}

pub struct ChangeBus {
    next_id: u64,
    listeners: HashMap<u64, ListenerEntry>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: HashMap::new(),
        }
    }

    /// Registers a listener with optional filtering and controller tag.
    pub fn add_listener(
        &mut self,
        listener: impl BindingListener + 'static,
        filter: ChangeFilter,
        tag: Option<u8>,
    ) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
                tag,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely.
    pub fn remove_listener(&mut self, id: u64) {
        self.listeners.remove(&id);
    }

    /// Emits one change to all active and matching listeners.
    ///
    /// A tagged listener only sees changes for its controller; `Cleared`
    /// concerns every controller and is always delivered.
    pub fn emit(&mut self, change: &BindingChange) {
        for entry in self.listeners.values_mut() {
            if !entry.enabled {
                continue;
            }

            if let (Some(wanted), Some(controller)) = (entry.tag, change.controller()) {
                if wanted != controller {
                    continue;
                }
            }

            let passes_filter = match entry.filter {
                ChangeFilter::All => true,
                ChangeFilter::BoundOnly => matches!(change, BindingChange::Bound { .. }),
                ChangeFilter::UnboundOnly => matches!(change, BindingChange::Unbound { .. }),
                ChangeFilter::Custom(f) => f(change),
            };

            if passes_filter {
                entry.listener.on_change(change);
            }
        }
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ButtonId;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<BindingChange>>>);

    impl BindingListener for Recorder {
        fn on_change(&mut self, change: &BindingChange) {
            self.0.lock().unwrap().push(change.clone());
        }
    }

    fn bound(controller: u8) -> BindingChange {
        BindingChange::Bound {
            host: HostInput::key("kbd", "A"),
            guest: GuestEvent::Button {
                controller,
                button: ButtonId::A,
            },
            replaced: None,
        }
    }

    fn unbound(controller: u8) -> BindingChange {
        BindingChange::Unbound {
            host: HostInput::key("kbd", "A"),
            guest: GuestEvent::Button {
                controller,
                button: ButtonId::A,
            },
        }
    }

    #[test]
    fn filter_selects_change_kinds() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = ChangeBus::new();
        bus.add_listener(Recorder(seen.clone()), ChangeFilter::BoundOnly, None);

        bus.emit(&bound(0));
        bus.emit(&unbound(0));
        bus.emit(&BindingChange::Cleared);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], BindingChange::Bound { .. }));
    }

    #[test]
    fn tag_restricts_to_one_controller() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = ChangeBus::new();
        bus.add_listener(Recorder(seen.clone()), ChangeFilter::All, Some(1));

        bus.emit(&bound(0));
        bus.emit(&bound(1));
        bus.emit(&BindingChange::Cleared); // concerns every controller

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].controller(), Some(1));
        assert_eq!(seen[1], BindingChange::Cleared);
    }

    #[test]
    fn disabled_listeners_are_muted() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = ChangeBus::new();
        let id = bus.add_listener(Recorder(seen.clone()), ChangeFilter::All, None);

        bus.disable(id);
        bus.emit(&bound(0));
        bus.enable(id);
        bus.emit(&bound(0));
        bus.remove_listener(id);
        bus.emit(&bound(0));

        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
