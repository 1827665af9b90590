//! src/logger.rs
use crate::eventbus::{BindingChange, BindingListener};

/// A simple listener that records all binding changes through the `log` facade.
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingListener for Logger {
    fn on_change(&mut self, change: &BindingChange) {
        match change {
            BindingChange::Bound {
                host,
                guest,
                replaced: Some(old),
            } => log::debug!("rebound {host}: {old:?} -> {guest:?}"),
            BindingChange::Bound { host, guest, .. } => {
                log::debug!("bound {host} -> {guest:?}");
            }
            BindingChange::Unbound { host, guest } => {
                log::debug!("unbound {host} (was {guest:?})");
            }
            BindingChange::Cleared => log::debug!("bindings cleared"),
        }
    }
}
