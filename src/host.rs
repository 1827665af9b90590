//! Host-side input identifiers.
//!
//! A [`HostInput`] names one physical input source: a keyboard key, or a
//! device-local button/axis channel on a pad. The `device` field is a stable
//! device id (by convention `"vid:pid"`, matching how backends identify
//! hardware); channel indices are device-local.
//!
//! `Display` renders the compact label a settings row prints: `"Space"` for
//! keys, `"B3"` for button channels, `"A0+"` / `"A0-"` for axis directions.

use crate::event::AxisPolarity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A control on a host device.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostControl {
    /// A named keyboard key (`"Space"`, `"W"`).
    Key { name: String },
    /// A device-local button channel.
    Button { index: u16 },
    /// A device-local axis channel, deflected in one direction.
    Axis { index: u16, polarity: AxisPolarity },
}

/// Identifies a physical input source on the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostInput {
    /// Stable device id, e.g. `"045e:028e"`.
    pub device: String,
    /// The control on that device.
    pub control: HostControl,
}

impl HostInput {
    pub fn key(device: &str, name: &str) -> Self {
        Self {
            device: device.to_string(),
            control: HostControl::Key {
                name: name.to_string(),
            },
        }
    }

    pub fn button(device: &str, index: u16) -> Self {
        Self {
            device: device.to_string(),
            control: HostControl::Button { index },
        }
    }

    pub fn axis(device: &str, index: u16, polarity: AxisPolarity) -> Self {
        Self {
            device: device.to_string(),
            control: HostControl::Axis { index, polarity },
        }
    }
}

impl fmt::Display for HostInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.control {
            HostControl::Key { name } => f.write_str(name),
            HostControl::Button { index } => write!(f, "B{index}"),
            HostControl::Axis { index, polarity } => write!(f, "A{index}{polarity}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_labels() {
        assert_eq!(HostInput::key("kbd", "Space").to_string(), "Space");
        assert_eq!(HostInput::button("045e:028e", 3).to_string(), "B3");
        assert_eq!(
            HostInput::axis("045e:028e", 0, AxisPolarity::Positive).to_string(),
            "A0+"
        );
        assert_eq!(
            HostInput::axis("045e:028e", 0, AxisPolarity::Negative).to_string(),
            "A0-"
        );
    }

    #[test]
    fn identity_includes_device() {
        assert_ne!(
            HostInput::button("045e:028e", 3),
            HostInput::button("054c:09cc", 3)
        );
    }
}
