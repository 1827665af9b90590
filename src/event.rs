//! Guest-side control identities and binding targets.
//!
//! A binding points a host input at a *guest* control: a button press or a
//! signed axis deflection on one emulated controller. [`GuestEvent`] is the
//! value side of the binding table.
//!
//! ## Equality conventions
//! - Equality is structural over every field.
//! - **Axes carry a direction:** `Axis { polarity: Positive }` and
//!   `Axis { polarity: Negative }` on the same axis are distinct targets.
//!   A lookup for one must never match a binding for the other.
//! - Controller ids are small integers assigned by the embedding application
//!   (player slots); this crate never interprets them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an axis deflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisPolarity {
    Positive,
    Negative,
}

impl fmt::Display for AxisPolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisPolarity::Positive => write!(f, "+"),
            AxisPolarity::Negative => write!(f, "-"),
        }
    }
}

/// Logical buttons of an emulated controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonId {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
    LeftTrigger,
    RightTrigger,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    LeftStick,
    RightStick,
    Start,
    Select,
}

impl ButtonId {
    /// Human-readable name for settings rows.
    pub fn name(&self) -> &'static str {
        match self {
            ButtonId::A => "Button A",
            ButtonId::B => "Button B",
            ButtonId::X => "Button X",
            ButtonId::Y => "Button Y",
            ButtonId::LeftBumper => "Left Bumper",
            ButtonId::RightBumper => "Right Bumper",
            ButtonId::LeftTrigger => "Left Trigger",
            ButtonId::RightTrigger => "Right Trigger",
            ButtonId::DpadUp => "D-Pad Up",
            ButtonId::DpadDown => "D-Pad Down",
            ButtonId::DpadLeft => "D-Pad Left",
            ButtonId::DpadRight => "D-Pad Right",
            ButtonId::LeftStick => "Left Stick",
            ButtonId::RightStick => "Right Stick",
            ButtonId::Start => "Start",
            ButtonId::Select => "Select",
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical analog axes of an emulated controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisId {
    LeftX,
    LeftY,
    RightX,
    RightY,
    LeftTrigger,
    RightTrigger,
}

impl AxisId {
    /// Human-readable name for settings rows.
    pub fn name(&self) -> &'static str {
        match self {
            AxisId::LeftX => "Left X",
            AxisId::LeftY => "Left Y",
            AxisId::RightX => "Right X",
            AxisId::RightY => "Right Y",
            AxisId::LeftTrigger => "Left Trigger",
            AxisId::RightTrigger => "Right Trigger",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a host input is bound to on a guest controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestEvent {
    /// A digital button press.
    Button { controller: u8, button: ButtonId },
    /// An axis pushed in one direction.
    Axis {
        controller: u8,
        axis: AxisId,
        polarity: AxisPolarity,
    },
}

impl GuestEvent {
    /// The controller this event belongs to.
    pub fn controller(&self) -> u8 {
        match self {
            GuestEvent::Button { controller, .. } | GuestEvent::Axis { controller, .. } => {
                *controller
            }
        }
    }
}
