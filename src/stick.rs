//! Analog stick layouts.

use crate::event::{AxisId, ButtonId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical layout of one analog stick: its click button and two axes.
///
/// Immutable value supplied by configuration. The two conventional layouts
/// are available via [`StickDescriptor::left`] and [`StickDescriptor::right`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickDescriptor {
    /// Display name, e.g. `"Left Stick"`.
    pub name: String,
    /// The stick-click button.
    pub button: ButtonId,
    pub x_axis: AxisId,
    pub y_axis: AxisId,
}

impl StickDescriptor {
    pub fn left() -> Self {
        Self {
            name: "Left Stick".to_string(),
            button: ButtonId::LeftStick,
            x_axis: AxisId::LeftX,
            y_axis: AxisId::LeftY,
        }
    }

    pub fn right() -> Self {
        Self {
            name: "Right Stick".to_string(),
            button: ButtonId::RightStick,
            x_axis: AxisId::RightX,
            y_axis: AxisId::RightY,
        }
    }
}

impl fmt::Display for StickDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
