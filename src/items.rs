//! Settings-screen rows for the controller configuration list.
//!
//! These are view models only. External UI code owns the widgets, wires
//! clicks to its own actions, and supplies localized strings; a row just
//! turns a map snapshot plus labels into text.
//!
//! A [`SettingsRow::Stick`] row resolves five lookups against the snapshot —
//! the stick-click button, then up (Y+), down (Y-), left (X-) and right (X+)
//! — and joins them into a five-line summary. Unbound controls render as the
//! `none` placeholder.

use crate::binding::EventMap;
use crate::event::{AxisId, AxisPolarity, ButtonId, GuestEvent};
use crate::stick::StickDescriptor;

/// Localized placeholder strings, supplied by the caller's string resources.
#[derive(Clone, Debug)]
pub struct SummaryLabels {
    pub none: String,
    pub button: String,
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl Default for SummaryLabels {
    fn default() -> Self {
        Self {
            none: "None".to_string(),
            button: "Button".to_string(),
            up: "Up".to_string(),
            down: "Down".to_string(),
            left: "Left".to_string(),
            right: "Right".to_string(),
        }
    }
}

/// Text content of one rendered list row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowContent {
    pub content: String,
    pub subcontent: Option<String>,
}

/// A row of the controller configuration screen.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsRow {
    /// Section caption; performs no lookups.
    Header { text: String },
    /// A single button mapping.
    Button { controller: u8, button: ButtonId },
    /// An analog stick and its five mappings.
    Stick {
        controller: u8,
        stick: StickDescriptor,
    },
}

impl SettingsRow {
    /// Resolves the row's text against a map snapshot.
    pub fn bind(&self, map: &EventMap, labels: &SummaryLabels) -> RowContent {
        match self {
            SettingsRow::Header { text } => RowContent {
                content: text.clone(),
                subcontent: None,
            },
            SettingsRow::Button { controller, button } => {
                let target = GuestEvent::Button {
                    controller: *controller,
                    button: *button,
                };
                RowContent {
                    content: button.name().to_string(),
                    subcontent: Some(binding_label(map, &target, labels)),
                }
            }
            SettingsRow::Stick { controller, stick } => RowContent {
                content: stick.name.clone(),
                subcontent: Some(stick_summary(map, *controller, stick, labels)),
            },
        }
    }

    /// Whether two rows stand for the same list position (kind + controller).
    pub fn same_item(&self, other: &SettingsRow) -> bool {
        match (self, other) {
            (SettingsRow::Header { .. }, SettingsRow::Header { .. }) => true,
            (
                SettingsRow::Button { controller: a, .. },
                SettingsRow::Button { controller: b, .. },
            )
            | (
                SettingsRow::Stick { controller: a, .. },
                SettingsRow::Stick { controller: b, .. },
            ) => a == b,
            _ => false,
        }
    }

    /// Whether two rows would render identically.
    pub fn same_content(&self, other: &SettingsRow) -> bool {
        self == other
    }
}

/// Label of the first host input bound to `target`, or the `none` placeholder.
fn binding_label(map: &EventMap, target: &GuestEvent, labels: &SummaryLabels) -> String {
    map.find_binding(target)
        .map(ToString::to_string)
        .unwrap_or_else(|| labels.none.clone())
}

/// Five-line summary of a stick's mappings on one controller.
pub fn stick_summary(
    map: &EventMap,
    controller: u8,
    stick: &StickDescriptor,
    labels: &SummaryLabels,
) -> String {
    let axis = |axis: AxisId, polarity: AxisPolarity| GuestEvent::Axis {
        controller,
        axis,
        polarity,
    };

    let button = binding_label(
        map,
        &GuestEvent::Button {
            controller,
            button: stick.button,
        },
        labels,
    );
    let up = binding_label(map, &axis(stick.y_axis, AxisPolarity::Positive), labels);
    let down = binding_label(map, &axis(stick.y_axis, AxisPolarity::Negative), labels);
    let left = binding_label(map, &axis(stick.x_axis, AxisPolarity::Negative), labels);
    let right = binding_label(map, &axis(stick.x_axis, AxisPolarity::Positive), labels);

    format!(
        "{}: {button}\n{}: {up}\n{}: {down}\n{}: {left}\n{}: {right}",
        labels.button, labels.up, labels.down, labels.left, labels.right
    )
}
