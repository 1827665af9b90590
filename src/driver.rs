//! GPU driver package selection for the settings screen.
//!
//! Mirrors a settings "preference" row: a persisted selection, a summary
//! line, a capability gate, and an activation hook that external UI wires to
//! its own driver picker. Probing support and installing packages stay
//! external; this module only renders and reports the selection.

use serde::{Deserialize, Serialize};

/// Sentinel selection meaning "use the system's own driver".
pub const SYSTEM_DRIVER: &str = "system";

fn default_driver() -> String {
    SYSTEM_DRIVER.to_string()
}

/// Persisted driver selection.
///
/// An absent key deserializes to [`SYSTEM_DRIVER`], so fresh configurations
/// behave like the default preference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverSettings {
    #[serde(default = "default_driver")]
    pub driver: String,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            driver: default_driver(),
        }
    }
}

/// Strings used to render the preference row.
#[derive(Clone, Debug)]
pub struct DriverLabels {
    /// Display name for the [`SYSTEM_DRIVER`] sentinel.
    pub system_driver: String,
    /// Summary line; the first `{}` is replaced with the driver name.
    pub summary: String,
    /// Shown when custom driver loading is unavailable.
    pub unsupported: String,
}

impl Default for DriverLabels {
    fn default() -> Self {
        Self {
            system_driver: "System driver".to_string(),
            summary: "Uses {}".to_string(),
            unsupported: "Custom drivers are not supported on this device".to_string(),
        }
    }
}

type ActivateFn = Box<dyn FnMut(&mut DriverSettings)>;

/// Settings row for picking the GPU driver package.
pub struct DriverPreference {
    supported: bool,
    labels: DriverLabels,
    on_activate: Option<ActivateFn>,
}

impl DriverPreference {
    /// `supported` is the caller-probed capability: whether this host can
    /// load custom driver packages at all.
    pub fn new(supported: bool) -> Self {
        Self::with_labels(supported, DriverLabels::default())
    }

    pub fn with_labels(supported: bool, labels: DriverLabels) -> Self {
        Self {
            supported,
            labels,
            on_activate: None,
        }
    }

    /// An unsupported preference renders its row greyed out.
    pub fn is_enabled(&self) -> bool {
        self.supported
    }

    /// Summary line for the row.
    pub fn summary(&self, settings: &DriverSettings) -> String {
        if !self.supported {
            return self.labels.unsupported.clone();
        }
        let driver = if settings.driver == SYSTEM_DRIVER {
            self.labels.system_driver.as_str()
        } else {
            settings.driver.as_str()
        };
        self.labels.summary.replacen("{}", driver, 1)
    }

    /// Registers the external "open driver picker" action.
    pub fn on_activate(&mut self, action: impl FnMut(&mut DriverSettings) + 'static) {
        self.on_activate = Some(Box::new(action));
    }

    /// Runs the picker action and reports whether the selection changed, so
    /// the caller knows to refresh the row. No-op when disabled or unwired.
    pub fn activate(&mut self, settings: &mut DriverSettings) -> bool {
        if !self.supported {
            return false;
        }
        let Some(action) = self.on_activate.as_mut() else {
            return false;
        };
        let before = settings.driver.clone();
        action(settings);
        settings.driver != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_substitutes_the_selection() {
        let preference = DriverPreference::new(true);

        let system = DriverSettings::default();
        assert_eq!(preference.summary(&system), "Uses System driver");

        let custom = DriverSettings {
            driver: "turnip-24.1".to_string(),
        };
        assert_eq!(preference.summary(&custom), "Uses turnip-24.1");
    }

    #[test]
    fn unsupported_hosts_get_a_disabled_row() {
        let mut preference = DriverPreference::new(false);
        preference.on_activate(|settings| settings.driver = "turnip-24.1".to_string());

        let mut settings = DriverSettings::default();
        assert!(!preference.is_enabled());
        assert!(!preference.activate(&mut settings));
        assert_eq!(settings, DriverSettings::default());
        assert_eq!(
            preference.summary(&settings),
            "Custom drivers are not supported on this device"
        );
    }

    #[test]
    fn activate_reports_selection_changes() {
        let mut preference = DriverPreference::new(true);
        let mut settings = DriverSettings::default();

        // Nothing wired yet.
        assert!(!preference.activate(&mut settings));

        preference.on_activate(|settings| settings.driver = "turnip-24.1".to_string());
        assert!(preference.activate(&mut settings));
        assert_eq!(settings.driver, "turnip-24.1");

        // Picking the same package again is not a change.
        assert!(!preference.activate(&mut settings));
    }

    #[test]
    fn absent_config_key_means_system_driver() {
        let settings: DriverSettings = toml::from_str("").unwrap();
        assert_eq!(settings.driver, SYSTEM_DRIVER);
    }
}
