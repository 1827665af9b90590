//! Serializable binding profiles.
//!
//! A [`BindingProfile`] is the persisted form of an [`EventMap`]: a named,
//! ordered list of entries that round-trips through JSON and TOML. Entries
//! keep the map's insertion order, so a reloaded profile resolves reverse
//! lookups exactly like the table it was saved from.

use crate::binding::EventMap;
use crate::event::GuestEvent;
use crate::host::HostInput;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One persisted binding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BindingEntry {
    pub host: HostInput,
    pub guest: GuestEvent,
}

/// Serializable profile of input bindings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BindingProfile {
    pub name: String,
    pub description: Option<String>,
    pub entries: Vec<BindingEntry>,
}

impl BindingProfile {
    /// Captures a map in its current order.
    pub fn from_map(name: &str, map: &EventMap) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            entries: map
                .iter()
                .map(|(host, guest)| BindingEntry {
                    host: host.clone(),
                    guest: *guest,
                })
                .collect(),
        }
    }

    /// Rebuilds the binding table.
    ///
    /// Entries are applied in order through [`EventMap::insert`], so a
    /// profile carrying the same host input twice resolves last-wins.
    pub fn to_map(&self) -> EventMap {
        let mut map = EventMap::new();
        for entry in &self.entries {
            map.insert(entry.host.clone(), entry.guest);
        }
        map
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ProfileError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save_toml(&self, path: impl AsRef<Path>) -> Result<(), ProfileError> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

/// Errors raised while persisting or loading a profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml serialize: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml parse: {0}")]
    TomlDe(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{AxisId, AxisPolarity, ButtonId};

    const PAD: &str = "045e:028e";

    fn sample_map() -> EventMap {
        let mut map = EventMap::new();
        map.insert(
            HostInput::key("kbd", "Space"),
            GuestEvent::Button {
                controller: 0,
                button: ButtonId::A,
            },
        );
        map.insert(
            HostInput::axis(PAD, 1, AxisPolarity::Negative),
            GuestEvent::Axis {
                controller: 0,
                axis: AxisId::LeftY,
                polarity: AxisPolarity::Negative,
            },
        );
        map
    }

    #[test]
    fn map_roundtrip_preserves_order() {
        let map = sample_map();
        let profile = BindingProfile::from_map("default", &map);
        assert_eq!(profile.entries.len(), 2);
        assert_eq!(profile.to_map(), map);
    }

    #[test]
    fn duplicate_hosts_resolve_last_wins() {
        let host = HostInput::key("kbd", "Space");
        let first = GuestEvent::Button {
            controller: 0,
            button: ButtonId::A,
        };
        let second = GuestEvent::Button {
            controller: 0,
            button: ButtonId::B,
        };
        let profile = BindingProfile {
            name: "dup".to_string(),
            description: None,
            entries: vec![
                BindingEntry {
                    host: host.clone(),
                    guest: first,
                },
                BindingEntry {
                    host: host.clone(),
                    guest: second,
                },
            ],
        };

        let map = profile.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&host), Some(&second));
    }

    #[test]
    fn json_text_roundtrip() {
        let profile = BindingProfile::from_map("default", &sample_map());
        let text = serde_json::to_string(&profile).unwrap();
        let back: BindingProfile = serde_json::from_str(&text).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn toml_text_roundtrip() {
        let mut profile = BindingProfile::from_map("default", &sample_map());
        profile.description = Some("keyboard + pad".to_string());
        let text = toml::to_string_pretty(&profile).unwrap();
        let back: BindingProfile = toml::from_str(&text).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn file_roundtrip() {
        let profile = BindingProfile::from_map("default", &sample_map());
        let dir = std::env::temp_dir();

        let json_path = dir.join(format!("padbind-{}.json", std::process::id()));
        profile.save_json(&json_path).unwrap();
        assert_eq!(BindingProfile::load_json(&json_path).unwrap(), profile);
        fs::remove_file(&json_path).unwrap();

        let toml_path = dir.join(format!("padbind-{}.toml", std::process::id()));
        profile.save_toml(&toml_path).unwrap();
        assert_eq!(BindingProfile::load_toml(&toml_path).unwrap(), profile);
        fs::remove_file(&toml_path).unwrap();
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let missing = std::env::temp_dir().join("padbind-does-not-exist.toml");
        assert!(matches!(
            BindingProfile::load_toml(missing),
            Err(ProfileError::Io(_))
        ));
    }
}
