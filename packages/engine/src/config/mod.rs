//! Configuration panel bridge
//!
//! The panel loads after the canvas is already animating. Until the host
//! reports it ready, `panel()` is `None` and the host renders nothing.
//! Edits come back as the full tunables object in JSON.

use serde::Serialize;

use crate::domain::tunables::{options, TunableOption, Tunables};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAvailability {
    /// Panel code still loading
    Pending,
    Ready,
}

/// Everything the panel needs to render itself
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelModel {
    pub data: Tunables,
    pub options: Vec<TunableOption>,
}

impl PanelModel {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct ConfigBridge {
    tunables: Tunables,
    availability: PanelAvailability,
}

impl ConfigBridge {
    pub fn new(tunables: Tunables) -> Self {
        Self {
            tunables: tunables.clamped(),
            availability: PanelAvailability::Pending,
        }
    }

    pub fn tunables(&self) -> Tunables {
        self.tunables
    }

    pub fn availability(&self) -> PanelAvailability {
        self.availability
    }

    pub fn mark_ready(&mut self) {
        self.availability = PanelAvailability::Ready;
    }

    pub fn panel(&self) -> Option<PanelModel> {
        match self.availability {
            PanelAvailability::Pending => None,
            PanelAvailability::Ready => Some(PanelModel {
                data: self.tunables,
                options: options(),
            }),
        }
    }

    /// Store a clamped copy of `tunables` and return it
    pub fn apply_edit(&mut self, tunables: Tunables) -> Tunables {
        self.tunables = tunables.clamped();
        self.tunables
    }

    /// Parse a panel edit. Malformed JSON leaves the current values in place.
    pub fn apply_edit_json(&mut self, json: &str) -> Result<Tunables, String> {
        let edited = Tunables::from_json(json)?;
        Ok(self.apply_edit(edited))
    }
}

impl Default for ConfigBridge {
    fn default() -> Self {
        Self::new(Tunables::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_hidden_until_ready() {
        let mut bridge = ConfigBridge::default();
        assert_eq!(bridge.availability(), PanelAvailability::Pending);
        assert!(bridge.panel().is_none());

        bridge.mark_ready();
        let panel = bridge.panel().unwrap();
        assert_eq!(panel.data, Tunables::default());
        assert_eq!(panel.options.len(), 4);
    }

    #[test]
    fn panel_json_carries_data_and_options() {
        let mut bridge = ConfigBridge::default();
        bridge.mark_ready();
        let json: serde_json::Value = serde_json::from_str(&bridge.panel().unwrap().to_json()).unwrap();

        assert_eq!(json["data"]["showHitboxes"], false);
        assert_eq!(json["options"][0]["path"], "gravity");
        assert_eq!(json["options"][3]["kind"], "boolean");
    }

    #[test]
    fn edit_is_clamped_and_stored() {
        let mut bridge = ConfigBridge::default();
        let applied = bridge
            .apply_edit_json(r#"{"gravity":-50,"relaxation":2,"stiffness":900,"showHitboxes":true}"#)
            .unwrap();
        assert_eq!(applied.gravity, -20.0);
        assert_eq!(applied.relaxation, 2.0);
        assert!(applied.show_hitboxes);
        assert_eq!(bridge.tunables(), applied);
    }

    #[test]
    fn malformed_edit_keeps_previous_values() {
        let mut bridge = ConfigBridge::default();
        bridge.apply_edit_json(r#"{"gravity":-3}"#).unwrap();
        assert!(bridge.apply_edit_json("{gravity").is_err());
        assert_eq!(bridge.tunables().gravity, -3.0);
    }
}
