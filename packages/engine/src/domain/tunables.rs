//! Tunables exposed through the configuration panel, plus the solver and
//! material settings that stay fixed.

use serde::{Deserialize, Serialize};

/// Values the panel edits. Field names match the panel's JSON keys.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tunables {
    pub gravity: f32,
    pub relaxation: f32,
    pub stiffness: f32,
    pub show_hitboxes: bool,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            gravity: -9.82,
            relaxation: 4.0,
            stiffness: 900.0,
            show_hitboxes: false,
        }
    }
}

impl Tunables {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Pull every number into its option range. Non-finite input falls back
    /// to the default for that field.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        Self {
            gravity: clamp_or(self.gravity, GRAVITY_RANGE, defaults.gravity),
            relaxation: clamp_or(self.relaxation, RELAXATION_RANGE, defaults.relaxation),
            stiffness: clamp_or(self.stiffness, STIFFNESS_RANGE, defaults.stiffness),
            show_hitboxes: self.show_hitboxes,
        }
    }
}

fn clamp_or(value: f32, (min, max): (f32, f32), fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

pub const GRAVITY_RANGE: (f32, f32) = (-20.0, 4.0);
pub const RELAXATION_RANGE: (f32, f32) = (0.05, 4.0);
pub const STIFFNESS_RANGE: (f32, f32) = (20.0, 2000.0);

/// Panel control descriptor
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TunableOption {
    Number {
        path: &'static str,
        label: &'static str,
        min: f32,
        max: f32,
        step: f32,
    },
    Boolean {
        path: &'static str,
        label: &'static str,
    },
}

/// The option set the panel renders, in display order
pub fn options() -> Vec<TunableOption> {
    vec![
        TunableOption::Number {
            path: "gravity",
            label: "gravity",
            min: GRAVITY_RANGE.0,
            max: GRAVITY_RANGE.1,
            step: 0.01,
        },
        TunableOption::Number {
            path: "relaxation",
            label: "relaxation",
            min: RELAXATION_RANGE.0,
            max: RELAXATION_RANGE.1,
            step: 0.01,
        },
        TunableOption::Number {
            path: "stiffness",
            label: "stiffness",
            min: STIFFNESS_RANGE.0,
            max: STIFFNESS_RANGE.1,
            step: 1.0,
        },
        TunableOption::Boolean {
            path: "showHitboxes",
            label: "showHitboxes",
        },
    ]
}

/// Gauss-Seidel settings. The iteration count is kept far below the usual 10
/// so the letters move loose and floaty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverSettings {
    pub iterations: usize,
    pub tolerance: f32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            iterations: 3,
            tolerance: 0.001,
        }
    }
}

/// Single material shared by every contact
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactMaterial {
    pub friction: f32,
}

impl Default for ContactMaterial {
    fn default() -> Self {
        Self { friction: 0.3 }
    }
}
