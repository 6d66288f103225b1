use std::collections::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// Static description of a planetary system.
/// Loaded from JSON; the built-in solar system ships with the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemManifest {
    /// The central body.
    pub star: StarDescriptor,
    /// Bodies orbiting the star.
    pub bodies: Vec<BodyDescriptor>,
    /// Bodies orbiting one of `bodies`.
    #[serde(default)]
    pub satellites: Vec<SatelliteDescriptor>,
    /// Optional debris ring.
    #[serde(default)]
    pub belt: Option<BeltDescriptor>,
    /// Speed that maps to the base orbit rate. Defaults to the fastest body.
    #[serde(default)]
    pub reference_rate: Option<f64>,
    /// Seed for initial phases and belt layout.
    #[serde(default)]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarDescriptor {
    pub name: String,
    pub size: f32,
    /// Self-rotation in rad/s (default: 0.5).
    #[serde(default = "default_star_spin")]
    pub rotation_speed: f64,
    #[serde(default)]
    pub color: String,
}

/// One body orbiting the star.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    /// Visual radius; also the hit-test radius.
    pub size: f32,
    /// Orbit radius in world units.
    pub distance: f64,
    /// Nominal orbital speed, relative to `reference_rate`.
    pub speed: f64,
    /// Self-rotation in rad/s at multiplier 1.0.
    pub rotation_speed: f64,
    #[serde(default)]
    pub color: String,
    /// Initial orbital phase in radians. Random when absent.
    #[serde(default)]
    pub phase: Option<f64>,
}

/// A body orbiting another body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteDescriptor {
    /// Name of the parent in `bodies`.
    pub parent: String,
    pub name: String,
    pub size: f32,
    /// Distance from the parent.
    pub distance: f64,
    /// Angular speed in rad/s.
    pub speed: f64,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub phase: Option<f64>,
}

/// Ring of small non-interactive fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeltDescriptor {
    pub count: u32,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Total vertical spread, centered on the orbital plane (default: 1.0).
    #[serde(default = "default_belt_height")]
    pub height: f64,
    #[serde(default = "default_min_size")]
    pub min_size: f32,
    #[serde(default = "default_max_size")]
    pub max_size: f32,
    #[serde(default = "default_min_speed")]
    pub min_speed: f64,
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,
    #[serde(default = "default_min_spin")]
    pub min_spin: f64,
    #[serde(default = "default_max_spin")]
    pub max_spin: f64,
}

fn default_star_spin() -> f64 {
    0.5
}

fn default_belt_height() -> f64 {
    1.0
}

fn default_min_size() -> f32 {
    0.05
}

fn default_max_size() -> f32 {
    0.2
}

fn default_min_speed() -> f64 {
    0.1
}

fn default_max_speed() -> f64 {
    0.4
}

fn default_min_spin() -> f64 {
    0.02
}

fn default_max_spin() -> f64 {
    0.07
}

const BUILTIN_SOLAR_SYSTEM: &str = include_str!("../../data/solar_system.json");

impl SystemManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, OrreryError> {
        let manifest: SystemManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// The built-in eight-planet table.
    pub fn solar_system() -> Result<Self, OrreryError> {
        Self::from_json(BUILTIN_SOLAR_SYSTEM)
    }

    /// Check names, parent references and numeric ranges.
    pub fn validate(&self) -> Result<(), OrreryError> {
        check_size(&self.star.name, self.star.size)?;
        check_finite(&self.star.name, "rotation_speed", self.star.rotation_speed)?;

        let mut names = HashSet::new();
        names.insert(self.star.name.as_str());

        for body in &self.bodies {
            if !names.insert(body.name.as_str()) {
                return Err(OrreryError::DuplicateName(body.name.clone()));
            }
            check_size(&body.name, body.size)?;
            check_non_negative(&body.name, "distance", body.distance)?;
            check_non_negative(&body.name, "speed", body.speed)?;
            check_finite(&body.name, "rotation_speed", body.rotation_speed)?;
            if let Some(phase) = body.phase {
                check_finite(&body.name, "phase", phase)?;
            }
        }

        for sat in &self.satellites {
            if !self.bodies.iter().any(|b| b.name == sat.parent) {
                return Err(OrreryError::UnknownParent {
                    satellite: sat.name.clone(),
                    parent: sat.parent.clone(),
                });
            }
            if !names.insert(sat.name.as_str()) {
                return Err(OrreryError::DuplicateName(sat.name.clone()));
            }
            check_size(&sat.name, sat.size)?;
            check_non_negative(&sat.name, "distance", sat.distance)?;
            check_finite(&sat.name, "speed", sat.speed)?;
            if let Some(phase) = sat.phase {
                check_finite(&sat.name, "phase", phase)?;
            }
        }

        if let Some(belt) = &self.belt {
            check_non_negative("belt", "inner_radius", belt.inner_radius)?;
            check_non_negative("belt", "height", belt.height)?;
            if !(belt.outer_radius >= belt.inner_radius) {
                return Err(OrreryError::InvalidValue {
                    name: "belt".to_string(),
                    field: "outer_radius",
                    value: belt.outer_radius,
                });
            }
            if !(belt.min_size > 0.0 && belt.max_size >= belt.min_size) {
                return Err(OrreryError::InvalidValue {
                    name: "belt".to_string(),
                    field: "max_size",
                    value: belt.max_size as f64,
                });
            }
        }

        if let Some(rate) = self.reference_rate {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(OrreryError::InvalidValue {
                    name: "manifest".to_string(),
                    field: "reference_rate",
                    value: rate,
                });
            }
        }

        Ok(())
    }

    /// Speed that maps to the base orbit rate.
    /// Explicit value, else the fastest orbiting body, else 1.0.
    pub fn reference_rate(&self) -> f64 {
        if let Some(rate) = self.reference_rate {
            return rate;
        }
        let fastest = self
            .bodies
            .iter()
            .map(|b| b.speed)
            .fold(0.0_f64, f64::max);
        if fastest > 0.0 { fastest } else { 1.0 }
    }

    /// Number of scene nodes this manifest produces.
    pub fn node_count(&self) -> usize {
        1 + self.bodies.len()
            + self.satellites.len()
            + self.belt.as_ref().map(|b| b.count as usize).unwrap_or(0)
    }
}

fn check_finite(name: &str, field: &'static str, value: f64) -> Result<(), OrreryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OrreryError::InvalidValue { name: name.to_string(), field, value })
    }
}

fn check_non_negative(name: &str, field: &'static str, value: f64) -> Result<(), OrreryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(OrreryError::InvalidValue { name: name.to_string(), field, value })
    }
}

fn check_size(name: &str, size: f32) -> Result<(), OrreryError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(OrreryError::InvalidValue { name: name.to_string(), field: "size", value: size as f64 })
    }
}
