use serde::{Deserialize, Serialize};

/// Broad class of a resolvable sky object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Sun,
    Moon,
    Planet,
}

impl BodyKind {
    pub fn is_solar_system(&self) -> bool {
        !matches!(self, Self::Star)
    }
}

/// Static catalog listing for an object the projector knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub local_name: String,
    pub kind: BodyKind,
    /// Visual magnitude; `None` for solar-system bodies.
    pub magnitude: Option<f64>,
}

/// Where an object sits in the local sky at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialPosition {
    pub name: String,
    pub local_name: String,
    pub kind: BodyKind,
    pub azimuth: f64,
    pub altitude: f64,
    pub ra: f64,
    pub dec: f64,
    pub magnitude: Option<f64>,
}

impl CelestialPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}
