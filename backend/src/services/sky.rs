//! Sky listings: what is up, where, and what to look at it with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::astro::CoordinateProjector;
use crate::models::{BodyKind, CatalogEntry, CelestialPosition, ObservationPoint};
use crate::services::visibility::can_observe;

const BRIGHT_PLANETS: [&str; 5] = ["mercury", "venus", "mars", "jupiter", "saturn"];
const DIM_PLANETS: [&str; 2] = ["uranus", "neptune"];

/// Position of a single object with observing advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetInfo {
    #[serde(flatten)]
    pub position: CelestialPosition,
    /// Above the horizon at the requested time.
    pub observable: bool,
    pub equipment: String,
}

/// Objects visible from one observation point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSky {
    pub point: ObservationPoint,
    pub objects: Vec<CelestialPosition>,
    pub count: usize,
}

/// Suggested instrument for an object.
pub fn equipment_for(kind: BodyKind, name: &str, magnitude: Option<f64>) -> &'static str {
    match kind {
        BodyKind::Sun => return "专业滤镜 (Solar Filter)",
        BodyKind::Moon => return "肉眼 / 双筒 / 天文望远镜",
        BodyKind::Planet => {
            let name = name.to_lowercase();
            if BRIGHT_PLANETS.contains(&name.as_str()) {
                return "肉眼可见 / 双筒望远镜";
            }
            if DIM_PLANETS.contains(&name.as_str()) {
                return "天文望远镜";
            }
        }
        BodyKind::Star => {}
    }

    match magnitude {
        Some(m) if m < 2.0 => "肉眼可见",
        Some(m) if m < 5.0 => "双筒望远镜",
        _ => "天文望远镜",
    }
}

/// Every resolvable object at or above `min_altitude`, highest first.
pub fn visible_objects(
    projector: &dyn CoordinateProjector,
    at: DateTime<Utc>,
    min_altitude: f64,
) -> Vec<CelestialPosition> {
    let mut visible: Vec<CelestialPosition> = projector
        .catalog()
        .iter()
        .filter_map(|entry| projector.resolve(&entry.name, at))
        .filter(|pos| pos.altitude >= min_altitude)
        .collect();

    visible.sort_by(|a, b| b.altitude.partial_cmp(&a.altitude).unwrap_or(Ordering::Equal));
    visible
}

/// Position, observability and equipment advice for one object.
pub fn target_info(
    projector: &dyn CoordinateProjector,
    name: &str,
    at: DateTime<Utc>,
) -> Option<TargetInfo> {
    let position = projector.resolve(name, at)?;
    let equipment = equipment_for(position.kind, &position.name, position.magnitude).to_string();
    Some(TargetInfo {
        observable: position.is_above_horizon(),
        equipment,
        position,
    })
}

/// Objects above the horizon whose azimuth falls in the point's window.
pub fn point_sky(
    projector: &dyn CoordinateProjector,
    point: &ObservationPoint,
    at: DateTime<Utc>,
) -> PointSky {
    let objects: Vec<CelestialPosition> = visible_objects(projector, at, 0.0)
        .into_iter()
        .filter(|pos| can_observe(point, pos.azimuth))
        .collect();

    PointSky {
        point: point.clone(),
        count: objects.len(),
        objects,
    }
}

/// All known objects, brightest first. Objects without a magnitude go last.
pub fn catalog_by_magnitude(projector: &dyn CoordinateProjector) -> Vec<CatalogEntry> {
    let mut entries = projector.catalog();
    entries.sort_by(|a, b| match (a.magnitude, b.magnitude) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    entries
}
