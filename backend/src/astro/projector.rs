use chrono::{DateTime, Utc};
use siderust::bodies::solar_system::{
    Jupiter, Mars, Mercury, Moon, Neptune, Saturn, Sun, Uranus, Venus,
};
use siderust::coordinates::spherical::direction;
use siderust::qtty::Degrees;

use super::catalog::{
    find_solar_body, find_star, SolarBody, StarRecord, BRIGHT_STARS, SOLAR_SYSTEM,
};
use super::ephemeris::{horizontal_position, horizontal_to_equatorial, Horizontal};
use crate::models::{BodyKind, CatalogEntry, CelestialPosition, GeoPoint};

/// Maps a body name and an instant to its place in the local sky.
pub trait CoordinateProjector: Send + Sync {
    /// Position of `body` at `at`, `None` if the body is unknown or cannot be computed.
    fn resolve(&self, body: &str, at: DateTime<Utc>) -> Option<CelestialPosition>;

    /// Every object this projector can name.
    fn catalog(&self) -> Vec<CatalogEntry>;
}

/// Projector over the built-in bright-star catalog and the solar system.
#[derive(Debug, Clone, Copy)]
pub struct CatalogProjector {
    site: GeoPoint,
}

impl CatalogProjector {
    pub fn new(site: GeoPoint) -> Self {
        Self { site }
    }

    pub fn site(&self) -> GeoPoint {
        self.site
    }

    fn star_position(&self, star: &StarRecord, at: DateTime<Utc>) -> CelestialPosition {
        let icrs = direction::ICRS::new(Degrees::new(star.ra), Degrees::new(star.dec));
        let hz = horizontal_position(&icrs, self.site.latitude, self.site.longitude, at);
        CelestialPosition {
            name: star.name.to_string(),
            local_name: star.local_name.to_string(),
            kind: BodyKind::Star,
            azimuth: hz.azimuth,
            altitude: hz.altitude,
            ra: star.ra,
            dec: star.dec,
            magnitude: Some(star.magnitude),
        }
    }

    fn solar_horizontal(&self, body: &SolarBody, at: DateTime<Utc>) -> Option<Horizontal> {
        let (lat, lon) = (self.site.latitude, self.site.longitude);
        let hz = match body.name {
            "Sun" => horizontal_position(&Sun, lat, lon, at),
            "Moon" => horizontal_position(&Moon, lat, lon, at),
            "Mercury" => horizontal_position(&Mercury, lat, lon, at),
            "Venus" => horizontal_position(&Venus, lat, lon, at),
            "Mars" => horizontal_position(&Mars, lat, lon, at),
            "Jupiter" => horizontal_position(&Jupiter, lat, lon, at),
            "Saturn" => horizontal_position(&Saturn, lat, lon, at),
            "Uranus" => horizontal_position(&Uranus, lat, lon, at),
            "Neptune" => horizontal_position(&Neptune, lat, lon, at),
            other => {
                log::debug!("No ephemeris for {}", other);
                return None;
            }
        };
        Some(hz)
    }

    fn solar_position(&self, body: &SolarBody, at: DateTime<Utc>) -> Option<CelestialPosition> {
        let hz = self.solar_horizontal(body, at)?;
        if !hz.altitude.is_finite() || !hz.azimuth.is_finite() {
            log::warn!("Ephemeris returned no usable position for {}", body.name);
            return None;
        }
        let eq = horizontal_to_equatorial(hz, self.site.latitude, self.site.longitude, at);
        Some(CelestialPosition {
            name: body.name.to_string(),
            local_name: body.local_name.to_string(),
            kind: body.kind,
            azimuth: hz.azimuth,
            altitude: hz.altitude,
            ra: eq.ra,
            dec: eq.dec,
            magnitude: None,
        })
    }
}

impl CoordinateProjector for CatalogProjector {
    fn resolve(&self, body: &str, at: DateTime<Utc>) -> Option<CelestialPosition> {
        if let Some(star) = find_star(body) {
            return Some(self.star_position(star, at));
        }
        self.solar_position(find_solar_body(body)?, at)
    }

    fn catalog(&self) -> Vec<CatalogEntry> {
        BRIGHT_STARS
            .iter()
            .map(CatalogEntry::from)
            .chain(SOLAR_SYSTEM.iter().map(CatalogEntry::from))
            .collect()
    }
}
