//! Topocentric positions from siderust's analytical ephemerides.
//!
//! Stars go through siderust's ICRS direction pipeline, the Sun, Moon and
//! planets through its VSOP87/ELP2000 providers. Positions are for an
//! observer at sea level.

use chrono::{DateTime, Utc};
use siderust::coordinates::centers::Geodetic;
use siderust::coordinates::frames::ECEF;
use siderust::ephemeris::Vsop87Ephemeris;
use siderust::event::lunar::phase::moon_phase_geocentric;
use siderust::qtty::{Degrees, Meters};
use siderust::time::{JulianDate, ModifiedJulianDate};
use siderust::{AltitudeProvider, AzimuthProvider};

use crate::algorithms::normalize_azimuth;

const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const J2000_JD: f64 = 2_451_545.0;
const MJD_OFFSET: f64 = 2_400_000.5;
/// TT - UTC in seconds since the 2017 leap second.
const TT_MINUS_UTC: f64 = 69.184;

/// Equatorial coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    pub ra: f64,
    pub dec: f64,
}

/// Horizontal coordinates in degrees. Azimuth is clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Julian day on the UTC axis.
pub fn julian_day(at: DateTime<Utc>) -> f64 {
    let unix = at.timestamp() as f64 + at.timestamp_subsec_nanos() as f64 * 1e-9;
    UNIX_EPOCH_JD + unix / 86_400.0
}

fn terrestrial_jd(at: DateTime<Utc>) -> f64 {
    julian_day(at) + TT_MINUS_UTC / 86_400.0
}

/// Modified Julian date on the TT axis, as siderust's providers expect.
pub fn terrestrial_mjd(at: DateTime<Utc>) -> ModifiedJulianDate {
    ModifiedJulianDate::new(terrestrial_jd(at) - MJD_OFFSET)
}

pub fn observer_site(latitude: f64, longitude: f64) -> Geodetic<ECEF> {
    Geodetic::<ECEF>::new(
        Degrees::new(longitude),
        Degrees::new(latitude),
        Meters::new(0.0),
    )
}

/// Greenwich mean sidereal time in degrees, `[0, 360)`.
pub fn gmst(at: DateTime<Utc>) -> f64 {
    let d = julian_day(at) - J2000_JD;
    let t = d / 36_525.0;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_azimuth(theta)
}

/// Where `body` stands in the observer's sky at `at`.
pub fn horizontal_position<B>(
    body: &B,
    latitude: f64,
    longitude: f64,
    at: DateTime<Utc>,
) -> Horizontal
where
    B: AltitudeProvider + AzimuthProvider,
{
    let site = observer_site(latitude, longitude);
    let azimuth = body.azimuth_at(&site, terrestrial_mjd(at));
    let altitude = body.altitude_at(&site, terrestrial_mjd(at));
    Horizontal {
        azimuth: normalize_azimuth(azimuth.value().to_degrees()),
        altitude: altitude.value().to_degrees(),
    }
}

/// Right ascension and declination of date for a point on the observer's horizon system.
pub fn horizontal_to_equatorial(
    hz: Horizontal,
    latitude: f64,
    longitude: f64,
    at: DateTime<Utc>,
) -> Equatorial {
    let az = hz.azimuth.to_radians();
    let alt = hz.altitude.to_radians();
    let lat = latitude.to_radians();

    let sin_dec = alt.sin() * lat.sin() + alt.cos() * lat.cos() * az.cos();
    let dec = sin_dec.clamp(-1.0, 1.0).asin();

    let y = -az.sin() * alt.cos();
    let x = alt.sin() * lat.cos() - alt.cos() * lat.sin() * az.cos();
    let hour_angle = y.atan2(x).to_degrees();

    Equatorial {
        ra: normalize_azimuth(gmst(at) + longitude - hour_angle),
        dec: dec.to_degrees(),
    }
}

/// Lunar phase in `[0, 1)`: 0 new, 0.5 full.
pub fn moon_phase(at: DateTime<Utc>) -> f64 {
    let geometry = moon_phase_geocentric::<Vsop87Ephemeris>(JulianDate::new(terrestrial_jd(at)));
    normalize_azimuth(geometry.elongation.value().to_degrees()) / 360.0
}
