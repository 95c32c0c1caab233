//! Built-in object catalog: bright stars (J2000) and solar-system bodies.

use crate::models::{BodyKind, CatalogEntry};

/// A fixed star with J2000 equatorial coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRecord {
    pub name: &'static str,
    pub local_name: &'static str,
    pub ra: f64,
    pub dec: f64,
    pub magnitude: f64,
}

const fn star(name: &'static str, local_name: &'static str, ra: f64, dec: f64, magnitude: f64) -> StarRecord {
    StarRecord {
        name,
        local_name,
        ra,
        dec,
        magnitude,
    }
}

pub static BRIGHT_STARS: [StarRecord; 41] = [
    star("Sirius", "天狼星", 101.287, -16.716, -1.46),
    star("Canopus", "老人星", 95.988, -52.696, -0.72),
    star("Arcturus", "大角星", 213.915, 19.182, -0.05),
    star("Vega", "织女星", 279.234, 38.783, 0.03),
    star("Capella", "五车二", 79.172, 45.998, 0.08),
    star("Rigel", "参宿七", 78.634, -8.202, 0.12),
    star("Procyon", "南河三", 114.826, 5.225, 0.38),
    star("Betelgeuse", "参宿四", 88.793, 7.407, 0.50),
    star("Altair", "牛郎星", 297.696, 8.868, 0.77),
    star("Aldebaran", "毕宿五", 68.980, 16.509, 0.85),
    star("Spica", "角宿一", 201.298, -11.161, 0.98),
    star("Antares", "心宿二", 247.352, -26.432, 1.09),
    star("Pollux", "北河三", 116.329, 28.026, 1.14),
    star("Fomalhaut", "北落师门", 344.413, -29.622, 1.16),
    star("Deneb", "天津四", 310.358, 45.280, 1.25),
    star("Regulus", "轩辕十四", 152.093, 11.967, 1.35),
    star("Castor", "北河二", 113.650, 31.888, 1.58),
    star("Polaris", "北极星", 37.954, 89.264, 1.98),
    star("Achernar", "水委一", 24.429, -57.237, 0.46),
    star("Bellatrix", "参宿五", 81.283, 6.350, 1.64),
    star("Alnilam", "参宿二", 84.053, -1.202, 1.69),
    star("Alnitak", "参宿一", 85.190, -1.943, 1.77),
    star("Saiph", "参宿六", 86.939, -9.669, 2.06),
    star("Mirfak", "天船三", 51.081, 49.861, 1.79),
    star("Dubhe", "天枢", 165.932, 61.751, 1.79),
    star("Alkaid", "摇光", 206.885, 49.313, 1.86),
    star("Alioth", "玉衡", 193.507, 55.960, 1.77),
    star("Mizar", "开阳", 200.981, 54.925, 2.27),
    star("Merak", "天璇", 165.460, 56.382, 2.37),
    star("Phecda", "天玑", 178.457, 53.695, 2.44),
    star("Megrez", "天权", 183.856, 57.032, 3.31),
    star("Shaula", "尾宿八", 263.402, -37.104, 1.63),
    star("Sargas", "尾宿五", 264.330, -42.998, 1.87),
    star("Kaus Australis", "箕宿三", 276.043, -34.385, 1.85),
    star("Nunki", "斗宿四", 283.816, -26.297, 2.02),
    star("Peacock", "孔雀十一", 306.412, -56.735, 1.94),
    star("Alphard", "星宿一", 141.897, -8.658, 1.98),
    star("Hamal", "娄宿三", 31.793, 23.462, 2.00),
    star("Schedar", "王良一", 10.127, 56.537, 2.23),
    star("Diphda", "土司空", 10.897, -17.987, 2.04),
    star("Rasalhague", "侯", 263.733, 12.560, 2.08),
];

/// A solar-system body known by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarBody {
    pub name: &'static str,
    pub local_name: &'static str,
    pub kind: BodyKind,
}

pub static SOLAR_SYSTEM: [SolarBody; 9] = [
    SolarBody { name: "Sun", local_name: "太阳", kind: BodyKind::Sun },
    SolarBody { name: "Moon", local_name: "月亮", kind: BodyKind::Moon },
    SolarBody { name: "Mercury", local_name: "水星", kind: BodyKind::Planet },
    SolarBody { name: "Venus", local_name: "金星", kind: BodyKind::Planet },
    SolarBody { name: "Mars", local_name: "火星", kind: BodyKind::Planet },
    SolarBody { name: "Jupiter", local_name: "木星", kind: BodyKind::Planet },
    SolarBody { name: "Saturn", local_name: "土星", kind: BodyKind::Planet },
    SolarBody { name: "Uranus", local_name: "天王星", kind: BodyKind::Planet },
    SolarBody { name: "Neptune", local_name: "海王星", kind: BodyKind::Planet },
];

fn matches(name: &str, local_name: &str, query: &str) -> bool {
    name.eq_ignore_ascii_case(query) || local_name == query
}

/// Look up a star by English (case-insensitive) or local name.
pub fn find_star(query: &str) -> Option<&'static StarRecord> {
    let query = query.trim();
    BRIGHT_STARS.iter().find(|s| matches(s.name, s.local_name, query))
}

/// Look up a solar-system body by English (case-insensitive) or local name.
pub fn find_solar_body(query: &str) -> Option<&'static SolarBody> {
    let query = query.trim();
    SOLAR_SYSTEM.iter().find(|b| matches(b.name, b.local_name, query))
}

impl From<&StarRecord> for CatalogEntry {
    fn from(star: &StarRecord) -> Self {
        CatalogEntry {
            name: star.name.to_string(),
            local_name: star.local_name.to_string(),
            kind: BodyKind::Star,
            magnitude: Some(star.magnitude),
        }
    }
}

impl From<&SolarBody> for CatalogEntry {
    fn from(body: &SolarBody) -> Self {
        CatalogEntry {
            name: body.name.to_string(),
            local_name: body.local_name.to_string(),
            kind: body.kind,
            magnitude: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = BRIGHT_STARS
            .iter()
            .map(|s| s.name)
            .chain(SOLAR_SYSTEM.iter().map(|b| b.name))
            .collect();
        assert_eq!(names.len(), BRIGHT_STARS.len() + SOLAR_SYSTEM.len());
    }

    #[test]
    fn test_lookup_by_either_name() {
        assert_eq!(find_star("vega").map(|s| s.local_name), Some("织女星"));
        assert_eq!(find_star("织女星").map(|s| s.name), Some("Vega"));
        assert_eq!(find_star(" Kaus Australis ").map(|s| s.magnitude), Some(1.85));
        assert!(find_star("Betelgeuze").is_none());

        assert_eq!(find_solar_body("moon").map(|b| b.kind), Some(BodyKind::Moon));
        assert_eq!(find_solar_body("木星").map(|b| b.name), Some("Jupiter"));
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(BRIGHT_STARS.len(), 41);
        assert_eq!(SOLAR_SYSTEM.len(), 9);
        let planets = SOLAR_SYSTEM.iter().filter(|b| b.kind == BodyKind::Planet).count();
        assert_eq!(planets, 7);
    }

    #[test]
    fn test_coordinates_in_range() {
        for s in &BRIGHT_STARS {
            assert!((0.0..360.0).contains(&s.ra), "{}", s.name);
            assert!((-90.0..=90.0).contains(&s.dec), "{}", s.name);
        }
    }
}
