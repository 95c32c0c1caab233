//! Observation point store.
//!
//! One point per line, whitespace separated:
//!
//! ```text
//! longitude latitude difficulty view_start view_end name...
//! 120.285 31.025 中等 0 150 山腰观测点1
//! ```
//!
//! The name takes every remaining field, so it may contain spaces.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ErrorContext, StargazeError, StargazeResult};
use crate::models::{Difficulty, ObservationPoint};

const BOM: char = '\u{feff}';

/// Parse one record. `None` for lines that are not a valid point.
pub fn parse_line(line: &str) -> Option<ObservationPoint> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 6 {
        return None;
    }

    let longitude = parts[0].parse::<f64>().ok()?;
    let latitude = parts[1].parse::<f64>().ok()?;
    let view_start = parts[3].parse::<f64>().ok()?;
    let view_end = parts[4].parse::<f64>().ok()?;
    if ![longitude, latitude, view_start, view_end]
        .iter()
        .all(|v| v.is_finite())
    {
        return None;
    }

    Some(ObservationPoint::new(
        parts[5..].join(" "),
        longitude,
        latitude,
        Difficulty::from_label(parts[2]),
        view_start,
        view_end,
    ))
}

/// Parse a whole point file, skipping blank, malformed and duplicate lines.
pub fn parse_points(content: &str) -> Vec<ObservationPoint> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut seen = HashSet::new();
    let mut points = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(point) if seen.contains(&point.name) => {
                log::warn!("Line {}: duplicate point '{}' skipped", index + 1, point.name);
            }
            Some(point) => {
                seen.insert(point.name.clone());
                points.push(point);
            }
            None => log::warn!("Line {}: malformed point record skipped: {}", index + 1, line),
        }
    }

    points
}

/// Read and parse a point file.
///
/// # Errors
/// `Io` if the file cannot be read.
pub fn load_points<P: AsRef<Path>>(path: P) -> StargazeResult<Vec<ObservationPoint>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        StargazeError::io(
            format!("Failed to read points file: {}", e),
            ErrorContext::new("load_points")
                .with_entity("observation_point")
                .with_entity_id(path.display()),
        )
    })?;

    let points = parse_points(&content);
    log::info!("Loaded {} observation points from {}", points.len(), path.display());
    Ok(points)
}
