//! Azimuth-window visibility filter.

use crate::algorithms::normalize_azimuth;
use crate::models::ObservationPoint;

/// Whether `point` can see an object at `target_azimuth`.
///
/// The window is inclusive at both ends. A window with `view_start >
/// view_end` wraps through north.
pub fn can_observe(point: &ObservationPoint, target_azimuth: f64) -> bool {
    let azimuth = normalize_azimuth(target_azimuth);

    if point.view_start <= point.view_end {
        point.view_start <= azimuth && azimuth <= point.view_end
    } else {
        azimuth >= point.view_start || azimuth <= point.view_end
    }
}

/// All points whose window covers `target_azimuth`, in input order.
pub fn filter_observable(points: &[ObservationPoint], target_azimuth: f64) -> Vec<&ObservationPoint> {
    points
        .iter()
        .filter(|p| can_observe(p, target_azimuth))
        .collect()
}
