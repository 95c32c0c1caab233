use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Arithmetic mean of a set of points, `None` when empty.
    pub fn centroid<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut count = 0usize;
        let (mut lat, mut lon) = (0.0, 0.0);
        for p in points {
            lat += p.latitude;
            lon += p.longitude;
            count += 1;
        }
        (count > 0).then(|| Self::new(lat / count as f64, lon / count as f64))
    }
}

/// How hard a site is to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Label not recognized; scored with the configured default cost.
    Unrated,
}

impl Difficulty {
    /// Parse a difficulty label from the point store.
    ///
    /// Accepts English and Chinese category names, and the legacy 0-100 numeric
    /// scores (`<= 30` easy, `<= 60` medium, otherwise hard).
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label.to_lowercase().as_str() {
            "easy" | "简单" => return Self::Easy,
            "medium" | "中等" => return Self::Medium,
            "hard" | "困难" => return Self::Hard,
            _ => {}
        }

        match label.parse::<f64>() {
            Ok(score) if score.is_finite() && score <= 30.0 => Self::Easy,
            Ok(score) if score.is_finite() && score <= 60.0 => Self::Medium,
            Ok(score) if score.is_finite() => Self::Hard,
            _ => Self::Unrated,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unrated => "unrated",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named stargazing site with a clockwise field of view.
///
/// `view_start..view_end` is read clockwise from north. When `view_start >
/// view_end` the window wraps through 0°.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationPoint {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub difficulty: Difficulty,
    pub view_start: f64,
    pub view_end: f64,
}

impl ObservationPoint {
    pub fn new(
        name: impl Into<String>,
        longitude: f64,
        latitude: f64,
        difficulty: Difficulty,
        view_start: f64,
        view_end: f64,
    ) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude,
            difficulty,
            view_start,
            view_end,
        }
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Whether the window wraps through north.
    pub fn wraps(&self) -> bool {
        self.view_start > self.view_end
    }

    /// Center azimuth of the view window.
    pub fn view_center(&self) -> f64 {
        if self.wraps() {
            ((self.view_start + self.view_end + 360.0) / 2.0) % 360.0
        } else {
            (self.view_start + self.view_end) / 2.0
        }
    }

    /// Half of the angular width of the view window.
    pub fn view_half_width(&self) -> f64 {
        if self.wraps() {
            (self.view_end + 360.0 - self.view_start) / 2.0
        } else {
            (self.view_end - self.view_start) / 2.0
        }
    }
}

impl fmt::Display for ObservationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::from_label("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("困难"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("简单"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("steep"), Difficulty::Unrated);
    }

    #[test]
    fn test_difficulty_legacy_scores() {
        assert_eq!(Difficulty::from_label("30"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("31"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("60"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("100"), Difficulty::Hard);
    }

    #[test]
    fn test_view_window_geometry() {
        let direct = ObservationPoint::new("a", 120.0, 31.0, Difficulty::Easy, 30.0, 90.0);
        assert_eq!(direct.view_center(), 60.0);
        assert_eq!(direct.view_half_width(), 30.0);
        assert!(!direct.wraps());

        let wrapping = ObservationPoint::new("b", 120.0, 31.0, Difficulty::Easy, 350.0, 10.0);
        assert!(wrapping.wraps());
        assert_eq!(wrapping.view_center(), 0.0);
        assert_eq!(wrapping.view_half_width(), 10.0);

        let wide = ObservationPoint::new("c", 120.0, 31.0, Difficulty::Easy, 300.0, 120.0);
        assert_eq!(wide.view_center(), 30.0);
        assert_eq!(wide.view_half_width(), 90.0);
    }

    #[test]
    fn test_centroid() {
        let c = GeoPoint::centroid([GeoPoint::new(31.0, 120.0), GeoPoint::new(31.2, 120.4)]).unwrap();
        assert!((c.latitude - 31.1).abs() < 1e-12);
        assert!((c.longitude - 120.2).abs() < 1e-12);
        assert!(GeoPoint::centroid(Vec::new()).is_none());
    }
}
