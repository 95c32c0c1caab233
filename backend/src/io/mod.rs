//! File-backed collaborators: point store, terrain cache, weather report.

pub mod points;
pub mod terrain;
pub mod weather;

pub use points::{load_points, parse_points};
pub use terrain::TerrainStore;
pub use weather::JsonFileWeatherSource;
