//! Sky coordinates for the built-in object catalog.

pub mod catalog;
pub mod ephemeris;
pub mod projector;

pub use ephemeris::moon_phase;
pub use projector::{CatalogProjector, CoordinateProjector};
