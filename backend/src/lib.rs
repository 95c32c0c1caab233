//! # Stargaze Backend
//!
//! Observation-site recommendation engine for stargazing on Sanshan Island.
//!
//! Given a celestial object and a time, the engine finds the island's
//! observation points whose field of view covers the object and ranks them
//! on geographic alignment, view centrality, accessibility and sky
//! darkness. Users can bias the ranking with AHP pairwise comparisons.
//! A separate analyzer ranks unmarked terrain from a sampled elevation grid,
//! excluding spots whose line of sight is blocked by higher ground.
//!
//! ## Architecture
//!
//! - [`algorithms`]: geodesy helpers and AHP weight derivation
//! - [`astro`]: bright-star catalog, siderust ephemeris bridge, coordinate projector
//! - [`models`]: domain types shared by every layer
//! - [`services`]: scoring, visibility, terrain, weather and the recommendation service
//! - [`io`]: file-backed point store, terrain cache and weather report
//! - [`cache`]: TTL cache with an injectable clock
//! - [`config`]: TOML configuration
//! - [`http`]: Axum-based HTTP server and request handlers

// StargazeError carries an ErrorContext on most variants
#![allow(clippy::result_large_err)]

pub mod algorithms;
pub mod astro;
pub mod cache;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use config::AppConfig;
pub use error::{NoRecommendation, StargazeError, StargazeResult};
pub use services::{Recommendation, StargazeService};
