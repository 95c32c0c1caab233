mod support;

use stargaze::io::TerrainStore;
use stargaze::models::{BoundingBox, ElevationSample};
use stargaze::services::terrain::{analyze, TerrainConfig};
use stargaze::services::TargetDirection;

use support::ridge_samples;

#[test]
fn test_cached_grid_round_trip_then_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let config = TerrainConfig::default();
    let store = TerrainStore::new(dir.path(), config.bounds, config.grid_size);

    assert_eq!(store.grid().len(), 225);
    assert!(store.load().unwrap().is_none());

    let samples = ridge_samples();
    store.save(&samples).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.len(), 225);

    let report = analyze(&loaded, None, &config);
    assert!(report.evaluated < 225);
    assert_eq!(report.spots.len(), config.top_n);
    assert_eq!(report.occluded, 0);
    assert!(report.spots.iter().all(|s| s.elevation > config.min_elevation));
    assert!(report.spots.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_cache_is_keyed_by_grid() {
    let dir = tempfile::tempdir().unwrap();
    let coarse = TerrainStore::new(dir.path(), BoundingBox::default(), 10);
    let fine = TerrainStore::new(dir.path(), BoundingBox::default(), 15);
    assert_ne!(coarse.cache_path(), fine.cache_path());

    fine.save(&ridge_samples()).unwrap();
    assert!(coarse.load().unwrap().is_none());
    assert!(fine.load().unwrap().is_some());
}

#[test]
fn test_corrupt_cache_is_treated_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = TerrainStore::new(dir.path(), BoundingBox::default(), 15);
    std::fs::write(store.cache_path(), "{ not json").unwrap();
    assert!(store.load().unwrap().is_none());

    // Truncated mid-array
    std::fs::write(store.cache_path(), r#"[{"latitude": 31.02, "longitude""#).unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_low_target_occludes_spots_behind_the_ridge() {
    let config = TerrainConfig::default();
    let samples = ridge_samples();

    let untargeted = analyze(&samples, None, &config);
    assert_eq!(untargeted.occluded, 0);

    // Looking north at a low target: southern slopes face the ridge
    let north = analyze(
        &samples,
        Some(TargetDirection {
            azimuth: 0.0,
            altitude: 1.0,
        }),
        &config,
    );
    assert_eq!(north.evaluated, untargeted.evaluated);
    assert!(north.occluded > 0);
    assert!(north.spots.iter().all(|s| s.direction_score.is_some()));

    // High targets clear every ridge
    let overhead = analyze(
        &samples,
        Some(TargetDirection {
            azimuth: 0.0,
            altitude: 75.0,
        }),
        &config,
    );
    assert_eq!(overhead.occluded, 0);
}

#[test]
fn test_all_water_grid_yields_nothing() {
    let samples: Vec<ElevationSample> = ridge_samples()
        .into_iter()
        .map(|s| ElevationSample::new(s.latitude, s.longitude, 1.0))
        .collect();
    let report = analyze(&samples, None, &TerrainConfig::default());
    assert_eq!(report.evaluated, 0);
    assert!(report.spots.is_empty());
}
