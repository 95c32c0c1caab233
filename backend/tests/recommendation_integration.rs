mod support;

use chrono::{TimeZone, Utc};

use stargaze::algorithms::PairwiseComparisons;
use stargaze::io::parse_points;
use stargaze::models::{CriterionWeights, Difficulty, WeatherSnapshot, WeightSource};
use stargaze::{AppConfig, NoRecommendation, StargazeError, StargazeService};

use support::{fixed_service, SECTOR_POINTS, SOUTH_FACING_POINTS};

#[test]
fn test_sector_points_load_and_recommend() {
    let service = fixed_service(SECTOR_POINTS);
    assert_eq!(service.points().len(), 3);

    let rec = service.recommend("Antares", None, None, None).unwrap();
    assert_eq!(rec.target.name, "Antares");
    assert_eq!(rec.best.point.name, "南坡平台");
    assert_eq!(rec.ranking.len(), 1);
    assert_eq!(rec.weight_source, WeightSource::Default);

    let rec = service.recommend("capella", None, None, None).unwrap();
    assert_eq!(rec.best.point.name, "东北观景台");
    assert_eq!(rec.best.point.difficulty, Difficulty::Easy);
}

#[test]
fn test_target_below_horizon() {
    let service = fixed_service(SECTOR_POINTS);
    match service.recommend("Canopus", None, None, None) {
        Err(StargazeError::NotFound(NoRecommendation::BelowHorizon { target, altitude })) => {
            assert_eq!(target, "Canopus");
            assert_eq!(altitude, -20.0);
        }
        other => panic!("expected BelowHorizon, got {:?}", other.map(|r| r.best.point.name)),
    }
}

#[test]
fn test_unknown_target_is_not_found() {
    let service = fixed_service(SECTOR_POINTS);
    let err = service.recommend("Nibiru", None, None, None).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_ranking_is_sorted_and_weighted() {
    let service = fixed_service(SOUTH_FACING_POINTS);
    let rec = service.recommend("Antares", None, None, None).unwrap();

    assert_eq!(rec.ranking.len(), 3);
    assert!(rec.ranking.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(rec.best, rec.ranking[0]);

    let w = CriterionWeights::default();
    for scored in &rec.ranking {
        let b = &scored.breakdown;
        let expected = w.location * b.geographic
            + w.view * b.view
            + w.difficulty * b.difficulty
            + w.light_pollution * b.light_pollution;
        assert!((scored.score - expected).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&scored.score));
        // No estimator reading, so the neutral score applies
        assert_eq!(b.light_pollution, 50.0);
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let service = fixed_service(SOUTH_FACING_POINTS);
    let at = Utc.with_ymd_and_hms(2024, 8, 12, 14, 0, 0).unwrap();
    let first = service.recommend("Antares", Some(at), None, None).unwrap();
    let second = service.recommend("Antares", Some(at), None, None).unwrap();
    let names = |r: &stargaze::Recommendation| {
        r.ranking
            .iter()
            .map(|s| s.point.name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&first), names(&second));
}

#[test]
fn test_difficulty_heavy_preferences_favor_easy_points() {
    let service = fixed_service(SOUTH_FACING_POINTS);
    // Difficulty is nine times as important as every other criterion
    let comparisons = PairwiseComparisons::from_ratios([1.0, 1.0 / 9.0, 1.0 / 9.0, 1.0, 1.0, 9.0]);
    let rec = service
        .recommend("Antares", None, Some(&comparisons), None)
        .unwrap();

    assert_eq!(rec.weight_source, WeightSource::User);
    assert!((rec.weights.difficulty - 0.75).abs() < 1e-9);
    assert!(rec.consistency_ratio.unwrap() < 1e-9);
    assert_eq!(rec.best.point.difficulty, Difficulty::Easy);
    assert_eq!(rec.ranking.last().unwrap().point.name, "中心岩台");
}

#[test]
fn test_malformed_preferences_fall_back_to_defaults() {
    let service = fixed_service(SOUTH_FACING_POINTS);
    let comparisons = PairwiseComparisons::from_ratios([1.0, -3.0, 1.0, 1.0, f64::NAN, 1.0]);
    let rec = service
        .recommend("Antares", None, Some(&comparisons), None)
        .unwrap();
    assert_eq!(rec.weight_source, WeightSource::Fallback);
    assert_eq!(rec.weights, CriterionWeights::default());
    assert!(rec.consistency_ratio.is_none());

    let plain = service.recommend("Antares", None, None, None).unwrap();
    assert_eq!(rec.best.point.name, plain.best.point.name);
}

#[test]
fn test_weather_conditions_attached() {
    let service = fixed_service(SECTOR_POINTS);
    let weather = WeatherSnapshot {
        cloud_cover: 80.0,
        humidity: 90.0,
        temperature: 21.0,
        wind_speed: None,
        moon_phase: 0.5,
        moon_altitude: Some(40.0),
        sunrise: None,
        sunset: None,
    };
    let rec = service
        .recommend("Antares", None, None, Some(&weather))
        .unwrap();
    let conditions = rec.conditions.unwrap();
    assert_eq!(conditions.stargazing_score, 14.0);
    assert_eq!(conditions.condition_text, "不宜");
    assert_eq!(conditions.moon_phase_text, "满月");
    assert_eq!(rec.best.breakdown.weather, Some(14.0));
}

#[test]
fn test_polaris_from_north_facing_point() {
    let points = parse_points(
        "120.2900 31.0400 简单 300 60 北岸栈道\n\
         120.2900 31.0200 简单 120 240 南岸沙滩\n",
    );
    let service = StargazeService::from_config(points, &AppConfig::default());

    let at = Utc.with_ymd_and_hms(2024, 8, 12, 14, 0, 0).unwrap();
    let rec = service.recommend("北极星", Some(at), None, None).unwrap();

    assert_eq!(rec.target.name, "Polaris");
    assert!((rec.target.altitude - 31.03).abs() < 1.5);
    assert_eq!(rec.ranking.len(), 1);
    assert_eq!(rec.best.point.name, "北岸栈道");
    assert!(rec.best.light_pollution.is_some());
}

#[test]
fn test_visible_objects_with_real_catalog() {
    let service = StargazeService::from_config(Vec::new(), &AppConfig::default());
    let at = Utc.with_ymd_and_hms(2024, 8, 12, 14, 0, 0).unwrap();

    let visible = service.visible_objects(Some(at), 10.0);
    assert!(visible.iter().any(|p| p.name == "Polaris"));
    assert!(visible.iter().all(|p| p.altitude >= 10.0));
    assert!(visible.windows(2).all(|w| w[0].altitude >= w[1].altitude));

    let catalog = service.catalog();
    assert_eq!(catalog.len(), 50);
    assert_eq!(catalog[0].name, "Sirius");
    assert!(catalog[41..].iter().all(|e| e.magnitude.is_none()));
}

#[test]
fn test_planet_recommended_from_east_facing_point() {
    let points = parse_points(
        "120.2950 31.0300 简单 30 150 东岸码头\n\
         120.2850 31.0300 简单 210 330 西岸礁石\n",
    );
    let service = StargazeService::from_config(points, &AppConfig::default());

    // 04:00 local, Jupiter rising in the east
    let at = Utc.with_ymd_and_hms(2024, 8, 12, 20, 0, 0).unwrap();
    let rec = service.recommend("木星", Some(at), None, None).unwrap();

    assert_eq!(rec.target.name, "Jupiter");
    assert!(rec.target.altitude > 0.0);
    assert_eq!(rec.ranking.len(), 1);
    assert_eq!(rec.best.point.name, "东岸码头");
}
