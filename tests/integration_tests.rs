//! Integration tests for the aimforge skill engine
//!
//! These tests drive the public API the way a host application does:
//! - Profile feeding rank projection
//! - Trend analysis over standalone histories
//! - JSON contracts for inputs and results
//! - Engines built from TOML configuration

mod fixtures;

use aimforge::config::AppConfig;
use aimforge::{
    analyze_trend, build_report, calculate_skill_profile, project_rank, ReportRequest,
    SkillEngine, Trend,
};

use fixtures::{labelled_histories, maximum_stats, minimum_stats, typical_stats};

#[test]
fn test_maximum_player_pipeline() {
    let stats = maximum_stats();

    let profile = calculate_skill_profile(&stats);
    assert_eq!(profile.aim_score, 100.0);
    assert_eq!(profile.impact_score, 100.0);
    assert_eq!(profile.consistency_score, 100.0);
    assert_eq!(profile.gsi, 100.0);

    let projection = project_rank(&stats, &profile);
    assert_eq!(projection.next_rank_target, 600);
    assert_eq!(projection.growth_rate, 100.0);
    assert_eq!(projection.estimated_days, Some(10));
}

#[test]
fn test_minimum_player_pipeline() {
    let stats = minimum_stats();

    let profile = calculate_skill_profile(&stats);
    assert_eq!(profile.gsi, 0.0);

    let projection = project_rank(&stats, &profile);
    assert_eq!(projection.next_rank_target, 600);
    assert_eq!(projection.growth_rate, 0.0);
    assert_eq!(projection.estimated_days, None);
}

#[test]
fn test_gsi_above_last_threshold_targets_ceiling() {
    let stats = typical_stats();
    let mut profile = calculate_skill_profile(&stats);
    profile.gsi = 1300.0;

    let projection = project_rank(&stats, &profile);
    assert_eq!(projection.next_rank_target, 1400);
    assert!(projection.estimated_days.is_some());
}

#[test]
fn test_labelled_histories() {
    for (history, expected) in labelled_histories() {
        let result = analyze_trend(&history);
        assert_eq!(
            result.trend.to_string(),
            expected,
            "history {:?} classified as {}",
            history,
            result.trend
        );
    }
}

#[test]
fn test_calls_are_repeatable() {
    let stats = typical_stats();
    let history = [61.0, 58.5, 64.25, 70.0, 69.5];

    let first = build_report(&stats, Some(&history));
    let second = build_report(&stats, Some(&history));

    assert_eq!(first, second);
    assert_eq!(
        first.profile.gsi.to_bits(),
        second.profile.gsi.to_bits()
    );
}

#[test]
fn test_profile_json_contract() {
    let stats = serde_json::from_str(fixtures::typical_stats_json()).unwrap();
    let profile = calculate_skill_profile(&stats);

    let json = serde_json::to_value(profile).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "aimScore": 48.0,
            "impactScore": 26.0,
            "consistencyScore": 80.0,
            "gsi": 47.2
        })
    );
}

#[test]
fn test_report_request_json_contract() {
    let request: ReportRequest = serde_json::from_str(
        r#"{
            "stats": {"headshot":5,"kd":0.5,"adr":80,"winrate":40,"consistency":0},
            "history": [1, 2]
        }"#,
    )
    .unwrap();

    let report = build_report(&request.stats, request.history.as_deref());
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["profile"]["gsi"], 0.0);
    assert_eq!(json["projection"]["nextRankTarget"], 600);
    assert!(json["projection"]["estimatedDays"].is_null());
    assert_eq!(json["trend"], serde_json::json!({ "trend": "insufficient_data" }));
}

#[test]
fn test_report_request_without_history() {
    let request: ReportRequest = serde_json::from_str(
        r#"{"stats": {"headshot":35,"kd":1.5,"adr":180,"winrate":65,"consistency":100}}"#,
    )
    .unwrap();
    assert!(request.history.is_none());

    let json = serde_json::to_value(build_report(&request.stats, None)).unwrap();
    assert!(json.get("trend").is_none());
}

#[test]
fn test_engine_from_toml_config() {
    let config = AppConfig::from_toml_str(
        r#"
        [scoring.rank]
        thresholds = [40, 60, 80]
        ceiling = 100

        [scoring.trend]
        improving_slope = 0.5
        "#,
    )
    .unwrap();
    let engine = SkillEngine::new(config.scoring).unwrap();

    let report = engine.build_report(&typical_stats(), Some(&[50.0, 52.0, 51.0, 53.0]));

    // GSI 47.2 sits between the first two custom thresholds
    assert_eq!(report.projection.next_rank_target, 60);
    assert_eq!(report.trend.map(|t| t.trend), Some(Trend::Improving));
}
