//! Performance benchmarks for skill calculations

use aimforge::{analyze_trend, build_report, calculate_skill_profile, project_rank, PlayerStats};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_stats() -> PlayerStats {
    PlayerStats {
        headshot: 22.0,
        kd: 1.15,
        adr: 96.0,
        winrate: 54.0,
        consistency: 68.0,
    }
}

fn bench_skill_profile(c: &mut Criterion) {
    let stats = bench_stats();

    c.bench_function("skill_profile", |b| {
        b.iter(|| black_box(calculate_skill_profile(black_box(&stats))))
    });
}

fn bench_rank_projection(c: &mut Criterion) {
    let stats = bench_stats();
    let profile = calculate_skill_profile(&stats);

    c.bench_function("rank_projection", |b| {
        b.iter(|| black_box(project_rank(black_box(&stats), black_box(&profile))))
    });
}

fn bench_trend_analysis(c: &mut Criterion) {
    let short: Vec<f64> = (0..10).map(|i| 50.0 + (i as f64) * 1.5).collect();
    let long: Vec<f64> = (0..1000).map(|i| 50.0 + ((i % 37) as f64) * 0.25).collect();

    c.bench_function("trend_analysis_10_points", |b| {
        b.iter(|| black_box(analyze_trend(black_box(&short))))
    });

    c.bench_function("trend_analysis_1000_points", |b| {
        b.iter(|| black_box(analyze_trend(black_box(&long))))
    });
}

fn bench_player_report(c: &mut Criterion) {
    let stats = bench_stats();
    let history: Vec<f64> = (0..20).map(|i| 40.0 + i as f64).collect();

    c.bench_function("player_report", |b| {
        b.iter(|| black_box(build_report(black_box(&stats), Some(&history))))
    });
}

criterion_group!(
    benches,
    bench_skill_profile,
    bench_rank_projection,
    bench_trend_analysis,
    bench_player_report
);
criterion_main!(benches);
