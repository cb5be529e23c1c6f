//! Test fixtures for integration testing

#![allow(dead_code)]

use aimforge::PlayerStats;

/// Stats at the top of every profile band
pub fn maximum_stats() -> PlayerStats {
    PlayerStats {
        headshot: 35.0,
        kd: 1.5,
        adr: 180.0,
        winrate: 65.0,
        consistency: 100.0,
    }
}

/// Stats at the bottom of every profile band
pub fn minimum_stats() -> PlayerStats {
    PlayerStats {
        headshot: 5.0,
        kd: 0.5,
        adr: 80.0,
        winrate: 40.0,
        consistency: 0.0,
    }
}

/// A mid-table player with every stat inside its band
pub fn typical_stats() -> PlayerStats {
    PlayerStats {
        headshot: 15.0,
        kd: 1.2,
        adr: 100.0,
        winrate: 50.0,
        consistency: 80.0,
    }
}

/// Player stats JSON as a host application would send it
pub fn typical_stats_json() -> &'static str {
    r#"{"headshot":15,"kd":1.2,"adr":100,"winrate":50,"consistency":80}"#
}

/// Histories paired with the trend name they classify as
pub fn labelled_histories() -> Vec<(Vec<f64>, &'static str)> {
    vec![
        (vec![1.0, 2.0], "insufficient_data"),
        (vec![1.0, 2.0, 3.0, 4.0, 5.0], "improving"),
        (vec![10.0, 8.0, 5.0, 1.0], "declining"),
        (vec![0.0, 10.0, 20.0, 30.0], "accelerating"),
        (vec![50.0, 52.0, 51.0, 53.0], "stable"),
    ]
}
