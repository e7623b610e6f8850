// Integration tests (native) for the `bat-chase` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use bat_chase::{ClickOutcome, GameConfig, GameSession, visible_offset};
use glam::DVec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session_with_target(x: f64, y: f64, speed: f64) -> GameSession {
    let mut session = GameSession::new(GameConfig::default());
    session.target.pos = DVec2::new(x, y);
    session.target.speed = speed;
    session
}

#[test]
fn click_on_center_scores_and_speeds_up() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = session_with_target(100.0, 100.0, 3.0);
    let outcome = session.click(100.0, 100.0, 500.0, &mut rng);
    assert_eq!(outcome, ClickOutcome::Hit { score: 1 });
    assert_eq!(session.score, 1);
    assert_eq!(session.target.speed, 3.5);
    assert_eq!(session.target.direction_interval_ms, 1900);
}

#[test]
fn click_on_box_edge_misses() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = session_with_target(100.0, 100.0, 3.0);
    assert_eq!(session.click(80.0, 100.0, 0.0, &mut rng), ClickOutcome::Miss);
    assert_eq!(session.score, 0);
    assert_eq!(session.target.speed, 3.0);
}

#[test]
fn repeated_hits_floor_interval_at_500() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut session = session_with_target(400.0, 300.0, 3.0);
    for n in 1..=20u32 {
        // Keep the target under the cursor; the hit re-randomizes velocity only.
        let pos = session.target.pos;
        session.click(pos.x, pos.y, f64::from(n) * 10.0, &mut rng);
        let expected = 2000u32.saturating_sub(100 * n).max(500);
        assert_eq!(session.target.direction_interval_ms, expected);
    }
    assert_eq!(session.score, 20);
    assert_eq!(session.target.direction_interval_ms, 500);
    assert_eq!(session.target.speed, 13.0);
}

#[test]
fn offset_minus_150_on_100_wide_tile_shows_50() {
    assert_eq!(visible_offset(-150.0, 100.0).unwrap(), 50.0);
}

#[test]
fn background_tracks_target_heading() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = session_with_target(400.0, 300.0, 3.0);
    session.target.vel = DVec2::new(2.0, 0.0);
    // Well inside the walls and before the first redirect.
    for frame in 0..10 {
        session.tick(f64::from(frame) * 16.0, &mut rng);
    }
    assert_eq!(session.target.pos.x, 420.0);
    assert_eq!(session.background.offset, -10.0);
}

#[test]
fn timer_redirects_after_interval_and_keeps_speed() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = session_with_target(400.0, 300.0, 3.0);
    session.target.vel = DVec2::new(0.0, 0.0);
    let first = session.tick(1_000.0, &mut rng);
    assert!(!first.redirected);
    assert_eq!(session.target.last_direction_change, Some(1_000.0));
    let second = session.tick(3_001.0, &mut rng);
    assert!(second.redirected);
    assert!((session.target.vel.length() - 3.0).abs() < 1e-9);
}

#[test]
fn start_randomizes_heading_at_initial_speed() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = GameSession::new(GameConfig::default());
    assert_eq!(session.target.pos, DVec2::new(400.0, 300.0));
    session.start(&mut rng);
    assert!((session.target.vel.length() - 3.0).abs() < 1e-9);
}
