use prank_core::constants::*;
use prank_core::{ambient_count, rain_waves, AmbientField, ConfettiField, Shape};

#[test]
fn ambient_count_is_one_per_area_unit() {
    assert_eq!(ambient_count(1500.0, 1000.0), 100);
    assert_eq!(ambient_count(1920.0, 1080.0), 138);
    assert_eq!(ambient_count(100.0, 149.0), 0);
    assert_eq!(ambient_count(0.0, 800.0), 0);
}

#[test]
fn ambient_field_reseeds_on_resize() {
    let mut f = AmbientField::new(300.0, 500.0, 1);
    assert_eq!(f.particles().len(), 10);
    f.resize(600.0, 500.0);
    assert_eq!(f.particles().len(), 20);
    assert_eq!(f.size(), (600.0, 500.0));
    for p in f.particles() {
        assert!(p.size >= 0.5 && p.size <= 2.5);
        assert!(p.opacity >= 0.1 && p.opacity <= 0.6);
        assert_eq!(p.shape, Shape::Circle);
    }
}

#[test]
fn ambient_particles_stay_on_the_canvas() {
    let mut f = AmbientField::new(400.0, 300.0, 9);
    for _ in 0..5_000 {
        f.step();
    }
    for p in f.particles() {
        assert!((0.0..=400.0).contains(&p.pos.x), "x={}", p.pos.x);
        assert!((0.0..=300.0).contains(&p.pos.y), "y={}", p.pos.y);
    }
}

#[test]
fn burst_spawns_at_one_point() {
    let mut f = ConfettiField::new(800.0, 1000.0, 3);
    assert!(!f.is_animating());
    f.burst(400.0, 300.0, CONFETTI_BURST_COUNT);
    assert!(f.is_animating());
    assert_eq!(f.particles().len(), 50);
    assert_eq!(f.spawned(), 50);
    for p in f.particles() {
        assert_eq!((p.pos.x, p.pos.y), (400.0, 300.0));
        assert_eq!(p.opacity, 1.0);
        assert!(p.size >= 5.0 && p.size <= 15.0);
        assert!(p.vel.x >= -10.0 && p.vel.x <= 10.0);
        assert!(p.vel.y >= -20.0 && p.vel.y <= 0.0);
        let color = p.color.expect("confetti is coloured");
        assert!(CONFETTI_PALETTE.contains(&color));
    }
}

#[test]
fn step_applies_gravity_drag_and_fade() {
    let mut f = ConfettiField::new(800.0, 1000.0, 5);
    f.burst(400.0, 300.0, 20);
    let before = f.particles().to_vec();
    assert!(f.step());
    let after = f.particles();
    assert_eq!(after.len(), before.len());
    for (b, a) in before.iter().zip(after) {
        assert!((a.pos - (b.pos + b.vel)).length() < 1e-4);
        assert!((a.vel.y - (b.vel.y + CONFETTI_GRAVITY)).abs() < 1e-5);
        assert!((a.vel.x - b.vel.x * CONFETTI_DRAG).abs() < 1e-5);
        assert!((a.opacity - (1.0 - CONFETTI_FADE)).abs() < 1e-6);
        assert!((a.rotation_deg - (b.rotation_deg + b.spin_deg)).abs() < 1e-3);
    }
}

#[test]
fn faded_confetti_is_removed_and_animation_stops() {
    let mut f = ConfettiField::new(800.0, 100_000.0, 5);
    f.burst(400.0, 300.0, 30);
    let mut frames = 0;
    while f.step() {
        frames += 1;
        assert!(frames < 200, "confetti never faded");
    }
    assert!(f.particles().is_empty());
    assert!(!f.is_animating());
    // 1.0 / 0.008 frames, give or take float rounding
    assert!((123..=126).contains(&frames), "frames={frames}");
}

#[test]
fn confetti_below_the_floor_is_removed() {
    let mut f = ConfettiField::new(100.0, 0.0, 2);
    f.burst(50.0, 100.0, 10);
    f.step();
    assert!(f.particles().is_empty());
    assert!(!f.is_animating());
}

#[test]
fn rain_wave_spawns_above_the_top_edge() {
    let mut f = ConfettiField::new(640.0, 480.0, 11);
    f.rain_wave();
    assert_eq!(f.particles().len(), CONFETTI_RAIN_PER_TICK);
    for p in f.particles() {
        assert_eq!(p.pos.y, CONFETTI_RAIN_SPAWN_Y);
        assert!(p.pos.x >= 0.0 && p.pos.x <= 640.0);
        assert!(p.vel.y >= 2.0 && p.vel.y <= 5.0);
        assert!(p.size >= 4.0 && p.size <= 12.0);
    }
}

#[test]
fn default_rain_drops_four_hundred_pieces() {
    let waves = rain_waves(CONFETTI_RAIN_MS);
    assert_eq!(waves, 80);
    let mut f = ConfettiField::new(640.0, 480.0, 11);
    for _ in 0..waves {
        f.rain_wave();
    }
    assert_eq!(f.spawned(), 400);
}

#[test]
fn spawning_restarts_a_stopped_field() {
    let mut f = ConfettiField::new(640.0, 480.0, 4);
    assert!(!f.step());
    f.rain_wave();
    assert!(f.is_animating());
    let mut frames = 0;
    while f.step() {
        frames += 1;
        assert!(frames < 1_000);
    }
    assert!(f.particles().is_empty());
    f.rain_wave();
    assert!(f.is_animating());
    assert_eq!(f.spawned(), 10);
}
