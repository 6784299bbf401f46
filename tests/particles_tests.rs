// Host-side tests for particle kinematics and the per-frame scene driver.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod surface {
        include!("../src/core/surface.rs");
    }
}

use crate::core::constants::*;
use crate::core::particles::*;
use crate::core::scene::*;
use crate::core::surface::*;
use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

/// Surface that only counts what was drawn.
#[derive(Default)]
struct CountingSurface {
    width: f64,
    height: f64,
    clears: usize,
    circles: usize,
    glows: usize,
    radials: usize,
}

impl CountingSurface {
    fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Surface for CountingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: Color, glow: Option<Glow>) {
        self.circles += 1;
        if glow.is_some() {
            self.glows += 1;
        }
    }
    fn fill_radial(&mut self, _center: DVec2, _radius: f64, stops: &[ColorStop]) {
        assert_eq!(stops.len(), 3);
        self.radials += 1;
    }
}

fn bounds() -> Bounds {
    Bounds {
        width: 800.0,
        height: 600.0,
    }
}

fn make_scene(seed: u64) -> Scene<CountingSurface> {
    let layers = Layers {
        stars: CountingSurface::sized(800.0, 600.0),
        nebula: CountingSurface::sized(800.0, 600.0),
        swirl: CountingSurface::sized(800.0, 600.0),
    };
    Scene::new(layers, StdRng::seed_from_u64(seed))
}

fn assert_star_in_ranges(star: &Star, b: Bounds) {
    assert!(star.pos.x >= 0.0 && star.pos.x < b.width, "x={}", star.pos.x);
    assert!(star.depth >= 0.0 && star.depth < STAR_DEPTH_MAX);
    assert!(star.radius >= STAR_RADIUS_MIN && star.radius < STAR_RADIUS_MIN + STAR_RADIUS_SPAN);
    assert!(star.speed >= STAR_SPEED_MIN && star.speed < STAR_SPEED_MIN + STAR_SPEED_SPAN);
    assert!(star.twinkle >= 0.0 && star.twinkle < TAU);
}

#[test]
fn spawned_stars_start_anywhere_on_the_surface() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let star = Star::spawn(bounds(), &mut rng);
        assert_star_in_ranges(&star, bounds());
        assert!(star.pos.y >= 0.0 && star.pos.y < bounds().height);
    }
}

#[test]
fn star_falls_faster_when_deeper() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut near = Star::spawn(bounds(), &mut rng);
    near.pos.y = 100.0;
    near.speed = 0.2;
    near.depth = 0.0;
    let mut far = near.clone();
    far.depth = 2.0;

    near.update(bounds(), &mut rng);
    far.update(bounds(), &mut rng);
    assert!((near.pos.y - 100.2).abs() < 1e-12);
    assert!((far.pos.y - 100.4).abs() < 1e-12);
    assert!((near.twinkle - far.twinkle).abs() < 1e-12);
}

#[test]
fn star_past_bottom_edge_is_recycled_to_spawn_edge() {
    let mut rng = StdRng::seed_from_u64(3);
    let b = bounds();
    for _ in 0..50 {
        let mut star = Star::spawn(b, &mut rng);
        let mut ticks = 0;
        // Walk the star down until it wraps.
        while star.pos.y >= 0.0 {
            star.update(b, &mut rng);
            ticks += 1;
            assert!(ticks < 100_000, "star never recycled");
        }
        assert_eq!(star.pos.y, STAR_SPAWN_Y);
        assert_star_in_ranges(&star, b);
    }
}

#[test]
fn star_exactly_at_bottom_edge_is_not_recycled_yet() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut star = Star::spawn(bounds(), &mut rng);
    star.speed = 0.0;
    star.pos.y = bounds().height;
    star.update(bounds(), &mut rng);
    assert_eq!(star.pos.y, bounds().height);
}

#[test]
fn only_near_stars_get_a_glow_pass() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut star = Star::spawn(bounds(), &mut rng);
    let mut surface = CountingSurface::sized(800.0, 600.0);

    star.depth = 0.5;
    star.draw(&mut surface);
    assert_eq!((surface.circles, surface.glows), (2, 1));

    star.depth = 1.0;
    star.draw(&mut surface);
    assert_eq!((surface.circles, surface.glows), (3, 1));
}

#[test]
fn star_opacity_oscillates_around_base() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut star = Star::spawn(bounds(), &mut rng);
    for _ in 0..500 {
        star.update(bounds(), &mut rng);
        let o = star.opacity();
        assert!(o >= STAR_OPACITY_BASE - STAR_OPACITY_SWING - 1e-12);
        assert!(o <= STAR_OPACITY_BASE + STAR_OPACITY_SWING + 1e-12);
    }
}

#[test]
fn nebula_wraps_at_negative_size_boundary() {
    let mut rng = StdRng::seed_from_u64(7);
    let b = bounds();
    for vx in [-0.1, -0.05, 0.0, 0.05, 0.1] {
        let mut blob = NebulaBlob::spawn(b, &mut rng);
        blob.pos = DVec2::new(-blob.size, -blob.size);
        blob.vel = DVec2::new(vx, vx);
        blob.update(b, &mut rng);
        assert!(blob.pos.x >= -blob.size && blob.pos.x <= b.width + blob.size);
        assert!(blob.pos.y >= -blob.size && blob.pos.y <= b.height + blob.size);
    }
}

#[test]
fn nebula_wraps_to_opposite_edge() {
    let mut rng = StdRng::seed_from_u64(8);
    let b = bounds();
    let mut blob = NebulaBlob::spawn(b, &mut rng);
    blob.pos = DVec2::new(b.width + blob.size, 10.0);
    blob.vel = DVec2::new(0.05, 0.0);
    blob.update(b, &mut rng);
    assert_eq!(blob.pos.x, -blob.size);

    blob.pos = DVec2::new(10.0, -blob.size);
    blob.vel = DVec2::new(0.0, -0.05);
    blob.update(b, &mut rng);
    assert_eq!(blob.pos.y, b.height + blob.size);
}

#[test]
fn nebula_parameters_are_in_range() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        let blob = NebulaBlob::spawn(bounds(), &mut rng);
        assert!(blob.size >= NEBULA_SIZE_MIN && blob.size < NEBULA_SIZE_MIN + NEBULA_SIZE_SPAN);
        assert!(blob.vel.x.abs() <= NEBULA_DRIFT_SPAN / 2.0);
        assert!(blob.vel.y.abs() <= NEBULA_DRIFT_SPAN / 2.0);
        assert!(blob.hue >= NEBULA_HUE_MIN && blob.hue < NEBULA_HUE_MIN + NEBULA_HUE_SPAN);
        let stops = blob.gradient();
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[2].offset, 1.0);
        assert_eq!(stops[2].color.alpha(), 0.0);
    }
}

#[test]
fn galaxy_spirals_outward_and_keeps_its_radius() {
    let mut rng = StdRng::seed_from_u64(10);
    let center = DVec2::new(400.0, 300.0);
    let mut points = galaxy(center, GALAXY_COUNT, &mut rng);
    assert_eq!(points.len(), GALAXY_COUNT);
    assert_eq!(points[0].angle, 0.0);
    assert_eq!(points[0].distance, GALAXY_RADIUS_MIN);
    assert!(points.windows(2).all(|w| w[1].distance > w[0].distance));
    assert!(points.last().unwrap().distance < GALAXY_RADIUS_MIN + GALAXY_RADIUS_SPAN);

    for p in points.iter_mut() {
        let before = p.angle;
        p.update(bounds(), &mut rng);
        assert!((p.angle - before - p.speed).abs() < 1e-12);
        assert!(p.speed >= GALAXY_SPEED_MIN && p.speed < GALAXY_SPEED_MIN + GALAXY_SPEED_SPAN);
        assert!((p.pos.distance(center) - p.distance).abs() < 1e-9);
        let theta = p.angle * (1.0 + GALAXY_SPIRAL);
        let expected = center + DVec2::new(theta.cos(), theta.sin()) * p.distance;
        assert!(p.pos.distance(expected) < 1e-9);
    }
}

#[test]
fn heart_has_800_points_on_the_parametric_curve() {
    let mut rng = StdRng::seed_from_u64(11);
    let center = DVec2::new(400.0, 300.0);
    let points = heart(center, HEART_COUNT, HEART_SCALE, &mut rng);
    assert_eq!(points.len(), 800);
    for (i, p) in points.iter().enumerate() {
        let t = TAU * i as f64 / 800.0;
        let x = 16.0 * t.sin().powi(3);
        let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
        assert!((p.pos.x - (center.x + x * 8.0)).abs() < 1e-9, "x mismatch at {i}");
        assert!((p.pos.y - (center.y + y * 8.0)).abs() < 1e-9, "y mismatch at {i}");
    }
    // t = 0 is the notch at the top of the heart.
    assert!((points[0].pos - DVec2::new(400.0, 300.0 - 5.0 * 8.0)).length() < 1e-9);
}

#[test]
fn heart_points_stay_put_while_twinkling() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut points = heart(DVec2::ZERO, 16, HEART_SCALE, &mut rng);
    let before: Vec<DVec2> = points.iter().map(|p| p.pos).collect();
    for _ in 0..100 {
        for p in points.iter_mut() {
            p.update(bounds(), &mut rng);
            let o = p.current_opacity();
            assert!(o >= HEART_OPACITY_MIN - HEART_OPACITY_SWING - 1e-12);
            assert!(o <= HEART_OPACITY_MIN + HEART_OPACITY_SPAN + HEART_OPACITY_SWING);
        }
    }
    let after: Vec<DVec2> = points.iter().map(|p| p.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn scene_starts_with_fixed_population_sizes() {
    let scene = make_scene(20);
    assert_eq!(scene.stars.len(), STAR_COUNT);
    assert_eq!(scene.nebula.len(), NEBULA_COUNT);
    assert!(scene.swirl.is_empty());
    assert!(!scene.swirl_active());
}

#[test]
fn frame_clears_and_draws_background_layers_only_while_swirl_idle() {
    let mut scene = make_scene(21);
    for _ in 0..3 {
        scene.frame();
    }
    assert_eq!(scene.layers.stars.clears, 3);
    assert_eq!(scene.layers.nebula.clears, 3);
    assert_eq!(scene.layers.nebula.radials, 3 * NEBULA_COUNT);
    assert!(scene.layers.stars.circles >= 3 * STAR_COUNT);
    assert_eq!(scene.layers.swirl.clears, 0);
    assert_eq!(scene.layers.swirl.circles, 0);
}

#[test]
fn recycling_never_changes_star_count() {
    let mut scene = make_scene(22);
    scene.resize(800.0, 20.0);
    for _ in 0..2_000 {
        scene.frame();
    }
    assert_eq!(scene.stars.len(), STAR_COUNT);
    for star in scene.stars.iter() {
        assert!(star.pos.y <= 20.0);
    }
}

#[test]
fn galaxy_then_heart_replace_the_swirl_wholesale() {
    let mut scene = make_scene(23);
    scene.start_galaxy();
    assert!(scene.swirl_active());
    assert!(matches!(scene.swirl, Swirl::Galaxy(_)));
    assert_eq!(scene.swirl.len(), GALAXY_COUNT);

    scene.frame();
    assert_eq!(scene.layers.swirl.clears, 1);
    assert_eq!(scene.layers.swirl.circles, 2 * GALAXY_COUNT);
    assert_eq!(scene.layers.swirl.glows, GALAXY_COUNT);

    scene.start_heart();
    assert!(matches!(scene.swirl, Swirl::Heart(_)));
    assert_eq!(scene.swirl.len(), HEART_COUNT);
}

#[test]
fn ending_the_swirl_clears_once_and_stops_drawing() {
    let mut scene = make_scene(24);
    scene.start_galaxy();
    scene.frame();
    scene.end_swirl();
    assert!(!scene.swirl_active());
    assert_eq!(scene.layers.swirl.clears, 2);

    let drawn = scene.layers.swirl.circles;
    scene.frame();
    scene.frame();
    assert_eq!(scene.layers.swirl.circles, drawn);
    assert_eq!(scene.layers.swirl.clears, 2);
}

#[test]
fn bright_star_is_appended_at_center() {
    let mut scene = make_scene(25);
    scene.add_bright_star();
    assert_eq!(scene.stars.len(), STAR_COUNT + 1);
    let star = scene.stars.iter().last().unwrap();
    assert_eq!(star.pos, DVec2::new(400.0, 300.0));
    assert_eq!(star.radius, BRIGHT_STAR_RADIUS);
    assert_eq!(star.depth, 0.0);
}

#[test]
fn resize_keeps_particles_in_place() {
    let mut scene = make_scene(26);
    let before: Vec<DVec2> = scene.stars.iter().map(|s| s.pos).collect();
    scene.resize(1024.0, 768.0);
    let after: Vec<DVec2> = scene.stars.iter().map(|s| s.pos).collect();
    assert_eq!(before, after);
    assert_eq!(scene.layers.swirl.size(), (1024.0, 768.0));
    assert_eq!(scene.layers.nebula.size(), (1024.0, 768.0));
}
