use crate::core::constants::*;
use crate::core::surface::{Bounds, Color, ColorStop, Glow, Surface};
use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

/// Per-frame behavior shared by every particle kind.
///
/// `update` advances one display-refresh tick (there is no delta time) and
/// `draw` paints the current state onto the owning surface.
pub trait Particle {
    fn update<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R);
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S);
}

/// Fixed-kind collection updated and drawn together each frame.
#[derive(Clone, Debug)]
pub struct Population<P> {
    members: Vec<P>,
}

impl<P: Particle> Population<P> {
    pub fn new(members: Vec<P>) -> Self {
        Self { members }
    }

    pub fn push(&mut self, particle: P) {
        self.members.push(particle);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.members.iter()
    }

    /// Update then draw each member, in population order.
    pub fn step<S: Surface + ?Sized, R: Rng + ?Sized>(&mut self, surface: &mut S, rng: &mut R) {
        let bounds = Bounds::of(&*surface);
        for p in self.members.iter_mut() {
            p.update(bounds, rng);
            p.draw(surface);
        }
    }
}

// ---------------- Stars ----------------

/// A drifting background star.
///
/// Stars fall at a depth-scaled speed and twinkle; once below the bottom edge
/// they are recycled in place by `reset`, so the population never changes size.
#[derive(Clone, Debug)]
pub struct Star {
    pub pos: DVec2,
    pub depth: f64,
    pub radius: f64,
    pub speed: f64,
    pub twinkle: f64,
}

impl Star {
    /// A fresh star scattered anywhere on the surface.
    pub fn spawn<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        let mut star = Star {
            pos: DVec2::ZERO,
            depth: 0.0,
            radius: 0.0,
            speed: 0.0,
            twinkle: 0.0,
        };
        star.reset(bounds, rng);
        star.pos.y = rng.gen::<f64>() * bounds.height;
        star
    }

    /// Move back to the spawn edge with freshly randomized parameters.
    pub fn reset<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        self.pos = DVec2::new(rng.gen::<f64>() * bounds.width, STAR_SPAWN_Y);
        self.depth = rng.gen::<f64>() * STAR_DEPTH_MAX;
        self.radius = rng.gen::<f64>() * STAR_RADIUS_SPAN + STAR_RADIUS_MIN;
        self.speed = rng.gen::<f64>() * STAR_SPEED_SPAN + STAR_SPEED_MIN;
        self.twinkle = rng.gen::<f64>() * TAU;
    }

    pub fn opacity(&self) -> f64 {
        STAR_OPACITY_BASE + self.twinkle.sin() * STAR_OPACITY_SWING
    }
}

impl Particle for Star {
    fn update<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        self.pos.y += self.speed * (1.0 + self.depth * STAR_DEPTH_SPEEDUP);
        self.twinkle += STAR_TWINKLE_STEP;
        if self.pos.y > bounds.height {
            self.reset(bounds, rng);
        }
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let color = Color::Rgba(255, 255, 255, self.opacity());
        let r = self.radius / (1.0 + self.depth);
        surface.fill_circle(self.pos, r, color, None);
        if self.depth < STAR_GLOW_DEPTH {
            let glow = Glow {
                blur: STAR_GLOW_BLUR,
                color: Color::WHITE,
            };
            surface.fill_circle(self.pos, r, color, Some(glow));
        }
    }
}

// ---------------- Nebula ----------------

/// Large translucent color blob drifting behind the stars.
#[derive(Clone, Debug)]
pub struct NebulaBlob {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub hue: f64,
}

impl NebulaBlob {
    pub fn spawn<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        Self {
            pos: DVec2::new(
                rng.gen::<f64>() * bounds.width,
                rng.gen::<f64>() * bounds.height,
            ),
            size: rng.gen::<f64>() * NEBULA_SIZE_SPAN + NEBULA_SIZE_MIN,
            vel: DVec2::new(
                (rng.gen::<f64>() - 0.5) * NEBULA_DRIFT_SPAN,
                (rng.gen::<f64>() - 0.5) * NEBULA_DRIFT_SPAN,
            ),
            hue: rng.gen::<f64>() * NEBULA_HUE_SPAN + NEBULA_HUE_MIN,
        }
    }

    pub fn gradient(&self) -> [ColorStop; 3] {
        [
            ColorStop {
                offset: 0.0,
                color: Color::Hsla(self.hue, 80.0, 60.0, 0.15),
            },
            ColorStop {
                offset: 0.5,
                color: Color::Hsla(self.hue, 70.0, 50.0, 0.05),
            },
            ColorStop {
                offset: 1.0,
                color: Color::Hsla(self.hue, 60.0, 40.0, 0.0),
            },
        ]
    }
}

impl Particle for NebulaBlob {
    fn update<R: Rng + ?Sized>(&mut self, bounds: Bounds, _rng: &mut R) {
        self.pos += self.vel;
        // Wrap to the opposite edge once fully off-surface.
        let s = self.size;
        if self.pos.x < -s {
            self.pos.x = bounds.width + s;
        }
        if self.pos.x > bounds.width + s {
            self.pos.x = -s;
        }
        if self.pos.y < -s {
            self.pos.y = bounds.height + s;
        }
        if self.pos.y > bounds.height + s {
            self.pos.y = -s;
        }
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_radial(self.pos, self.size, &self.gradient());
    }
}

// ---------------- Swirl: galaxy ----------------

/// Point orbiting a fixed center along a logarithmic-style spiral.
#[derive(Clone, Debug)]
pub struct OrbitPoint {
    pub center: DVec2,
    pub angle: f64,
    pub distance: f64,
    pub speed: f64,
    pub size: f64,
    pub opacity: f64,
    pub pos: DVec2,
}

impl OrbitPoint {
    pub fn new<R: Rng + ?Sized>(center: DVec2, angle: f64, distance: f64, rng: &mut R) -> Self {
        let mut p = Self {
            center,
            angle,
            distance,
            speed: GALAXY_SPEED_MIN + rng.gen::<f64>() * GALAXY_SPEED_SPAN,
            size: rng.gen::<f64>() * GALAXY_SIZE_SPAN + GALAXY_SIZE_MIN,
            opacity: rng.gen::<f64>() * GALAXY_OPACITY_SPAN + GALAXY_OPACITY_MIN,
            pos: center,
        };
        p.place();
        p
    }

    fn place(&mut self) {
        let theta = self.angle + self.angle * GALAXY_SPIRAL;
        self.pos = self.center + DVec2::new(theta.cos(), theta.sin()) * self.distance;
    }
}

impl Particle for OrbitPoint {
    fn update<R: Rng + ?Sized>(&mut self, _bounds: Bounds, _rng: &mut R) {
        self.angle += self.speed;
        self.place();
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let color = Color::Rgba(255, 200, 255, self.opacity);
        surface.fill_circle(self.pos, self.size, color, None);
        let glow = Glow {
            blur: GALAXY_GLOW_BLUR,
            color: Color::Rgba(255, 150, 255, 0.5),
        };
        surface.fill_circle(self.pos, self.size, color, Some(glow));
    }
}

/// Build the galaxy swirl: `count` points spread over four turns, inner to outer.
pub fn galaxy<R: Rng + ?Sized>(center: DVec2, count: usize, rng: &mut R) -> Vec<OrbitPoint> {
    (0..count)
        .map(|i| {
            let f = i as f64 / count as f64;
            let angle = f * GALAXY_TURNS;
            let distance = f * GALAXY_RADIUS_SPAN + GALAXY_RADIUS_MIN;
            OrbitPoint::new(center, angle, distance, rng)
        })
        .collect()
}

// ---------------- Swirl: heart ----------------

/// Static point on the heart outline whose opacity twinkles.
#[derive(Clone, Debug)]
pub struct HeartPoint {
    pub pos: DVec2,
    pub size: f64,
    pub opacity: f64,
    pub twinkle: f64,
    pub twinkle_speed: f64,
}

impl HeartPoint {
    pub fn current_opacity(&self) -> f64 {
        self.opacity + self.twinkle.sin() * HEART_OPACITY_SWING
    }
}

impl Particle for HeartPoint {
    fn update<R: Rng + ?Sized>(&mut self, _bounds: Bounds, _rng: &mut R) {
        self.twinkle += self.twinkle_speed;
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let color = Color::Rgba(255, 100, 150, self.current_opacity());
        surface.fill_circle(self.pos, self.size, color, None);
        let glow = Glow {
            blur: HEART_GLOW_BLUR,
            color: Color::Rgba(255, 150, 200, 0.5),
        };
        surface.fill_circle(self.pos, self.size, color, Some(glow));
    }
}

/// Classic parametric heart, unscaled and centered on the origin (y grows downward).
#[inline]
pub fn heart_curve(t: f64) -> DVec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    DVec2::new(x, y)
}

/// Sample `count` points evenly in `t` along the heart, scaled and centered.
pub fn heart<R: Rng + ?Sized>(
    center: DVec2,
    count: usize,
    scale: f64,
    rng: &mut R,
) -> Vec<HeartPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64 * TAU;
            HeartPoint {
                pos: center + heart_curve(t) * scale,
                size: rng.gen::<f64>() * HEART_SIZE_SPAN + HEART_SIZE_MIN,
                opacity: rng.gen::<f64>() * HEART_OPACITY_SPAN + HEART_OPACITY_MIN,
                twinkle: rng.gen::<f64>() * TAU,
                twinkle_speed: rng.gen::<f64>() * HEART_TWINKLE_SPEED_SPAN
                    + HEART_TWINKLE_SPEED_MIN,
            }
        })
        .collect()
}

/// Foreground swirl layer contents; one behavior per population.
#[derive(Clone, Debug)]
pub enum Swirl {
    Empty,
    Galaxy(Population<OrbitPoint>),
    Heart(Population<HeartPoint>),
}

impl Swirl {
    pub fn len(&self) -> usize {
        match self {
            Swirl::Empty => 0,
            Swirl::Galaxy(p) => p.len(),
            Swirl::Heart(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn step<S: Surface + ?Sized, R: Rng + ?Sized>(&mut self, surface: &mut S, rng: &mut R) {
        match self {
            Swirl::Empty => {}
            Swirl::Galaxy(p) => p.step(surface, rng),
            Swirl::Heart(p) => p.step(surface, rng),
        }
    }
}
