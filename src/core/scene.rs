use crate::core::constants::*;
use crate::core::particles::{self, NebulaBlob, Population, Star, Swirl};
use crate::core::surface::{Bounds, Surface};
use rand::prelude::*;

/// The three stacked drawing layers, back to front.
pub struct Layers<S> {
    pub stars: S,
    pub nebula: S,
    pub swirl: S,
}

/// All mutable visual state driven by the frame loop.
///
/// Owns the surfaces, the particle populations, the swirl-active flag and the
/// RNG used for spawning and recycling. `frame` is the body of the animation
/// driver; the timed actions call the `start_*`/`end_swirl`/`add_bright_star`
/// transitions.
pub struct Scene<S> {
    pub layers: Layers<S>,
    pub stars: Population<Star>,
    pub nebula: Population<NebulaBlob>,
    pub swirl: Swirl,
    swirl_active: bool,
    rng: StdRng,
}

impl<S: Surface> Scene<S> {
    pub fn new(layers: Layers<S>, mut rng: StdRng) -> Self {
        let star_bounds = Bounds::of(&layers.stars);
        let nebula_bounds = Bounds::of(&layers.nebula);
        let stars = (0..STAR_COUNT)
            .map(|_| Star::spawn(star_bounds, &mut rng))
            .collect();
        let nebula = (0..NEBULA_COUNT)
            .map(|_| NebulaBlob::spawn(nebula_bounds, &mut rng))
            .collect();
        Self {
            layers,
            stars: Population::new(stars),
            nebula: Population::new(nebula),
            swirl: Swirl::Empty,
            swirl_active: false,
            rng,
        }
    }

    pub fn swirl_active(&self) -> bool {
        self.swirl_active
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// One display refresh: clear, then update and draw every population.
    pub fn frame(&mut self) {
        self.layers.stars.clear();
        self.layers.nebula.clear();

        self.nebula.step(&mut self.layers.nebula, &mut self.rng);
        self.stars.step(&mut self.layers.stars, &mut self.rng);

        if self.swirl_active {
            self.layers.swirl.clear();
            self.swirl.step(&mut self.layers.swirl, &mut self.rng);
        }
    }

    /// Match all layers to the viewport; particles keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.layers.stars.resize(width, height);
        self.layers.nebula.resize(width, height);
        self.layers.swirl.resize(width, height);
    }

    /// Append one large, near star at the center of the star layer.
    pub fn add_bright_star(&mut self) {
        let bounds = Bounds::of(&self.layers.stars);
        let mut star = Star::spawn(bounds, &mut self.rng);
        star.pos = bounds.center();
        star.radius = BRIGHT_STAR_RADIUS;
        star.depth = 0.0;
        self.stars.push(star);
    }

    pub fn start_galaxy(&mut self) {
        let center = Bounds::of(&self.layers.swirl).center();
        let points = particles::galaxy(center, GALAXY_COUNT, &mut self.rng);
        self.swirl = Swirl::Galaxy(Population::new(points));
        self.swirl_active = true;
        log::info!("[scene] galaxy swirl with {} points", GALAXY_COUNT);
    }

    pub fn start_heart(&mut self) {
        let center = Bounds::of(&self.layers.swirl).center();
        let points = particles::heart(center, HEART_COUNT, HEART_SCALE, &mut self.rng);
        self.swirl = Swirl::Heart(Population::new(points));
        self.swirl_active = true;
        log::info!("[scene] heart swirl with {} points", HEART_COUNT);
    }

    /// Stop drawing the swirl layer and wipe what it last showed.
    ///
    /// The population itself is left in place until the next `start_*`.
    pub fn end_swirl(&mut self) {
        self.swirl_active = false;
        self.layers.swirl.clear();
    }
}
