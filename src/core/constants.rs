use std::f64::consts::PI;
use std::time::Duration;

// Tuning constants shared by the particle scene and the show director.

// Population sizes
pub const STAR_COUNT: usize = 250;
pub const NEBULA_COUNT: usize = 8;
pub const GALAXY_COUNT: usize = 500;
pub const HEART_COUNT: usize = 800;

// Stars
pub const STAR_SPAWN_Y: f64 = -10.0; // recycled stars re-enter just above the top edge
pub const STAR_DEPTH_MAX: f64 = 3.0; // depth layers in [0, 3)
pub const STAR_RADIUS_MIN: f64 = 0.5;
pub const STAR_RADIUS_SPAN: f64 = 1.5;
pub const STAR_SPEED_MIN: f64 = 0.1;
pub const STAR_SPEED_SPAN: f64 = 0.3;
pub const STAR_DEPTH_SPEEDUP: f64 = 0.5; // fall speed multiplier per depth unit
pub const STAR_TWINKLE_STEP: f64 = 0.02;
pub const STAR_OPACITY_BASE: f64 = 0.3;
pub const STAR_OPACITY_SWING: f64 = 0.3;
pub const STAR_GLOW_DEPTH: f64 = 1.0; // stars closer than this get a glow pass
pub const STAR_GLOW_BLUR: f64 = 10.0;
pub const BRIGHT_STAR_RADIUS: f64 = 5.0;

// Nebula
pub const NEBULA_SIZE_MIN: f64 = 50.0;
pub const NEBULA_SIZE_SPAN: f64 = 100.0;
pub const NEBULA_DRIFT_SPAN: f64 = 0.2; // velocity per axis in [-0.1, 0.1)
pub const NEBULA_HUE_MIN: f64 = 240.0; // purple..blue
pub const NEBULA_HUE_SPAN: f64 = 60.0;

// Galaxy swirl
pub const GALAXY_TURNS: f64 = 8.0 * PI; // total angle swept across the population
pub const GALAXY_RADIUS_MIN: f64 = 50.0;
pub const GALAXY_RADIUS_SPAN: f64 = 300.0;
pub const GALAXY_SPEED_MIN: f64 = 0.002;
pub const GALAXY_SPEED_SPAN: f64 = 0.001;
pub const GALAXY_SPIRAL: f64 = 0.5; // extra angle per unit angle (log-spiral offset)
pub const GALAXY_SIZE_MIN: f64 = 1.0;
pub const GALAXY_SIZE_SPAN: f64 = 2.0;
pub const GALAXY_OPACITY_MIN: f64 = 0.2;
pub const GALAXY_OPACITY_SPAN: f64 = 0.8;
pub const GALAXY_GLOW_BLUR: f64 = 5.0;

// Heart morph
pub const HEART_SCALE: f64 = 8.0;
pub const HEART_SIZE_MIN: f64 = 1.0;
pub const HEART_SIZE_SPAN: f64 = 2.0;
pub const HEART_OPACITY_MIN: f64 = 0.4;
pub const HEART_OPACITY_SPAN: f64 = 0.6;
pub const HEART_OPACITY_SWING: f64 = 0.2;
pub const HEART_TWINKLE_SPEED_MIN: f64 = 0.01;
pub const HEART_TWINKLE_SPEED_SPAN: f64 = 0.02;
pub const HEART_GLOW_BLUR: f64 = 10.0;

// Music fade-in
pub const VOLUME_STEP: f64 = 0.01;
pub const VOLUME_CEILING: f64 = 0.3;
pub const VOLUME_TICK: Duration = Duration::from_millis(50);

// Constellation
pub const SMALL_VIEWPORT_WIDTH: f64 = 768.0;
pub const SMALL_VIEWPORT_SCALE: f64 = 0.6;
pub const DOT_STAGGER: Duration = Duration::from_millis(100);
pub const LINE_STAGGER: Duration = Duration::from_millis(80);
pub const LINES_AFTER_DOTS: Duration = Duration::from_millis(500);
pub const MARKER_FADE_DELAY: Duration = Duration::from_millis(50);
pub const DOT_OPACITY: f64 = 1.0;
pub const LINE_OPACITY: f64 = 0.4;

// Kiss shower
pub const KISS_COUNT: usize = 30;
pub const KISS_STAGGER: Duration = Duration::from_millis(150);
pub const KISS_LIFETIME: Duration = Duration::from_millis(3500);
pub const KISS_DELAY_MAX_SEC: f64 = 0.5;
pub const KISS_EMOJIS: [&str; 6] = ["💋", "😘", "💕", "💖", "❤️", "💗"];

// Page fade-out
pub const PAGE_FADE_SEC: f64 = 4.0;
