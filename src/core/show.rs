use crate::core::constants::*;
use crate::core::constellation::{layout, viewport_scale, Constellation, LineGeometry};
use crate::core::scene::Scene;
use crate::core::script::{SceneAction, ShowConfig};
use crate::core::surface::{Bounds, Surface};
use crate::core::timeline::Timeline;
use glam::DVec2;
use rand::prelude::*;
use std::time::Duration;

/// Handle for a DOM node created through a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Decorative node the show asks the stage to insert.
///
/// Nodes are inserted fully transparent unless noted; their opacity is raised
/// later with [`Stage::set_node_opacity`] so the CSS transition runs.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Constellation star centered at `at`.
    Dot { at: DVec2 },
    /// Constellation link.
    Line(LineGeometry),
    /// Rising emoji; its CSS animation starts after `delay_sec`.
    Kiss {
        emoji: &'static str,
        at: DVec2,
        delay_sec: f64,
    },
}

/// Everything outside the canvases that the show drives: overlays, audio and
/// decorative DOM nodes.
pub trait Stage {
    fn hide_start_prompt(&mut self);
    /// Begin playback; failures are the stage's to absorb.
    fn play_music(&mut self);
    fn set_music_volume(&mut self, volume: f64);
    fn set_text(&mut self, html: &str);
    fn set_text_opacity(&mut self, opacity: f64);
    fn set_name(&mut self, html: &str);
    fn set_name_opacity(&mut self, opacity: f64);
    /// Viewport size in CSS pixels as `(width, height)`.
    fn viewport(&self) -> (f64, f64);
    fn insert_node(&mut self, node: &Node) -> NodeId;
    fn set_node_opacity(&mut self, id: NodeId, opacity: f64);
    fn remove_node(&mut self, id: NodeId);
    fn fade_out_page(&mut self, seconds: f64);
}

/// Linear fade-in driven one fixed tick at a time.
#[derive(Clone, Debug)]
pub struct VolumeRamp {
    volume: f64,
    step: f64,
    ceiling: f64,
    done: bool,
}

impl Default for VolumeRamp {
    fn default() -> Self {
        Self::new(VOLUME_STEP, VOLUME_CEILING)
    }
}

impl VolumeRamp {
    pub fn new(step: f64, ceiling: f64) -> Self {
        Self {
            volume: 0.0,
            step,
            ceiling,
            done: false,
        }
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one tick and return the new volume; `None` once the ceiling
    /// has been reached. The final step lands exactly on the ceiling.
    pub fn tick(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        self.volume += self.step;
        if self.volume >= self.ceiling {
            self.volume = self.ceiling;
            self.done = true;
        }
        Some(self.volume)
    }
}

/// Work items held on the show's timeline.
#[derive(Clone, Debug, PartialEq)]
pub enum Cue {
    Scene(SceneAction),
    RampVolume,
    FadeText,
    PlaceDot(usize),
    BeginLines,
    DrawLine(usize),
    /// One kiss, placed within the viewport measured when the shower began.
    SpawnKiss { width: f64, height: f64 },
    Reveal { node: NodeId, opacity: f64 },
    Remove(NodeId),
}

/// Timeline-driven director of the whole experience.
///
/// `start` registers the authored script relative to the trigger time; `poll`
/// is called once per frame with the current clock reading and fires every
/// cue that has come due, in due order, against the scene and stage. Follow-up
/// cues (text fades, staggered constellation parts, kiss lifetimes) are
/// scheduled relative to the due time of the cue that spawned them, so poll
/// jitter never changes relative order.
pub struct Show {
    config: ShowConfig,
    timeline: Timeline<Cue>,
    ramp: VolumeRamp,
    started_at: Option<Duration>,
    constellation: Option<Constellation>,
}

impl Show {
    pub fn new(config: ShowConfig) -> Self {
        Self {
            config,
            timeline: Timeline::new(),
            ramp: VolumeRamp::default(),
            started_at: None,
            constellation: None,
        }
    }

    pub fn started_at(&self) -> Option<Duration> {
        self.started_at
    }

    pub fn volume(&self) -> f64 {
        self.ramp.volume()
    }

    /// Cues still waiting to fire.
    pub fn pending(&self) -> usize {
        self.timeline.len()
    }

    /// Begin the experience at `now`. Returns `false` if already started.
    pub fn start<G: Stage + ?Sized>(&mut self, now: Duration, stage: &mut G) -> bool {
        if self.started_at.is_some() {
            log::debug!("[show] ignoring repeated start");
            return false;
        }
        self.started_at = Some(now);
        log::info!(
            "[show] start: {} scene events for '{}'",
            self.config.script.len(),
            self.config.name
        );

        stage.hide_start_prompt();
        stage.set_music_volume(0.0);
        stage.play_music();
        self.timeline.schedule(now + VOLUME_TICK, Cue::RampVolume);

        for ev in &self.config.script {
            self.timeline
                .schedule(now + ev.offset, Cue::Scene(ev.action.clone()));
        }
        true
    }

    /// Fire every cue due at or before `now`. Returns how many fired.
    pub fn poll<S: Surface, G: Stage + ?Sized>(
        &mut self,
        now: Duration,
        scene: &mut Scene<S>,
        stage: &mut G,
    ) -> usize {
        let mut fired = 0;
        while let Some((due, cue)) = self.timeline.pop_due(now) {
            self.fire(due, cue, scene, stage);
            fired += 1;
        }
        fired
    }

    fn fire<S: Surface, G: Stage + ?Sized>(
        &mut self,
        due: Duration,
        cue: Cue,
        scene: &mut Scene<S>,
        stage: &mut G,
    ) {
        match cue {
            Cue::Scene(action) => self.act(due, action, scene, stage),
            Cue::RampVolume => {
                if let Some(v) = self.ramp.tick() {
                    stage.set_music_volume(v);
                }
                if !self.ramp.is_done() {
                    self.timeline.schedule(due + VOLUME_TICK, Cue::RampVolume);
                }
            }
            Cue::FadeText => stage.set_text_opacity(0.0),
            Cue::PlaceDot(i) => {
                let Some(at) = self
                    .constellation
                    .as_ref()
                    .and_then(|c| c.points.get(i).copied())
                else {
                    return;
                };
                let id = stage.insert_node(&Node::Dot { at });
                self.timeline.schedule(
                    due + MARKER_FADE_DELAY,
                    Cue::Reveal {
                        node: id,
                        opacity: DOT_OPACITY,
                    },
                );
            }
            Cue::BeginLines => {
                let count = self.constellation.as_ref().map_or(0, |c| c.links.len());
                for i in 0..count {
                    self.timeline
                        .schedule(due + LINE_STAGGER * i as u32, Cue::DrawLine(i));
                }
            }
            Cue::DrawLine(i) => {
                let Some(geom) = self.constellation.as_ref().and_then(|c| c.line(i)) else {
                    log::debug!("[show] skipping constellation link {} (no such star)", i);
                    return;
                };
                let id = stage.insert_node(&Node::Line(geom));
                self.timeline.schedule(
                    due + MARKER_FADE_DELAY,
                    Cue::Reveal {
                        node: id,
                        opacity: LINE_OPACITY,
                    },
                );
            }
            Cue::SpawnKiss { width, height } => {
                let rng = scene.rng();
                let emoji = KISS_EMOJIS[rng.gen_range(0..KISS_EMOJIS.len())];
                let node = Node::Kiss {
                    emoji,
                    at: DVec2::new(rng.gen::<f64>() * width, height),
                    delay_sec: rng.gen::<f64>() * KISS_DELAY_MAX_SEC,
                };
                let id = stage.insert_node(&node);
                self.timeline.schedule(due + KISS_LIFETIME, Cue::Remove(id));
            }
            Cue::Reveal { node, opacity } => stage.set_node_opacity(node, opacity),
            Cue::Remove(node) => stage.remove_node(node),
        }
    }

    fn act<S: Surface, G: Stage + ?Sized>(
        &mut self,
        due: Duration,
        action: SceneAction,
        scene: &mut Scene<S>,
        stage: &mut G,
    ) {
        log::info!("[show] {:?} at {:?}", action, self.elapsed(due));
        match action {
            SceneAction::ShowText { html, hold } => {
                stage.set_text(&html);
                stage.set_text_opacity(1.0);
                self.timeline.schedule(due + hold, Cue::FadeText);
            }
            SceneAction::BrightStar => scene.add_bright_star(),
            SceneAction::Galaxy => scene.start_galaxy(),
            SceneAction::Constellation => {
                scene.end_swirl();
                let center = Bounds::of(&scene.layers.stars).center();
                let (viewport_width, _) = stage.viewport();
                let points = layout(
                    self.config.glyphs,
                    center,
                    viewport_scale(viewport_width),
                );
                let constellation = Constellation::new(points, &self.config.links);
                for i in 0..constellation.points.len() {
                    self.timeline
                        .schedule(due + DOT_STAGGER * i as u32, Cue::PlaceDot(i));
                }
                self.timeline
                    .schedule(due + constellation.lines_start(), Cue::BeginLines);
                self.constellation = Some(constellation);
            }
            SceneAction::RevealName => {
                stage.set_name(&self.config.name);
                stage.set_name_opacity(1.0);
            }
            SceneAction::HideName => stage.set_name_opacity(0.0),
            SceneAction::Heart => scene.start_heart(),
            SceneAction::KissShower => {
                let (width, height) = stage.viewport();
                for i in 0..KISS_COUNT {
                    self.timeline.schedule(
                        due + KISS_STAGGER * i as u32,
                        Cue::SpawnKiss { width, height },
                    );
                }
            }
            SceneAction::FadeOut => stage.fade_out_page(PAGE_FADE_SEC),
        }
    }

    fn elapsed(&self, due: Duration) -> Duration {
        due.saturating_sub(self.started_at.unwrap_or_default())
    }
}
