use crate::core::constellation::{Glyph, NAME_GLYPHS, NAME_LINKS};
use std::time::Duration;

/// One authored beat of the experience.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneAction {
    /// Show `html` in the text overlay, fading it after `hold`.
    ShowText { html: String, hold: Duration },
    /// Append the bright center star.
    BrightStar,
    /// Replace the swirl with the galaxy and start drawing it.
    Galaxy,
    /// Stop the swirl and start building the name constellation.
    Constellation,
    RevealName,
    HideName,
    /// Replace the swirl with the heart and start drawing it.
    Heart,
    KissShower,
    FadeOut,
}

/// A scene action and its offset from the start trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneEvent {
    pub offset: Duration,
    pub action: SceneAction,
}

impl SceneEvent {
    pub fn at_ms(ms: u64, action: SceneAction) -> Self {
        Self {
            offset: Duration::from_millis(ms),
            action,
        }
    }
}

fn text(html: &str, hold_ms: u64) -> SceneAction {
    SceneAction::ShowText {
        html: html.to_string(),
        hold: Duration::from_millis(hold_ms),
    }
}

/// Everything the show needs to know that is not a tuning constant.
///
/// - `name`: markup placed in the name overlay on `RevealName`
/// - `glyphs`/`links`: the constellation built on `Constellation`; links that
///   name a missing star are skipped
/// - `script`: the beats, in authoring order; offsets are not required to be
///   monotonic and beats sharing an offset fire in list order
#[derive(Clone, Debug)]
pub struct ShowConfig {
    pub name: String,
    pub glyphs: &'static [Glyph],
    pub links: Vec<(usize, usize)>,
    pub script: Vec<SceneEvent>,
}

impl Default for ShowConfig {
    fn default() -> Self {
        use SceneAction::*;
        Self {
            name: "HIMANI".to_string(),
            glyphs: &NAME_GLYPHS,
            links: NAME_LINKS.to_vec(),
            script: vec![
                // The silence
                SceneEvent::at_ms(
                    3_000,
                    text(
                        "Before you… everything felt endless.<br><br>But not meaningful.",
                        8_000,
                    ),
                ),
                // Lonely universe
                SceneEvent::at_ms(
                    15_000,
                    text("Billions of stars…<br><br>Billions of possibilities…", 8_000),
                ),
                // Chosen star
                SceneEvent::at_ms(
                    30_000,
                    text("And then… the universe whispered your name.", 10_000),
                ),
                SceneEvent::at_ms(30_000, BrightStar),
                // Cosmic bloom
                SceneEvent::at_ms(45_000, Galaxy),
                // Name constellation
                SceneEvent::at_ms(60_000, Constellation),
                SceneEvent::at_ms(85_000, RevealName),
                SceneEvent::at_ms(100_000, HideName),
                SceneEvent::at_ms(
                    100_000,
                    text("Out of infinite worlds…<br><br>I would still find you.", 12_000),
                ),
                // Heart
                SceneEvent::at_ms(
                    115_000,
                    text("You are my gravity.<br><br>My light.<br><br>My forever.", 15_000),
                ),
                SceneEvent::at_ms(115_000, Heart),
                // Finale
                SceneEvent::at_ms(
                    135_000,
                    text("Stay… the universe feels right with you in it.", 18_000),
                ),
                SceneEvent::at_ms(145_000, KissShower),
                SceneEvent::at_ms(160_000, FadeOut),
            ],
        }
    }
}
