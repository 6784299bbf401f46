// DOM wiring for the page hosting the experience.
// Ids and class names must match `index.html`; its CSS owns every transition
// the show relies on (opacity fades, the kiss rise).

// Canvases, back to front
pub const STARS_CANVAS_ID: &str = "stars";
pub const NEBULA_CANVAS_ID: &str = "nebula";
pub const SWIRL_CANVAS_ID: &str = "galaxy";

// Overlays and controls
pub const TEXT_ID: &str = "text";
pub const NAME_ID: &str = "name";
pub const MUSIC_ID: &str = "bgMusic";
pub const START_PROMPT_ID: &str = "startPrompt";

// Classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const DOT_CLASS: &str = "constellation-dot";
pub const LINE_CLASS: &str = "constellation-line";
pub const KISS_CLASS: &str = "kiss";
