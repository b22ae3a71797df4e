//! Page tuning values. Everything that is a magic number in the page
//! choreography lives here so the components stay readable.

/// Panel shown before the visitor clicks anything.
pub const DEFAULT_PANEL: &str = "about";

/// Share of a timeline card that must be on screen before it counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Shrinks the observed viewport at the bottom so cards reveal slightly
/// before they reach the very edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -5% 0px";

/// Gap between consecutive card reveals in the cascade.
pub const STAGGER_STEP_MS: u32 = 150;

/// How long the contact form's thank-you note stays on the button.
pub const FORM_COOLDOWN_MS: u32 = 1_800;

/// Resting label of the contact form's submit button.
pub const SUBMIT_LABEL: &str = "Send message";
