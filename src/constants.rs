// Page wiring: element ids/selectors and render colours.

// DOM hooks
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const HEALTH_BAR_ID: &str = "orb-health";
pub const INSTRUCTION_SELECTOR: &str = ".orb-instruction";
pub const DOWNLOAD_LINK_ID: &str = "hidden-cv-link";
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const LOADER_ID: &str = "loader";
pub const TERMINAL_OVERLAY_ID: &str = "terminal-overlay";
pub const TERMINAL_INPUT_ID: &str = "terminal-input";
pub const TERMINAL_OUTPUT_ID: &str = "terminal-output";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";

// Data attributes read at startup
pub const VARIANT_ATTR: &str = "data-variant";
pub const PROMPT_ATTR: &str = "data-prompt";
pub const CONTACT_ATTR: &str = "data-contact";

// HUD
pub const COLOR_OK: &str = "#00f3ff";
pub const COLOR_CRITICAL: &str = "#ff2a2a";
pub const REVEAL_TEXT: &str = "SHIELD DOWN. CLICK CORE.";

// Card tilt transition and glare overlay
pub const TILT_EASING: &str = "cubic-bezier(.03,.98,.52,.99)";
pub const TILT_GLARE_CLASS: &str = "js-tilt-glare";

// Loader timing (ms)
pub const LOADER_FADE_DELAY_MS: i32 = 1500;
pub const LOADER_REMOVE_DELAY_MS: i32 = 500;

// Scene colours (linear-ish RGB from the page palette)
pub const CORE_COLOR: [f32; 3] = [0.067, 0.067, 0.067]; // #111111
pub const CORE_EMISSIVE: [f32; 4] = [0.44, 0.0, 1.0, 0.8]; // #7000ff x0.8
pub const CORE_METALNESS: f32 = 0.9;
pub const CORE_ROUGHNESS: f32 = 0.2;
pub const CYAN: [f32; 3] = [0.0, 0.953, 1.0]; // #00f3ff
pub const VIOLET: [f32; 3] = [0.44, 0.0, 1.0]; // #7000ff
pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
