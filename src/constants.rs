// Markup hooks and presentation constants for the web front-end.
// Kept free of web-sys types so the host tests can include this file.

// Canvases
pub const AMBIENT_CANVAS_ID: &str = "particle-canvas";
pub const CONFETTI_CANVAS_ID: &str = "confetti-canvas";

// Intro
pub const TAP_HINT_ID: &str = "tap-to-start";
pub const TERMINAL_CONTAINER_SELECTOR: &str = ".terminal-container";
pub const TERMINAL_OUTPUT_ID: &str = "terminal-output";

// Loading
pub const PROGRESS_FILL_ID: &str = "progress-fill";
pub const PROGRESS_TEXT_ID: &str = "progress-text";
pub const LOADING_STATUS_ID: &str = "loading-status";

// Error and terms screens
pub const RETRY1_BUTTON_ID: &str = "btn-retry1";
pub const RETRY2_BUTTON_ID: &str = "btn-retry2";
pub const CONFIRM_BUTTON_ID: &str = "btn-confirm";
pub const ERROR_ITEM_SELECTOR: &str = ".error-list-item";
pub const CHECKBOX_SELECTOR: &str = ".term-checkbox";
pub const ACCEPT_BUTTON_ID: &str = "btn-accept";

// Reveal
pub const SPOTLIGHT_ID: &str = "spotlight";
pub const TEASER_ID: &str = "reveal-teaser";
pub const HEADER_SELECTOR: &str = ".reveal-header";
pub const TICKET_ID: &str = "ticket";
pub const FOOTER_SELECTOR: &str = ".reveal-footer";
pub const TOAST_ID: &str = "redirect-toast";
pub const REPLAY_BUTTON_ID: &str = "btn-replay";

// Glitch
pub const GLITCH_OVERLAY_ID: &str = "glitch-overlay";
pub const GLITCH_SELECTOR: &str = ".glitch";

// State classes
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_FADE_IN: &str = "fade-in";
pub const CLASS_FADE_OUT: &str = "fade-out";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_HIDDEN: &str = "hidden";
