// Timing, physics and palette constants shared by the director and the fields.

// Screen transitions
pub const TRANSITION_DELAY_MS: u64 = 300; // fade-out before the destination activates

// Glitch pulse
pub const GLITCH_WINDOW_MS: u64 = 150;

// Terminal typing
pub const TYPE_JITTER_MS: u64 = 30; // added per character, uniform in [0, 30)

// Loading screen
pub const STATUS_INTERVAL_MS: u64 = 600;
pub const PROGRESS_INTERVAL_MS: u64 = 150;
pub const PROGRESS_CEILING: f32 = 94.0;
pub const PROGRESS_SLOWDOWN_AT: f32 = 80.0;
pub const PROGRESS_FAST_STEP: (f32, f32) = (2.0, 10.0); // half-open range
pub const PROGRESS_SLOW_STEP: (f32, f32) = (0.5, 2.5);
pub const CRASH_DELAY_MS: u64 = 1000; // pause between the final tick and the crash
pub const FINAL_STATUS: &str = "Bijna klaar...";

pub const LOADING_STATUSES: [&str; 7] = [
    "Voorbereiden...",
    "Cadeau inpakken...",
    "Strik erop doen...",
    "Glitter toevoegen...",
    "Bijna klaar...",
    "Hmm, even wachten...",
    "Nog heel even...",
];

// Error screens
pub const ERROR_ITEM_INTERVAL_MS: u64 = 300;

// Reward
pub const REDIRECT_URL: &str = "https://hansteeuwen.nl";
pub const REDIRECT_DELAY_MS: u64 = 1500;

// Dial-up effect total length when started by the intro
pub const DIAL_UP_MS: u32 = 4000;

// Ambient field
pub const AMBIENT_AREA_PER_PARTICLE: f32 = 15000.0;
pub const AMBIENT_RGB: [u8; 3] = [99, 102, 241]; // indigo

// Confetti field
pub const CONFETTI_GRAVITY: f32 = 0.3; // per frame
pub const CONFETTI_DRAG: f32 = 0.99; // per frame, horizontal only
pub const CONFETTI_FADE: f32 = 0.008; // opacity lost per frame
pub const CONFETTI_FLOOR_MARGIN: f32 = 50.0; // px below the bottom edge before removal
pub const CONFETTI_BURST_COUNT: usize = 50;
pub const CONFETTI_RAIN_MS: u64 = 4000;
pub const CONFETTI_RAIN_INTERVAL_MS: u64 = 50;
pub const CONFETTI_RAIN_PER_TICK: usize = 5;
pub const CONFETTI_RAIN_SPAWN_Y: f32 = -20.0;

pub const CONFETTI_PALETTE: [&str; 7] = [
    "#6366f1", // indigo
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#f59e0b", // amber
    "#10b981", // emerald
    "#ffffff",
    "#fbbf24", // gold
];
