pub const THEME_KEY: &str = "theme";

/// Menu controls are only wired on viewports at most this tall.
pub const MENU_HEIGHT_THRESHOLD: f64 = 1050.0;

pub const NAVBAR_HIDE_OFFSET: f64 = 100.0;
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

pub const REVEAL_DISTANCE: f64 = 50.0;
pub const REVEAL_DURATION: f64 = 1.0;
pub const REVEAL_EASE: &str = "power2.out";
pub const REVEAL_START: &str = "top 90%";
pub const REVEAL_END: &str = "bottom 10%";
pub const STAGGER_START: &str = "top 85%";

pub const FILTER_STAGGER_MS: u32 = 80;

pub const DRIVE_BUTTON_GLOW: &str =
    "0 0 30px rgba(102, 126, 234, 0.8), 0 0 60px rgba(118, 75, 162, 0.4)";
pub const DRIVE_BUTTON_REST: &str = "0 8px 25px rgba(88, 166, 255, 0.4)";
pub const DRIVE_BUTTON_HOVER_SCALE: f64 = 1.05;

pub const LOADER_FADE_MS: u32 = 500;

pub const ANCHOR_SCROLL_OFFSET: f64 = -80.0;
pub const SMOOTH_SCROLL_DURATION: f64 = 1.5;
pub const LENIS_DURATION: f64 = 1.2;

pub const ACTIVE_SECTION_ROOT_MARGIN: &str = "-20% 0px -80% 0px";

pub const TYPED_STRINGS: [&str; 4] = [
    "Data Engineer",
    "Data Analyst",
    "Machine Learning Engineer",
    "Data Scientist",
];
pub const TYPED_SPEED_MS: u32 = 100;
pub const TYPED_BACK_SPEED_MS: u32 = 50;
pub const TYPED_BACK_DELAY_MS: u32 = 1500;
