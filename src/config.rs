pub const THEME_KEY: &str = "fitapp-theme";
pub const GEMINI_KEY_STORAGE: &str = "fitapp-gemini-api-key";
pub const GEMINI_MODEL: &str = "gemini-1.5-flash"; // fast enough for support Q&A

pub const TOAST_DURATION_MS: u32 = 2200;

// Tilt effect, in degrees / px
pub const TILT_MAX_X: f64 = 6.0;
pub const TILT_MAX_Y: f64 = 8.0;
pub const TILT_BASE_LIFT: f64 = -2.0;

pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

/// Height of the fixed header, subtracted when smooth-scrolling to an anchor.
pub const SCROLL_OFFSET: f64 = 70.0;

/// Base URL of the Generative Language API. Can be pointed elsewhere at build
/// time with `FITAPP_GEMINI_API_BASE`.
pub fn get_gemini_api_base() -> &'static str {
    match option_env!("FITAPP_GEMINI_API_BASE") {
        Some(base) if !base.is_empty() => base,
        _ => "https://generativelanguage.googleapis.com",
    }
}
