use log::Level;
use serde::Serialize;

/// Navbar switches to its compact style once the page is scrolled past this.
pub const COMPACT_NAV_THRESHOLD: u32 = 100;

/// The back-to-top button shows up once the page is scrolled past this.
pub const BACK_TO_TOP_THRESHOLD: u32 = 500;

/// Extra reveal delay per item in a list, in milliseconds.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Options handed to `AOS.init`. Field names are the library's own keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealConfig {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: 1000,
            easing: "ease-out-cubic",
            once: true,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_config_serializes_to_library_keys() {
        let json = serde_json::to_value(RevealConfig::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "duration": 1000,
                "easing": "ease-out-cubic",
                "once": true
            })
        );
    }

    #[test]
    fn back_to_top_threshold_is_further_down_than_navbar_threshold() {
        assert!(BACK_TO_TOP_THRESHOLD > COMPACT_NAV_THRESHOLD);
    }
}
