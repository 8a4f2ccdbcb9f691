//! Configuration for the enhancement behaviors.
//!
//! The scrollspy band and the observer thresholds are tuning values with no
//! single right answer, so they stay configurable; the defaults match the
//! values the behaviors were designed against. Configuration can be loaded
//! from environment variables or constructed programmatically.

use std::env;

/// Runtime configuration for a page's enhancement behaviors.
#[derive(Clone, Debug)]
pub struct EnhanceConfig {
    /// Scrollspy root margin, top inset as a percentage of viewport height.
    /// Negative values shrink the band.
    pub spy_margin_top_pct: f64,
    /// Scrollspy root margin, bottom inset as a percentage of viewport height.
    pub spy_margin_bottom_pct: f64,
    /// Visibility ratio a section must reach to count as the active one.
    pub spy_threshold: f64,
    /// Visibility ratio an element must reach to reveal.
    pub reveal_threshold: f64,
    /// Location of the profile document, resolved against the page URL.
    pub data_path: String,
}

impl EnhanceConfig {
    /// Construct a config with explicit values. Thresholds are clamped to
    /// the `0.0..=1.0` ratio range.
    #[must_use]
    pub fn new(
        spy_margin_top_pct: f64,
        spy_margin_bottom_pct: f64,
        spy_threshold: f64,
        reveal_threshold: f64,
        data_path: String,
    ) -> Self {
        Self {
            spy_margin_top_pct,
            spy_margin_bottom_pct,
            spy_threshold: spy_threshold.clamp(0.0, 1.0),
            reveal_threshold: reveal_threshold.clamp(0.0, 1.0),
            data_path,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following, falling back to the defaults on absence or parse
    /// failure:
    /// - `BURNISH_SPY_MARGIN_TOP_PCT` (default: -40)
    /// - `BURNISH_SPY_MARGIN_BOTTOM_PCT` (default: -50)
    /// - `BURNISH_SPY_THRESHOLD` (default: 0.25)
    /// - `BURNISH_REVEAL_THRESHOLD` (default: 0.15)
    /// - `BURNISH_DATA_PATH` (default: `assets/data.json`)
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self::new(
            env_f64("BURNISH_SPY_MARGIN_TOP_PCT", defaults.spy_margin_top_pct),
            env_f64(
                "BURNISH_SPY_MARGIN_BOTTOM_PCT",
                defaults.spy_margin_bottom_pct,
            ),
            env_f64("BURNISH_SPY_THRESHOLD", defaults.spy_threshold),
            env_f64("BURNISH_REVEAL_THRESHOLD", defaults.reveal_threshold),
            env::var("BURNISH_DATA_PATH").unwrap_or(defaults.data_path),
        )
    }
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            spy_margin_top_pct: -40.0,
            spy_margin_bottom_pct: -50.0,
            spy_threshold: 0.25,
            reveal_threshold: 0.15,
            data_path: String::from("assets/data.json"),
        }
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|val| val.parse::<f64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_design_tuning() {
        let config = EnhanceConfig::default();
        assert_eq!(config.spy_margin_top_pct, -40.0);
        assert_eq!(config.spy_margin_bottom_pct, -50.0);
        assert_eq!(config.spy_threshold, 0.25);
        assert_eq!(config.reveal_threshold, 0.15);
        assert_eq!(config.data_path, "assets/data.json");
    }

    #[test]
    fn thresholds_are_clamped_to_ratio_range() {
        let config = EnhanceConfig::new(-40.0, -50.0, 7.0, -1.0, String::new());
        assert_eq!(config.spy_threshold, 1.0);
        assert_eq!(config.reveal_threshold, 0.0);
    }
}
