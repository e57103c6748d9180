//! Build-time configuration. Values come from environment variables at
//! compile time (`trunk build` inherits the shell environment) and fall
//! back to defaults when missing or malformed.

use log::Level;

pub const SITE_TITLE: &str = "AI Helmet - Road Safety Project";

const DEFAULT_LOG_LEVEL: Level = Level::Info;
const DEFAULT_DETECTION_PROBABILITY: f64 = 0.3;
const DEFAULT_FORM_DELAY_MS: u32 = 500;

pub fn log_level() -> Level {
    parse_log_level(option_env!("HELMET_LOG_LEVEL"))
}

/// Per-frame chance of the demo overlay drawing a hazard box.
pub fn detection_probability() -> f64 {
    parse_probability(option_env!("HELMET_DETECTION_PROBABILITY"))
}

/// Delay before the simulated contact/newsletter submission completes.
pub fn form_delay_ms() -> u32 {
    parse_delay(option_env!("HELMET_CONTACT_DELAY_MS"))
}

fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

fn parse_probability(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|p| (0.0..=1.0).contains(p))
        .unwrap_or(DEFAULT_DETECTION_PROBABILITY)
}

fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_FORM_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_or_defaults() {
        assert_eq!(parse_log_level(Some("debug")), Level::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), Level::Warn);
        assert_eq!(parse_log_level(Some("loud")), Level::Info);
        assert_eq!(parse_log_level(None), Level::Info);
    }

    #[test]
    fn probability_must_be_a_probability() {
        assert_eq!(parse_probability(Some("0.5")), 0.5);
        assert_eq!(parse_probability(Some("1.5")), 0.3);
        assert_eq!(parse_probability(Some("NaN")), 0.3);
        assert_eq!(parse_probability(None), 0.3);
    }

    #[test]
    fn delay_defaults_to_half_a_second() {
        assert_eq!(parse_delay(Some("1200")), 1200);
        assert_eq!(parse_delay(Some("-1")), 500);
        assert_eq!(parse_delay(None), 500);
    }
}
