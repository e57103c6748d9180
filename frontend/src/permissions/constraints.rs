//! Request parameters handed to the browser, serialized into the shapes
//! `getUserMedia` and `getCurrentPosition` expect.

use serde::Serialize;

pub const IDEAL_WIDTH: u32 = 1280;
pub const IDEAL_HEIGHT: u32 = 720;
pub const LOCATION_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    Environment,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ideal {
    pub ideal: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConstraints {
    pub facing_mode: FacingMode,
    pub width: Ideal,
    pub height: Ideal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaConstraints {
    pub video: VideoConstraints,
    pub audio: bool,
}

impl Default for MediaConstraints {
    fn default() -> Self {
        Self {
            video: VideoConstraints {
                facing_mode: FacingMode::Environment,
                width: Ideal { ideal: IDEAL_WIDTH },
                height: Ideal { ideal: IDEAL_HEIGHT },
            },
            audio: false,
        }
    }
}

/// One-shot position request options. `maximum_age` of zero rules out cached
/// fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationOptions {
    pub enable_high_accuracy: bool,
    pub timeout: u32,
    pub maximum_age: u32,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: LOCATION_TIMEOUT_MS,
            maximum_age: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn media_constraints_match_get_user_media_shape() {
        let value = serde_json::to_value(MediaConstraints::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "video": {
                    "facingMode": "environment",
                    "width": { "ideal": 1280 },
                    "height": { "ideal": 720 }
                },
                "audio": false
            })
        );
    }

    #[test]
    fn location_options_disallow_cached_fixes() {
        let value = serde_json::to_value(LocationOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({ "enableHighAccuracy": true, "timeout": 5000, "maximumAge": 0 })
        );
    }
}
