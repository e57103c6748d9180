use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Camera,
    Location,
}

/// `{}` gives the capitalised name, `{:#}` the lowercase one.
impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (self, f.alternate()) {
            (Resource::Camera, false) => "Camera",
            (Resource::Camera, true) => "camera",
            (Resource::Location, false) => "Location",
            (Resource::Location, true) => "location",
        };
        f.write_str(name)
    }
}

/// Failure of a permission request. The `Display` output of the first two
/// variants is what ends up in front of the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    #[error("{0} access denied. Please enable {0:#} permissions.")]
    PermissionDenied(Resource),
    #[error("{resource} unavailable: {reason}")]
    AcquisitionFailed { resource: Resource, reason: String },
    #[error("{0} request already in progress")]
    InFlight(Resource),
}

impl PermissionError {
    pub fn unavailable(resource: Resource, reason: impl Into<String>) -> Self {
        PermissionError::AcquisitionFailed {
            resource,
            reason: reason.into(),
        }
    }

    /// Maps a `DOMException` name raised by the media capture API.
    pub fn from_dom_exception(resource: Resource, name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => {
                PermissionError::PermissionDenied(resource)
            }
            "NotFoundError" | "DevicesNotFoundError" => {
                Self::unavailable(resource, "no matching device found")
            }
            "NotReadableError" | "TrackStartError" => {
                Self::unavailable(resource, "device is already in use")
            }
            _ if message.is_empty() => Self::unavailable(resource, name),
            _ => Self::unavailable(resource, message),
        }
    }

    /// Maps a `GeolocationPositionError` code.
    pub fn from_geolocation_code(code: u16, message: &str) -> Self {
        match code {
            1 => PermissionError::PermissionDenied(Resource::Location),
            2 => Self::unavailable(Resource::Location, "position unavailable"),
            3 => Self::unavailable(Resource::Location, "timed out waiting for a position"),
            _ => Self::unavailable(Resource::Location, message),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, PermissionError::InFlight(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denial_messages_are_user_facing() {
        assert_eq!(
            PermissionError::PermissionDenied(Resource::Camera).to_string(),
            "Camera access denied. Please enable camera permissions."
        );
        assert_eq!(
            PermissionError::PermissionDenied(Resource::Location).to_string(),
            "Location access denied. Please enable location permissions."
        );
    }

    #[test]
    fn dom_exceptions_are_classified() {
        assert_eq!(
            PermissionError::from_dom_exception(Resource::Camera, "NotAllowedError", "denied"),
            PermissionError::PermissionDenied(Resource::Camera)
        );
        let missing = PermissionError::from_dom_exception(Resource::Camera, "NotFoundError", "");
        assert_eq!(missing.to_string(), "Camera unavailable: no matching device found");
        let other = PermissionError::from_dom_exception(Resource::Camera, "AbortError", "aborted");
        assert_eq!(other.to_string(), "Camera unavailable: aborted");
    }

    #[test]
    fn geolocation_codes_are_classified() {
        assert_eq!(
            PermissionError::from_geolocation_code(1, ""),
            PermissionError::PermissionDenied(Resource::Location)
        );
        assert!(matches!(
            PermissionError::from_geolocation_code(3, ""),
            PermissionError::AcquisitionFailed { resource: Resource::Location, .. }
        ));
    }
}
