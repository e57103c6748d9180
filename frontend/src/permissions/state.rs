use super::error::{PermissionError, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Requesting,
    Granted,
    Denied,
}

/// Bookkeeping shared by the camera and location lifecycles.
///
/// `held` is `Some` exactly when the phase is `Granted`, and `error` is only
/// ever set in `Denied`.
#[derive(Debug)]
pub struct Acquisition<T> {
    resource: Resource,
    phase: Phase,
    held: Option<T>,
    error: Option<String>,
}

impl<T> Acquisition<T> {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            phase: Phase::Idle,
            held: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn held(&self) -> Option<&T> {
        self.held.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enters `Requesting`. Hands back whatever was held before so the caller
    /// can release it ahead of the new acquisition.
    pub fn begin(&mut self) -> Result<Option<T>, PermissionError> {
        if self.phase == Phase::Requesting {
            return Err(PermissionError::InFlight(self.resource));
        }
        let previous = self.held.take();
        self.phase = Phase::Requesting;
        self.error = None;
        Ok(previous)
    }

    pub fn grant(&mut self, value: T) {
        self.phase = Phase::Granted;
        self.held = Some(value);
        self.error = None;
    }

    pub fn deny(&mut self, error: &PermissionError) {
        self.phase = Phase::Denied;
        self.held = None;
        self.error = Some(error.to_string());
    }

    /// Drops back to `Idle` and returns the held value, if any. An in-flight
    /// request is left alone.
    pub fn release(&mut self) -> Option<T> {
        let held = self.held.take();
        if held.is_some() {
            self.phase = Phase::Idle;
        }
        held
    }

    /// Used when a request completes after its consumer has gone away.
    pub fn abandon(&mut self) {
        self.phase = Phase::Idle;
        self.held = None;
    }
}
