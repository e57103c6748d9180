//! One-shot location fix lifecycle. Independent of the camera; both may be
//! in flight at once.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};

use super::constraints::LocationOptions;
use super::error::{PermissionError, Resource};
use super::state::{Acquisition, Phase};
use super::{notify, Observer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres, 95% confidence.
    pub accuracy: f64,
}

/// Platform side of `getCurrentPosition`. The source is responsible for
/// honouring `options.timeout`.
pub trait PositionSource {
    fn current_position(
        &self,
        options: &LocationOptions,
    ) -> LocalBoxFuture<'static, Result<PositionFix, PermissionError>>;
}

pub struct LocationManager<S: PositionSource> {
    source: S,
    options: LocationOptions,
    state: Rc<RefCell<Acquisition<PositionFix>>>,
    observer: Observer,
}

impl<S: PositionSource> LocationManager<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: LocationOptions::default(),
            state: Rc::new(RefCell::new(Acquisition::new(Resource::Location))),
            observer: None,
        }
    }

    pub fn observe(mut self, observer: impl Fn() + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase()
    }

    pub fn fix(&self) -> Option<PositionFix> {
        self.state.borrow().held().copied()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(str::to_owned)
    }

    /// Asks for a single fresh fix. Same re-entrancy rule as the camera:
    /// a pending request turns further calls into [`PermissionError::InFlight`].
    pub fn request(&self) -> LocalBoxFuture<'static, Result<PositionFix, PermissionError>> {
        if let Err(err) = self.state.borrow_mut().begin() {
            log::debug!("location request ignored: {}", err);
            return future::ready(Err(err)).boxed_local();
        }
        notify(&self.observer);

        let pending = self.source.current_position(&self.options);
        let state = Rc::clone(&self.state);
        let observer = self.observer.clone();
        async move {
            let outcome = pending.await;
            match &outcome {
                Ok(fix) => {
                    log::info!("location fix acquired (accuracy {:.0} m)", fix.accuracy);
                    state.borrow_mut().grant(*fix);
                }
                Err(err) => {
                    log::error!("Error accessing location: {}", err);
                    state.borrow_mut().deny(err);
                }
            }
            notify(&observer);
            outcome
        }
        .boxed_local()
    }

    /// Forgets the stored fix.
    pub fn clear(&self) {
        if self.state.borrow_mut().release().is_some() {
            notify(&self.observer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    const FIX: PositionFix = PositionFix {
        latitude: 12.97,
        longitude: 77.59,
        accuracy: 8.0,
    };

    struct FakeGps {
        calls: Rc<Cell<usize>>,
        answers: RefCell<Vec<Result<PositionFix, PermissionError>>>,
    }

    impl FakeGps {
        fn new(answers: Vec<Result<PositionFix, PermissionError>>) -> Self {
            Self {
                calls: Rc::new(Cell::new(0)),
                answers: RefCell::new(answers),
            }
        }
    }

    impl PositionSource for FakeGps {
        fn current_position(
            &self,
            options: &LocationOptions,
        ) -> LocalBoxFuture<'static, Result<PositionFix, PermissionError>> {
            assert!(options.enable_high_accuracy);
            assert_eq!(options.timeout, 5_000);
            assert_eq!(options.maximum_age, 0);
            self.calls.set(self.calls.get() + 1);
            future::ready(self.answers.borrow_mut().remove(0)).boxed_local()
        }
    }

    #[test]
    fn success_stores_single_fix() {
        let location = LocationManager::new(FakeGps::new(vec![Ok(FIX)]));
        assert_eq!(block_on(location.request()), Ok(FIX));
        assert_eq!(location.phase(), Phase::Granted);
        assert_eq!(location.fix(), Some(FIX));
    }

    #[test]
    fn denial_sets_error_and_retry_recovers() {
        let location = LocationManager::new(FakeGps::new(vec![
            Err(PermissionError::from_geolocation_code(1, "")),
            Ok(FIX),
        ]));
        assert!(block_on(location.request()).is_err());
        assert_eq!(location.phase(), Phase::Denied);
        assert_eq!(
            location.error().as_deref(),
            Some("Location access denied. Please enable location permissions.")
        );

        block_on(location.request()).unwrap();
        assert_eq!(location.phase(), Phase::Granted);
        assert!(location.error().is_none());
    }

    #[test]
    fn pending_request_blocks_reentry() {
        let gps = FakeGps::new(vec![Ok(FIX)]);
        let calls = Rc::clone(&gps.calls);
        let location = LocationManager::new(gps);

        let first = location.request();
        let second = block_on(location.request());
        assert_eq!(second, Err(PermissionError::InFlight(Resource::Location)));
        assert_eq!(calls.get(), 1);
        assert_eq!(block_on(first), Ok(FIX));
    }

    #[test]
    fn clear_returns_to_idle() {
        let location = LocationManager::new(FakeGps::new(vec![Ok(FIX)]));
        block_on(location.request()).unwrap();
        location.clear();
        assert_eq!(location.phase(), Phase::Idle);
        assert!(location.fix().is_none());
    }
}
