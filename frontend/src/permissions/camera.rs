//! Camera stream lifecycle.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};

use super::constraints::MediaConstraints;
use super::error::{PermissionError, Resource};
use super::state::{Acquisition, Phase};
use super::{notify, Observer};

/// A live capture whose hardware must be released explicitly.
pub trait MediaTrackSet {
    fn stop_tracks(&self);
}

/// Platform side of `getUserMedia`.
pub trait MediaSource {
    type Stream: MediaTrackSet + 'static;

    fn open(
        &self,
        constraints: &MediaConstraints,
    ) -> LocalBoxFuture<'static, Result<Self::Stream, PermissionError>>;
}

struct CameraCell<T: MediaTrackSet> {
    acquisition: Acquisition<T>,
    // Set once the consuming view is gone; a stream that shows up afterwards
    // is stopped on arrival.
    detached: bool,
}

impl<T: MediaTrackSet> Drop for CameraCell<T> {
    fn drop(&mut self) {
        if let Some(stream) = self.acquisition.release() {
            log::debug!("camera state dropped while holding a stream, stopping tracks");
            stream.stop_tracks();
        }
    }
}

/// Sole owner of the camera stream. Renderers borrow it through
/// [`CameraManager::stream`] and never hold it past [`CameraManager::stop`].
pub struct CameraManager<S: MediaSource> {
    source: S,
    constraints: MediaConstraints,
    cell: Rc<RefCell<CameraCell<S::Stream>>>,
    observer: Observer,
}

impl<S: MediaSource> CameraManager<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            constraints: MediaConstraints::default(),
            cell: Rc::new(RefCell::new(CameraCell {
                acquisition: Acquisition::new(Resource::Camera),
                detached: false,
            })),
            observer: None,
        }
    }

    /// Registers a callback fired after every state transition.
    pub fn observe(mut self, observer: impl Fn() + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn phase(&self) -> Phase {
        self.cell.borrow().acquisition.phase()
    }

    pub fn error(&self) -> Option<String> {
        self.cell.borrow().acquisition.error().map(str::to_owned)
    }

    pub fn stream(&self) -> Option<Ref<'_, S::Stream>> {
        Ref::filter_map(self.cell.borrow(), |cell| cell.acquisition.held()).ok()
    }

    /// Starts a camera acquisition.
    ///
    /// The transition to `Requesting` happens before this returns; the future
    /// resolves once the platform answers. While a request is pending, further
    /// calls resolve immediately with [`PermissionError::InFlight`] and leave
    /// the state untouched. A stream held from an earlier grant is stopped
    /// before the new request goes out.
    pub fn request(&self) -> LocalBoxFuture<'static, Result<(), PermissionError>> {
        let previous = {
            let mut cell = self.cell.borrow_mut();
            match cell.acquisition.begin() {
                Ok(previous) => {
                    cell.detached = false;
                    previous
                }
                Err(err) => {
                    log::debug!("camera request ignored: {}", err);
                    return future::ready(Err(err)).boxed_local();
                }
            }
        };
        if let Some(stream) = previous {
            log::info!("releasing previous camera stream before re-requesting");
            stream.stop_tracks();
        }
        notify(&self.observer);

        let pending = self.source.open(&self.constraints);
        let cell = Rc::clone(&self.cell);
        let observer = self.observer.clone();
        async move {
            let outcome = pending.await;
            let result = {
                let mut cell = cell.borrow_mut();
                match outcome {
                    Ok(stream) if cell.detached => {
                        log::info!("camera granted after the view closed, stopping tracks");
                        stream.stop_tracks();
                        cell.acquisition.abandon();
                        Err(PermissionError::unavailable(
                            Resource::Camera,
                            "view closed before the camera became available",
                        ))
                    }
                    Ok(stream) => {
                        log::info!("camera access granted");
                        cell.acquisition.grant(stream);
                        Ok(())
                    }
                    Err(err) => {
                        log::error!("Error accessing camera: {}", err);
                        cell.acquisition.deny(&err);
                        Err(err)
                    }
                }
            };
            notify(&observer);
            result
        }
        .boxed_local()
    }

    /// Stops every track of the held stream and forgets it. No-op without a
    /// stream.
    pub fn stop(&self) {
        if self.release() {
            notify(&self.observer);
        }
    }

    /// Called when the owning view goes away. Releases the stream now and
    /// makes sure one still in flight is released when it lands.
    pub fn teardown(&self) {
        self.cell.borrow_mut().detached = true;
        self.release();
    }

    fn release(&self) -> bool {
        let stream = self.cell.borrow_mut().acquisition.release();
        match stream {
            Some(stream) => {
                stream.stop_tracks();
                log::info!("camera stream stopped");
                true
            }
            None => false,
        }
    }
}

impl<S: MediaSource> Drop for CameraManager<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[derive(Default)]
    struct Tracks {
        stopped: Cell<usize>,
    }

    struct FakeStream(Rc<Tracks>);

    impl MediaTrackSet for FakeStream {
        fn stop_tracks(&self) {
            self.0.stopped.set(self.0.stopped.get() + 1);
        }
    }

    /// Each `open` takes the next scripted answer, or parks until the test
    /// resolves it through `pending`.
    #[derive(Default)]
    struct FakeCamera {
        opened: Rc<Cell<usize>>,
        script: RefCell<Vec<Result<(), PermissionError>>>,
        tracks: Rc<Tracks>,
        pending: Rc<RefCell<Option<oneshot::Sender<Result<FakeStream, PermissionError>>>>>,
        park: bool,
    }

    impl MediaSource for FakeCamera {
        type Stream = FakeStream;

        fn open(
            &self,
            constraints: &MediaConstraints,
        ) -> LocalBoxFuture<'static, Result<FakeStream, PermissionError>> {
            assert_eq!(*constraints, MediaConstraints::default());
            self.opened.set(self.opened.get() + 1);
            if self.park {
                let (tx, rx) = oneshot::channel();
                *self.pending.borrow_mut() = Some(tx);
                return async move {
                    rx.await
                        .unwrap_or_else(|_| Err(PermissionError::unavailable(Resource::Camera, "dropped")))
                }
                .boxed_local();
            }
            let next = self.script.borrow_mut().remove(0);
            let tracks = Rc::clone(&self.tracks);
            future::ready(next.map(|_| FakeStream(tracks))).boxed_local()
        }
    }

    fn scripted(script: Vec<Result<(), PermissionError>>) -> FakeCamera {
        FakeCamera {
            script: RefCell::new(script),
            ..Default::default()
        }
    }

    #[test]
    fn grant_stores_stream() {
        let camera = CameraManager::new(scripted(vec![Ok(())]));
        assert_eq!(camera.phase(), Phase::Idle);
        assert!(block_on(camera.request()).is_ok());
        assert_eq!(camera.phase(), Phase::Granted);
        assert!(camera.stream().is_some());
        assert!(camera.error().is_none());
    }

    #[test]
    fn request_enters_requesting_before_resolving() {
        let camera = CameraManager::new(FakeCamera {
            park: true,
            ..Default::default()
        });
        let pending = camera.request();
        assert_eq!(camera.phase(), Phase::Requesting);
        drop(pending);
    }

    #[test]
    fn second_request_while_pending_does_not_reach_platform() {
        let source = FakeCamera {
            park: true,
            ..Default::default()
        };
        let opened = Rc::clone(&source.opened);
        let sender = Rc::clone(&source.pending);
        let tracks = Rc::clone(&source.tracks);
        let camera = CameraManager::new(source);

        let first = camera.request();
        let second = block_on(camera.request());
        assert_eq!(second, Err(PermissionError::InFlight(Resource::Camera)));
        assert_eq!(opened.get(), 1);
        assert_eq!(camera.phase(), Phase::Requesting);

        let tx = sender.borrow_mut().take().unwrap();
        assert!(tx.send(Ok(FakeStream(tracks))).is_ok());
        assert!(block_on(first).is_ok());
        assert_eq!(camera.phase(), Phase::Granted);
        assert_eq!(opened.get(), 1);
    }

    #[test]
    fn stop_releases_every_track() {
        let source = scripted(vec![Ok(())]);
        let tracks = Rc::clone(&source.tracks);
        let camera = CameraManager::new(source);
        block_on(camera.request()).unwrap();

        camera.stop();
        assert_eq!(tracks.stopped.get(), 1);
        assert!(camera.stream().is_none());
        assert_eq!(camera.phase(), Phase::Idle);
    }

    #[test]
    fn stop_without_stream_is_noop() {
        let changes = Rc::new(Cell::new(0));
        let seen = Rc::clone(&changes);
        let camera = CameraManager::new(scripted(vec![])).observe(move || seen.set(seen.get() + 1));
        camera.stop();
        camera.stop();
        assert_eq!(camera.phase(), Phase::Idle);
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn denial_then_retry_clears_error() {
        let camera = CameraManager::new(scripted(vec![
            Err(PermissionError::PermissionDenied(Resource::Camera)),
            Ok(()),
        ]));
        let denied = block_on(camera.request());
        assert_eq!(denied, Err(PermissionError::PermissionDenied(Resource::Camera)));
        assert_eq!(camera.phase(), Phase::Denied);
        assert!(!camera.error().unwrap_or_default().is_empty());
        assert!(camera.stream().is_none());

        block_on(camera.request()).unwrap();
        assert_eq!(camera.phase(), Phase::Granted);
        assert!(camera.error().is_none());
    }

    #[test]
    fn rerequest_releases_previous_stream_first() {
        let source = scripted(vec![Ok(()), Ok(())]);
        let tracks = Rc::clone(&source.tracks);
        let camera = CameraManager::new(source);
        block_on(camera.request()).unwrap();

        let pending = camera.request();
        assert_eq!(tracks.stopped.get(), 1);
        block_on(pending).unwrap();
        assert_eq!(camera.phase(), Phase::Granted);
    }

    #[test]
    fn dropping_manager_while_granted_stops_tracks() {
        let source = scripted(vec![Ok(())]);
        let tracks = Rc::clone(&source.tracks);
        let camera = CameraManager::new(source);
        block_on(camera.request()).unwrap();

        drop(camera);
        assert_eq!(tracks.stopped.get(), 1);
    }

    #[test]
    fn stream_arriving_after_teardown_is_stopped() {
        let source = FakeCamera {
            park: true,
            ..Default::default()
        };
        let sender = Rc::clone(&source.pending);
        let tracks = Rc::clone(&source.tracks);
        let camera = CameraManager::new(source);

        let pending = camera.request();
        camera.teardown();
        assert_eq!(camera.phase(), Phase::Requesting);

        let tx = sender.borrow_mut().take().unwrap();
        assert!(tx.send(Ok(FakeStream(Rc::clone(&tracks)))).is_ok());
        assert!(block_on(pending).is_err());
        assert_eq!(tracks.stopped.get(), 1);
        assert_eq!(camera.phase(), Phase::Idle);
        assert!(camera.stream().is_none());
    }

    #[test]
    fn observer_sees_each_transition() {
        let changes = Rc::new(Cell::new(0));
        let seen = Rc::clone(&changes);
        let camera =
            CameraManager::new(scripted(vec![Ok(())])).observe(move || seen.set(seen.get() + 1));
        block_on(camera.request()).unwrap();
        assert_eq!(changes.get(), 2);
        camera.stop();
        assert_eq!(changes.get(), 3);
    }
}
