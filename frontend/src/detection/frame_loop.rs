//! Cancellable once-per-display-refresh loop.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Something that can run a callback on the next display refresh.
pub trait FrameScheduler: 'static {
    type Token;

    /// Returns `None` when the callback could not be scheduled.
    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Token>;
    fn cancel(&self, token: Self::Token);
}

struct Shared<S: FrameScheduler> {
    scheduler: S,
    running: Cell<bool>,
    frames: Cell<u64>,
    pending: RefCell<Option<S::Token>>,
    tick: RefCell<Box<dyn FnMut()>>,
}

impl<S: FrameScheduler> Shared<S> {
    fn schedule(this: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(this);
        let token = this.scheduler.request(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                Shared::fire(&shared);
            }
        }));
        if token.is_none() {
            log::warn!("could not schedule the next animation frame, stopping overlay loop");
            this.running.set(false);
        }
        *this.pending.borrow_mut() = token;
    }

    fn fire(this: &Rc<Self>) {
        this.pending.borrow_mut().take();
        if !this.running.get() {
            return;
        }
        this.frames.set(this.frames.get() + 1);
        {
            let mut tick = this.tick.borrow_mut();
            (*tick)();
        }
        if this.running.get() {
            Shared::schedule(this);
        }
    }
}

/// Calls `tick` once per frame until [`FrameLoop::stop`] or drop. After
/// `stop` returns no further tick runs, even if the scheduler fires a
/// callback it failed to cancel.
pub struct FrameLoop<S: FrameScheduler> {
    shared: Rc<Shared<S>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn start(scheduler: S, tick: impl FnMut() + 'static) -> Self {
        let shared = Rc::new(Shared {
            scheduler,
            running: Cell::new(true),
            frames: Cell::new(0),
            pending: RefCell::new(None),
            tick: RefCell::new(Box::new(tick)),
        });
        Shared::schedule(&shared);
        Self { shared }
    }

    pub fn stop(&self) {
        if !self.shared.running.replace(false) {
            return;
        }
        let pending = self.shared.pending.borrow_mut().take();
        if let Some(token) = pending {
            self.shared.scheduler.cancel(token);
        }
        log::debug!("overlay loop stopped after {} frames", self.shared.frames.get());
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }

    pub fn frames(&self) -> u64 {
        self.shared.frames.get()
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Queue = Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>;

    /// Frames advance only when the test says so.
    #[derive(Clone, Default)]
    struct ManualFrames {
        queue: Queue,
        next_id: Rc<Cell<u32>>,
        cancelled: Rc<Cell<u32>>,
        refuse: bool,
    }

    impl ManualFrames {
        fn advance(&self) {
            let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for (_, callback) in due {
                callback();
            }
        }

        fn queued(&self) -> usize {
            self.queue.borrow().len()
        }
    }

    impl FrameScheduler for ManualFrames {
        type Token = u32;

        fn request(&self, callback: Box<dyn FnOnce()>) -> Option<u32> {
            if self.refuse {
                return None;
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            Some(id)
        }

        fn cancel(&self, token: u32) {
            self.queue.borrow_mut().retain(|(id, _)| *id != token);
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn counting() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let ticks = Rc::new(Cell::new(0));
        let seen = Rc::clone(&ticks);
        (ticks, move || seen.set(seen.get() + 1))
    }

    #[test]
    fn ticks_once_per_frame() {
        let frames = ManualFrames::default();
        let (ticks, tick) = counting();
        let frame_loop = FrameLoop::start(frames.clone(), tick);
        assert_eq!(ticks.get(), 0);
        for _ in 0..3 {
            frames.advance();
        }
        assert_eq!(ticks.get(), 3);
        assert_eq!(frame_loop.frames(), 3);
        assert_eq!(frames.queued(), 1);
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let frames = ManualFrames::default();
        let (ticks, tick) = counting();
        let frame_loop = FrameLoop::start(frames.clone(), tick);
        frames.advance();
        frame_loop.stop();
        assert!(!frame_loop.is_running());
        assert_eq!(frames.queued(), 0);
        assert_eq!(frames.cancelled.get(), 1);
        frames.advance();
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn late_callback_after_stop_does_nothing() {
        let frames = ManualFrames::default();
        let (ticks, tick) = counting();
        let frame_loop = FrameLoop::start(frames.clone(), tick);
        // Simulate a scheduler that cannot cancel: grab the callback first.
        let stolen: Vec<_> = frames.queue.borrow_mut().drain(..).collect();
        frame_loop.stop();
        for (_, callback) in stolen {
            callback();
        }
        assert_eq!(ticks.get(), 0);
        assert_eq!(frames.queued(), 0);
    }

    #[test]
    fn drop_stops_loop() {
        let frames = ManualFrames::default();
        let (ticks, tick) = counting();
        drop(FrameLoop::start(frames.clone(), tick));
        frames.advance();
        assert_eq!(ticks.get(), 0);
        assert_eq!(frames.queued(), 0);
    }

    #[test]
    fn refused_schedule_stops_loop() {
        let frames = ManualFrames {
            refuse: true,
            ..Default::default()
        };
        let (_, tick) = counting();
        let frame_loop = FrameLoop::start(frames, tick);
        assert!(!frame_loop.is_running());
    }
}
