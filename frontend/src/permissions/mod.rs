//! Camera and location acquisition.
//!
//! Each resource has its own lifecycle manager. Both are generic over a
//! platform source so the browser bindings in `utils` can be swapped for
//! fakes in tests.

pub mod camera;
pub mod constraints;
pub mod error;
pub mod location;
pub mod state;

pub use camera::{CameraManager, MediaSource, MediaTrackSet};
pub use constraints::{LocationOptions, MediaConstraints};
pub use error::{PermissionError, Resource};
pub use location::{LocationManager, PositionFix, PositionSource};
pub use state::Phase;

use std::rc::Rc;

pub(crate) type Observer = Option<Rc<dyn Fn()>>;

pub(crate) fn notify(observer: &Observer) {
    if let Some(observer) = observer {
        observer();
    }
}
