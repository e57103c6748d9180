//! Demo hazard overlay: the annotation source and the per-frame loop that
//! drives it.

pub mod detector;
pub mod frame_loop;

pub use detector::{Annotation, HazardDetector, Surface, SyntheticDetector};
pub use frame_loop::{FrameLoop, FrameScheduler};
