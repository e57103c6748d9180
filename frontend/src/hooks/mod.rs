pub mod permissions;
pub mod reveal;
pub mod scroll;

pub use permissions::{use_camera, use_location};
pub use reveal::use_reveal;
pub use scroll::use_viewport_scroll;
