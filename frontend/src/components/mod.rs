pub mod camera_view;
pub mod footer;
pub mod helmet;
pub mod nav_bar;
