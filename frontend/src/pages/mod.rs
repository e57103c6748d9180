pub mod about;
pub mod contact;
pub mod features;
pub mod hero;
pub mod landing;
pub mod stats;
