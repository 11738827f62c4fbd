pub mod generation;
pub mod image;
pub mod wallpaper;

pub use generation::*;
pub use image::*;
pub use wallpaper::*;
