//! Reusable UI primitives: dialogs, the image strip and images.

pub mod carousel;
pub mod dialog;
pub mod image;
pub mod image_dialog;
