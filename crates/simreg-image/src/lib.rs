#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for registration purposes.
pub mod image;

/// volumes as stacks of equally sized images.
pub mod volume;

/// pixel sample types and conversions.
pub mod pixel;

/// dynamically typed image buffers.
pub mod buffer;

/// Error types for the image module.
pub mod error;

pub use crate::buffer::ImageBuffer;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::{Pixel, PixelType};
pub use crate::volume::{Volume, VolumeSize};
