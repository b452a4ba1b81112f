use crate::pixel::PixelType;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Image size mismatch: {0}x{1} vs {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when two volumes are expected to have the same size.
    #[error("Volume size mismatch: {0}x{1}x{2} vs {3}x{4}x{5}")]
    InvalidVolumeSize(usize, usize, usize, usize, usize, usize),

    /// Error when a volume is built from zero slices.
    #[error("A volume needs at least one slice")]
    EmptyVolume,

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the slice index is out of bounds.
    #[error("Slice index {0} is out of bounds ({1})")]
    SliceIndexOutOfBounds(usize, usize),

    /// Error when a checkerboard is requested with empty tiles.
    #[error("Tile size must be > 0, got {0}")]
    InvalidTileSize(usize),

    /// Error when an operation does not support the pixel type of its input.
    #[error("Operation {0} does not support {1} images")]
    UnsupportedPixelType(&'static str, PixelType),

    /// Error when two inputs are expected to share the same pixel type.
    #[error("Pixel type mismatch: {0} vs {1}")]
    PixelTypeMismatch(PixelType, PixelType),
}
