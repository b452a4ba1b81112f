use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

/// The sample type of an image buffer.
///
/// The serialized names are the ones used by registration records, so
/// `Gray16` is written as `Int16` and `Rgb8` as `RGB8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelType {
    /// 8-bit grayscale.
    #[serde(rename = "UInt8")]
    Gray8,
    /// 16-bit grayscale.
    #[serde(rename = "Int16")]
    Gray16,
    /// 24-bit RGB, one byte per channel.
    #[serde(rename = "RGB8")]
    Rgb8,
    /// 32-bit floating point grayscale.
    #[serde(rename = "Float32")]
    Float32,
}

impl PixelType {
    /// Number of bits used to store one pixel.
    pub fn bit_depth(&self) -> usize {
        match self {
            PixelType::Gray8 => 8,
            PixelType::Gray16 => 16,
            PixelType::Rgb8 => 24,
            PixelType::Float32 => 32,
        }
    }

    /// Number of channels of one pixel.
    pub fn num_channels(&self) -> usize {
        match self {
            PixelType::Rgb8 => 3,
            _ => 1,
        }
    }
}

impl std::fmt::Display for PixelType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            PixelType::Gray8 => "UInt8",
            PixelType::Gray16 => "Int16",
            PixelType::Rgb8 => "RGB8",
            PixelType::Float32 => "Float32",
        };
        write!(f, "{name}")
    }
}

/// Trait for pixel sample types.
///
/// Send and Sync is required for the rayon row iterators.
pub trait Pixel: Copy + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Convert the sample to a f64 value.
    fn to_f64(self) -> f64;

    /// Convert a f64 value to the sample type.
    ///
    /// Integer types truncate toward zero and then wrap modulo `2^bits`, the
    /// way a C-style cast into the storage type does. No clamping is applied.
    fn from_f64(x: f64) -> Self;
}

/// Truncate toward zero, then keep the low bits of the integer.
#[inline]
fn wrapping_from_f64<U>(x: f64) -> U
where
    U: Copy + 'static,
    i64: AsPrimitive<U>,
{
    (x as i64).as_()
}

impl Pixel for u8 {
    fn to_f64(self) -> f64 {
        self.as_()
    }

    fn from_f64(x: f64) -> Self {
        wrapping_from_f64(x)
    }
}

impl Pixel for u16 {
    fn to_f64(self) -> f64 {
        self.as_()
    }

    fn from_f64(x: f64) -> Self {
        wrapping_from_f64(x)
    }
}

impl Pixel for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(x: f64) -> Self {
        x as f32
    }
}

/// Pack an RGB triplet into a 24-bit integer `0xRRGGBB`.
///
/// # Example
///
/// ```
/// use simreg_image::pixel::pack_rgb;
///
/// assert_eq!(pack_rgb([0x12, 0x34, 0x56]), 0x123456);
/// ```
pub fn pack_rgb(rgb: [u8; 3]) -> u32 {
    ((rgb[0] as u32) << 16) | ((rgb[1] as u32) << 8) | rgb[2] as u32
}

/// Unpack a `0xRRGGBB` integer into an RGB triplet. The high byte is ignored.
pub fn unpack_rgb(code: u32) -> [u8; 3] {
    [
        ((code >> 16) & 0xFF) as u8,
        ((code >> 8) & 0xFF) as u8,
        (code & 0xFF) as u8,
    ]
}
