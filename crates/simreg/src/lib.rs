#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Example
//!
//! ```
//! use simreg::geometry::{RegistrationParams, TransformModel};
//! use simreg::image::{Image, ImageBuffer};
//! use simreg::imgproc::{composite::{composite, CompositeKind}, resample::resample};
//! use simreg::io::{ImageDescriptor, RegistrationRecord};
//!
//! let reference: ImageBuffer = Image::<u8, 1>::from_size_val([64, 48].into(), 10).into();
//! let moving: ImageBuffer = Image::<u8, 1>::from_size_val([64, 48].into(), 20).into();
//!
//! let params = RegistrationParams {
//!     model: TransformModel::Motion,
//!     angle: 5.0,
//!     shift_x: 2.0,
//!     ..Default::default()
//! };
//! let transform = params.to_transform_2d([64, 48].into());
//!
//! let registered = resample(&reference, &transform, &moving).unwrap();
//! let kind = CompositeKind::Checkerboard { tile_size: 8 };
//! let preview = composite(kind, &reference, &registered).unwrap();
//! assert_eq!(preview.buffer.size(), reference.size());
//!
//! let record = RegistrationRecord::new(
//!     ImageDescriptor::from_buffer("reference", &reference),
//!     ImageDescriptor::from_buffer("moving", &moving),
//!     transform,
//! );
//! let json = simreg::io::to_json_string(&record).unwrap();
//! assert!(json.contains("CenteredMotion2D"));
//! ```

#[doc(inline)]
pub use simreg_image as image;

#[doc(inline)]
pub use simreg_geometry as geometry;

#[doc(inline)]
pub use simreg_imgproc as imgproc;

#[doc(inline)]
pub use simreg_io as io;
