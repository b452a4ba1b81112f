#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// JSON encoding and decoding of registration records.
pub mod json;

/// Registration records and their image and transform descriptors.
pub mod record;

pub use crate::error::IoError;
pub use crate::json::{from_json_str, read_registration, to_json_string, write_registration};
pub use crate::record::{ImageDescriptor, RegistrationRecord, TransformRecord};
