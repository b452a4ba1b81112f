/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error to read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to encode or decode the JSON document.
    #[error("Failed to process the JSON document. {0}")]
    JsonError(#[from] serde_json::Error),

    /// The document is not a registration record.
    #[error("Invalid record type: expected Registration, got {0}")]
    InvalidRecordType(String),

    /// The image descriptor is not consistent.
    #[error("Invalid image descriptor {0}: {1}")]
    InvalidImageDescriptor(String, String),

    /// The transform does not have the requested dimension.
    #[error("Transform {0} is not a {1}D transform")]
    InvalidTransformDimension(&'static str, usize),
}
