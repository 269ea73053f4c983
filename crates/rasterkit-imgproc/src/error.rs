use rasterkit_image::ImageError;

/// An error type for filter configuration.
///
/// Filters reject invalid configuration up front so that a constructed
/// filter can process any buffer without failing.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// Error when the edge stamp level is outside the supported range.
    #[error("Unsupported stamp level {0}, expected a value in 0..=4")]
    InvalidStampLevel(usize),

    /// Error when the neighborhood distance is zero.
    #[error("Neighborhood distance must be at least 1, got {0}")]
    InvalidDistance(usize),

    /// Error from the underlying image module.
    #[error(transparent)]
    Image(#[from] ImageError),
}
