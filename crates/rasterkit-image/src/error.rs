/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image dimensions.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a color string is not six hex digits.
    #[error("Invalid hex color \"{0}\", expected six hex digits \"RRGGBB\"")]
    InvalidHexColor(String),
}
