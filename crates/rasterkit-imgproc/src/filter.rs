use rasterkit_image::PixelBuffer;

/// A configured filter pass over a pixel buffer.
///
/// Implementations never mutate the source and always return a newly
/// allocated buffer; the output dimensions may differ from the input (for
/// example [`crate::padding::FrameAdder`] grows the canvas). Configuration is
/// fixed when the filter value is constructed, so the same value can be
/// reused across any number of images, and passes chain by feeding one
/// filter's output into the next one's input.
///
/// # Examples
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer};
/// use rasterkit_imgproc::color::Grayscale;
/// use rasterkit_imgproc::filter::ImageFilter;
/// use rasterkit_imgproc::padding::FrameAdder;
///
/// let source = PixelBuffer::new(ImageSize {
///     width: 4,
///     height: 3,
/// });
///
/// let framed = FrameAdder::new(2).process(&Grayscale::new().process(&source));
///
/// assert_eq!(framed.width(), 8);
/// assert_eq!(framed.height(), 7);
/// ```
pub trait ImageFilter {
    /// Run the pass over `source` and return the result as a new buffer.
    fn process(&self, source: &PixelBuffer) -> PixelBuffer;
}
