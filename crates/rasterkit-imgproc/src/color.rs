use crate::error::FilterError;
use crate::filter::ImageFilter;
use rasterkit_image::{Pixel, PixelBuffer};

/// How a filter decides that two colors match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMatch {
    /// All four channels must be equal.
    #[default]
    Exact,
    /// Red, green and blue must be equal; alpha is ignored.
    IgnoreAlpha,
}

impl ColorMatch {
    fn matches(self, a: &Pixel, b: &Pixel) -> bool {
        match self {
            ColorMatch::Exact => a == b,
            ColorMatch::IgnoreAlpha => a.has_same_rgb(b),
        }
    }
}

/// Convert an image to grayscale using the unweighted channel average.
///
/// Every pixel's R, G and B are replaced with `(B + G + R) / 3` (truncating
/// division); alpha is kept as-is. The pass is idempotent.
///
/// # Examples
///
/// ```
/// use rasterkit_image::{ImageSize, Pixel, PixelBuffer};
/// use rasterkit_imgproc::color::Grayscale;
/// use rasterkit_imgproc::filter::ImageFilter;
///
/// let mut image = PixelBuffer::new(ImageSize {
///     width: 1,
///     height: 1,
/// });
/// image.put_pixel(0, 0, Pixel::from_bgra(30, 60, 90, 200));
///
/// let gray = Grayscale::new().process(&image);
///
/// assert_eq!(gray.pixel(0, 0), Pixel::from_bgra(60, 60, 60, 200));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Grayscale;

impl Grayscale {
    /// Create a new grayscale pass.
    pub fn new() -> Self {
        Self
    }
}

impl ImageFilter for Grayscale {
    fn process(&self, source: &PixelBuffer) -> PixelBuffer {
        let mut result = PixelBuffer::new(source.size());
        let src = source.as_slice();
        let dst = result.as_slice_mut();

        for i in (0..src.len()).step_by(PixelBuffer::CHANNELS) {
            let gray = ((src[i] as u16 + src[i + 1] as u16 + src[i + 2] as u16) / 3) as u8;
            dst[i] = gray;
            dst[i + 1] = gray;
            dst[i + 2] = gray;
            dst[i + 3] = src[i + 3];
        }

        result
    }
}

/// Rewrite every pixel of one color to another.
///
/// Pixels matching `from` under the configured [`ColorMatch`] get `to`'s
/// R, G and B while keeping their own alpha; everything else passes through
/// untouched.
///
/// # Examples
///
/// ```
/// use rasterkit_image::{ImageSize, Pixel, PixelBuffer};
/// use rasterkit_imgproc::color::{ColorMatch, ColorReplacer};
/// use rasterkit_imgproc::filter::ImageFilter;
///
/// let mut image = PixelBuffer::new(ImageSize {
///     width: 1,
///     height: 1,
/// });
/// image.put_pixel(0, 0, Pixel::from_hex("FF0000")?);
///
/// let replacer = ColorReplacer::from_hex("FF0000", "0000FF", ColorMatch::Exact)?;
/// let result = replacer.process(&image);
///
/// assert_eq!(result.pixel(0, 0), Pixel::from_hex("0000FF")?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ColorReplacer {
    from: Pixel,
    to: Pixel,
    mode: ColorMatch,
}

impl ColorReplacer {
    /// Create a replacer that rewrites `from` into `to`.
    pub fn new(from: Pixel, to: Pixel, mode: ColorMatch) -> Self {
        Self { from, to, mode }
    }

    /// Create a replacer from `"RRGGBB"` hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Image`] when either string is malformed.
    pub fn from_hex(from: &str, to: &str, mode: ColorMatch) -> Result<Self, FilterError> {
        Ok(Self::new(Pixel::from_hex(from)?, Pixel::from_hex(to)?, mode))
    }
}

impl ImageFilter for ColorReplacer {
    fn process(&self, source: &PixelBuffer) -> PixelBuffer {
        let mut result = source.clone();
        let src = source.as_slice();
        let dst = result.as_slice_mut();

        for i in (0..src.len()).step_by(PixelBuffer::CHANNELS) {
            let current = Pixel::from_bgra(src[i], src[i + 1], src[i + 2], src[i + 3]);
            if self.mode.matches(&current, &self.from) {
                dst[i] = self.to.b;
                dst[i + 1] = self.to.g;
                dst[i + 2] = self.to.r;
                // alpha keeps the source value
            }
        }

        result
    }
}

/// Flatten every color except one.
///
/// Pixels NOT matching `allowed` under the configured [`ColorMatch`] get
/// `result`'s R, G and B while keeping their own alpha; pixels of the
/// allowed color pass through untouched.
#[derive(Clone, Copy, Debug)]
pub struct ColorCleaner {
    allowed: Pixel,
    result: Pixel,
    mode: ColorMatch,
}

impl ColorCleaner {
    /// Create a cleaner that keeps only `allowed` and flattens the rest to
    /// `result`.
    pub fn new(allowed: Pixel, result: Pixel, mode: ColorMatch) -> Self {
        Self {
            allowed,
            result,
            mode,
        }
    }

    /// Create a cleaner from `"RRGGBB"` hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Image`] when either string is malformed.
    pub fn from_hex(allowed: &str, result: &str, mode: ColorMatch) -> Result<Self, FilterError> {
        Ok(Self::new(
            Pixel::from_hex(allowed)?,
            Pixel::from_hex(result)?,
            mode,
        ))
    }
}

impl ImageFilter for ColorCleaner {
    fn process(&self, source: &PixelBuffer) -> PixelBuffer {
        let mut out = source.clone();
        let src = source.as_slice();
        let dst = out.as_slice_mut();

        for i in (0..src.len()).step_by(PixelBuffer::CHANNELS) {
            let current = Pixel::from_bgra(src[i], src[i + 1], src[i + 2], src[i + 3]);
            if !self.mode.matches(&current, &self.allowed) {
                dst[i] = self.result.b;
                dst[i + 1] = self.result.g;
                dst[i + 2] = self.result.r;
                // alpha keeps the source value
            }
        }

        out
    }
}
