use crate::error::FilterError;
use crate::filter::ImageFilter;
use rasterkit_image::{Pixel, PixelBuffer};

#[rustfmt::skip]
static PLUS_3: [&[bool]; 3] = [
    &[false, true,  false],
    &[true,  true,  true ],
    &[false, true,  false],
];

#[rustfmt::skip]
static BOX_3: [&[bool]; 3] = [
    &[true, true, true],
    &[true, true, true],
    &[true, true, true],
];

#[rustfmt::skip]
static DIAMOND_5: [&[bool]; 5] = [
    &[false, false, true,  false, false],
    &[false, true,  true,  true,  false],
    &[true,  true,  true,  true,  true ],
    &[false, true,  true,  true,  false],
    &[false, false, true,  false, false],
];

#[rustfmt::skip]
static ROUND_5: [&[bool]; 5] = [
    &[false, true,  true,  true,  false],
    &[true,  true,  true,  true,  true ],
    &[true,  true,  true,  true,  true ],
    &[true,  true,  true,  true,  true ],
    &[false, true,  true,  true,  false],
];

#[rustfmt::skip]
static BOX_5: [&[bool]; 5] = [
    &[true, true, true, true, true],
    &[true, true, true, true, true],
    &[true, true, true, true, true],
    &[true, true, true, true, true],
    &[true, true, true, true, true],
];

/// A stamp mask: which offsets around a seed pixel get painted.
///
/// Masks are odd-sized boolean grids centered on the seed via integer
/// division of their dimensions.
#[derive(Clone, Copy, Debug)]
struct Stamp {
    rows: &'static [&'static [bool]],
}

impl Stamp {
    /// Select one of the predefined masks by level.
    fn from_level(level: usize) -> Result<Self, FilterError> {
        let rows: &'static [&'static [bool]] = match level {
            0 => &PLUS_3,
            1 => &BOX_3,
            2 => &DIAMOND_5,
            3 => &ROUND_5,
            4 => &BOX_5,
            _ => return Err(FilterError::InvalidStampLevel(level)),
        };

        Ok(Self { rows })
    }

    fn width(&self) -> usize {
        self.rows[0].len()
    }

    fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Outline shapes by stamping a mask around every non-background pixel.
///
/// The pass copies the source, then for each source pixel whose color
/// differs from the background it visits every "on" cell of the selected
/// stamp and paints the cell's position with the drawing color -- but only
/// where the *source* shows background. Keying the paint decision off the
/// source keeps every output pixel independent of drawing order, and leaves
/// the seed pixels themselves untouched.
///
/// Levels select growing masks: 0 is a 3x3 plus, 1 a 3x3 box, 2 a 5x5
/// diamond, 3 a 5x5 rounded box, 4 a 5x5 box.
///
/// # Examples
///
/// ```
/// use rasterkit_image::{ImageSize, Pixel, PixelBuffer};
/// use rasterkit_imgproc::filter::ImageFilter;
/// use rasterkit_imgproc::morphology::EdgeDrawer;
///
/// let white = Pixel::from_hex("FFFFFF")?;
/// let mut image = PixelBuffer::new(ImageSize {
///     width: 3,
///     height: 3,
/// });
/// for y in 0..3 {
///     for x in 0..3 {
///         image.put_pixel(x, y, white);
///     }
/// }
///
/// // an all-background image has nothing to outline
/// let outlined = EdgeDrawer::new(0, Pixel::from_hex("000000")?)?.process(&image);
/// assert_eq!(outlined, image);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EdgeDrawer {
    stamp: Stamp,
    drawing_color: Pixel,
    background_color: Pixel,
}

impl EdgeDrawer {
    /// Create an outlining pass against a white background.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidStampLevel`] when `level` is not in
    /// `0..=4`.
    pub fn new(level: usize, drawing_color: Pixel) -> Result<Self, FilterError> {
        Self::with_background(level, drawing_color, Pixel::from_bgra(0xFF, 0xFF, 0xFF, 0xFF))
    }

    /// Create an outlining pass against a custom background color.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidStampLevel`] when `level` is not in
    /// `0..=4`.
    pub fn with_background(
        level: usize,
        drawing_color: Pixel,
        background_color: Pixel,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            stamp: Stamp::from_level(level)?,
            // painted pixels are always opaque
            drawing_color: Pixel { a: 0xFF, ..drawing_color },
            background_color,
        })
    }
}

impl ImageFilter for EdgeDrawer {
    fn process(&self, source: &PixelBuffer) -> PixelBuffer {
        let mut result = source.clone();
        let half_width = (self.stamp.width() / 2) as i64;
        let half_height = (self.stamp.height() / 2) as i64;

        for y in 0..source.height() {
            for x in 0..source.width() {
                if source.pixel(x, y) == self.background_color {
                    continue;
                }

                for (v, row) in self.stamp.rows.iter().enumerate() {
                    for (u, on) in row.iter().enumerate() {
                        if !*on {
                            continue;
                        }

                        let cursor_x = x as i64 + u as i64 - half_width;
                        let cursor_y = y as i64 + v as i64 - half_height;
                        if !source.is_in_bounds(cursor_x, cursor_y) {
                            continue;
                        }

                        let (cursor_x, cursor_y) = (cursor_x as usize, cursor_y as usize);
                        if source.pixel(cursor_x, cursor_y) == self.background_color {
                            result.put_pixel(cursor_x, cursor_y, self.drawing_color);
                        }
                    }
                }
            }
        }

        result
    }
}
