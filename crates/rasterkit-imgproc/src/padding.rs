use crate::filter::ImageFilter;
use rasterkit_image::{ImageSize, PixelBuffer};

/// Grow the canvas by an opaque black border on all four sides.
///
/// The output is `2 * border_size` wider and taller than the source. The
/// destination is walked linearly while an independent cursor advances
/// through the source, because every destination row is wider than the
/// matching source row; destination positions are decoded from the linear
/// byte index to classify border pixels.
///
/// # Examples
///
/// ```
/// use rasterkit_image::{ImageSize, PixelBuffer};
/// use rasterkit_imgproc::filter::ImageFilter;
/// use rasterkit_imgproc::padding::FrameAdder;
///
/// let image = PixelBuffer::new(ImageSize {
///     width: 4,
///     height: 3,
/// });
///
/// let framed = FrameAdder::new(2).process(&image);
///
/// assert_eq!(framed.width(), 8);
/// assert_eq!(framed.height(), 7);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FrameAdder {
    border_size: usize,
}

impl FrameAdder {
    /// Create a pass adding a border of the given thickness.
    pub fn new(border_size: usize) -> Self {
        Self { border_size }
    }

    fn is_in_border(&self, x: usize, y: usize, source: ImageSize) -> bool {
        x < self.border_size
            || x >= source.width + self.border_size
            || y < self.border_size
            || y >= source.height + self.border_size
    }
}

impl Default for FrameAdder {
    fn default() -> Self {
        Self { border_size: 1 }
    }
}

impl ImageFilter for FrameAdder {
    fn process(&self, source: &PixelBuffer) -> PixelBuffer {
        let size = ImageSize {
            width: source.width() + 2 * self.border_size,
            height: source.height() + 2 * self.border_size,
        };
        let mut result = PixelBuffer::new(size);

        let src = source.as_slice();
        let mut source_cursor = 0;

        for index in (0..size.width * size.height * PixelBuffer::CHANNELS)
            .step_by(PixelBuffer::CHANNELS)
        {
            let (x, y) = result.position_of(index);
            let value = if self.is_in_border(x, y, source.size()) {
                [0, 0, 0, 0xFF]
            } else {
                let pixel = [
                    src[source_cursor],
                    src[source_cursor + 1],
                    src[source_cursor + 2],
                    src[source_cursor + 3],
                ];
                source_cursor += PixelBuffer::CHANNELS;
                pixel
            };

            result.as_slice_mut()[index..index + PixelBuffer::CHANNELS].copy_from_slice(&value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_image::Pixel;

    #[test]
    fn border_surrounds_the_source() -> Result<(), Box<dyn std::error::Error>> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let mut image = PixelBuffer::new(size);
        image.put_pixel(0, 0, Pixel::from_bgra(1, 2, 3, 4));
        image.put_pixel(1, 0, Pixel::from_bgra(5, 6, 7, 8));
        image.put_pixel(0, 1, Pixel::from_bgra(9, 10, 11, 12));
        image.put_pixel(1, 1, Pixel::from_bgra(13, 14, 15, 16));

        let framed = FrameAdder::new(2).process(&image);

        assert_eq!(framed.width(), 6);
        assert_eq!(framed.height(), 6);

        let black = Pixel::from_bgra(0, 0, 0, 0xFF);
        for y in 0..6 {
            for x in 0..6 {
                if (2..4).contains(&x) && (2..4).contains(&y) {
                    // interior reproduces the source exactly
                    assert_eq!(framed.pixel(x, y), image.pixel(x - 2, y - 2));
                } else {
                    assert_eq!(framed.pixel(x, y), black);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn default_border_is_one_pixel() {
        let image = PixelBuffer::new(ImageSize {
            width: 3,
            height: 1,
        });

        let framed = FrameAdder::default().process(&image);

        assert_eq!(framed.width(), 5);
        assert_eq!(framed.height(), 3);
    }

    #[test]
    fn empty_source_yields_a_border_only_canvas() {
        let image = PixelBuffer::new(ImageSize {
            width: 0,
            height: 0,
        });

        let framed = FrameAdder::new(1).process(&image);

        assert_eq!(framed.width(), 2);
        assert_eq!(framed.height(), 2);
        let black = Pixel::from_bgra(0, 0, 0, 0xFF);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(framed.pixel(x, y), black);
            }
        }
    }
}
