use crate::filter::ImageFilter;
use rasterkit_image::{Pixel, PixelBuffer};

/// Colors steering marker-driven frame rendering.
///
/// The two marker colors are matched against source pixels (all four
/// channels); the remaining colors are what gets painted.
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle {
    /// Marker color whose pixels expand into a horizontal band.
    pub horizontal_marker: Pixel,
    /// Marker color whose pixels expand into a vertical band.
    pub vertical_marker: Pixel,
    /// Color of the outer rows/columns of a band.
    pub border: Pixel,
    /// Color of the inner band body.
    pub frame: Pixel,
    /// Color the canvas starts out as.
    pub background: Pixel,
}

/// Turn sparse marker pixels into thick rendered borders.
///
/// The output canvas is the size of the source, initialized to the
/// background color. Every source pixel equal to the horizontal marker
/// stamps a vertical run of offsets through its position: rows -10..=-8 in
/// the border color, rows -7..=7 in the frame color, rows 8..=10 in the
/// border color. Every pixel equal to the vertical marker stamps the
/// horizontal run -3..=-1 / 0..=1 / 2..=4 the same way. The offset ranges
/// are intentionally asymmetric and are part of the output contract.
///
/// Border paints skip positions already holding the frame color, so borders
/// never cut into a frame laid down by an earlier marker. All painted
/// pixels are opaque.
#[derive(Clone, Copy, Debug)]
pub struct FrameDrawer {
    style: FrameStyle,
}

impl FrameDrawer {
    /// Create a frame rendering pass.
    pub fn new(style: FrameStyle) -> Self {
        // painted colors are always opaque; markers keep their channels so
        // they match source pixels exactly
        Self {
            style: FrameStyle {
                border: Pixel { a: 0xFF, ..style.border },
                frame: Pixel { a: 0xFF, ..style.frame },
                background: Pixel { a: 0xFF, ..style.background },
                ..style
            },
        }
    }

    fn stamp_horizontal_band(&self, canvas: &mut PixelBuffer, x: i64, y: i64) {
        for dy in -10..=-8 {
            self.put_border(canvas, x, y + dy);
        }
        for dy in -7..=7 {
            self.put_frame(canvas, x, y + dy);
        }
        for dy in 8..=10 {
            self.put_border(canvas, x, y + dy);
        }
    }

    fn stamp_vertical_band(&self, canvas: &mut PixelBuffer, x: i64, y: i64) {
        for dx in -3..=-1 {
            self.put_border(canvas, x + dx, y);
        }
        for dx in 0..=1 {
            self.put_frame(canvas, x + dx, y);
        }
        for dx in 2..=4 {
            self.put_border(canvas, x + dx, y);
        }
    }

    fn put_frame(&self, canvas: &mut PixelBuffer, x: i64, y: i64) {
        if canvas.is_in_bounds(x, y) {
            canvas.put_pixel(x as usize, y as usize, self.style.frame);
        }
    }

    fn put_border(&self, canvas: &mut PixelBuffer, x: i64, y: i64) {
        if canvas.is_in_bounds(x, y)
            && canvas.pixel(x as usize, y as usize) != self.style.frame
        {
            canvas.put_pixel(x as usize, y as usize, self.style.border);
        }
    }
}

impl ImageFilter for FrameDrawer {
    fn process(&self, source: &PixelBuffer) -> PixelBuffer {
        let mut canvas = PixelBuffer::new(source.size());
        for pixel in canvas.as_slice_mut().chunks_exact_mut(PixelBuffer::CHANNELS) {
            pixel.copy_from_slice(&self.style.background.to_bgra());
        }

        for y in 0..source.height() {
            for x in 0..source.width() {
                let current = source.pixel(x, y);
                if current == self.style.horizontal_marker {
                    self.stamp_horizontal_band(&mut canvas, x as i64, y as i64);
                }
                if current == self.style.vertical_marker {
                    self.stamp_vertical_band(&mut canvas, x as i64, y as i64);
                }
            }
        }

        canvas
    }
}
