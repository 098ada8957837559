use std::fmt;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::color::Color;
use crate::error::{CanvasError, CanvasResult};

const CHANNELS: usize = 4;

/// Fixed-size RGBA raster that every tool paints into.
///
/// The buffer remembers the color it was created with as its background;
/// erasing and clearing paint with that color instead of making pixels
/// transparent.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    background: Color,
    data: Vec<u8>,
}

/// Immutable full copy of a buffer's pixels, taken for undo
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .field("data", &format!("<{} bytes>", self.data.len()))
            .finish()
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl PixelBuffer {
    /// Creates a buffer with every pixel set to `fill`, which also becomes
    /// the background color
    pub fn new(width: u32, height: u32, fill: Color) -> CanvasResult<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        let pixel_count = width as usize * height as usize;
        let data = fill.to_array().repeat(pixel_count);

        Ok(Self {
            width,
            height,
            background: fill,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Raw RGBA bytes, row-major, `width * height * 4` long
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> CanvasResult<usize> {
        if !self.contains(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * CHANNELS)
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> CanvasResult<Color> {
        let i = self.index(x, y)?;
        Ok(Color::rgba(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> CanvasResult<()> {
        let i = self.index(x, y)?;
        self.data[i..i + CHANNELS].copy_from_slice(&color.to_array());
        Ok(())
    }

    /// Writes the pixel when it lies on the canvas; rasterizers use this to
    /// clip geometry that hangs over the edge
    pub(crate) fn plot(&mut self, x: i32, y: i32, color: Color) -> bool {
        self.set_pixel(x, y, color).is_ok()
    }

    /// Sets every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_array();
        for pixel in self.data.chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Resets every pixel to the background color
    pub fn clear(&mut self) {
        self.fill(self.background);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }

    /// Replaces the pixels with the snapshot's contents
    pub fn restore(&mut self, snapshot: &Snapshot) -> CanvasResult<()> {
        if (snapshot.width, snapshot.height) != (self.width, self.height) {
            return Err(CanvasError::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (snapshot.width, snapshot.height),
            });
        }
        self.data.copy_from_slice(&snapshot.data);
        Ok(())
    }

    /// Encodes the buffer as an RGBA PNG
    pub fn to_png(&self) -> CanvasResult<Vec<u8>> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(&self.data, self.width, self.height, ExtendedColorType::Rgba8)
            .map_err(|err| CanvasError::Encode(err.to_string()))?;
        log::debug!(
            "Encoded {}x{} canvas to {} PNG bytes",
            self.width,
            self.height,
            bytes.len()
        );
        Ok(bytes)
    }

    /// Decodes a PNG into a new buffer with the given background color
    pub fn from_png(bytes: &[u8], background: Color) -> CanvasResult<Self> {
        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|err| CanvasError::Decode(err.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        log::debug!("Decoded {}x{} PNG ({} bytes)", width, height, bytes.len());
        Ok(Self {
            width,
            height,
            background,
            data: rgba.into_raw(),
        })
    }
}
