use crate::utils::color::{Color, color_to_u8};

/// Owns the pixel and depth storage for one frame.
///
/// The depth buffer stores one f32 per pixel, initialized to
/// `NEG_INFINITY` ("nothing drawn"). Larger values are nearer:
/// orthographic z is carried through the pipeline unchanged, so the
/// depth test is max-wins. Both buffers live exactly as long as the
/// frame and are dropped with the struct.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    /// RGB color values [0, 255], row-major, bottom-left origin until
    /// `flip_vertically` is applied.
    color_buffer: Vec<u8>,
    /// One depth value per pixel, larger is closer.
    depth_buffer: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let num_pixels = width * height;
        FrameBuffer {
            width,
            height,
            color_buffer: vec![0u8; num_pixels * 3],
            depth_buffer: vec![f32::NEG_INFINITY; num_pixels],
        }
    }

    /// Writes a pixel without depth testing (line/wireframe path).
    /// Out-of-bounds coordinates are silently ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: &Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let base = (y as usize * self.width + x as usize) * 3;
        let rgb = color_to_u8(color);
        self.color_buffer[base..base + 3].copy_from_slice(&rgb);
    }

    /// Depth-tested write: the fragment wins only if its z is strictly
    /// greater than the stored depth. Returns whether the pixel was
    /// written. Out-of-bounds coordinates fail the test.
    #[inline]
    pub fn depth_test_and_set(&mut self, x: i32, y: i32, z: f32, rgb: [u8; 3]) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        let index = y as usize * self.width + x as usize;
        if self.depth_buffer[index] < z {
            self.depth_buffer[index] = z;
            let base = index * 3;
            self.color_buffer[base..base + 3].copy_from_slice(&rgb);
            true
        } else {
            false
        }
    }

    /// Stored depth at (x, y). Panics when out of bounds.
    pub fn depth(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height);
        self.depth_buffer[y * self.width + x]
    }

    /// Stored color at (x, y). Panics when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < self.width && y < self.height);
        let base = (y * self.width + x) * 3;
        [
            self.color_buffer[base],
            self.color_buffer[base + 1],
            self.color_buffer[base + 2],
        ]
    }

    /// Reverses the row order of both buffers, once, after all drawing.
    /// Rasterization uses a bottom-left origin; PNG rows run top-down.
    /// The depth buffer is flipped too so a saved depth map stays
    /// registered with the color image.
    pub fn flip_vertically(&mut self) {
        let color_row = self.width * 3;
        for y in 0..self.height / 2 {
            let opposite = self.height - 1 - y;
            for i in 0..color_row {
                self.color_buffer
                    .swap(y * color_row + i, opposite * color_row + i);
            }
            for x in 0..self.width {
                self.depth_buffer
                    .swap(y * self.width + x, opposite * self.width + x);
            }
        }
    }

    pub fn color_bytes(&self) -> &[u8] {
        &self.color_buffer
    }

    pub fn depth_values(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Encodes the color buffer and writes it to `path`. The format is
    /// chosen from the file extension by the image crate.
    pub fn save_color(&self, path: &str) -> Result<(), String> {
        image::save_buffer(
            path,
            &self.color_buffer,
            self.width as u32,
            self.height as u32,
            image::ColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to save image to {}: {}", path, e))
    }
}
