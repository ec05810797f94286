use crate::core::framebuffer::FrameBuffer;
use crate::core::rasterizer::{draw_line, fill_triangle};
use crate::io::obj_loader::Model;
use crate::utils::color::{Color, FacePalette};
use log::debug;
use nalgebra::Point3;

/// Drives one frame: projects each face of the model and hands it to
/// the rasterizer. The caller owns the frame buffer (and with it the
/// depth buffer) for exactly the duration of the frame.
pub struct Renderer {
    pub width: usize,
    pub height: usize,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Renderer { width, height }
    }

    /// Maps a point with x,y in normalized [-1, 1] coordinates to whole
    /// pixel coordinates (round half up); z is passed through unchanged
    /// and only serves as a relative depth key. Values outside the
    /// normalized range land off-raster and are clipped later by the
    /// rasterizer's bounding-box clamp.
    pub fn project_to_screen(&self, p: &Point3<f32>) -> Point3<f32> {
        Point3::new(
            ((p.x + 1.0) * self.width as f32 / 2.0 + 0.5).floor(),
            ((p.y + 1.0) * self.height as f32 / 2.0 + 0.5).floor(),
            p.z,
        )
    }

    /// Renders the model's faces filled, one color per face from the
    /// palette. Face or vertex indices outside the model's bounds
    /// abort the frame with an error; a model corrupt in that way
    /// cannot be rendered meaningfully.
    pub fn render(
        &self,
        model: &Model,
        palette: &mut FacePalette,
        fb: &mut FrameBuffer,
    ) -> Result<(), String> {
        debug!("Rasterizing {} faces", model.face_count());
        for i in 0..model.face_count() {
            let pts = self.projected_face(model, i)?;
            let color = palette.face_color(i);
            fill_triangle(&pts, fb, &color);
        }
        Ok(())
    }

    /// Renders the model as a wireframe: the three edges of every face
    /// drawn with the line rasterizer. The depth buffer is not used;
    /// later edges overwrite earlier ones.
    pub fn render_wireframe(
        &self,
        model: &Model,
        color: &Color,
        fb: &mut FrameBuffer,
    ) -> Result<(), String> {
        debug!("Drawing wireframe for {} faces", model.face_count());
        for i in 0..model.face_count() {
            let pts = self.projected_face(model, i)?;
            for j in 0..3 {
                let p0 = pts[j];
                let p1 = pts[(j + 1) % 3];
                draw_line(p0.x as i32, p0.y as i32, p1.x as i32, p1.y as i32, fb, color);
            }
        }
        Ok(())
    }

    fn projected_face(&self, model: &Model, i: usize) -> Result<[Point3<f32>; 3], String> {
        let face = model.face(i)?;
        let mut pts = [Point3::origin(); 3];
        for (k, &vertex_index) in face.iter().enumerate() {
            pts[k] = self.project_to_screen(&model.vertex(vertex_index)?);
        }
        Ok(pts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_triangle_model() -> Model {
        Model {
            vertices: vec![
                Point3::new(-0.5, -0.5, 0.0),
                Point3::new(0.5, -0.5, 0.0),
                Point3::new(0.0, 0.5, 0.0),
            ],
            faces: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn projection_maps_ndc_to_pixels() {
        let renderer = Renderer::new(800, 800);
        let origin = renderer.project_to_screen(&Point3::new(0.0, 0.0, 0.25));
        assert_relative_eq!(origin.x, 400.0);
        assert_relative_eq!(origin.y, 400.0);
        assert_relative_eq!(origin.z, 0.25);

        let corner = renderer.project_to_screen(&Point3::new(-1.0, -1.0, -3.0));
        assert_relative_eq!(corner.x, 0.0);
        assert_relative_eq!(corner.y, 0.0);
        assert_relative_eq!(corner.z, -3.0);
    }

    #[test]
    fn projection_is_idempotent_per_input() {
        let renderer = Renderer::new(200, 100);
        let p = Point3::new(0.3, -0.7, 0.9);
        assert_eq!(renderer.project_to_screen(&p), renderer.project_to_screen(&p));
    }

    #[test]
    fn empty_model_leaves_the_canvas_blank() {
        let renderer = Renderer::new(32, 32);
        let mut fb = FrameBuffer::new(32, 32);
        let model = Model {
            vertices: vec![],
            faces: vec![],
        };
        let mut palette = FacePalette::Palette;
        renderer.render(&model, &mut palette, &mut fb).unwrap();
        assert_eq!(fb.color_bytes(), FrameBuffer::new(32, 32).color_bytes());
    }

    #[test]
    fn single_face_fills_interior_pixels() {
        let renderer = Renderer::new(100, 100);
        let mut fb = FrameBuffer::new(100, 100);
        let model = single_triangle_model();
        let mut palette = FacePalette::Fixed(Color::new(1.0, 1.0, 1.0));
        renderer.render(&model, &mut palette, &mut fb).unwrap();
        // Projected vertices are (25,25), (75,25), (50,75); (50,40) is interior
        assert_eq!(fb.pixel(50, 40), [255, 255, 255]);
        assert_eq!(fb.pixel(0, 99), [0, 0, 0]);
    }

    #[test]
    fn corrupt_face_index_aborts_the_frame() {
        let renderer = Renderer::new(16, 16);
        let mut fb = FrameBuffer::new(16, 16);
        let model = Model {
            vertices: vec![Point3::new(0.0, 0.0, 0.0)],
            faces: vec![[0, 1, 9]],
        };
        let mut palette = FacePalette::Palette;
        assert!(renderer.render(&model, &mut palette, &mut fb).is_err());
    }

    #[test]
    fn wireframe_draws_edges_without_depth() {
        let renderer = Renderer::new(100, 100);
        let mut fb = FrameBuffer::new(100, 100);
        let model = single_triangle_model();
        let white = Color::new(1.0, 1.0, 1.0);
        renderer.render_wireframe(&model, &white, &mut fb).unwrap();

        // Projected vertices land at (25,25), (75,25), (50,75)
        assert_eq!(fb.pixel(25, 25), [255, 255, 255]);
        assert_eq!(fb.pixel(75, 25), [255, 255, 255]);
        assert_eq!(fb.pixel(50, 75), [255, 255, 255]);
        // Bottom edge runs along y = 25
        assert_eq!(fb.pixel(50, 25), [255, 255, 255]);
        assert!(fb.depth_values().iter().all(|&d| d == f32::NEG_INFINITY));
    }
}
