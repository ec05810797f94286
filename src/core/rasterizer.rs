use crate::core::framebuffer::FrameBuffer;
use crate::core::interpolation::{barycentric, interpolate_depth, is_inside};
use crate::utils::color::{Color, color_to_u8};
use nalgebra::{Point2, Point3};

/// Rasterizes a filled triangle with depth testing.
///
/// `pts` are screen-space vertices: whole-pixel x/y coordinates with
/// the untouched orthographic z. Scans the triangle's bounding box
/// clamped to the image (the clamp is the only screen clipping
/// performed), tests each pixel with barycentric coordinates (boundary
/// counts as inside), interpolates z and lets the frame buffer's
/// max-wins depth test decide.
pub fn fill_triangle(pts: &[Point3<f32>; 3], fb: &mut FrameBuffer, color: &Color) {
    let a = pts[0].xy();
    let b = pts[1].xy();
    let c = pts[2].xy();

    let mut bbox_min = [f32::MAX, f32::MAX];
    let mut bbox_max = [f32::MIN, f32::MIN];
    let clamp = [(fb.width - 1) as f32, (fb.height - 1) as f32];
    for p in pts {
        for j in 0..2 {
            bbox_min[j] = bbox_min[j].min(p[j]).max(0.0);
            bbox_max[j] = bbox_max[j].max(p[j]).min(clamp[j]);
        }
    }

    let rgb = color_to_u8(color);
    for x in (bbox_min[0].ceil() as i32)..(bbox_max[0].ceil() as i32) {
        for y in (bbox_min[1].ceil() as i32)..(bbox_max[1].ceil() as i32) {
            let p = Point2::new(x as f32, y as f32);
            // Degeneracy does not depend on p, so a None rejects the
            // whole triangle.
            let Some(bary) = barycentric(p, a, b, c) else {
                return;
            };
            if !is_inside(&bary) {
                continue;
            }
            let z = interpolate_depth(&bary, pts[0].z, pts[1].z, pts[2].z);
            fb.depth_test_and_set(x, y, z, rgb);
        }
    }
}

/// Draws a straight segment between two pixel coordinates.
///
/// Incremental DDA stepping along the major axis: steep segments
/// (|dx| < |dy|) are transposed so the loop always walks x, and the
/// endpoints are swapped so output is direction-independent. Does not
/// touch the depth buffer; later lines overwrite earlier ones.
pub fn draw_line(
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    fb: &mut FrameBuffer,
    color: &Color,
) {
    let mut steep = false;
    if (x0 - x1).abs() < (y0 - y1).abs() {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
        steep = true;
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    if x0 == x1 {
        // Both endpoints collapse onto a single pixel
        fb.set_pixel(x0, y0, color);
        return;
    }

    for x in x0..=x1 {
        let t = (x - x0) as f32 / (x1 - x0) as f32;
        let y = (y0 as f32 * (1.0 - t) + y1 as f32 * t).round() as i32;
        if steep {
            fb.set_pixel(y, x, color);
        } else {
            fb.set_pixel(x, y, color);
        }
    }
}
