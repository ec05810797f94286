use nalgebra::{Point2, Vector3};

/// Triangles with a doubled signed area below this are treated as
/// degenerate (collinear or coincident vertices) and rasterize to
/// nothing.
pub const DEGENERATE_AREA_EPS: f32 = 1e-2;

/// Calculates barycentric coordinates (alpha, beta, gamma) for point p
/// with respect to the 2D triangle (a, b, c).
/// Returns None if the triangle is degenerate.
/// Alpha corresponds to a, beta to b, gamma to c; the same fixed vertex
/// order must be used when interpolating attributes with the result.
pub fn barycentric(
    p: Point2<f32>,
    a: Point2<f32>,
    b: Point2<f32>,
    c: Point2<f32>,
) -> Option<Vector3<f32>> {
    let e1 = b - a;
    let e2 = c - a;
    let p_a = p - a;

    // Doubled signed area of the triangle, via the 2D cross product
    let total_area_x2 = e1.x * e2.y - e1.y * e2.x;

    if total_area_x2.abs() < DEGENERATE_AREA_EPS {
        return None;
    }

    let inv_total_area_x2 = 1.0 / total_area_x2;

    // Sub-area opposite b -> weight for b (beta)
    let beta = (p_a.x * e2.y - p_a.y * e2.x) * inv_total_area_x2;
    // Sub-area opposite c -> weight for c (gamma)
    let gamma = (e1.x * p_a.y - e1.y * p_a.x) * inv_total_area_x2;
    let alpha = 1.0 - beta - gamma;

    Some(Vector3::new(alpha, beta, gamma))
}

/// Checks if the barycentric coordinates indicate the point is inside
/// the triangle. Boundary points (a zero weight) count as inside, so
/// adjacent triangles sharing an edge leave no gap.
#[inline]
pub fn is_inside(bary: &Vector3<f32>) -> bool {
    bary.x >= 0.0 && bary.y >= 0.0 && bary.z >= 0.0
}

/// Interpolates depth across the triangle's vertices, in the same
/// (a, b, c) order `barycentric` assigns its weights.
#[inline]
pub fn interpolate_depth(bary: &Vector3<f32>, z0: f32, z1: f32, z2: f32) -> f32 {
    bary.x * z0 + bary.y * z1 + bary.z * z2
}
