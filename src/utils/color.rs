use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Represents an RGB color with float components [0.0, 1.0].
pub type Color = Vector3<f32>;

/// Policy deciding which color a face is filled with.
///
/// `Random` draws every face color from one seeded RNG, so a frame is
/// reproducible for a given seed. `Palette` keys the color on the face
/// index alone, which makes individual faces stable across runs even if
/// the face order changes.
pub enum FacePalette {
    /// Every face gets the same color.
    Fixed(Color),
    /// Pseudo-random color keyed on the face index (deterministic).
    Palette,
    /// Random colors drawn sequentially from a single seeded RNG.
    Random(StdRng),
}

impl FacePalette {
    pub fn random_seeded(seed: u64) -> Self {
        FacePalette::Random(StdRng::seed_from_u64(seed))
    }

    /// Returns the fill color for the face at `face_index`.
    ///
    /// Faces must be queried in ascending index order for the `Random`
    /// variant to be reproducible.
    pub fn face_color(&mut self, face_index: usize) -> Color {
        match self {
            FacePalette::Fixed(color) => *color,
            FacePalette::Palette => {
                // Seed the RNG with the face index for deterministic results
                let mut rng = StdRng::seed_from_u64(face_index as u64);
                Color::new(
                    0.3 + rng.random::<f32>() * 0.4, // R in [0.3, 0.7)
                    0.3 + rng.random::<f32>() * 0.4, // G in [0.3, 0.7)
                    0.3 + rng.random::<f32>() * 0.4, // B in [0.3, 0.7)
                )
            }
            FacePalette::Random(rng) => Color::new(
                rng.random::<f32>(),
                rng.random::<f32>(),
                rng.random::<f32>(),
            ),
        }
    }
}

/// Converts a float color to u8 RGB, clamping each channel.
pub fn color_to_u8(color: &Color) -> [u8; 3] {
    [
        (color.x * 255.0).clamp(0.0, 255.0) as u8,
        (color.y * 255.0).clamp(0.0, 255.0) as u8,
        (color.z * 255.0).clamp(0.0, 255.0) as u8,
    ]
}

/// Normalizes a raw depth buffer for visualization.
///
/// Finite values are mapped linearly to [0, 1] with 1.0 at the nearest
/// depth (the buffer stores larger = nearer). Non-finite entries (the
/// `NEG_INFINITY` background) are passed through untouched so the
/// colormap can render them as empty.
pub fn normalize_depth(depth_buffer: &[f32]) -> Vec<f32> {
    let mut min_depth = f32::INFINITY;
    let mut max_depth = f32::NEG_INFINITY;
    let mut has_finite = false;
    for &depth in depth_buffer {
        if depth.is_finite() {
            min_depth = min_depth.min(depth);
            max_depth = max_depth.max(depth);
            has_finite = true;
        }
    }

    if !has_finite {
        return depth_buffer.to_vec();
    }
    // A single distinct finite value still needs a nonzero range
    if (max_depth - min_depth).abs() < 1e-6 {
        max_depth = min_depth + 1.0;
    }

    let inv_range = 1.0 / (max_depth - min_depth);
    depth_buffer
        .iter()
        .map(|&depth| {
            if depth.is_finite() {
                ((depth - min_depth) * inv_range).clamp(0.0, 1.0)
            } else {
                depth
            }
        })
        .collect()
}

/// Converts a normalized depth map (values 0.0-1.0) into an RGB image
/// using the JET colormap. Non-finite entries come out black.
pub fn apply_colormap_jet(normalized_depth: &[f32], width: usize, height: usize) -> Vec<u8> {
    let num_pixels = width * height;
    assert_eq!(
        normalized_depth.len(),
        num_pixels,
        "Depth buffer size does not match width * height"
    );

    let mut result = vec![0u8; num_pixels * 3];

    for (index, &depth) in normalized_depth.iter().enumerate() {
        if !depth.is_finite() {
            continue; // stays black
        }
        let value = depth.clamp(0.0, 1.0);

        let mut r = 0.0;
        let g;
        let mut b = 0.0;

        if value <= 0.25 {
            // Blue to Cyan
            b = 1.0;
            g = value * 4.0;
        } else if value <= 0.5 {
            // Cyan to Green
            g = 1.0;
            b = 1.0 - (value - 0.25) * 4.0;
        } else if value <= 0.75 {
            // Green to Yellow
            g = 1.0;
            r = (value - 0.5) * 4.0;
        } else {
            // Yellow to Red
            r = 1.0;
            g = 1.0 - (value - 0.75) * 4.0;
        }

        let [r_u8, g_u8, b_u8] = color_to_u8(&Color::new(r, g, b));
        let base = index * 3;
        result[base] = r_u8;
        result[base + 1] = g_u8;
        result[base + 2] = b_u8;
    }

    result
}
