use clap::Parser;
use log::info;
use rand::Rng;
use std::path::Path;
use std::time::Instant;

mod core;
mod io;
mod utils;

use crate::core::framebuffer::FrameBuffer;
use crate::core::renderer::Renderer;
use crate::io::args::Args;
use crate::io::obj_loader::load_obj;
use crate::utils::color::{Color, FacePalette, apply_colormap_jet, normalize_depth};

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();
    args.validate()?;
    let start_time = Instant::now();

    if !Path::new(&args.obj).exists() {
        return Err(format!("Input OBJ file not found: {}", args.obj));
    }

    // --- Load Model ---
    let load_start = Instant::now();
    let model = load_obj(&args.obj)?;
    info!(
        "Model loaded in {:?} ({} faces)",
        load_start.elapsed(),
        model.face_count()
    );

    // --- Render ---
    let renderer = Renderer::new(args.width, args.height);
    let mut frame = FrameBuffer::new(args.width, args.height);

    let render_start = Instant::now();
    if args.wireframe {
        renderer.render_wireframe(&model, &Color::new(1.0, 1.0, 1.0), &mut frame)?;
    } else {
        let mut palette = if args.palette {
            FacePalette::Palette
        } else {
            let seed = args.color_seed.unwrap_or_else(|| rand::rng().random());
            info!("Face color seed: {}", seed);
            FacePalette::random_seeded(seed)
        };
        renderer.render(&model, &mut palette, &mut frame)?;
    }
    info!("Rendered in {:?}", render_start.elapsed());

    // --- Save Output ---
    // The raster origin is bottom-left; image files expect top-left
    frame.flip_vertically();
    frame.save_color(&args.output)?;
    info!("Image saved to {}", args.output);

    if let Some(depth_path) = &args.depth_output {
        let normalized = normalize_depth(frame.depth_values());
        let depth_rgb = apply_colormap_jet(&normalized, args.width, args.height);
        image::save_buffer(
            depth_path,
            &depth_rgb,
            args.width as u32,
            args.height as u32,
            image::ColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to save depth map to {}: {}", depth_path, e))?;
        info!("Depth map saved to {}", depth_path);
    }

    info!("Total execution time: {:?}", start_time.elapsed());
    Ok(())
}
