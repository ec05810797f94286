pub mod framebuffer;
pub mod interpolation;
pub mod rasterizer;
pub mod renderer;
