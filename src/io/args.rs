use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input OBJ file
    #[arg(long, default_value = "obj/african_head.obj")]
    pub obj: String,

    /// Output image path (format chosen from the extension)
    #[arg(short = 'o', long, default_value = "output.png")]
    pub output: String,

    /// Also save a JET-colormapped depth map to this path
    #[arg(long)]
    pub depth_output: Option<String>,

    /// Width of the output image
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Height of the output image
    #[arg(long, default_value_t = 800)]
    pub height: usize,

    /// Draw face edges with the line rasterizer instead of filling
    #[arg(long, default_value_t = false)]
    pub wireframe: bool,

    /// Use the deterministic index-keyed face palette instead of
    /// random face colors
    #[arg(long, default_value_t = false)]
    pub palette: bool,

    /// Seed for the random per-face colors, making the frame
    /// reproducible
    #[arg(long, conflicts_with = "palette")]
    pub color_seed: Option<u64>,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Image dimensions must be nonzero, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        // Catches duplicate flag names and similar definition errors
        // that clap only reports at parse time
        Args::command().debug_assert();
    }

    #[test]
    fn short_output_flag_parses() {
        let args = Args::parse_from(["meshraster", "-o", "frame.png"]);
        assert_eq!(args.output, "frame.png");
    }

    #[test]
    fn defaults_match_the_reference_frame() {
        let args = Args::parse_from(["meshraster"]);
        assert_eq!(args.obj, "obj/african_head.obj");
        assert_eq!(args.output, "output.png");
        assert_eq!(args.width, 800);
        assert_eq!(args.height, 800);
        assert!(!args.wireframe);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_fail_validation() {
        let args = Args::parse_from(["meshraster", "--width", "0"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn seed_and_palette_conflict() {
        let parsed = Args::try_parse_from(["meshraster", "--palette", "--color-seed", "7"]);
        assert!(parsed.is_err());
    }
}
