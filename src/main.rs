use std::path::PathBuf;

use clap::Parser;
use nanoraytracer::{
    render::{canvas::ImageFormat, raytracer::RaytracerBuilder},
    scene_file::SceneParser,
};

const DEFAULT_WIDTH: usize = 500;
const DEFAULT_HEIGHT: usize = 500;

/// Offline raytracer.
/// Renders scenes of spheres and triangles from text scene files,
/// with Blinn-Phong shading, shadows and specular reflections.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The scene file to render
    scene_file: PathBuf,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "png")]
    image_format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./<scene_filename>.<image_format>`
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    #[clap(long, help = format!("Width (in pixels) of the output image.
Overrides the one in the scene file. If not specified anywhere, defaults to {}", DEFAULT_WIDTH))]
    width: Option<usize>,

    #[clap(long, help = format!("Height (in pixels) of the output image.
Overrides the one in the scene file. If not specified anywhere, defaults to {}", DEFAULT_HEIGHT))]
    height: Option<usize>,

    /// Vertical field of view of the camera in radians.
    /// Overrides the one in the scene file
    #[clap(long)]
    fov: Option<f64>,

    /// Maximum number of times a ray can bounce off a reflective surface.
    /// Overrides the one in the scene file
    #[clap(short, long)]
    max_depth: Option<usize>,

    /// Show a progress bar while rendering
    #[clap(short, long)]
    progress_bar: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let scene_source = std::fs::read_to_string(&args.scene_file)
        .map_err(|e| format!("Failed to read scene file: {}", e))?;
    let parsed = SceneParser::parse_str(&scene_source, DEFAULT_WIDTH, DEFAULT_HEIGHT)
        .map_err(|e| format!("Failed to parse scene: {}", e))?;

    if args.width == Some(0) || args.height == Some(0) {
        return Err("Image dimensions must be positive".to_string());
    }

    let mut scene = parsed.scene;
    if args.width.is_some() || args.height.is_some() {
        let camera = scene.camera().with_resolution(
            args.width.unwrap_or_else(|| scene.camera().width()),
            args.height.unwrap_or_else(|| scene.camera().height()),
        );
        scene.set_camera(camera);
    }
    if let Some(fov) = args.fov {
        let camera = scene.camera().with_fov_y(fov);
        scene.set_camera(camera);
    }

    let mut builder = RaytracerBuilder::default();
    builder.use_progress_bar(args.progress_bar);
    if let Some(max_depth) = args.max_depth.or(parsed.max_depth) {
        builder.max_depth(max_depth);
    }
    let raytracer = builder
        .build()
        .map_err(|e| format!("Failed to configure raytracer: {}", e))?;

    let canvas = raytracer.render(&scene);
    let output_path = args.output_path.unwrap_or_else(|| {
        let mut path = args
            .scene_file
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| args.scene_file.clone());
        path.set_extension(args.image_format.to_string());
        path
    });
    canvas
        .save_to_file(&output_path, args.image_format)
        .map_err(|e| format!("Failed to save image: {}", e))?;
    println!("Image saved to {:?}", output_path);
    Ok(())
}
