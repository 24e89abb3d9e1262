use anyhow::Result;
use clap::{Parser, ValueEnum};
use glam::Vec2;
use quad_transform::{demo::create_demo_scene, CollectingSink, Execution, QuadRenderer};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExecutionArg {
    Sequential,
    Parallel,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera position, x
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    camera_x: f32,

    /// Camera position, y
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    camera_y: f32,

    /// Half-height of the visible area
    #[arg(long, default_value_t = 1.0)]
    zoom: f32,

    /// Viewport width / height
    #[arg(long, default_value_t = 1.77)]
    aspect: f32,

    #[arg(long, value_enum, default_value_t = ExecutionArg::Parallel)]
    execution: ExecutionArg,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let execution = match args.execution {
        ExecutionArg::Sequential => Execution::Sequential,
        ExecutionArg::Parallel => Execution::Parallel,
    };

    let mut scene = create_demo_scene(args.aspect);
    scene.camera.pan(Vec2::new(args.camera_x, args.camera_y));
    scene.camera.set_zoom(args.zoom);

    let mut renderer = QuadRenderer::new(execution);
    let mut sink = CollectingSink::new();
    scene.render(&mut renderer, &mut sink)?;

    for (i, vertex) in sink.vertices().enumerate() {
        let clip = vertex.clip_position;
        let [r, g, b, a] = vertex.color;
        println!(
            "{:>3}: clip=({:+.4}, {:+.4}, {:+.4}, {:+.4}) color=({:.3}, {:.3}, {:.3}, {:.3})",
            i, clip.x, clip.y, clip.z, clip.w, r, g, b, a
        );
    }

    let stats = renderer.stats();
    log::info!(
        "Rendered {} quads ({} vertices) in {} batches",
        stats.quads,
        stats.vertices,
        stats.batches
    );
    Ok(())
}
