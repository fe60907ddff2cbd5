mod level;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tessera_engine::backend::headless::{Headless, HeadlessHost};
use tessera_engine::core::App;
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::render::{RendererConfig, ViewportRenderer};
use tessera_engine::window::{Runtime, RuntimeConfig};

use level::Demo;

#[derive(Parser)]
#[command(name = "tessera-demo", about = "Scrolls a camera across a block level")]
struct Cli {
    /// Display width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Display height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// World pixels per block
    #[arg(long, default_value = "32")]
    block_scale: i32,

    /// Frames averaged for the FPS measurement
    #[arg(long, default_value = "100")]
    fps_window: usize,

    /// Log the FPS every N frames (0 disables)
    #[arg(long, default_value = "100")]
    report_every: u64,

    /// Use the software renderer
    #[arg(long)]
    software: bool,

    /// Open a regular window instead of fullscreen
    #[arg(long)]
    windowed: bool,

    /// Stop after N frames
    #[arg(long)]
    frames: Option<u64>,

    /// Render without a window and print draw statistics
    #[arg(long)]
    headless: bool,

    /// Image to load as a texture at startup
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Frames rendered in headless mode when `--frames` is not given.
const HEADLESS_FRAMES: u64 = 300;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        default_level: if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        },
        ..Default::default()
    });

    let renderer = RendererConfig::default()
        .with_size(cli.width, cli.height)
        .with_block_scale(cli.block_scale)
        .with_fps_window(cli.fps_window)
        .with_report_every(cli.report_every)
        .with_fullscreen(!cli.windowed);

    let demo = Demo::new(cli.width, cli.height, cli.block_scale, cli.texture.clone());

    if cli.headless {
        return run_headless(renderer, demo, cli.frames.unwrap_or(HEADLESS_FRAMES), cli.software);
    }

    let runtime = RuntimeConfig {
        title: "tessera demo".to_string(),
        software: cli.software,
        max_frames: cli.frames,
        ..Default::default()
    };
    Runtime::run(runtime, renderer, demo)
}

/// Drives the demo at a fixed 60 Hz step against the recording surface.
fn run_headless(config: RendererConfig, mut demo: Demo, frames: u64, software: bool) -> Result<()> {
    let mut renderer = ViewportRenderer::<Headless>::new(config);
    renderer.initialize(&mut HeadlessHost::new(), "tessera demo", software)?;
    demo.on_ready(&mut renderer);

    let dt = 1.0 / 60.0;
    let (mut total, mut min, mut max) = (0usize, usize::MAX, 0usize);

    for _ in 0..frames {
        demo.update(dt);
        renderer.render_frame(demo.scene(), demo.camera());

        let drawn = renderer
            .surface_mut()
            .map(|s| {
                let n = s.rects().len();
                s.take_commands();
                n
            })
            .unwrap_or(0);

        total += drawn;
        min = min.min(drawn);
        max = max.max(drawn);
    }

    if frames == 0 {
        min = 0;
    }

    let fps = renderer.timer().map(|t| t.fps()).unwrap_or(0.0);
    println!("frames rendered : {frames}");
    println!("outlines drawn  : {total} (min {min}, max {max} per frame)");
    println!("platforms       : {}", demo.scene().len());
    println!("measured fps    : {fps:.0}");

    renderer.shutdown();
    Ok(())
}
