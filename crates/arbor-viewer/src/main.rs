mod config;
mod demo;

use std::path::Path;

use anyhow::{Context, Result};
use arbor_engine::core::{App, AppControl, FrameCtx};
use arbor_engine::device::GpuInit;
use arbor_engine::logging::{LoggingConfig, init_logging};
use arbor_engine::paint::Rgba;
use arbor_engine::raster::{Framebuffer, render_frame};
use arbor_engine::render::GraphRenderer;
use arbor_engine::scene::{GraphFrame, NodeStyle};
use arbor_engine::shading::{CameraTransform, GlobalUniforms};
use arbor_engine::window::{Runtime, RuntimeConfig};

use config::{Command, USAGE, ViewerConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let cfg = match ViewerConfig::from_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Run(cfg) => cfg,
    };

    let tree = demo::sample_tree(cfg.depth);
    let mut frame = demo::build_frame(&tree, &NodeStyle::for_pixel_scale(cfg.pixel_scale));
    frame.fit_to_clip_space();

    match &cfg.snapshot {
        Some(path) => write_snapshot(&cfg, &frame, path),
        None => run_window(cfg, frame),
    }
}

fn write_snapshot(cfg: &ViewerConfig, frame: &GraphFrame, path: &Path) -> Result<()> {
    let mut fb = Framebuffer::new(cfg.width, cfg.height)?;
    fb.clear(cfg.clear_color);

    let camera = CameraTransform::identity();
    let stats = render_frame(&mut fb, frame, &camera, &GlobalUniforms::default());

    let image = image::RgbaImage::from_raw(fb.width(), fb.height(), fb.to_rgba8())
        .context("framebuffer size does not match its pixel data")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::info!(
        "wrote {} ({}x{}, {} nodes, {} edges)",
        path.display(),
        fb.width(),
        fb.height(),
        stats.nodes_drawn,
        stats.edges_drawn
    );
    Ok(())
}

fn run_window(cfg: ViewerConfig, frame: GraphFrame) -> Result<()> {
    let runtime_config = RuntimeConfig::new(cfg.title.clone(), cfg.width as f64, cfg.height as f64);
    // Colors are authored like the CPU snapshot writes them: no sRGB encode.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    let app = ViewerApp {
        frame,
        renderer: GraphRenderer::new(),
        camera: CameraTransform::identity(),
        uniforms: GlobalUniforms::default(),
        clear: cfg.clear_color,
    };

    Runtime::run(runtime_config, gpu_init, app)
}

struct ViewerApp {
    frame: GraphFrame,
    renderer: GraphRenderer,
    camera: CameraTransform,
    uniforms: GlobalUniforms,
    clear: Rgba,
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Self {
            frame,
            renderer,
            camera,
            uniforms,
            clear,
        } = self;

        ctx.render(*clear, |rctx, target| {
            renderer.render(rctx, target, frame, camera, uniforms);
        })
    }
}
