use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use arbor_engine::paint::Rgba;

/// Viewer settings. Defaults match the classic tree canvas: a mid-gray
/// background and unscaled 16 px nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: Rgba,
    /// Multiplies node radius and border width (HiDPI scale).
    pub pixel_scale: f32,
    /// Tree depth of the generated demo.
    pub depth: u32,
    /// When set, render once on the CPU and write a PNG instead of opening a window.
    pub snapshot: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "arbor".to_string(),
            width: 800,
            height: 800,
            clear_color: Rgba::new(160.0 / 255.0, 160.0 / 255.0, 160.0 / 255.0, 1.0),
            pixel_scale: 1.0,
            depth: 4,
            snapshot: None,
        }
    }
}

pub const USAGE: &str = "\
usage: arbor-viewer [options]

  --snapshot <file.png>   render on the CPU and write a PNG
  --size <W>x<H>          window / image size in pixels (default 800x800)
  --pixel-scale <f>       node size multiplier (default 1)
  --depth <n>             demo tree depth (default 4)
  -h, --help              print this help";

/// Parsed command line.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(ViewerConfig),
    Help,
}

impl ViewerConfig {
    /// Parses flags (without the program name) on top of the defaults.
    pub fn from_args<I>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = ViewerConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .with_context(|| format!("{flag} expects a value"))
            };
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--snapshot" => cfg.snapshot = Some(PathBuf::from(value("--snapshot")?)),
                "--size" => {
                    let v = value("--size")?;
                    (cfg.width, cfg.height) = parse_size(&v)?;
                }
                "--pixel-scale" => {
                    let v = value("--pixel-scale")?;
                    cfg.pixel_scale = v
                        .parse()
                        .with_context(|| format!("invalid pixel scale {v:?}"))?;
                    if !(cfg.pixel_scale.is_finite() && cfg.pixel_scale > 0.0) {
                        bail!("pixel scale must be positive, got {v}");
                    }
                }
                "--depth" => {
                    let v = value("--depth")?;
                    cfg.depth = v.parse().with_context(|| format!("invalid depth {v:?}"))?;
                }
                other => bail!("unknown argument {other:?}"),
            }
        }

        Ok(Command::Run(cfg))
    }
}

fn parse_size(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("size {s:?} is not of the form WxH"))?;
    let w: u32 = w
        .trim()
        .parse()
        .with_context(|| format!("invalid width in {s:?}"))?;
    let h: u32 = h
        .trim()
        .parse()
        .with_context(|| format!("invalid height in {s:?}"))?;
    if w == 0 || h == 0 {
        bail!("size {s:?} has a zero dimension");
    }
    Ok((w, h))
}
