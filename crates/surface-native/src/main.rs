use std::cell::Cell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surface_core::{
    CallbackError, Container, Coordinate, DepthFn, FrameTask, LightDef, LightPosition,
    SurfaceController, SurfaceOptions, SvgRenderer,
};

/// Render a light-up of the shaded surface to SVG frames.
#[derive(Parser, Debug)]
#[command(name = "surface-native", version)]
struct Args {
    /// Container width, px
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Container height, px
    #[arg(long, default_value_t = 400.0)]
    height: f64,
    #[arg(long)]
    cellsize: Option<f64>,
    #[arg(long)]
    jitter: Option<f64>,
    #[arg(long)]
    depth: Option<f64>,
    /// Frames in the light-up tween
    #[arg(long)]
    frames: Option<f64>,
    /// Seed for reproducible meshes; OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Derive vertex depth from a sine of x instead of random noise
    #[arg(long)]
    wave: bool,
    /// Resize the container to WIDTHxHEIGHT after the light-up
    #[arg(long, value_parser = parse_size)]
    resize_to: Option<(f64, f64)>,
    /// Write every Nth frame (the last frame is always written)
    #[arg(long, default_value_t = 10)]
    every: u32,
    /// Output directory
    #[arg(long, default_value = "frames")]
    out: PathBuf,
}

fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let w = w.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let h = h.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((w, h))
}

/// Container whose size can change between frames.
#[derive(Clone)]
struct Viewport(Rc<Cell<(f64, f64)>>);

impl Container for Viewport {
    fn size(&self) -> (f64, f64) {
        self.0.get()
    }
}

type Surface = SurfaceController<SvgRenderer, Viewport>;

fn demo_lights() -> anyhow::Result<Vec<LightDef>> {
    Ok(vec![
        // Warm key light placed relative to the surface size
        LightDef::from_hex(
            "#880066",
            "#ff8800",
            LightPosition::new(
                Coordinate::computed(|w, _| Ok(w * 0.3)),
                Coordinate::computed(|_, h| Ok(h * 0.2)),
                120.0,
            ),
        )?
        .with_start(LightPosition::new(
            Coordinate::computed(|w, _| Ok(w * 0.5)),
            0.0,
            40.0,
        )),
        // Cool fill light, fixed, rising from the origin
        LightDef::from_hex("#002244", "#0088ff", LightPosition::fixed(-250.0, -120.0, 80.0))?,
    ])
}

fn write_frame(out: &Path, name: &str, surface: &Surface) -> anyhow::Result<()> {
    let path = out.join(format!("{name}.svg"));
    std::fs::write(&path, surface.renderer().markup())
        .with_context(|| format!("writing {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Drain the frame queue the way a display loop would: one task per frame.
fn run_frames(
    surface: &mut Surface,
    first: Option<FrameTask>,
    args: &Args,
    prefix: &str,
) -> anyhow::Result<u32> {
    let mut queue: VecDeque<FrameTask> = first.into_iter().collect();
    let mut frame = 0u32;
    while let Some(task) = queue.pop_front() {
        if let Some(next) = surface.run_frame(task)? {
            queue.push_back(next);
        }
        frame += 1;
        if queue.is_empty() || frame % args.every.max(1) == 0 {
            write_frame(&args.out, &format!("{prefix}-{frame:04}"), surface)?;
        }
    }
    Ok(frame)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let mut options = SurfaceOptions {
        cellsize: args.cellsize,
        jitter: args.jitter,
        depth: args.depth,
        ..SurfaceOptions::default()
    };
    if args.wave {
        let wave: DepthFn = Rc::new(|x: f64, _y: f64, depth: f64| {
            Ok::<f64, CallbackError>((x / 100.0).sin() * depth)
        });
        options.depth_transform = Some(wave);
    }
    let config = options.resolve()?;

    let viewport = Viewport(Rc::new(Cell::new((args.width, args.height))));
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut surface = Surface::with_rng(
        config,
        demo_lights()?,
        viewport.clone(),
        SvgRenderer::new(),
        rng,
    )?;
    let started = Instant::now();

    surface.draw()?;
    write_frame(&args.out, "lit", &surface)?;
    surface.dark()?;
    write_frame(&args.out, "dark", &surface)?;

    let first = surface.light_up(args.frames)?;
    write_frame(&args.out, "light-up-0000", &surface)?;
    let frames = run_frames(&mut surface, first, &args, "light-up")?;
    log::info!(
        "light-up: {} frames after the first, {} renders total",
        frames,
        surface.renderer().frames()
    );

    if let Some(size) = args.resize_to {
        viewport.0.set(size);
        // Two notifications in one frame collapse into a single rebuild
        let task = surface.request_resize();
        let coalesced = surface.request_resize();
        debug_assert!(coalesced.is_none());
        run_frames(&mut surface, task, &args, "resize")?;
        log::info!(
            "resized to {}x{}, surface {}x{}",
            size.0,
            size.1,
            surface.width(),
            surface.height()
        );
    }

    surface.teardown();
    log::info!(
        "done in {:.1} ms -> {}",
        started.elapsed().as_secs_f64() * 1000.0,
        args.out.display()
    );
    Ok(())
}
