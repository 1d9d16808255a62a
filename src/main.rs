extern crate sphere_tracer as root;

use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use root::math::Point3;
use root::parsing::load_scene;
use root::{example_scene, render, RenderSettings, Scene};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// JSON scene description. Renders the built-in scene when omitted.
    #[structopt(long, parse(from_os_str))]
    pub scene_file: Option<PathBuf>,
    #[structopt(short, long, default_value = "output.ppm", parse(from_os_str))]
    pub output: PathBuf,
    #[structopt(long, parse(from_os_str))]
    pub png: Option<PathBuf>,
    /// Written before normalization.
    #[structopt(long, parse(from_os_str))]
    pub exr: Option<PathBuf>,
    /// Samples per world unit.
    #[structopt(short, long, default_value = "10")]
    pub resolution: usize,
    #[structopt(long, default_value = "100")]
    pub width: usize,
    #[structopt(long, default_value = "100")]
    pub height: usize,
    #[structopt(long, default_value = "-200")]
    pub eye_depth: f64,
    #[structopt(long)]
    pub no_normalize: bool,
    #[structopt(long)]
    pub no_falloff: bool,
    #[structopt(short, long)]
    pub threads: Option<usize>,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
    #[structopt(long)]
    pub progress: bool,
}

fn construct_scene(opts: &Opt) -> anyhow::Result<Scene> {
    match &opts.scene_file {
        Some(path) => load_scene(path)
            .with_context(|| format!("couldn't load scene from {}", path.display())),
        None => Ok(example_scene()),
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&opts.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let threads = opts.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to build rayon thread pool")?;
    info!("rendering with {} threads", threads);

    let scene = construct_scene(&opts)?;

    let settings = RenderSettings {
        resolution: opts.resolution,
        width: opts.width,
        height: opts.height,
        eye: Point3::new(0.0, 0.0, opts.eye_depth),
        screen_center: Point3::ORIGIN,
        normalize: false,
        falloff: !opts.no_falloff,
        show_progress: opts.progress,
    };
    let mut film = render(&scene, &settings);

    if let Some(path) = &opts.exr {
        film.save_exr(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    if !opts.no_normalize {
        film.normalize();
    }
    film.save_ppm(&opts.output)
        .with_context(|| format!("failed to write {}", opts.output.display()))?;
    if let Some(path) = &opts.png {
        film.save_png(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
