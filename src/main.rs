extern crate sphere_raster as root;

#[macro_use]
extern crate log;

use root::output::{PixelSink, PngWriter, PpmWriter};
use root::parsing::{construct_scene, get_settings, Config, OutputFormat};
use root::profile::{log_memory_usage, resident_memory_bytes};
use root::renderer::{ParallelRenderer, Renderer, StreamingRenderer};

use simplelog::{ColorChoice, CombinedLogger, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub config_file: Option<String>,
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(short = "o", long)]
    pub output: Option<String>,
    #[structopt(long)]
    pub width: Option<usize>,
    #[structopt(long)]
    pub height: Option<usize>,
    #[structopt(short = "t", long)]
    pub threads: Option<u16>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
}

fn parse_log_level(level: String, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "trace" => LevelFilter::Trace,
        "error" => LevelFilter::Error,
        "debug" => LevelFilter::Debug,
        "off" => LevelFilter::Off,
        _ => default,
    }
}

fn init_logging(opts: &Opt) -> Result<()> {
    let term_log_level = parse_log_level(opts.print_log_level.clone(), LevelFilter::Info);
    let write_log_level = parse_log_level(opts.write_log_level.clone(), LevelFilter::Info);

    CombinedLogger::init(vec![
        TermLogger::new(
            term_log_level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            write_log_level,
            simplelog::Config::default(),
            File::create("render.log").context("couldn't create render.log")?,
        ),
    ])?;
    Ok(())
}

// command line flags take precedence over the config file
fn merge_config(opts: &Opt) -> Result<Config> {
    let mut config = match &opts.config_file {
        Some(path) => get_settings(&PathBuf::from(path))?,
        None => Config::default(),
    };
    if opts.scene_file.is_some() {
        config.scene_file = opts.scene_file.clone();
    }
    let settings = &mut config.render_settings;
    if let Some(output) = opts.output.clone().or_else(|| settings.filename.clone()) {
        settings.set_output(output);
    }
    if let Some(width) = opts.width {
        settings.resolution.width = width;
    }
    if let Some(height) = opts.height {
        settings.resolution.height = height;
    }
    if opts.threads.is_some() {
        settings.threads = opts.threads;
    }
    Ok(config)
}

fn run(opts: Opt) -> Result<()> {
    let start = Instant::now();
    let config = merge_config(&opts)?;
    let settings = &config.render_settings;

    let threads = settings.threads();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("couldn't build the rayon thread pool")?;

    let scene_file = config.scene_file.as_ref().map(PathBuf::from);
    let scene = construct_scene(scene_file.as_deref(), settings)?;
    info!(
        "scene has {} primitives at {}x{}",
        scene.primitives.len(),
        scene.width,
        scene.height
    );

    if opts.dry_run {
        info!("dry run, not rendering");
        return Ok(());
    }

    let renderer: Box<dyn Renderer> = if threads == 1 {
        Box::new(StreamingRenderer::new(settings.silenced))
    } else {
        Box::new(ParallelRenderer::new(settings.band_rows(), settings.silenced))
    };

    let output_path = settings.output_path();
    let mut sink: Box<dyn PixelSink> = match settings.output_format {
        OutputFormat::PPM => Box::new(
            PpmWriter::create(&output_path)
                .with_context(|| format!("couldn't open {} for writing", output_path))?,
        ),
        OutputFormat::PNG => Box::new(PngWriter::new(&output_path)),
    };

    let render_start = Instant::now();
    let profile = renderer
        .render(&scene, sink.as_mut())
        .with_context(|| format!("failed writing {}", output_path))?;
    let render_elapsed = render_start.elapsed().as_secs_f32();
    info!("wrote {}", output_path);

    profile.pretty_print(render_elapsed, threads);
    log_memory_usage("Scene memory", scene.size_in_bytes() as u64);
    match resident_memory_bytes() {
        Some(bytes) => log_memory_usage("Memory Used", bytes),
        None => debug!("resident memory is not available on this platform"),
    }
    info!("Elapsed: {} secs", start.elapsed().as_secs_f64());
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    if let Err(e) = init_logging(&opts) {
        eprintln!("couldn't initialize logging: {:?}", e);
        process::exit(1);
    }

    if let Err(e) = run(opts) {
        error!("fatal error, aborting. error is {:?}", e);
        process::exit(1);
    }
}
