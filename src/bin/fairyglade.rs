use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use fairyglade::{
    BackendKind, Canvas, FfmpegSink, FfmpegSinkOpts, FrameIndex, FrameRange, FrameSink,
    PngSequenceSink, SketchConfig, SketchSession, create_backend, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "fairyglade", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame range to an MP4 (requires `ffmpeg` on PATH) or a PNG directory.
    Render(RenderArgs),
    /// Print a JSON summary of one frame without rasterizing it.
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// Sketch config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file used for the hint text.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Override canvas width.
    #[arg(long)]
    width: Option<u32>,

    /// Override canvas height.
    #[arg(long)]
    height: Option<u32>,

    /// Override the scene seed.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output path: `*.mp4` goes through ffmpeg, anything else is a PNG directory.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames to render (defaults to the config duration).
    #[arg(long)]
    frames: Option<u64>,

    /// Fail instead of replacing an existing MP4.
    #[arg(long = "no-overwrite", action = clap::ArgAction::SetFalse)]
    overwrite: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<SketchConfig> {
    let mut cfg = match &args.config {
        Some(path) => SketchConfig::from_path(path)?,
        None => SketchConfig::default(),
    };
    if let Some(font) = &args.font {
        cfg.font = Some(font.clone());
    }
    cfg.canvas = Canvas {
        width: args.width.unwrap_or(cfg.canvas.width),
        height: args.height.unwrap_or(cfg.canvas.height),
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    cfg.validate().context("invalid sketch config")?;
    Ok(cfg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let mut sess = SketchSession::new(cfg)?;
    let mut backend = create_backend(BackendKind::Cpu, sess.backend_opts()?)?;
    let frame = sess.render_frame(FrameIndex(args.frame), backend.as_mut())?;

    write_png(&args.out, &frame).with_context(|| format!("write '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let frames = args.frames.unwrap_or(cfg.duration);
    let range = FrameRange::new(FrameIndex(0), FrameIndex(frames))?;

    let mut sess = SketchSession::new(cfg)?;
    let mut backend = create_backend(BackendKind::Cpu, sess.backend_opts()?)?;
    let mut sink = make_sink(&args.out, args.overwrite);
    let stats = sess.render_range(range, backend.as_mut(), sink.as_mut())?;

    eprintln!(
        "wrote {} ({} frames)",
        args.out.display(),
        stats.frames_rendered
    );
    Ok(())
}

fn make_sink(out: &Path, overwrite: bool) -> Box<dyn FrameSink> {
    let is_mp4 = out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"));
    if is_mp4 {
        Box::new(FfmpegSink::new(
            FfmpegSinkOpts::new(out).with_overwrite(overwrite),
        ))
    } else {
        Box::new(PngSequenceSink::new(out, "frame_"))
    }
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let mut sess = SketchSession::new(cfg)?;
    sess.fast_forward(FrameIndex(args.frame))?;
    let (idx, list) = sess.advance();
    let fingerprint = format!("{:016x}", list.fingerprint());
    let ops = list.op_counts();
    let commands = list.len();

    let summary = serde_json::json!({
        "frame": idx.0,
        "commands": commands,
        "fingerprint": fingerprint,
        "ops": ops,
        "fairy": sess.forest().fairy().snapshot(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
