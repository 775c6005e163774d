use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chromaplot", version)]
struct Cli {
    /// Log plot scheduling (repeat for per-frame tracing).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the films in a palette file.
    Films(FilmsArgs),
    /// Render the settled plot of one film as a PNG.
    Frame(FrameArgs),
    /// Render every animation frame of one film as a PNG sequence.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct FilmsArgs {
    /// Palette JSON produced by the extractor.
    #[arg(long)]
    palettes: PathBuf,
}

#[derive(Parser, Debug)]
#[command(group(clap::ArgGroup::new("target").required(true).args(["film", "all"])))]
struct FrameArgs {
    /// Palette JSON produced by the extractor.
    #[arg(long)]
    palettes: PathBuf,

    /// Film to plot.
    #[arg(long)]
    film: Option<String>,

    /// Plot every film; `--out` is then a directory receiving `<film>.png` per film.
    #[arg(long)]
    all: bool,

    /// Settings JSON (defaults when omitted).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output PNG path, or output directory with `--all`.
    #[arg(long)]
    out: PathBuf,

    /// Refresh budget before giving up on convergence.
    #[arg(long, default_value_t = chromaplot::DEFAULT_MAX_FRAMES)]
    max_frames: u64,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Palette JSON produced by the extractor.
    #[arg(long)]
    palettes: PathBuf,

    /// Film to plot.
    #[arg(long)]
    film: String,

    /// Settings JSON (defaults when omitted).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Settings JSON applied once the first animation settles; its transition is recorded too.
    #[arg(long)]
    then: Option<PathBuf>,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Refresh budget per settle run.
    #[arg(long, default_value_t = chromaplot::DEFAULT_MAX_FRAMES)]
    max_frames: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Films(args) => cmd_films(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_palettes(path: &Path) -> anyhow::Result<chromaplot::PaletteSet> {
    chromaplot::PaletteSet::from_path(path)
        .with_context(|| format!("load palettes '{}'", path.display()))
}

fn read_settings(path: Option<&Path>) -> anyhow::Result<chromaplot::Settings> {
    match path {
        Some(p) => chromaplot::Settings::from_path(p)
            .with_context(|| format!("load settings '{}'", p.display())),
        None => Ok(chromaplot::Settings::default()),
    }
}

fn make_plot(
    palettes: &chromaplot::PaletteSet,
    film: &str,
    settings: chromaplot::SharedSettings,
) -> anyhow::Result<(chromaplot::PlotController, chromaplot::CpuSurface)> {
    let screenshots = palettes.film(film)?;
    let canvas = chromaplot::Canvas::square(settings.borrow().canvas_size);
    let plot = chromaplot::PlotController::new(film, screenshots, settings)
        .with_context(|| format!("build plot for '{film}'"))?;
    let surface = chromaplot::CpuSurface::new(canvas, chromaplot::CpuSurfaceOpts::default())?;
    Ok((plot, surface))
}

fn cmd_films(args: FilmsArgs) -> anyhow::Result<()> {
    let palettes = read_palettes(&args.palettes)?;
    for (film, screenshots) in palettes.iter() {
        let swatches: usize = screenshots.iter().map(|s| s.colors.len()).sum();
        println!(
            "{film}\t{} screenshots\t{swatches} swatches",
            screenshots.len()
        );
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let palettes = read_palettes(&args.palettes)?;
    let settings = read_settings(args.settings.as_deref())?;

    if args.all {
        std::fs::create_dir_all(&args.out)
            .with_context(|| format!("create output dir '{}'", args.out.display()))?;
        for film in palettes.films() {
            let out = args.out.join(format!("{film}.png"));
            render_settled(&palettes, film, settings.clone(), &out, args.max_frames)?;
        }
        return Ok(());
    }

    let film = args
        .film
        .as_deref()
        .context("either --film or --all is required")?;
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    render_settled(&palettes, film, settings, &args.out, args.max_frames)
}

fn render_settled(
    palettes: &chromaplot::PaletteSet,
    film: &str,
    settings: chromaplot::Settings,
    out: &Path,
    max_frames: u64,
) -> anyhow::Result<()> {
    let settings = chromaplot::SharedSettings::new(settings);
    let (mut plot, mut surface) = make_plot(palettes, film, settings)?;

    plot.draw();
    let stats = plot.run_until_settled(&mut surface, max_frames);
    if !stats.converged {
        eprintln!("warning: '{film}' still animating after {} frames", stats.frames);
    }

    let frame = surface.read_frame();
    chromaplot::write_png(out, &frame)?;

    eprintln!("wrote {} ({} frames)", out.display(), stats.frames);
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let palettes = read_palettes(&args.palettes)?;
    let initial = read_settings(args.settings.as_deref())?;
    let next = args
        .then
        .as_deref()
        .map(|p| read_settings(Some(p)))
        .transpose()?;
    if let Some(next) = &next
        && next.canvas_size != initial.canvas_size
    {
        anyhow::bail!(
            "--then changes canvasSize ({} -> {}); a resized plot cannot animate from the old one",
            initial.canvas_size,
            next.canvas_size
        );
    }

    let settings = chromaplot::SharedSettings::new(initial);
    let (mut plot, mut surface) = make_plot(&palettes, &args.film, settings.clone())?;
    let mut sink = chromaplot::PngSequenceSink::new(&args.out_dir, "frame_");

    plot.draw();
    let first =
        chromaplot::render_until_settled(&mut plot, &mut surface, &mut sink, args.max_frames)?;
    let mut total = first.frames;

    if let Some(next) = next {
        settings.replace(next);
        plot.draw();
        let second =
            chromaplot::render_until_settled(&mut plot, &mut surface, &mut sink, args.max_frames)?;
        total += second.frames;
    }

    eprintln!("wrote {} frames to {}", total, args.out_dir.display());
    Ok(())
}
