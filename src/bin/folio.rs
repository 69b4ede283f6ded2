use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform the entry document and write the site into the output directory.
    Build(BuildArgs),
    /// Print the experience timeline fragment for a data file.
    Experiences(ExperiencesArgs),
    /// Render experience data into the timeline container of a saved page.
    Hydrate(HydrateArgs),
    /// Render a single background frame as a PNG.
    Frame(FrameArgs),
    /// Run the background frame loop and write a PNG sequence.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct SiteArgs {
    /// Site config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the site root.
    #[arg(long)]
    root: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Override the output directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExperiencesArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Experience JSON file. Defaults to the configured data path.
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct HydrateArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Saved HTML page containing the timeline container.
    #[arg(long)]
    page: PathBuf,

    /// Site base URL; data is fetched from the configured experiences path below it.
    #[arg(long, conflicts_with = "data", required_unless_present = "data")]
    url: Option<String>,

    /// Read experience data from a local file instead.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Class of the container element. Defaults to the configured timeline class.
    #[arg(long)]
    container_class: Option<String>,

    /// Output HTML path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene JSON. The built-in lights and particles are used when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Override the scene seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Animation time in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to paint.
    #[arg(long, default_value_t = 60)]
    count: u64,

    /// Frames per second of the simulated display.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Clock value of the first frame in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    start_ms: f64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Pace frames against the wall clock instead of stepping a simulated one.
    #[arg(long)]
    realtime: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Experiences(args) => cmd_experiences(args),
        Command::Hydrate(args) => cmd_hydrate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_site(args: &SiteArgs) -> anyhow::Result<folio::SiteConfig> {
    let mut cfg = folio::SiteConfig::load(args.config.as_deref()).with_context(|| {
        args.config.as_ref().map_or_else(
            || "load site config".to_owned(),
            |p| format!("load site config '{}'", p.display()),
        )
    })?;
    if let Some(root) = &args.root {
        cfg.root = root.clone();
    }
    Ok(cfg)
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let mut cfg = load_site(&args.site)?;
    if let Some(out_dir) = args.out_dir {
        cfg.out_dir = out_dir;
    }
    cfg.validate()?;

    let pipeline = folio::SitePipeline::from_config(&cfg);
    let report = pipeline
        .build(&cfg)
        .with_context(|| format!("build site from '{}'", cfg.entry_path().display()))?;

    eprintln!("wrote {}", report.output.display());
    Ok(())
}

fn cmd_experiences(args: ExperiencesArgs) -> anyhow::Result<()> {
    let path = match args.data {
        Some(p) => p,
        None => load_site(&args.site)?.data_path(),
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("read experience data '{}'", path.display()))?;
    let records = folio::parse_records(&json)
        .with_context(|| format!("parse experience data '{}'", path.display()))?;

    println!("{}", folio::render_experiences(&records));
    Ok(())
}

fn cmd_hydrate(args: HydrateArgs) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(&args.page)
        .with_context(|| format!("read page '{}'", args.page.display()))?;
    let cfg = load_site(&args.site)?;
    let class = args.container_class.as_deref().unwrap_or(&cfg.timeline_class);
    let mut page = folio::HtmlPage::with_container_class(html, class);

    let source: Box<dyn folio::DataSource> = match (&args.url, &args.data) {
        (Some(url), _) => Box::new(
            folio::HttpSource::with_path(url, &cfg.data_url_path())
                .with_context(|| format!("http source for '{url}'"))?,
        ),
        (None, Some(path)) => Box::new(folio::FileSource::new(path)),
        (None, None) => anyhow::bail!("either --url or --data is required"),
    };

    let outcome = folio::hydrate(&mut page, source.as_ref());
    tracing::info!(?outcome, source = %source.describe(), "hydration finished");

    match args.out {
        Some(out) => {
            write_file(&out, page.html().as_bytes())?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{}", page.html()),
    }
    Ok(())
}

fn build_animation(
    args: &SceneArgs,
) -> anyhow::Result<folio::Animation<folio::ManualScheduler>> {
    let mut scene = match &args.scene {
        Some(p) => folio::SceneConfig::from_path(p)
            .with_context(|| format!("load scene '{}'", p.display()))?,
        None => folio::SceneConfig::default(),
    };
    if let Some(seed) = args.seed {
        scene.seed = seed;
    }
    let viewport = folio::Viewport::new(args.width, args.height, args.dpr)?;
    Ok(folio::Animation::new(
        &scene,
        viewport,
        folio::ManualScheduler::new(),
    )?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut anim = build_animation(&args.scene)?;
    anim.paint(args.time_ms);

    anim.snapshot()
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be > 0");
    }
    if args.count == 0 {
        return Ok(());
    }
    let mut writer = folio::PngSequenceWriter::new(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut anim = build_animation(&args.scene)?;
    let frame_ms = 1000.0 / args.fps;

    if args.realtime {
        let clock = folio::SystemClock::starting_at(args.start_ms);
        record_frames(&mut anim, &clock, args.count, &mut writer, || {
            std::thread::sleep(std::time::Duration::from_secs_f64(frame_ms / 1000.0));
        })?;
    } else {
        let clock = folio::ManualClock::starting_at(args.start_ms);
        record_frames(&mut anim, &clock, args.count, &mut writer, || {
            clock.advance(frame_ms);
        })?;
    }
    let written = writer.finish().context("write frames")?;

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

/// Run the frame loop for `count` frames, calling `pace` between frames.
fn record_frames<C: folio::Clock>(
    anim: &mut folio::Animation<folio::ManualScheduler>,
    clock: &C,
    count: u64,
    writer: &mut folio::PngSequenceWriter,
    mut pace: impl FnMut(),
) -> anyhow::Result<u64> {
    anim.start(clock.now_ms());
    folio::run_frames(anim, clock, |anim, n| {
        writer.push(anim.snapshot())?;
        if n >= count {
            return Ok(folio::LoopControl::Stop);
        }
        pace();
        Ok(folio::LoopControl::Continue)
    })
    .context("run frame loop")
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
