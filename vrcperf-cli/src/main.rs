//! Rank an avatar scene from the command line
//!
//! Loads a JSON or OBJ scene, builds a selection from the arguments and
//! prints the rank panels as text (or a JSON report).

mod report;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vrcperf_core::{ObjectId, Scene};
use vrcperf_metrics::{Platform, Selection};
use vrcperf_panel::{Extension, PanelConfig, TextLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlatformArg {
    Pc,
    Mobile,
    Both,
}

impl PlatformArg {
    fn platforms(self) -> Vec<Platform> {
        match self {
            PlatformArg::Pc => vec![Platform::Desktop],
            PlatformArg::Mobile => vec![Platform::Mobile],
            PlatformArg::Both => vec![Platform::Desktop, Platform::Mobile],
        }
    }
}

/// Show VRChat avatar performance ranks for a scene
#[derive(Debug, Parser)]
#[command(name = "vrcperf", version, about)]
struct Args {
    /// Scene file (.json or .obj)
    scene: PathBuf,

    /// Platforms to rank for (defaults to the config, else both)
    #[arg(short, long, value_enum)]
    platform: Option<PlatformArg>,

    /// Rank every object of this collection
    #[arg(short, long, conflicts_with_all = ["object", "select"])]
    collection: Option<String>,

    /// Active object
    #[arg(short, long)]
    object: Option<String>,

    /// Selected objects (repeat for a multi-selection)
    #[arg(short, long)]
    select: Vec<String>,

    /// Directory with excellent.png ... verypoor.png
    #[arg(long)]
    icons: Option<PathBuf>,

    /// JSON panel configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text width of the panels
    #[arg(long)]
    width: Option<usize>,

    /// Do not show the active object's share next to totals
    #[arg(long)]
    no_selected: bool,

    /// Print a JSON report instead of panels
    #[arg(long)]
    json: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn find_object(scene: &Scene, name: &str) -> Result<ObjectId> {
    scene
        .find_object(name)
        .with_context(|| format!("no object named '{}' in the scene", name))
}

fn build_selection(scene: &Scene, args: &Args) -> Result<Selection> {
    if let Some(name) = &args.collection {
        let id = scene
            .find_collection(name)
            .with_context(|| format!("no collection named '{}' in the scene", name))?;
        return Ok(Selection::ActiveCollection(id));
    }

    let mut selected = args
        .select
        .iter()
        .map(|name| find_object(scene, name))
        .collect::<Result<Vec<_>>>()?;

    match &args.object {
        Some(name) => {
            let active = find_object(scene, name)?;
            if !selected.contains(&active) {
                selected.insert(0, active);
            }
            Ok(Selection::Objects { active, selected })
        }
        None if !selected.is_empty() => Ok(Selection::objects(selected)),
        // With nothing selected the host falls back to the active collection.
        None => Ok(scene
            .collections()
            .next()
            .map_or(Selection::Nothing, |(id, _)| Selection::ActiveCollection(id))),
    }
}

fn build_config(args: &Args) -> Result<PanelConfig> {
    let mut config = match &args.config {
        Some(path) => PanelConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PanelConfig::default(),
    };
    if let Some(platform) = args.platform {
        config = config.with_platforms(platform.platforms());
    }
    if let Some(icons) = &args.icons {
        config = config.with_icons_dir(icons);
    }
    if let Some(width) = args.width {
        config = config.with_text_width(width);
    }
    if args.no_selected {
        config = config.with_show_selected(false);
    }
    if config.platforms.is_empty() {
        bail!("no platforms to rank for");
    }
    Ok(config)
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let scene = vrcperf_io::read_scene(&args.scene)
        .with_context(|| format!("failed to read scene {}", args.scene.display()))?;
    let selection = build_selection(&scene, &args)?;
    let config = build_config(&args)?;
    log::debug!("Selection: {:?}", selection);

    if args.json {
        let reports = report::build_reports(&scene, &selection, &config.platforms);
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let extension = Extension::register(config).context("failed to register panels")?;
    let mut layout = TextLayout::new(extension.config().text_width);
    extension.draw_all(&scene, &selection, &mut layout);
    print!("{}", layout.into_string());
    extension.unregister();
    Ok(())
}
