use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use position_engine::config::{self, Config};
use position_engine::{
    Corner, EjectDirection, Point, PositionProvider, ScreenMetrics, StaticScreen, TaskBarLocation,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

mod args;

#[derive(Parser)]
#[command(name = "toast-position")]
#[command(about = "Compute where toast popups land on the primary screen", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Compute the anchor point for a popup")]
    Position(PositionArgs),
    #[command(about = "Show the effective placement configuration")]
    Config,
}

#[derive(Args)]
struct PositionArgs {
    /// Popup width in pixels
    #[arg(long, allow_negative_numbers = true)]
    width: f64,

    /// Popup height in pixels
    #[arg(long, allow_negative_numbers = true)]
    height: f64,

    /// Full primary screen size, WIDTHxHEIGHT
    #[arg(long, value_parser = args::parse_size)]
    screen: (f64, f64),

    /// Work area, LEFT,TOP,WIDTH,HEIGHT (defaults to the whole screen)
    #[arg(long, value_parser = args::parse_rect, allow_hyphen_values = true)]
    work_area: Option<(f64, f64, f64, f64)>,

    /// Corner override, e.g. top-right
    #[arg(long)]
    corner: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    offset_x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    offset_y: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Placement {
    corner: Corner,
    point: Point,
    eject_direction: EjectDirection,
    taskbar: TaskBarLocation,
    height: f64,
}

fn load(config_arg: Option<&str>) -> Config {
    let path: Option<PathBuf> = config_arg.map(config::expand_path);
    config::load_config(path.as_deref())
}

fn compute_position(config: Config, args: &PositionArgs) -> Result<Placement> {
    let mut placement = config.placement;
    if let Some(corner) = &args.corner {
        placement.corner = corner.clone();
    }
    if let Some(offset_x) = args.offset_x {
        placement.offset_x = offset_x;
    }
    if let Some(offset_y) = args.offset_y {
        placement.offset_y = offset_y;
    }

    let (screen_width, screen_height) = args.screen;
    let mut metrics = ScreenMetrics::full(screen_width, screen_height);
    if let Some((left, top, width, height)) = args.work_area {
        metrics = metrics.with_work_area(left, top, width, height);
    }
    let screen = StaticScreen::checked(metrics)?;

    let provider = placement
        .build(screen)
        .context("Invalid placement configuration")?;
    debug!("Using {} with offsets {:?}", provider.corner(), provider.offsets());

    Ok(Placement {
        corner: provider.corner(),
        point: provider.position(args.width, args.height),
        eject_direction: provider.eject_direction(),
        taskbar: provider.taskbar_location(),
        height: provider.height(),
    })
}

fn show_position(config: Config, args: &PositionArgs) -> Result<()> {
    let placement = compute_position(config, args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&placement)?);
    } else {
        println!("Position: ({}, {})", placement.point.x, placement.point.y);
        println!("  Corner: {}", placement.corner);
        println!("  Eject direction: {:?}", placement.eject_direction);
        println!("  Taskbar: {:?}", placement.taskbar);
        println!("  Height: {}", placement.height);
    }

    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to render config")?;
    print!("{}", rendered);

    if let Err(e) = config.placement.validated() {
        warn!("Placement config will be rejected: {}", e);
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load(cli.config.as_deref());

    match cli.command {
        Commands::Position(args) => {
            show_position(config, &args)?;
        }
        Commands::Config => {
            show_config(&config)?;
        }
    }

    Ok(())
}
