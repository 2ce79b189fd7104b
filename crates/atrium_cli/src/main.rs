//! Atrium CLI
//!
//! Render a route's page, run a scripted menu session, or print the resolved
//! site configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atrium_app::{logging, Site, SiteConfig};
use atrium_core::{Point, Rect, Viewport};
use atrium_menu::{ElementRole, PanelSide};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "atrium")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Atrium studio site tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory containing atrium.toml
    #[arg(short, long, global = true, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a URL path and print its page
    Page {
        /// URL path, e.g. /work/hospitality
        path: String,
    },

    /// Open and close the menu, printing each phase change
    Menu {
        /// Viewport width in logical pixels
        #[arg(short, long, default_value = "1280")]
        width: f32,

        /// Frame step in milliseconds
        #[arg(long, default_value = "16")]
        step: f32,

        /// Resize to this width while the menu is open
        #[arg(long)]
        resize: Option<f32>,

        /// Dismiss by clicking outside the panel instead of the toggle
        #[arg(long)]
        click_away: bool,
    },

    /// Print the resolved configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Page { path } => cmd_page(&cli.dir, &path),
        Commands::Menu {
            width,
            step,
            resize,
            click_away,
        } => cmd_menu(&cli.dir, width, step, resize, click_away),
        Commands::Config => cmd_config(&cli.dir),
    }
}

fn load_config(dir: &Path) -> Result<SiteConfig> {
    SiteConfig::load_from_dir(dir)
        .with_context(|| format!("Failed to load configuration from {}", dir.display()))
}

fn cmd_page(dir: &Path, path: &str) -> Result<()> {
    let config = load_config(dir)?;
    let mut site = Site::new(&config, Viewport::new(1280.0)).context("Failed to build site")?;

    let page = site.visit(path);
    info!("{} -> {}", path, site.current_route());
    print!("{page}");
    Ok(())
}

/// Tick until nothing is animating, printing phase changes
fn settle(site: &Site, step: f32, elapsed: &mut f32) {
    let mut last = site.menu().map(|m| m.phase());
    while site.tick(step) {
        *elapsed += step;
        let phase = site.menu().map(|m| m.phase());
        if phase != last {
            println!("{:>7.0}ms  {:?}", elapsed, phase.unwrap_or_default());
            last = phase;
        }
    }
    let phase = site.menu().map(|m| m.phase());
    if phase != last {
        println!("{:>7.0}ms  {:?}", elapsed, phase.unwrap_or_default());
    }
}

fn cmd_menu(
    dir: &Path,
    width: f32,
    step: f32,
    resize: Option<f32>,
    click_away: bool,
) -> Result<()> {
    if step <= 0.0 {
        anyhow::bail!("Frame step must be positive, got {}", step);
    }

    let config = load_config(dir)?;
    let mut site = Site::new(&config, Viewport::new(width)).context("Failed to build site")?;
    let menu = site.menu().context("No menu mounted")?;
    let skin = menu.skin();
    let side = format!("{:?}", skin.side).to_lowercase();
    println!("{} menu, {} side, width {}", skin.name, side, width);

    // Panel against its edge, toggle just outside it
    let (panel_x, toggle_x) = match skin.side {
        PanelSide::Right => (width - skin.panel_width, width - skin.panel_width - 60.0),
        PanelSide::Left => (0.0, skin.panel_width + 20.0),
    };
    menu.set_bounds(
        ElementRole::Panel,
        Rect::new(panel_x, 0.0, skin.panel_width, 900.0),
    );
    menu.set_bounds(ElementRole::Toggle, Rect::new(toggle_x, 20.0, 40.0, 40.0));
    let outside = match skin.side {
        PanelSide::Right => Point::new(10.0, 450.0),
        PanelSide::Left => Point::new(width - 10.0, 450.0),
    };

    let mut elapsed = 0.0;
    menu.toggle();
    println!("{:>7.0}ms  {:?}", elapsed, menu.phase());
    println!("           scroll locked: {}", site.is_scroll_locked());
    settle(&site, step, &mut elapsed);

    if let Some(new_width) = resize {
        let swapped = site.resize(Viewport::new(new_width));
        let variant = site.host().variant();
        println!(
            "resized to {}: {} ({:?}), scroll locked: {}",
            new_width,
            if swapped { "swapped" } else { "kept" },
            variant,
            site.is_scroll_locked()
        );
        if swapped {
            return Ok(());
        }
    }

    let menu = site.menu().context("No menu mounted")?;
    if click_away {
        let dismissed = menu.handle_pointer_down(outside);
        println!("{:>7.0}ms  click-away dismissed: {}", elapsed, dismissed);
    } else {
        menu.toggle();
    }
    println!("{:>7.0}ms  {:?}", elapsed, menu.phase());
    settle(&site, step, &mut elapsed);
    println!("           scroll locked: {}", site.is_scroll_locked());
    Ok(())
}

fn cmd_config(dir: &Path) -> Result<()> {
    let config = load_config(dir)?;
    let text = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
    print!("{text}");
    Ok(())
}
