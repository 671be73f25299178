//! Spell HUD preview tool.
//!
//! Loads skins from the built-in pack plus any resource packs named on the
//! command line and prints what the HUD would draw.
//!
//! # Commands
//!
//! - `spellhud-app list` - List loaded skins in order
//! - `spellhud-app preview <skin> <corner>` - Render one frame with the demo wand
//! - `spellhud-app settings <settings.toml>` - Preview using a settings file
//! - `spellhud-app gallery <corner>` - Draw every skin at one corner
//!
//! Every command takes resource pack directories as trailing arguments,
//! lowest priority first.

mod builtin;
mod commands;
mod demo;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use builtin::LayeredPacks;
use demo::DemoCaster;
use spellhud_hud::{HudPosition, HudSettings, SpellHud};
use spellhud_skin::HudAnchor;

/// Spell HUD preview tool
#[derive(Parser)]
#[command(name = "spellhud-app")]
#[command(about = "Preview spell HUD skins and resource packs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List loaded skins in order
    List {
        /// Resource packs, or directories of packs
        packs: Vec<String>,
    },

    /// Render one frame with the demo wand
    Preview {
        /// Key of the skin to draw
        skin: String,
        /// Screen corner: bottom_left, top_left, top_right or bottom_right
        #[arg(value_parser = parse_position)]
        corner: HudPosition,
        /// Resource packs, or directories of packs
        packs: Vec<String>,
    },

    /// Render one frame using a settings file
    Settings {
        /// TOML file with `skin` and `position`
        path: PathBuf,
        /// Resource packs, or directories of packs
        packs: Vec<String>,
    },

    /// Draw every loaded skin at one corner
    Gallery {
        /// Screen corner: bottom_left, top_left, top_right or bottom_right
        #[arg(value_parser = parse_position)]
        corner: HudPosition,
        /// Resource packs, or directories of packs
        packs: Vec<String>,
    },
}

fn parse_position(s: &str) -> std::result::Result<HudPosition, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { packs } => {
            let hud = load_hud(HudSettings::default(), &packs);
            print!("{}", commands::list_skins(hud.skins()));
        },
        Commands::Preview {
            skin,
            corner,
            packs,
        } => {
            let settings = HudSettings {
                skin,
                position: corner,
            };
            let mut hud = load_hud(settings, &packs);
            print!("{}", commands::preview(&mut hud, &DemoCaster::new())?);
        },
        Commands::Settings { path, packs } => {
            let settings = HudSettings::load(&path)?;
            log::info!("Settings: skin '{}' at {}", settings.skin, settings.position);
            let mut hud = load_hud(settings, &packs);
            print!("{}", commands::preview(&mut hud, &DemoCaster::new())?);
        },
        Commands::Gallery { corner, packs } => {
            let hud = load_hud(HudSettings::default(), &packs);
            let anchor = HudAnchor::corner(
                commands::PREVIEW_WIDTH,
                commands::PREVIEW_HEIGHT,
                corner.flip_x(),
                corner.flip_y(),
            );
            print!("{}", commands::gallery(hud.skins(), &DemoCaster::new(), anchor)?);
        },
    }
    Ok(())
}

fn load_hud(settings: HudSettings, packs: &[String]) -> SpellHud {
    let provider = LayeredPacks::from_args(packs);
    let mut hud = SpellHud::new(settings);
    let count = hud.reload(&provider);
    log::debug!("{count} skins available");
    hud
}
