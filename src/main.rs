//! Loadout - command-line front end for settings profiles
//!
//! Manages the profile directory the overlay reads from: listing, creating, renaming
//! and removing profiles, printing their stored form and merging fragments into them.
//!
//! # Settings
//!
//! Application settings come from `loadout.yaml` (or `--config`), overridden by
//! `LOADOUT_*` environment variables. `loadout init-config` writes a starter file.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use loadout::config::DEFAULT_CONFIG_FILE;
use loadout::{APP_NAME, AppConfig, ConfigStore, FontCatalog, VERSION};

#[derive(Parser)]
#[command(name = "loadout")]
#[command(about = "Manage overlay settings profiles", version)]
struct Args {
    /// Application settings file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Profile directory, overriding the settings file
    #[arg(short, long, env = "LOADOUT_PROFILE_DIR")]
    profile_dir: Option<Utf8PathBuf>,

    /// Also log to the console
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the profiles in the profile directory
    List,
    /// Create a profile holding only defaults
    Add { name: String },
    /// Delete a profile
    Remove { name: String },
    /// Rename a profile
    Rename { old: String, new: String },
    /// Print the stored form of a profile
    Show { name: String },
    /// Merge the settings of `fragment` into `target` and save `target`
    Import { target: String, fragment: String },
    /// Overwrite a profile with defaults
    Reset { name: String },
    /// Write a default application settings file
    InitConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Command::InitConfig = args.command {
        AppConfig::write_default(&args.config)?;
        println!("Wrote {}", args.config);
        return Ok(());
    }

    let mut app_config = AppConfig::load(&args.config)?;
    if let Some(profile_dir) = args.profile_dir {
        app_config.profile_dir = profile_dir;
    }

    let _guard = loadout::logging::setup_logging_with_console(
        &app_config.log_dir,
        &app_config.log_prefix,
        app_config.debug,
        args.verbose,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let mut store = ConfigStore::open(app_config.profile_dir.clone(), FontCatalog::default())
        .with_context(|| format!("Failed to open profile directory {}", app_config.profile_dir))?;

    let result = run(&mut store, args.command);
    store.metrics().log_summary();
    result
}

fn run(store: &mut ConfigStore, command: Command) -> Result<()> {
    match command {
        Command::List => {
            for name in store.configs() {
                println!("{}", name);
            }
        }
        Command::Add { name } => {
            store.add(&name)?;
            println!("Added {}", name);
        }
        Command::Remove { name } => {
            let id = lookup(store, &name)?;
            store.remove(id)?;
            println!("Removed {}", name);
        }
        Command::Rename { old, new } => {
            let id = lookup(store, &old)?;
            store.rename(id, &new)?;
            println!("Renamed {} to {}", old, new);
        }
        Command::Show { name } => {
            let id = lookup(store, &name)?;
            store.load(id, false)?;
            let text = serde_json::to_string_pretty(&store.settings().to_document())
                .context("Failed to format profile")?;
            println!("{}", text);
        }
        Command::Import { target, fragment } => {
            let target_id = lookup(store, &target)?;
            let fragment_id = lookup(store, &fragment)?;
            store.load(target_id, false)?;
            store.load(fragment_id, true)?;
            store.save(target_id)?;
            println!("Merged {} into {}", fragment, target);
        }
        Command::Reset { name } => {
            let id = lookup(store, &name)?;
            store.reset();
            store.save(id)?;
            println!("Reset {}", name);
        }
        Command::InitConfig => anyhow::bail!("init-config does not operate on profiles"),
    }

    Ok(())
}

fn lookup(store: &ConfigStore, name: &str) -> Result<usize> {
    store
        .find(name)
        .with_context(|| format!("No profile named {}", name))
}
