#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** agentkit **
//! Agent name sanitizing with semantic console output.

use std::path::PathBuf;

use agentkit_cli::{AGENTKIT_VERSION, CheckStatus, Console, Palette, render_all};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};

#[derive(Parser)]
#[command(name = "agentkit", version, about = "Sanitize agent names for use in repository names.")]
struct Cli {
    /// Disable colored output (also honored via a non-empty `NO_COLOR`).
    #[arg(long, global = true)]
    no_color: bool,
    /// TOML file with `[palette]` color overrides.
    #[arg(long, global = true, value_name = "FILE")]
    palette: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize one or more agent names.
    Sanitize(SanitizeArgs),
    /// Preview every semantic color of the active palette.
    Palette,
}

#[derive(Args)]
struct SanitizeArgs {
    /// Agent names to sanitize.
    #[arg(required = true, value_name = "NAME")]
    names: Vec<String>,
    /// Print one JSON result object per name instead of styled text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("agentkit v{AGENTKIT_VERSION} starting");

    let console = build_console(&cli).context("while setting up console output")?;

    match cli.command {
        Commands::Sanitize(args) => sanitize(&console, &args),
        Commands::Palette => {
            preview_palette(&console, cli.palette.is_some());
            Ok(())
        },
    }
}

fn build_console(cli: &Cli) -> Result<Console> {
    let mut console = Console::from_env();
    if cli.no_color {
        console = console.with_color(false);
    }
    if let Some(path) = &cli.palette {
        console = console.with_palette(Palette::load(path)?);
    }
    console.pin_colors();
    debug!("console color enabled: {}", console.use_color());
    Ok(console)
}

fn sanitize(console: &Console, args: &SanitizeArgs) -> Result<()> {
    let batch = render_all(console, args.names.as_slice(), args.json)?;
    for line in &batch.lines {
        println!("{line}");
    }

    if !batch.all_valid() {
        bail!("{} of {} agent name(s) rejected", batch.rejected, args.names.len());
    }
    Ok(())
}

fn preview_palette(console: &Console, from_file: bool) {
    console.header("agentkit palette");
    console.success("success: finished without problems");
    console.error("error: blocking failure");
    console.warn("warn: needs attention");
    console.info("info: neutral detail");
    console.action("agentkit sanitize \"My Agent\"");
    console.skip("skipped: inactive step");
    println!();
    console.header("Status");
    console.check("color", console.use_color(), None);
    console.check(
        "palette file",
        if from_file { CheckStatus::Ok } else { CheckStatus::Unknown },
        Some("loaded"),
    );
    console.check("sanitizer", CheckStatus::Ok, Some(AGENTKIT_VERSION));
}
