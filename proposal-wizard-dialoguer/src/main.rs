use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use proposal_export::{ExportDispatcher, LinkOpener, SystemOpener};
use proposal_wizard::{QueryParams, Registry};
use proposal_wizard_dialoguer::{
    App, AssistantConfig, DialoguerBackend, PrintOpener, run_assistant,
};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "proposal-assistant")]
#[command(about = "Collect a project proposal step by step and export it as PDF or email", long_about = None)]
#[command(version)]
struct Cli {
    /// Page reference to resume from, e.g. '?page=3'
    #[arg(long, value_name = "LINK")]
    resume: Option<String>,

    /// Settings file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colours
    #[arg(long)]
    plain: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AssistantConfig::load(cli.config.as_deref()).context("Invalid settings")?;
    config.validate()?;
    debug!(?config, "loaded settings");

    let registry = Registry::builtin().inspect_err(|err| error!(%err, "field registry is invalid"))?;

    let backend = if cli.plain || !config.colorful {
        DialoguerBackend::plain()
    } else {
        DialoguerBackend::new()
    };
    let link = cli
        .resume
        .as_deref()
        .map(QueryParams::parse)
        .unwrap_or_default();

    let mut system = SystemOpener;
    let mut print = PrintOpener;
    let opener: &mut dyn LinkOpener = if config.open_links {
        &mut system
    } else {
        &mut print
    };
    let exporter =
        ExportDispatcher::new(&registry, opener).with_compose_url(config.compose_url.clone());

    let app = App::new(&registry, link, backend, exporter).with_output_dir(&config.output_dir);
    let session = run_assistant(app, &config.logo_path)?;
    debug!(fields = session.values().len(), "session ended");
    Ok(())
}
