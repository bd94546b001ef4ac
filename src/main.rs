use clap::Parser;
use linearcs::config;
use linearcs::gui::app::{AppInit, AppModel};
use linearcs::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the per-user one
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Open in a regular window instead of fullscreen
    #[arg(short = 'w', long)]
    windowed: bool,

    /// Write the default config file if it does not exist yet, print its path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = config::resolve_path(cli.config)?;

    if cli.init_config {
        let path = config::write_default_config(&config_path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx, config_path.clone());

    // clap already consumed argv, keep gtk from parsing it again
    let app = RelmApp::new("org.linearcs.LineArcs").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config,
        config_path,
        windowed: cli.windowed,
        events: rx,
    });

    Ok(())
}
