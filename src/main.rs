//! jxv - JSON/XML tree viewer entry point.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Interactive terminal viewer for hierarchical JSON and XML data.
#[derive(Parser, Debug)]
#[command(name = "jxv")]
#[command(version)]
#[command(about = "TUI for exploring hierarchical JSON/XML documents")]
pub struct Args {
    /// Path to the document (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Maximum XML nesting depth accepted by the parser
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Outline pane width as a percentage of the terminal (10-90)
    #[arg(long, value_parser = clap::value_parser!(u16).range(10..=90))]
    pub tree_width: Option<u16>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Precedence chain: defaults -> config file -> env vars -> CLI args
    let config = {
        let config_file = jxv::config::load_config_file(args.config.clone())?;
        let merged = jxv::config::merge_config(config_file);
        let with_env = jxv::config::apply_env_overrides(merged);
        jxv::config::apply_cli_overrides(with_env, args.max_depth, args.tree_width)
    };

    jxv::logging::init(&config.log_file_path)?;
    info!(config = ?config, "starting jxv");

    let source = jxv::source::InputSource::detect(args.file)?;
    let mut app = jxv::view::TuiApp::new(source, config)?;
    app.run()?;

    info!("jxv exited cleanly");
    Ok(())
}
