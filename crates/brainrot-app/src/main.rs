//! Brainrot Manager command line
//!
//! ```text
//! brainrot                                  # root menu
//! brainrot 'action=mes_bases'               # list bases
//! brainrot '?action=add_brainrot&base=Yard' # interactive add
//! brainrot 'action=add_brainrot&base=Yard&brainrot=Fred&mutation=Gold&traits=Fast'
//! ```

use anyhow::Context;
use brainrot_app::{render, App, Config, OutputFormat, TerminalDialog};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "brainrot")]
#[command(about = "Browse the brainrot catalogue and manage your bases")]
#[command(version)]
struct Cli {
    /// RON configuration file; defaults apply when it does not exist
    #[arg(short, long, default_value = "brainrot.ron")]
    config: PathBuf,

    /// Directory holding the JSON documents
    #[arg(long, env = "BRAINROT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Directory holding the images
    #[arg(long, env = "BRAINROT_IMAGES_DIR")]
    images_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Navigation query, e.g. `action=show_base_brainrots&base=Yard`
    #[arg(default_value = "")]
    query: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("brainrot=info".parse()?))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(dir) = cli.images_dir {
        config.images_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    let mut app = App::new(config, TerminalDialog::stdio());
    let response = app.handle_query(&cli.query);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &response, cli.format).context("writing output")?;
    Ok(())
}
