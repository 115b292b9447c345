use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

use commands::resolve::{handle_resolve, ResolveArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Extract Frame Shift Drive jump-range parameters from a journal loadout"
)]
struct Cli {
    #[command(flatten)]
    resolve: ResolveArgs,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    handle_resolve(&cli.resolve)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
