//! CLI entry point - the composition root.
//!
//! Logging, `.env` loading and argument parsing happen here; everything
//! else is routed to a handler with the bootstrapped `CliContext`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rofits_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Send logs to stderr so they never mix with grid or JSON output.
///
/// `RUST_LOG` wins; otherwise `-v` selects debug and the default is warn.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::from_cli(&cli);
    let ctx = match bootstrap(&config) {
        Ok(ctx) => ctx,
        Err(err) => exit_with(&err),
    };

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => handlers::shell::execute(&ctx).await?,
        Commands::Outfits { username, json } => {
            if let Err(err) = handlers::outfits::execute(&ctx, &username, json).await {
                exit_with(&err);
            }
        }
        Commands::Info => handlers::info::execute()?,
    }

    Ok(())
}

/// Report a classified failure and exit with its code.
fn exit_with(err: &CliError) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code())
}
