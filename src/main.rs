use clap::Parser;
use partner_builder::cli::{Cli, Commands, build_command, components_command};
use partner_builder::config::constants;
use partner_builder::logging;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(e) = constants::init_constants() {
        eprintln!("Cannot resolve executable path: {e}");
    }

    let log_file = logging::open_log_file();
    let (file_layer, log_path) = match log_file {
        Ok((file, path)) => (
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_level(true)
                    .with_ansi(false)
                    .with_filter(EnvFilter::new("debug")),
            ),
            Some(path),
        ),
        Err(e) => {
            eprintln!("Log file unavailable, logging to stderr only: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .with(file_layer)
        .init();

    if let Some(path) = log_path {
        debug!("Log file: {}", path.display());
    }

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> partner_core::error::Result<()> {
    let args = Cli::parse();
    match args.cmd {
        Commands::Build {
            data,
            components,
            format,
            output_path,
        } => {
            build_command(data, components, format, output_path).await?;
        }
        Commands::Components => {
            components_command()?;
        }
    }
    Ok(())
}
