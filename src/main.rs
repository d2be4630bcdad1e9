use clap::Parser;
use screen_descriptor::cli::commands::{cmd_check, cmd_inspect, cmd_navigator};
use screen_descriptor::cli::config::{Cli, Commands, load_config, log_level, resolve_settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over the -v count
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());

    // Resolve base paths: CLI > config > defaults
    let settings = resolve_settings(cli.api_base.as_deref(), cli.ui_base.as_deref(), &config);

    match cli.command {
        Commands::Inspect {
            screen,
            name,
            mode,
            format,
        } => {
            let output = cmd_inspect(&screen, name.as_deref(), mode, format, &settings)?;
            print!("{}", output);
        }
        Commands::Navigator { screens, format } => {
            let output = cmd_navigator(&screens, format, &settings)?;
            print!("{}", output);
        }
        Commands::Check { screens } => {
            let (output, clean) = cmd_check(&screens, &settings)?;
            print!("{}", output);
            if !clean {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
