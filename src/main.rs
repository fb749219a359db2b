use anyhow::Result;
use recase::cli::{Cli, Commands};
use recase::config::Config;
use recase::models::CaseStyle;
use recase::pipeline::Pipeline;
use std::io;
use std::path::Path;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Convert {
            style,
            config,
            json,
            verbose,
            inputs,
        } => {
            init_tracing(verbose);
            run_convert(style, config.as_deref(), json, verbose, &inputs)?;
        }
        Commands::Init { output, force } => {
            init_tracing(false);
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// Install the stderr subscriber; RUST_LOG takes precedence over --verbose
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the convert command
fn run_convert(
    style: Option<CaseStyle>,
    config_path: Option<&Path>,
    json: bool,
    verbose: bool,
    inputs: &[String],
) -> Result<()> {
    let mut config = Config::resolve(config_path)?;
    config.apply_cli(style, json);

    debug!(?config, "resolved configuration");

    let pipeline = Pipeline::new(verbose);
    let stdout = io::stdout();

    if inputs.is_empty() {
        let stdin = io::stdin();
        pipeline.run(&config, stdin.lock(), stdout.lock())?;
    } else {
        pipeline.run_inputs(&config, inputs, stdout.lock())?;
    }

    Ok(())
}

/// Run the init command
fn run_init(output_path: &Path, force: bool) -> Result<()> {
    Config::init_file(output_path, force)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - convert.style: kebab, camel, dot or snake");
    println!("  - convert.input: text or json");
    println!("  - styles.<style>: separators and splitting rules for one style");

    Ok(())
}
