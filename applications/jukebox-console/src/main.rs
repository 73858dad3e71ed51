/// Jukebox - command-line front panel
use clap::{Parser, Subcommand};
use jukebox_console::{session, ConsoleConfig, ConsoleError};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jukebox")]
#[command(about = "Digital jukebox console", long_about = None, version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "JUKEBOX_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Seed the shuffle for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console (default)
    Repl,
    /// Run commands and exit; separate several with ';'
    Exec {
        #[arg(required = true, num_args = 1..)]
        commands: Vec<String>,
    },
    /// Scripted walk through the front panel
    Demo,
    /// Print the effective configuration as TOML
    DumpConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<ConsoleError>().map_or(1, ConsoleError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_file = ConsoleConfig::resolve_path(cli.config.as_deref());
    let mut config = ConsoleConfig::load(config_file.as_deref())?;
    if cli.seed.is_some() {
        config.player.shuffle_seed = cli.seed;
    }
    config.validate()?;

    init_tracing(&config.logging.level);
    match &config_file {
        Some(file) => tracing::debug!(path = %file.display(), "Loaded config file"),
        None => tracing::debug!("No config file, using built-in defaults"),
    }
    tracing::debug!(player = ?config.player, "Configuration loaded");

    let command = cli.command.unwrap_or(Commands::Repl);
    if let Commands::DumpConfig = command {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let mut jukebox = config.build_jukebox()?;
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Repl => session::run_repl(&mut jukebox, io::stdin().lock(), &mut stdout)?,
        Commands::Exec { commands } => {
            session::run_script(&mut jukebox, commands.as_slice(), &mut stdout)?
        }
        Commands::Demo => session::run_demo(&mut jukebox, &mut stdout)?,
        Commands::DumpConfig => {}
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the configured level
fn init_tracing(level: &str) {
    let default_filter = format!(
        "jukebox={level},jukebox_console={level},jukebox_playback={level},jukebox_core={level}"
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
