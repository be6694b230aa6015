use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spaceman::{Shell, SpacemanConfig, WordDatabase};

/// Play Spaceman: guess the word before the saucer lands.
#[derive(Parser, Debug)]
#[command(name = "spaceman", about = "Play Spaceman in the terminal", version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "spaceman.toml")]
    config: PathBuf,

    /// Seed for word selection (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Start right away with this word instead of waiting for NEWGAME
    #[arg(long)]
    word: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = SpacemanConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let words = WordDatabase::from_config(&config).context("building word catalog")?;
    info!(seed = words.seed(), catalog = words.words().len(), "starting shell");

    let mut shell = Shell::new(words);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Some(word) = cli.word {
        shell
            .handle_line(&format!("NEWGAME {word}"), &mut stdout)
            .context("writing to stdout")?;
    }

    shell.run(stdin.lock(), stdout).context("running shell")?;
    Ok(())
}
