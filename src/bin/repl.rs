use clap::Parser;
use rust_dice_initiative::{Session, SessionConfig};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reads dice and initiative commands from stdin, one per line.
#[derive(Parser)]
#[command(name = "repl", version)]
struct Cli {
    /// Seed the dice for repeatable rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Most dice a single command may roll
    #[arg(long, default_value_t = 1000, conflicts_with = "unbounded")]
    max_rolls: usize,

    /// Allow any number of dice per command
    #[arg(long)]
    unbounded: bool,

    /// Prefix that marks a line as a command
    #[arg(long, default_value = "!")]
    prefix: String,
}

impl Cli {
    fn config(&self) -> SessionConfig {
        let mut config = SessionConfig::default()
            .with_max_rolls(self.max_rolls)
            .with_prefix(self.prefix.as_str());
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.unbounded {
            config = config.unbounded();
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_dice_initiative=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut session = Session::new(cli.config());

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle(&line) {
            Some(reply) => println!("{}", reply),
            None if line.trim().is_empty() => {}
            None => eprintln!("commands start with {:?}", session.config().prefix),
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
