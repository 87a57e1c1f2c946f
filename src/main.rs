use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use dork::engine::{Output, OutputBlock};
use dork::{Config, Game};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn flush_output(out: Output) {
    for block in out.blocks {
        match block {
            OutputBlock::Text(line) | OutputBlock::Hint(line) | OutputBlock::Event(line) => {
                println!("{}", line);
            }
        }
    }
}

fn init_logging(config: &Config) {
    // Logs go to stderr; stdout is the game transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    let config_path: Option<PathBuf> = env::args().nth(1).map(PathBuf::from);

    let config = match &config_path {
        Some(path) => match dork::load_config_from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config file '{}': {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    init_logging(&config);

    let world = match dork::build_rooms() {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to build world: {e}");
            std::process::exit(1);
        }
    };
    info!(config = ?config_path, "starting");

    println!("Welcome to {}\n", config.title);

    let mut game = Game::new(world);
    flush_output(game.initialize());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!("{}", game.prompt());
        io::stdout().flush()?;

        // Decode lossily: bytes that are not UTF-8 become U+FFFD.
        let mut buf = Vec::new();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                println!();
                info!(moves = game.moves, "end of input");
                break;
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!(error = %e, "failed to read input");
                return Err(e);
            }
        }

        let line = String::from_utf8_lossy(&buf);
        flush_output(game.step(&line));
    }

    Ok(())
}
