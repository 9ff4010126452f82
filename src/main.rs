use clap::Parser;
use tracing::error;
use turfbook::cli::{self, Cli};
use turfbook::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    let config = match Config::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            cli::output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();

    if let Err(e) = cli::dispatch(args.command, &config) {
        error!(error = %e, "command failed");
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
