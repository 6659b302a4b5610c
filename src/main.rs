use std::io;
use std::path::Path;

use owo_colors::OwoColorize;
use scrapi::{Config, input::collect_request, output::OUTPUT_FILE, pipeline};
use tracing_subscriber::EnvFilter;

const BANNER: &str = r"
 ___________________________________________________________
|                                                           |
|     /$$$$$$                                         /$$   |
|    /$$__  $$                                       |__/   |
|   | $$  \__/  /$$$$$$$  /$$$$$$  /$$$$$$   /$$$$$$  /$$   |
|   |  $$$$$$  /$$_____/ /$$__  $$|____  $$ /$$__  $$| $$   |
|    \____  $$| $$      | $$  \__/ /$$$$$$$| $$  \ $$| $$   |
|    /$$  \ $$| $$      | $$      /$$__  $$| $$  | $$| $$   |
|   |  $$$$$$/|  $$$$$$$| $$     |  $$$$$$$| $$$$$$$/| $$   |
|    \______/  \_______/|__/      \_______/| $$____/ |__/   |
|                                          | $$             |
|                                          | $$             |
|                                          |__/             |
|                                                           |
|__________[AI powered general purpose web scraper]_________|
";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("{}", BANNER.cyan());
    println!();

    // Configuration problems are fatal before any network activity
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return;
        }
    };

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();
    let mut request = match collect_request(&mut reader, &mut stdout) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return;
        }
    };
    drop(reader);

    match pipeline::run(&config, &mut request, Path::new(OUTPUT_FILE)).await {
        Ok(()) => println!("{}", "Done!".green()),
        Err(e) => {
            tracing::warn!(url = %request.url, error = ?e, "scrape failed");
            eprintln!("{} {}", "Error:".red(), e);
        }
    }
}
