use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tick",
    about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a todo list in your terminal"),
    version
)]
struct Cli {
    /// Store the todo snapshot in a different directory
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tick::tui::run(cli.data_dir.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
