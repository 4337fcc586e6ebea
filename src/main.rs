//! Greeter CLI - print the greeting report once and exit

use clap::Parser;
use greeter::cli::Args;
use greeter::{Greeter, OutputFormat};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> greeter::Result<()> {
    greeter::logging::init(args.verbose);
    tracing::debug!(runtime_version = greeter::runtime_version(), "starting");

    match args.output_format() {
        OutputFormat::Human => greeter::greet(),
        format => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            Greeter::system().write(&mut handle, format)
        }
    }
}
