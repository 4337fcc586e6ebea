//! CLI argument parsing

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(author, version, about = "Print a greeting, the current time and the toolchain version", long_about = None)]
pub struct Args {
    /// Output format as JSON
    #[arg(long)]
    pub json: bool,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}
