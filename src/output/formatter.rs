//! Output formatting

use crate::error::Result;
use crate::greeter::Greeting;
use crate::output::human::format_human;
use crate::output::json::format_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Render a greeting, newline-terminated.
pub fn format_output(greeting: &Greeting, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(greeting)),
        OutputFormat::Json => format_json(greeting),
    }
}
