//! JSON output formatting

use serde::Serialize;

use crate::clock::format_timestamp;
use crate::error::Result;
use crate::greeter::{Greeting, GREETING_LINE};

#[derive(Debug, Serialize)]
struct GreetingRecord<'a> {
    greeting: &'a str,
    current_time: String,
    runtime_version: &'a str,
}

pub fn format_json(greeting: &Greeting) -> Result<String> {
    let record = GreetingRecord {
        greeting: GREETING_LINE,
        current_time: format_timestamp(greeting.timestamp()),
        runtime_version: greeting.runtime_version(),
    };

    let mut output = serde_json::to_string_pretty(&record)?;
    output.push('\n');
    Ok(output)
}
