//! The greeting report and the operations that emit it

use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::clock::{format_timestamp, Clock, SystemClock};
use crate::error::Result;
use crate::output::{format_output, OutputFormat};
use crate::runtime::{normalize_version, runtime_version};

/// First line of every report.
pub const GREETING_LINE: &str = "Hello, world.";

/// Prefix of the timestamp line.
pub const TIME_LABEL: &str = "Current Time: ";

/// Prefix of the version line. Scripts parse this text, so it stays as is.
pub const VERSION_LABEL: &str = "Ruby Version ";

/// One rendered greeting: the instant it was taken and the runtime identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    timestamp: DateTime<FixedOffset>,
    runtime_version: String,
}

impl Greeting {
    /// A blank version is reported as `unknown`.
    pub fn new(timestamp: DateTime<FixedOffset>, runtime_version: impl Into<String>) -> Self {
        Self {
            timestamp,
            runtime_version: normalize_version(runtime_version),
        }
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }

    /// The three output lines, without terminators.
    pub fn lines(&self) -> [String; 3] {
        [
            GREETING_LINE.to_string(),
            format!("{}{}", TIME_LABEL, format_timestamp(&self.timestamp)),
            format!("{}{}", VERSION_LABEL, self.runtime_version),
        ]
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Produces greetings from a clock and a fixed runtime identity.
#[derive(Debug, Clone)]
pub struct Greeter<C = SystemClock> {
    clock: C,
    runtime_version: String,
}

impl Greeter<SystemClock> {
    /// Greeter backed by the wall clock and the embedded toolchain version.
    pub fn system() -> Self {
        Self::new(SystemClock, runtime_version())
    }
}

impl Default for Greeter<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock> Greeter<C> {
    pub fn new(clock: C, runtime_version: impl Into<String>) -> Self {
        Self {
            clock,
            runtime_version: normalize_version(runtime_version),
        }
    }

    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }

    /// Take a fresh reading of the clock.
    pub fn greeting(&self) -> Greeting {
        Greeting::new(self.clock.now(), self.runtime_version.clone())
    }

    /// Render one greeting and write it in a single call, then flush.
    pub fn write<W: Write + ?Sized>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        let greeting = self.greeting();
        debug!(
            timestamp = %format_timestamp(greeting.timestamp()),
            runtime_version = greeting.runtime_version(),
            ?format,
            "writing greeting"
        );

        let text = format_output(&greeting, &format)?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Print the greeting to standard output.
///
/// Nothing in this crate calls it implicitly; the binary's `main` does.
pub fn greet() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    greet_to(&mut handle, SystemClock, runtime_version())
}

/// Write the greeting to `out`, reading the time from `clock`.
pub fn greet_to<W, C>(out: &mut W, clock: C, runtime_version: &str) -> Result<()>
where
    W: Write + ?Sized,
    C: Clock,
{
    Greeter::new(clock, runtime_version).write(out, OutputFormat::Human)
}
