//! Greeter - prints a greeting, the current time and the toolchain version
//!
//! Used to confirm which toolchain runs inside a development container.
//! Linking the library prints nothing; call [`greet`] explicitly.
//!
//! # Example
//!
//! ```
//! use chrono::DateTime;
//! use greeter::{greet_to, FixedClock};
//!
//! let clock = FixedClock(DateTime::parse_from_rfc3339("2022-09-10T23:48:26+00:00").unwrap());
//! let mut out = Vec::new();
//! greet_to(&mut out, clock, "3.2.0").unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Hello, world.\nCurrent Time: 2022-09-10T23:48:26+00:00\nRuby Version 3.2.0\n"
//! );
//! ```

pub mod cli;
pub mod clock;
pub mod error;
pub mod greeter;
pub mod logging;
pub mod output;
pub mod runtime;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use error::{GreeterError, Result};
pub use greeter::{greet, greet_to, Greeter, Greeting};
pub use output::{format_output, OutputFormat};
pub use runtime::runtime_version;
