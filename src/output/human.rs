//! Human-readable output formatting

use crate::greeter::Greeting;

/// The three-line report the tutorial documents.
pub fn format_human(greeting: &Greeting) -> String {
    greeting.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_format_human() {
        let ts = DateTime::parse_from_rfc3339("2022-09-10T23:48:26+00:00").unwrap();
        let output = format_human(&Greeting::new(ts, "3.2.0"));
        assert_eq!(
            output,
            "Hello, world.\nCurrent Time: 2022-09-10T23:48:26+00:00\nRuby Version 3.2.0\n"
        );
    }
}
