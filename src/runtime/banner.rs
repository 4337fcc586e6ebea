//! Parsing of the `rustc --version` banner.
//!
//! Compiled into both the library and the build script, so it must not
//! depend on anything outside std.

/// Extract the release number from a `rustc --version` banner.
///
/// `rustc 1.75.0 (82e1608df 2023-12-21)` yields `1.75.0` and
/// `rustc 1.78.0-nightly (abc 2024-02-01)` yields `1.78.0-nightly`.
pub fn parse_rustc_version(banner: &str) -> Option<&str> {
    let mut parts = banner.split_whitespace();
    if parts.next()? != "rustc" {
        return None;
    }

    let version = parts.next()?;
    if version.starts_with(|c: char| c.is_ascii_digit()) {
        Some(version)
    } else {
        None
    }
}
