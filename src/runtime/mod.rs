//! Runtime identity: the toolchain version this binary was built with

mod banner;

pub use banner::parse_rustc_version;

const UNKNOWN: &str = "unknown";

/// Version of the `rustc` that compiled this crate, e.g. `1.75.0`.
///
/// Captured by the build script; never empty.
pub fn runtime_version() -> &'static str {
    match option_env!("GREETER_RUSTC_VERSION") {
        Some(version) if !version.is_empty() => version,
        _ => UNKNOWN,
    }
}

/// Trim a caller-supplied version string, substituting `unknown` when blank.
pub fn normalize_version(version: impl Into<String>) -> String {
    let version = version.into();
    let trimmed = version.trim();
    if trimmed.is_empty() {
        UNKNOWN.to_string()
    } else if trimmed.len() == version.len() {
        version
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_version_not_empty() {
        assert!(!runtime_version().is_empty());
    }

    #[test]
    fn test_runtime_version_is_stable() {
        assert_eq!(runtime_version(), runtime_version());
    }

    #[test]
    fn test_runtime_version_has_no_whitespace() {
        assert!(!runtime_version().contains(char::is_whitespace));
    }

    #[test]
    fn test_normalize_blank_version() {
        assert_eq!(normalize_version(""), "unknown");
        assert_eq!(normalize_version("  \t\n"), "unknown");
    }

    #[test]
    fn test_normalize_trims_version() {
        assert_eq!(normalize_version("1.75.0"), "1.75.0");
        assert_eq!(normalize_version(" 3.2.0\n"), "3.2.0");
    }
}
