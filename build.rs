//! Build script for greeter.
//!
//! Embeds the version of the compiling `rustc` as GREETER_RUSTC_VERSION so
//! the binary can report which toolchain produced it.

use std::process::Command;

#[path = "src/runtime/banner.rs"]
mod banner;

fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .and_then(|banner| banner::parse_rustc_version(&banner).map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GREETER_RUSTC_VERSION={}", version);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/runtime/banner.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
