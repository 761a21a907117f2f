//! Exports `BAGEL_LINT_VERSION` for the binary.
use std::process::Command;

fn main() {
    // Release pipelines set BAGEL_LINT_VERSION; local builds use git describe.
    if let Ok(version) = std::env::var("BAGEL_LINT_VERSION") {
        println!("cargo:rustc-env=BAGEL_LINT_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=BAGEL_LINT_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=BAGEL_LINT_VERSION");
}
