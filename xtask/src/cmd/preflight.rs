use std::process::{Command, Stdio};

use anyhow::Result;

use crate::repo;

const STEPS: &[(&str, &[&str])] = &[
    ("cargo fetch", &["fetch"]),
    ("cargo check --workspace", &["check", "--workspace"]),
    ("cargo test --workspace", &["test", "--workspace"]),
    ("cargo fmt -- --check", &["fmt", "--", "--check"]),
    (
        "cargo clippy --workspace -- -D warnings",
        &["clippy", "--workspace", "--", "-D", "warnings"],
    ),
    ("cargo build --release", &["build", "--release"]),
];

pub fn run() -> Result<()> {
    let root = repo::workspace_root()?;
    for (label, args) in STEPS {
        eprintln!("==> {label}");
        let status = Command::new("cargo")
            .args(*args)
            .current_dir(&root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            anyhow::bail!("{label} failed (status {status})");
        }
    }
    Ok(())
}
