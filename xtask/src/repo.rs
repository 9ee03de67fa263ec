use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Locate the workspace root by walking up from the current directory.
pub fn workspace_root() -> Result<PathBuf> {
    let start = env::current_dir()?;
    match start.ancestors().find(|dir| is_workspace_root(dir)) {
        Some(dir) => Ok(dir.to_path_buf()),
        None => bail!("no Cargo.toml or .git found above {}", start.display()),
    }
}

fn is_workspace_root(dir: &Path) -> bool {
    dir.join("Cargo.toml").is_file() || dir.join(".git").is_dir()
}
