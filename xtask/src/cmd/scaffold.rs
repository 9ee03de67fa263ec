use std::{env, fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use sisc_preflight::checklist::SISC_SESAU;

const SAMPLE_PACKAGE_JSON: &str = r#"{
  "name": "sisc-sesau",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "prisma generate && next build"
  },
  "dependencies": {
    "next": "14.2.3",
    "prisma": "^5.10.0",
    "@prisma/client": "^5.10.0"
  }
}
"#;

const SAMPLE_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "strict": true,
    "paths": {
      "@/*": ["./*"]
    }
  }
}
"#;

/// Fill `dir` with a minimal tree that passes every checklist entry.
pub fn run(dir: Option<PathBuf>) -> Result<()> {
    let target = match dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };
    if target.join("package.json").exists() {
        bail!(
            "{} already holds a package.json; refusing to overwrite",
            target.display()
        );
    }

    for folder in SISC_SESAU.folders {
        fs::create_dir_all(target.join(folder))
            .with_context(|| format!("failed to create folder {folder}"))?;
    }
    for file in SISC_SESAU.files {
        let path = target.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create parents of {file}"))?;
        }
        fs::write(&path, sample_content(file)).with_context(|| format!("failed to write {file}"))?;
    }

    println!(
        "Scaffolded {} files and {} folders under {}",
        SISC_SESAU.files.len(),
        SISC_SESAU.folders.len(),
        target.display()
    );
    Ok(())
}

fn sample_content(path: &str) -> &'static str {
    match path {
        "package.json" => SAMPLE_PACKAGE_JSON,
        "tsconfig.json" => SAMPLE_TSCONFIG,
        path if path.ends_with(".json") => "{}\n",
        path if path.ends_with(".prisma") => "// placeholder schema\n",
        _ => "export {}\n",
    }
}
