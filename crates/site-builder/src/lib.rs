//! Acta Diurna Site Builder
//!
//! Writes the placeholder deployment bundle into `<root>/build`:
//! - index.html (redirect to `/`)
//! - manifest.json / asset-manifest.json
//! - static/css/main.css, static/js/main.js
//!
//! Any filesystem failure aborts the build.

mod assets;
mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

pub use error::{BuildError, BuildResult};

/// Output directory name, relative to the build root
pub const BUILD_DIR: &str = "build";

/// Files every bundle must contain, relative to the output directory
pub const REQUIRED_FILES: [&str; 5] = [
    "index.html",
    "asset-manifest.json",
    "manifest.json",
    "static/css/main.css",
    "static/js/main.js",
];

const STATIC_DIRS: [&str; 3] = ["static/js", "static/css", "static/media"];

/// A verified output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltFile {
    pub path: String,
    pub size: u64,
}

#[derive(Debug)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub files: Vec<BuiltFile>,
}

/// Run the full build under `root`
pub fn build_site(root: &Path) -> BuildResult<BuildReport> {
    let out_dir = root.join(BUILD_DIR);
    info!(out_dir = %out_dir.display(), "Starting Acta Diurna build");

    clean(&out_dir)?;
    create_layout(&out_dir)?;

    write_file(&out_dir, "index.html", assets::INDEX_HTML)?;
    write_file(&out_dir, "static/css/main.css", assets::MAIN_CSS)?;
    write_file(&out_dir, "static/js/main.js", assets::MAIN_JS)?;
    write_file(&out_dir, "manifest.json", &to_pretty_json("manifest.json", &assets::manifest())?)?;
    write_file(
        &out_dir,
        "asset-manifest.json",
        &to_pretty_json("asset-manifest.json", &assets::asset_manifest())?,
    )?;

    let files = verify(&out_dir)?;
    log_tree(&out_dir, 0);

    info!(out_dir = %out_dir.display(), files = files.len(), "Build completed");
    Ok(BuildReport { out_dir, files })
}

/// Remove a previous build, whether it is a directory or a stray file
fn clean(out_dir: &Path) -> BuildResult<()> {
    match fs::symlink_metadata(out_dir) {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(out_dir).map_err(BuildError::io("remove", out_dir))?;
            info!("Old build directory removed");
        }
        Ok(_) => {
            fs::remove_file(out_dir).map_err(BuildError::io("remove", out_dir))?;
            info!("Stale build file removed");
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(BuildError::Io {
                action: "inspect",
                path: out_dir.to_path_buf(),
                source: e,
            })
        }
    }
    Ok(())
}

fn create_layout(out_dir: &Path) -> BuildResult<()> {
    for dir in STATIC_DIRS {
        let path = out_dir.join(dir);
        fs::create_dir_all(&path).map_err(BuildError::io("create directory", &path))?;
    }
    info!("Directory structure created");
    Ok(())
}

fn write_file(out_dir: &Path, rel: &str, contents: &str) -> BuildResult<()> {
    let path = out_dir.join(rel);
    fs::write(&path, contents).map_err(BuildError::io("write", &path))?;
    info!(file = rel, "Created");
    Ok(())
}

fn to_pretty_json(name: &'static str, value: &serde_json::Value) -> BuildResult<String> {
    serde_json::to_string_pretty(value).map_err(|source| BuildError::Serialize { name, source })
}

/// Check that every required file exists and is non-empty
fn verify(out_dir: &Path) -> BuildResult<Vec<BuiltFile>> {
    let mut files = Vec::with_capacity(REQUIRED_FILES.len());
    let mut missing = Vec::new();

    for rel in REQUIRED_FILES {
        match fs::metadata(out_dir.join(rel)) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => {
                info!(file = rel, bytes = meta.len(), "Verified");
                files.push(BuiltFile {
                    path: rel.to_string(),
                    size: meta.len(),
                });
            }
            _ => {
                error!(file = rel, "Required file missing or empty");
                missing.push(rel.to_string());
            }
        }
    }

    if missing.is_empty() {
        Ok(files)
    } else {
        Err(BuildError::Verification(missing))
    }
}

fn log_tree(dir: &Path, depth: usize) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), "Cannot list directory: {}", e);
            return;
        }
    };

    let mut entries: Vec<_> = entries.filter_map(Result::ok).collect();
    entries.sort_by_key(|e| e.file_name());

    let indent = "  ".repeat(depth);
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        match entry.metadata() {
            Ok(meta) if meta.is_dir() => {
                info!("{}{}/", indent, name);
                log_tree(&entry.path(), depth + 1);
            }
            Ok(meta) => info!("{}{} ({} bytes)", indent, name, meta.len()),
            Err(_) => info!("{}{}", indent, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_writes_required_files() {
        let root = tempfile::tempdir().unwrap();
        let report = build_site(root.path()).expect("build failed");

        assert_eq!(report.out_dir, root.path().join(BUILD_DIR));
        assert_eq!(report.files.len(), REQUIRED_FILES.len());
        for file in &report.files {
            assert!(file.size > 0, "{} is empty", file.path);
        }
        assert!(root.path().join("build/static/media").is_dir());
    }

    #[test]
    fn test_manifests_are_valid_json() {
        let root = tempfile::tempdir().unwrap();
        build_site(root.path()).unwrap();

        let raw = fs::read_to_string(root.path().join("build/asset-manifest.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["files"]["main.js"], "/static/js/main.js");
        assert_eq!(parsed["entrypoints"].as_array().map(Vec::len), Some(2));

        let raw = fs::read_to_string(root.path().join("build/manifest.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["short_name"], "Acta Diurna");
    }

    #[test]
    fn test_rebuild_removes_stale_output() {
        let root = tempfile::tempdir().unwrap();
        build_site(root.path()).unwrap();
        let stale = root.path().join("build/old-bundle.js");
        fs::write(&stale, "stale").unwrap();

        build_site(root.path()).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_replaces_stray_build_file() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(BUILD_DIR), "not a directory").unwrap();

        let report = build_site(root.path()).unwrap();
        assert!(report.out_dir.is_dir());
    }

    #[test]
    fn test_root_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("plain-file");
        fs::write(&root, "x").unwrap();

        let err = build_site(&root).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }), "unexpected error: {}", err);
    }
}
