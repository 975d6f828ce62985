//! End-to-end runs of the site-builder binary

use std::fs;
use std::process::Command;

use site_builder::REQUIRED_FILES;

fn site_builder() -> Command {
    Command::new(env!("CARGO_BIN_EXE_site-builder"))
}

#[test]
fn test_build_in_writable_directory_exits_zero() {
    let root = tempfile::tempdir().unwrap();

    let output = site_builder()
        .arg("--root")
        .arg(root.path())
        .output()
        .expect("failed to run site-builder");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(output.status.code(), Some(0));

    for rel in REQUIRED_FILES {
        let meta = fs::metadata(root.path().join("build").join(rel)).unwrap();
        assert!(meta.len() > 0, "{} is empty", rel);
    }
}

#[test]
fn test_default_root_is_working_directory() {
    let root = tempfile::tempdir().unwrap();

    let status = site_builder()
        .current_dir(root.path())
        .status()
        .expect("failed to run site-builder");

    assert!(status.success());
    assert!(root.path().join("build/index.html").is_file());
}

#[test]
fn test_unwritable_root_exits_one_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("not-a-dir");
    fs::write(&root, "plain file").unwrap();

    let output = site_builder()
        .arg("--root")
        .arg(&root)
        .output()
        .expect("failed to run site-builder");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BUILD FAILED"), "stderr: {}", stderr);
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
}
