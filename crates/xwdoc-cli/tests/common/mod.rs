#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a configured `xwdoc` command suitable for integration tests.
pub fn xwdoc_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("xwdoc"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("XWDOC_CONFIG");
    cmd.env_remove("XWDOC_OUTPUT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A small help source tree: two listed pages, one unlisted page, assets.
#[allow(dead_code)]
pub fn help_sources() -> TempDir {
    let tmp = tempfile::tempdir().expect("failed to create source dir");
    let root = tmp.path();
    write(root, "index.md", "# Overview\n\nSee [solving](solving.html#entering_letters).\n\n## Getting Started\n");
    write(root, "solving.md", "# Solving\n\n## Entering letters\n\n### Rebus\n");
    write(root, "notes.md", "# Notes\n");
    fs::create_dir_all(root.join("images")).unwrap();
    write(root, "images/grid.png", "png");
    write(root, "styles.css", "body {}\n");
    write(root, "functions.js", "function updateHash() {}\n");
    write(
        root,
        "xwdoc.toml",
        "[contents]\norder = [\"index\", \"solving\"]\nno_ids = []\n",
    );
    tmp
}

#[allow(dead_code)]
pub fn write(root: &Path, name: &str, contents: &str) {
    fs::write(root.join(name), contents).unwrap();
}
