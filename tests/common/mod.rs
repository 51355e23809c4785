use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables that would leak into CLI runs
pub const CONFIG_ENV_VARS: [&str; 7] = [
    "FOSTER_PLEA_SHEET",
    "FOSTER_PLEA_SHEET_NAME",
    "FOSTER_PLEA_TEMPLATE",
    "FOSTER_PLEA_DRAFTS_DIR",
    "FOSTER_PLEA_FROM",
    "FOSTER_PLEA_JSON_LOGS",
    "RUST_LOG",
];

#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// The CLI binary with a clean environment and a config path that does not exist
#[allow(dead_code)]
pub fn cli(work_dir: &TempDir) -> Command {
    cli_with_config(work_dir, &work_dir.path().join("missing-config.yaml"))
}

/// The CLI binary with a clean environment and the given config file
#[allow(dead_code)]
pub fn cli_with_config(work_dir: &TempDir, config_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("foster-plea").expect("binary builds");
    for var in CONFIG_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("CLICOLOR_FORCE")
        .current_dir(work_dir.path())
        .arg("--config")
        .arg(config_path);
    cmd
}

/// Every `.eml` file in `dir`
#[allow(dead_code)]
pub fn drafts_in(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut drafts: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read drafts dir")
        .map(|e| e.expect("dir entry").path())
        .filter(|p| p.extension().map_or(false, |ext| ext == "eml"))
        .collect();
    drafts.sort();
    drafts
}
