use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCRIPT: &str = r#"
[[step]]
kind = "thick"

[[step]]
kind = "down"
x = 20.0
y = 20.0

[[step]]
kind = "move"
x = 120.0
y = 80.0

[[step]]
kind = "up"
x = 120.0
y = 80.0
"#;

fn dinodraw_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dinodraw").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

#[test]
fn dinodraw_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    dinodraw_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand sketching with markers and glyph stamps",
        ));
}

#[test]
fn script_replays_to_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("sketch.toml");
    let output = temp.path().join("out/sketch.png");
    std::fs::write(&script, SCRIPT).unwrap();

    dinodraw_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .args(["--scale", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sketch.png"));

    let png = std::fs::read(&output).unwrap();
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn export_uses_configured_directory() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("sketch.toml");
    let config = temp.path().join("config.toml");
    let save_dir = temp.path().join("drawings");
    std::fs::write(&script, SCRIPT).unwrap();
    std::fs::write(
        &config,
        format!(
            "[export]\nsave_directory = {:?}\nfilename_template = \"fixed\"\n",
            save_dir.display().to_string()
        ),
    )
    .unwrap();

    dinodraw_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(save_dir.join("fixed.png").exists());
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();
    dinodraw_cmd(&temp)
        .args(["--script", "/nonexistent/sketch.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}
