use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchpad").expect("binary exists");
    // Keep the test away from any real user configuration or saved sketch.
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("XDG_DATA_HOME", config_home.path());
    cmd
}

fn write_fixture_sketch(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("sketch.json");
    let payload = r##"{
      "version": 1,
      "last_modified": "2026-01-01T00:00:00Z",
      "frame": {
        "marks": [
          {
            "Stroke": {
              "points": [[10, 10], [200, 200], [200, 40]],
              "thick": 4.0,
              "color": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 1.0 }
            }
          },
          {
            "Sticker": { "glyph": "★", "x": 128, "y": 128, "rotation": 0.0 }
          }
        ]
      }
    }"##;
    std::fs::write(&path, payload).unwrap();
    path
}

#[test]
fn help_prints_about_text() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand sketchpad with stroke history, stickers, and PNG export",
        ));
}

#[test]
fn no_flags_prints_usage() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn export_without_saved_sketch_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.json");
    sketchpad_cmd(&temp)
        .args(["--export", "--sketch"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no saved sketch found"));
}

#[test]
fn export_writes_a_png_to_the_output_path() {
    let temp = TempDir::new().unwrap();
    let sketch = write_fixture_sketch(&temp);
    let output = temp.path().join("out").join("sketch.png");

    sketchpad_cmd(&temp)
        .args(["--export", "--scale", "4"])
        .arg("--sketch")
        .arg(&sketch)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported sketch to"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn info_summarizes_the_sketch() {
    let temp = TempDir::new().unwrap();
    let sketch = write_fixture_sketch(&temp);

    sketchpad_cmd(&temp)
        .arg("--info")
        .arg("--sketch")
        .arg(&sketch)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2 mark(s): 1 stroke(s), 1 sticker(s)",
        ));
}
