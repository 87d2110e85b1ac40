mod common;

use assert_cmd::Command;
use common::synthetic_image::RailScene;
use tempfile::TempDir;

fn rail_finder() -> Command {
    Command::cargo_bin("rail_finder").unwrap()
}

#[test]
fn missing_input_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    rail_finder()
        .arg(dir.path().join("absent.png"))
        .assert()
        .failure();
}

#[test]
fn blank_image_exits_nonzero_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("blank.png");
    image::RgbImage::new(64, 64).save(&input).unwrap();

    rail_finder().arg(&input).assert().failure();
    assert!(!dir.path().join("blank_wLine.png").exists());
}

#[test]
fn usage_error_without_arguments() {
    rail_finder().assert().failure();
}

#[test]
fn single_dash_output_flag_is_honoured_on_failure_path() {
    // The default thresholds are tuned for full-size photos, so a small
    // synthetic scene fails detection; the flags must still parse.
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("small.png");
    RailScene::new(120, 90, -30.0, &[-20.0, 20.0])
        .rgb_image()
        .save(&input)
        .unwrap();
    let output = dir.path().join("custom.png");

    let assert = rail_finder()
        .arg(&input)
        .arg("-output_file")
        .arg(&output)
        .arg("-line_width")
        .arg("3")
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("line detector"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn full_size_scene_succeeds_with_default_parameters() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("track.png");
    // Large enough for each rail to clear the default 10 000 px object filter.
    let mut scene = RailScene::new(1000, 1400, -10.0, &[-150.0, 150.0]);
    scene.half_width = 4.0;
    scene.rgb_image().save(&input).unwrap();

    rail_finder()
        .arg(&input)
        .arg("-line_width")
        .arg("1")
        .arg("-timings")
        .assert()
        .success();
    assert!(dir.path().join("track_wLine.png").is_file());
}
