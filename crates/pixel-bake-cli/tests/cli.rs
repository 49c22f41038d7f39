use std::fs;
use std::path::Path;

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use tempfile::tempdir;

fn pixel_bake() -> Command {
    Command::cargo_bin("pixel-bake").expect("binary under test")
}

fn write_logo_png(dir: &Path) {
    let mut img = RgbImage::new(1, 2);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(0, 1, Rgb([0, 0, 255]));
    img.save(dir.join("logo.png")).expect("save logo.png");
}

#[test]
fn bakes_a_folder_of_images() {
    let input = tempdir().expect("input dir");
    let output = tempdir().expect("output dir");
    write_logo_png(input.path());

    pixel_bake()
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("baked 1 header(s)"));

    let header = fs::read_to_string(output.path().join("logo.h")).expect("read logo.h");
    assert!(header.contains("constexpr int LOGO_HEIGHT = 2;"));
    assert!(header.contains("constexpr int LOGO_WIDTH = 1;"));
    assert!(header.contains("1.0f,0.0f"));
}

#[test]
fn accepts_long_flags() {
    let input = tempdir().expect("input dir");
    let output = tempdir().expect("output dir");
    write_logo_png(input.path());

    pixel_bake()
        .arg("--input-folder")
        .arg(input.path())
        .arg("--output-folder")
        .arg(output.path())
        .assert()
        .success();

    assert!(output.path().join("logo.h").is_file());
}

#[test]
fn creates_output_folder_for_empty_input() {
    let input = tempdir().expect("input dir");
    let scratch = tempdir().expect("scratch dir");
    let output = scratch.path().join("headers");

    pixel_bake()
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("baked 0 header(s)"));

    assert!(output.is_dir());
    assert_eq!(fs::read_dir(&output).expect("read output").count(), 0);
}

#[test]
fn fails_without_arguments() {
    pixel_bake()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input-folder"));
}

#[test]
fn reports_unreadable_input_folder() {
    let scratch = tempdir().expect("scratch dir");
    let missing = scratch.path().join("does-not-exist");
    let output = scratch.path().join("headers");

    pixel_bake()
        .arg("-i")
        .arg(&missing)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input folder"));
}

#[test]
fn aborts_on_non_image_entry() {
    let input = tempdir().expect("input dir");
    let output = tempdir().expect("output dir");
    fs::write(input.path().join("junk.txt"), "not an image").expect("write junk");

    pixel_bake()
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode image"));

    assert_eq!(fs::read_dir(output.path()).expect("read output").count(), 0);
}
