//! Command line tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FRONT: &str = "f1,f2\n0.1,3.9\n1.0,2.0\n3.9,0.1\n";

fn frontplot() -> Command {
    Command::cargo_bin("frontplot").unwrap()
}

#[test]
fn renders_next_to_input_with_preset() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pareto_run1.csv");
    fs::write(&input, FRONT).unwrap();

    frontplot()
        .args(["--preset", "sch", "--dpi", "50"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("NSGA-II (3 solutions)"));

    assert!(dir.path().join("pareto_run1.png").exists());
}

#[test]
fn renders_every_input() {
    let dir = TempDir::new().unwrap();
    for name in ["pareto_run1.csv", "pareto_run2.csv"] {
        fs::write(dir.path().join(name), FRONT).unwrap();
    }

    frontplot()
        .args(["--dpi", "50"])
        .arg(dir.path().join("pareto_run1.csv"))
        .arg(dir.path().join("pareto_run2.csv"))
        .assert()
        .success();

    assert!(dir.path().join("pareto_run1.png").exists());
    assert!(dir.path().join("pareto_run2.png").exists());
}

#[test]
fn honors_explicit_output_and_config() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("front.csv");
    let config = dir.path().join("options.json");
    let output = dir.path().join("custom.png");
    fs::write(&input, FRONT).unwrap();
    fs::write(&config, r#"{ "dpi": 40, "legend_label_template": "run ({count})" }"#).unwrap();

    frontplot()
        .arg("--config")
        .arg(&config)
        .arg("-o")
        .arg(&output)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("run (3)"));

    assert_eq!(image::image_dimensions(&output).unwrap(), (240, 240));
}

#[test]
fn fails_on_missing_column() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("front.csv");
    fs::write(&input, "f1,x\n1,2\n").unwrap();

    frontplot()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column 'f2'"));

    assert!(!dir.path().join("front.png").exists());
}

#[test]
fn fails_on_missing_input() {
    frontplot()
        .arg("does/not/exist.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn rejects_output_with_several_inputs() {
    frontplot()
        .args(["-o", "out.png", "a.csv", "b.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single input"));
}

#[test]
fn rejects_inverted_range() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("front.csv");
    fs::write(&input, FRONT).unwrap();

    frontplot()
        .args(["--x-range", "4,0"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("x_range"));
}
