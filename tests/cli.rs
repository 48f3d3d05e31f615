#[macro_use] extern crate pretty_assertions;

use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempdir::TempDir;

struct CliTest {
    dir: TempDir,
}

impl CliTest {
    fn new() -> Self { CliTest { dir: TempDir::new("lina-cli-test").unwrap() } }

    fn input(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::File::create(&path).unwrap().write_all(text.as_bytes()).unwrap();
        path
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_lina"))
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .unwrap()
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self.run(args);
        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

#[test]
fn det_of_irrational_matrix() {
    let test = CliTest::new();
    test.input("m.yaml", "\
        - [1.4142135623730951, 1.7320508075688772, 2.23606797749979]\n\
        - [2.449489742783178, 2.6457513110645907, 2.8284271247461903]\n\
        - [3.1622776601683795, 3.3166247903554, 3.4641016151377544]\n\
    ");
    let det = test.json(&["det", "m.yaml"])["determinant"].as_f64().unwrap();
    assert!((det - -0.052407645760034).abs() < 1e-6, "{}", det);
}

#[test]
fn products_and_sums() {
    let test = CliTest::new();
    test.input("a.json", "[[1, 2], [3, 4]]");
    test.input("v.json", "[1, 1]");

    assert_eq!(test.json(&["mul", "--vector", "a.json", "v.json"]), json!([3.0, 7.0]));
    assert_eq!(test.json(&["add", "a.json", "a.json"]), json!([[2.0, 4.0], [6.0, 8.0]]));
    assert_eq!(test.json(&["submatrix", "a.json", "--row", "0", "--col", "0"]), json!([[4.0]]));
}

#[test]
fn centroid_of_default_triangle() {
    let test = CliTest::new();
    assert_eq!(test.json(&["centroid", "--dim", "2"]), json!({ "dim": 2, "centroid": [0.5, 0.5] }));
}

#[test]
fn errors_exit_with_status_one() {
    let test = CliTest::new();
    test.input("wide.yaml", "[[1, 2, 3]]");
    let output = test.run(&["det", "wide.yaml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("non-square"), "{}", stderr);
}

#[test]
fn log_file_receives_debug_output() {
    let test = CliTest::new();
    test.input("v.yaml", "[0, 3, 4]");
    let out = test.json(&["-v", "--log", "lina.log", "normalize", "v.yaml"]);
    assert_eq!(out["length"], json!(5.0));

    let log = std::fs::read_to_string(test.dir.path().join("lina.log")).unwrap();
    assert!(log.contains("Read vector of dimension 3"), "{}", log);
}

#[test]
fn unopenable_log_file_is_reported_on_stderr() {
    let test = CliTest::new();
    let output = test.run(&["--log", "no_such_dir/lina.log", "centroid", "--dim", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not open log file"), "{}", stderr);
    assert!(stderr.contains("no_such_dir"), "{}", stderr);
}
