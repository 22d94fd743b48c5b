use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn unlimited_run_counts_every_shuffle_as_duplicate() {
    let mut cmd = Command::cargo_bin("cache-demo").expect("bin");
    cmd.args(["--variant", "free-cell", "--deals", "20", "--shuffles", "3", "--seed", "42"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("inserts=20 duplicates=60 evictions=0 len=20 resident=20"))
        .stdout(predicate::str::contains("shuffle_misses=0"));
}

#[test]
fn lru_run_keeps_only_latest_deals() {
    let mut cmd = Command::cargo_bin("cache-demo").expect("bin");
    cmd.args([
        "--variant", "black-hole",
        "--deals", "20",
        "--shuffles", "2",
        "--max-items", "5",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("inserts=20 duplicates=40 evictions=15 len=5 resident=5"));
}

#[test]
fn config_file_selects_cache() {
    let mut f = tempfile::NamedTempFile::new().expect("tmp file");
    write!(f, r#"{{ "kind": {{ "type": "lru", "max_items": 3 }}, "suit-symmetry": "forced" }}"#)
        .expect("write config");

    let mut cmd = Command::cargo_bin("cache-demo").expect("bin");
    cmd.arg("--config").arg(f.path());
    cmd.args(["--variant", "flower-garden", "--deals", "10", "--shuffles", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("evictions=7 len=3 resident=3"));
}

#[test]
fn bad_config_fails() {
    let mut f = tempfile::NamedTempFile::new().expect("tmp file");
    write!(f, "not json").expect("write config");

    let mut cmd = Command::cargo_bin("cache-demo").expect("bin");
    cmd.arg("--config").arg(f.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: Json"));
}
