//! End-to-end runs of the `saju` binary.

use std::process::{Command, Output};

fn saju(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_saju"))
        .args(args)
        .env_remove("SAJU_OUTPUT")
        .env_remove("RUST_LOG")
        .env("SAJU_LOG_LEVEL", "off")
        .output()
        .expect("binary runs")
}

#[test]
fn chart_prints_pillars() {
    let out = saju(&["chart", "1971-11-17 04:00"]);
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("辛亥 己亥 丙午 庚寅"));
    assert!(text.contains("xinhai jihai bingwu gengyin"));
}

#[test]
fn compat_json_has_overall() {
    let out = saju(&[
        "--output",
        "json",
        "compat",
        "1971-11-17 04:00",
        "1976-09-16 09:40",
        "--a-gender",
        "m",
        "--b-gender",
        "f",
    ]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(v["overall"].as_u64().unwrap() <= 100);
    assert_eq!(v["reports"].as_array().unwrap().len(), 4);
}

#[test]
fn fortune_single_category() {
    let out = saju(&[
        "--output",
        "json",
        "fortune",
        "1971-11-17 04:00",
        "--on",
        "2024-06-15",
        "--category",
        "career",
    ]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v[0]["category"], "career");
}

#[test]
fn cycle_year_lookup() {
    let out = saju(&["cycle", "--year", "1924"]);
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("甲子 jiazi"));
}

#[test]
fn bad_date_fails() {
    let out = saju(&["chart", "not-a-date"]);
    assert!(!out.status.success());
}
