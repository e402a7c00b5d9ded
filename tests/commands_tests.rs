use std::process::Command;

use calcmedias::{
    GradeForm, GradingConfig,
    commands::{calc, info_json},
    config::{self, Settings},
};
use serde_json::Value;

fn form(name: &str, work: &str, activity: &str, exam: &str) -> GradeForm {
    GradeForm::builder()
        .name(name)
        .work(work)
        .activity(activity)
        .exam(exam)
        .build()
}

fn run(form: &GradeForm, json: bool) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let valid = calc(form, &GradingConfig::default(), json, &mut out, &mut err).expect("calc runs");
    (
        valid,
        String::from_utf8(out).expect("utf-8 stdout"),
        String::from_utf8(err).expect("utf-8 stderr"),
    )
}

#[test]
fn calc_prints_table_and_weighted_sum() {
    let (valid, out, err) = run(&form("Ana", "8", "7", "6"), false);
    assert!(valid);
    assert!(err.is_empty());
    assert!(out.contains("Ana"));
    assert!(out.contains("1 Aluno"));
    // 3.2 + 2.1 + 1.8
    assert!(out.contains("Soma ponderada: 7.10"));
}

#[test]
fn calc_json_carries_status() {
    let (valid, out, _) = run(&form("Rui", "2", "4", "3"), true);
    assert!(valid);
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["name"], "Rui");
    assert_eq!(value["finalAverage"], 3);
    assert_eq!(value["status"], "Weak");
    assert!(value["id"].is_string());
}

#[test]
fn calc_rejects_and_reports_every_field() {
    let (valid, out, err) = run(&form(" ", "11", "x", "7.5"), false);
    assert!(!valid);
    assert!(out.is_empty());
    assert!(err.contains("Nome é obrigatório"));
    assert!(err.contains("Entre 0 e 10"));
    assert!(err.contains("Deve ser um número"));
    assert!(err.contains("Apenas números inteiros"));
}

#[test]
fn calc_json_rejection_goes_to_stdout() {
    let (valid, out, err) = run(&form("Ana", "", "5", "5"), true);
    assert!(!valid);
    assert!(err.is_empty());
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["errors"]["work"], "Campo obrigatório");
    assert!(value["errors"].get("activity").is_none());
}

#[test]
fn colors_follow_installed_settings() {
    config::install(Settings::default().with_color(false)).unwrap();
    let (_, out, _) = run(&form("Ana", "9", "9", "9"), false);
    assert!(!out.contains('\u{1b}'));
    assert!(out.contains("9 ▲"));
}

#[test]
fn info_lists_weights_as_fractions() {
    let value: Value = serde_json::from_str(&info_json(&GradingConfig::default()).unwrap()).unwrap();
    assert_eq!(value["weights"]["work"], 40);
    assert_eq!(value["bounds"]["max"], 10);
    assert_eq!(value["weightFractions"]["work"], 0.4);
    assert_eq!(value["weightFractions"]["exam"], 0.3);
}

#[test]
fn negative_grade_on_command_line_is_a_range_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_calcmedias"))
        .args(["calc", "Ana", "-1", "5", "5"])
        .env("NO_COLOR", "1")
        .env_remove("CALCMEDIAS_LOG")
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Entre 0 e 10"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn valid_command_line_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_calcmedias"))
        .args(["calc", "--json", "Ana", "5", "5", "4"])
        .env("NO_COLOR", "1")
        .env_remove("CALCMEDIAS_LOG")
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "Borderline");
}
