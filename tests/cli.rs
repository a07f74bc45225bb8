use std::process::{Command, Output};

fn jpbizday(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jpbizday"))
        .args(args)
        .output()
        .expect("jpbizday should start")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

#[test]
fn prints_previous_business_day() {
    let output = jpbizday(&["--date", "2024-01-01"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "前営業日: 2023-12-29\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn today_is_the_default_reference_date() {
    let output = jpbizday(&[]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    let line = stdout.strip_prefix("前営業日: ").expect("labelled line");
    assert!(chrono::NaiveDate::parse_from_str(line.trim_end(), "%Y-%m-%d").is_ok(), "{stdout}");
}

#[test]
fn lists_holidays_of_the_reference_year() {
    let output = jpbizday(&["--date", "2026-09-24", "--list-holidays"]);
    assert_eq!(output.status.code(), Some(0));
    let expected = "\
前営業日: 2026-09-18
2026-01-01 元日
2026-01-12 成人の日
2026-02-11 建国記念の日
2026-02-23 天皇誕生日
2026-03-20 春分の日
2026-04-29 昭和の日
2026-05-03 憲法記念日
2026-05-04 みどりの日
2026-05-05 こどもの日
2026-05-06 振替休日
2026-07-20 海の日
2026-08-11 山の日
2026-09-21 敬老の日
2026-09-22 国民の休日
2026-09-23 秋分の日
2026-10-12 スポーツの日
2026-11-03 文化の日
2026-11-23 勤労感謝の日
";
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn year_boundary_flag_is_accepted() {
    let output = jpbizday(&["--date", "2024-01-01", "--year-boundary", "candidate"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "前営業日: 2023-12-29\n");
}

#[test]
fn bundled_config_gives_the_same_answer() {
    let config = concat!(env!("CARGO_MANIFEST_DIR"), "/json/japan.json");
    let output = jpbizday(&["--config", config, "--date", "2024-05-07"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "前営業日: 2024-05-02\n");
}

#[test]
fn missing_config_exits_with_3() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let output = jpbizday(&["--config", path.to_str().unwrap(), "--date", "2024-01-01"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).starts_with("error: configuration error"), "{}", stderr_of(&output));
}

#[test]
fn equinox_outside_the_month_exits_with_2() {
    let output = jpbizday(&["--date", "+10000-06-01"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).starts_with("error: "), "{}", stderr_of(&output));
}
