//! End-to-end check of the config parser on the demo input.

use pipeline_sample::config::{Value, parse, parse_line};
use railway::control::Outcome;
use railway::lift::{Failure, FailureKind};
use rstest::rstest;

fn pair(key: &str, value: Value) -> Outcome<Failure, (String, Value)> {
    Outcome::Ok((key.to_string(), value))
}

#[rstest]
fn four_line_scenario_yields_outcomes_in_order() {
    let lines = ["HOST=localhost", "PORT=8000", "DEBUG=true", "INVALID_LINE"];

    let outcomes: Vec<_> = lines.iter().map(|line| parse_line(line)).collect();

    assert_eq!(
        outcomes,
        vec![
            pair("HOST", Value::Text("localhost".to_string())),
            pair("PORT", Value::Integer(8000)),
            pair("DEBUG", Value::Bool(true)),
            Outcome::Err(Failure::new(
                FailureKind::Error,
                r#"Missing '=' in line: "INVALID_LINE""#
            )),
        ]
    );
}

#[rstest]
fn report_for_demo_input() {
    let report = parse("HOST=localhost\nPORT=8000\nDEBUG=true\nLOG_LEVEL=info\nINVALID_LINE\n");

    assert_eq!(
        report,
        vec![
            "[OK #0] HOST = 'localhost'",
            "[OK #1] PORT = 8000",
            "[OK #2] DEBUG = true",
            "[OK #3] LOG_LEVEL = 'info'",
            r#"[ERR #4] error: Missing '=' in line: "INVALID_LINE""#,
        ]
    );
}
