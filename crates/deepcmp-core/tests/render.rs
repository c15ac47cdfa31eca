use deepcmp_core::{assert_equal, CompareOptions, ReportConfig, Value};

fn parse(input: &str) -> Value {
    Value::from_json_str(input).expect("test input parses")
}

#[test]
fn report_lists_every_mismatch_under_a_summary_line() {
    let expected = parse("{\"a\":1,\"b\":[1,2],\"c\":\"x\"}");
    let actual = parse("{\"a\":2,\"b\":[1],\"c\":\"x\"}");
    let result = expected.compare(&actual, &CompareOptions::default());
    let report = result.render(&ReportConfig::default());
    assert_eq!(
        report,
        "found 2 mismatches\n\
         root.a [value_mismatch] expected: 1, actual: 2\n\
         root.b [length_mismatch] expected: 2 items [1,2], actual: 1 item [1]\n",
    );
}

#[test]
fn missing_side_is_omitted_from_the_line() {
    let expected = parse("{\"a\":1}");
    let actual = parse("{}");
    let result = expected.compare(&actual, &CompareOptions::default());
    let report = result.render(&ReportConfig::default());
    assert_eq!(report, "found 1 mismatch\nroot.a [missing_in_actual] expected: 1\n");
}

#[test]
fn empty_result_renders_a_zero_summary() {
    let value = parse("{\"a\":1}");
    let result = value.compare(&value, &CompareOptions::default());
    assert_eq!(result.render(&ReportConfig::default()), "found 0 mismatches\n");
}

#[test]
fn color_mode_wraps_both_sides_in_ansi_codes() {
    let expected = parse("{\"a\":1}");
    let actual = parse("{\"a\":2}");
    let result = expected.compare(&actual, &CompareOptions::default());
    let report = result.render(&ReportConfig::default().with_color(true));
    assert!(report.contains("\u{1b}[31m1\u{1b}[0m"), "expected side should be red");
    assert!(report.contains("\u{1b}[32m2\u{1b}[0m"), "actual side should be green");
}

#[test]
fn assertion_error_displays_the_full_report() {
    let expected = parse("{\"a\":1,\"b\":2}");
    let actual = parse("{\"a\":9,\"b\":8}");
    let options = CompareOptions::default();
    let err = assert_equal(&expected, &actual, &options).unwrap_err();
    let report = expected.compare(&actual, &options).render(&ReportConfig::default());
    assert_eq!(err.to_string(), report);
}

#[test]
fn breadcrumbs_mix_keys_and_indices() {
    let expected = parse("{\"users\":[{\"email\":\"a@x\"}]}");
    let actual = parse("{\"users\":[{\"email\":\"b@x\"}]}");
    let result = expected.compare(&actual, &CompareOptions::default());
    let report = result.render(&ReportConfig::default());
    assert!(report.contains("root.users[0].email"), "got: {report}");
}
