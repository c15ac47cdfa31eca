use deepcmp_core::{CompareOptions, Value};

#[test]
fn top_level_readme_quickstart() -> Result<(), Box<dyn std::error::Error>> {
    let expected = Value::from_json_str("{\"count\":1}")?;
    let actual = Value::from_json_str("{\"count\":2}")?;

    let result = expected.compare(&actual, &CompareOptions::default());
    assert!(!result.is_empty());

    let excluded = CompareOptions::default().with_exclude_keys(["count"])?;
    assert!(expected.compare(&actual, &excluded).is_empty());
    Ok(())
}
