use deepcmp_benches::{nested_document, perturb};
use deepcmp_core::{CompareOptions, ReportConfig};

#[test]
fn deepcmp_benches_readme_example() {
    let doc = nested_document(3, 3);
    let changed = perturb(&doc);

    let result = doc.compare(&changed, &CompareOptions::default());
    assert!(!result.is_empty());

    let rendered = result.render(&ReportConfig::default());
    println!("{rendered}");
    assert!(rendered.starts_with("found "));
}
