use quiz_core::FacetFilter;
use quiz_core::filter::Selector;
use quiz_core::model::Year;

use super::test_harness::setup_quiz_harness;

#[test]
fn quiz_page_starts_with_nothing_selected() {
    let mut harness = setup_quiz_harness(FacetFilter::default());
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("No questions match the selected filters."),
        "missing empty message in {html}"
    );
    assert!(html.contains("Not selected"), "missing facet label in {html}");
    assert!(html.contains("sample.csv"), "missing origin in {html}");
    assert!(html.contains("bank-upload"), "missing file input in {html}");
    assert!(html.contains(".csv"), "missing accept filter in {html}");
    assert!(!html.contains("Score:"), "unexpected score in {html}");
}

#[test]
fn quiz_page_renders_preselected_questions() {
    let selection = FacetFilter::new(Selector::Value(Year::new("2023").unwrap()), Selector::All);
    let mut harness = setup_quiz_harness(selection);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1"), "missing heading in {html}");
    assert!(html.contains("2+2=?"), "missing question text in {html}");
    assert!(html.contains("Pick the vowels"), "missing question text in {html}");
    assert!(!html.contains("3*3=?"), "filtered question leaked into {html}");
    assert!(html.contains("checkbox"), "missing checkbox input in {html}");
    assert!(html.contains("radio"), "missing radio input in {html}");
    assert!(html.contains("Grade"), "missing grade button in {html}");
}

#[test]
fn quiz_page_lists_every_facet_value() {
    let mut harness = setup_quiz_harness(FacetFilter::everything());
    harness.rebuild();
    let html = harness.render();

    for label in ["2023", "2024", "Math", "Sets", "All"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("3*3=?"), "missing question in {html}");
}
