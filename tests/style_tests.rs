use pregrade::grade::StyleCheck;

fn style() -> StyleCheck {
    StyleCheck::builder().req_name("Style").out_of(1.0).build()
}

#[test]
fn clean_source_earns_the_full_weight() {
    let result = style().run("fn rmse(p, l) {\n    0.0\n}\n");

    assert_eq!(result.grade_value(), 1.0);
    assert_eq!(result.reason(), "");
}

#[test]
fn long_lines_are_flagged() {
    let source = format!("let x = \"{}\";\n", "a".repeat(120));
    let result = style().run(&source);

    assert_eq!(result.grade_value(), 0.0);
    assert!(result.reason().contains("longer than 100 characters"));
}

#[test]
fn trailing_whitespace_and_tabs_are_flagged() {
    let result = style().run("let x = 1;   \n\tlet y = 2;\n");

    assert_eq!(result.grade_value(), 0.0);
    assert!(result.reason().contains("trailing whitespace"));
    assert!(result.reason().contains("tab indentation"));
}

#[test]
fn excess_violations_collapse_into_a_count() {
    let source = "let a = 1; \n".repeat(8);
    let result = style().run(&source);

    assert_eq!(result.grade_value(), 0.0);
    assert!(result.reason().contains("and 3 more"));
}
