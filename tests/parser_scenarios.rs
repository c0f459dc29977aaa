//! End-to-end parsing scenarios

use kexpr::kexpr::lexer::Token;
use kexpr::kexpr::testing::{assert_doc, TextMatch};
use kexpr::{parse_document, ListItem, PropertyValue};
use rstest::rstest;

#[rstest]
#[case::bare("foo --> ;", 0)]
#[case::one_number("foo --> a=1 ;", 1)]
#[case::all_kinds(r#"foo --> a=1 b=bar c="baz" d=[1 x "y"] ;"#, 4)]
#[case::negative("foo --> a=-1 ;", 1)]
#[case::spread_over_lines("foo\n-->\na=1\nb=2\n;", 2)]
#[case::no_spaces("foo-->a=1;", 1)]
fn test_single_key_expression(#[case] source: &str, #[case] properties: usize) {
    let doc = parse_document(source).expect("Failed to parse");
    assert_doc(&doc).node_count(1).node(0, |node| {
        node.assert_key_expression()
            .name("foo")
            .property_count(properties);
    });
}

#[rstest]
#[case::empty("")]
#[case::whitespace(" \t\n\n  ")]
#[case::comment("# nothing here")]
#[case::comments("# one\n# two\n   # three")]
#[case::comment_without_newline_at_end("#")]
fn test_inputs_without_nodes(#[case] source: &str) {
    let doc = parse_document(source).expect("Failed to parse");
    assert_doc(&doc).no_nodes();
}

#[rstest]
#[case::missing_equals("foo --> a=1 b ;")]
#[case::missing_value("foo --> a= ;")]
#[case::missing_arrow("foo a=1 ;")]
#[case::missing_semicolon("foo --> a=1")]
#[case::missing_name("--> a=1 ;")]
#[case::empty_group("{ }")]
#[case::unbalanced_open("{ foo --> ;")]
#[case::unbalanced_close("foo --> ; }")]
#[case::nested_list("foo --> a=[[1]] ;")]
#[case::unclosed_list("foo --> a=[1 2 ;")]
#[case::value_without_name("foo --> =1 ;")]
#[case::number_as_name("5 --> ;")]
fn test_syntax_errors(#[case] source: &str) {
    assert!(parse_document(source).is_err(), "{:?} should not parse", source);
}

#[test]
fn test_syntax_error_message() {
    let error = parse_document("foo --> ;\n  }").unwrap_err();
    assert_eq!(error.found, Some(Token::CompoundEnd));
    assert_eq!((error.line, error.column), (2, 3));
    assert!(error
        .to_string()
        .starts_with("syntax error at line 2, column 3: unexpected '}', expected"));
}

#[test]
fn test_explicit_plus_sign_parses_as_plain_number() {
    let doc = parse_document("foo --> a=+5 ;").expect("Failed to parse");
    assert_doc(&doc).node(0, |node| {
        node.assert_key_expression().number("a", 5);
    });
}

#[test]
fn test_embedded_quote_ends_string_early() {
    // `"a"` is the string, `b` an identifier and the trailing `"` is dropped
    let doc = parse_document(r#"foo --> t="a"b" ;"#);
    assert!(doc.is_err());

    let doc = parse_document(r#"foo --> t="a"b=1" ;"#).expect("Failed to parse");
    assert_doc(&doc).node(0, |node| {
        node.assert_key_expression()
            .text("t", TextMatch::Exact("a".to_string()))
            .number("b", 1);
    });
}

#[test]
fn test_list_values_keep_kind_and_order() {
    let doc = parse_document(r#"foo --> l=[3 two "one" -4] ;"#).expect("Failed to parse");
    assert_doc(&doc).node(0, |node| {
        node.assert_key_expression().property(
            "l",
            PropertyValue::List(vec![
                ListItem::Number(3),
                ListItem::atom("two"),
                ListItem::text("one"),
                ListItem::Number(-4),
            ]),
        );
    });
}

#[test]
fn test_deeply_nested_groups() {
    let depth = 64;
    let source = format!("{}leaf --> ;{}", "{ ".repeat(depth), " }".repeat(depth));
    let doc = parse_document(&source).expect("Failed to parse");

    let mut node = &doc.nodes[0];
    for _ in 0..depth {
        node = &node.children()[0];
    }
    assert_eq!(node.as_key_expression().map(|e| e.name()), Some("leaf"));
}

#[test]
fn test_strings_keep_comment_markers_and_newlines() {
    let doc = parse_document("foo --> t=\"# not a comment\nsecond line\" ;").expect("Failed to parse");
    assert_doc(&doc).node(0, |node| {
        node.assert_key_expression()
            .text("t", TextMatch::StartsWith("# not a comment".to_string()))
            .text("t", TextMatch::Contains("second line".to_string()));
    });
}

#[rstest]
#[case::max("9223372036854775807", i64::MAX)]
#[case::min("-9223372036854775808", i64::MIN)]
#[case::plus_max("+9223372036854775807", i64::MAX)]
fn test_number_bounds(#[case] literal: &str, #[case] expected: i64) {
    let doc = parse_document(&format!("foo --> a={} l=[{}] ;", literal, literal))
        .expect("Failed to parse");
    assert_doc(&doc).node(0, |node| {
        node.assert_key_expression()
            .number("a", expected)
            .property("l", PropertyValue::List(vec![ListItem::Number(expected)]));
    });
}

#[rstest]
#[case::above_max("9223372036854775808")]
#[case::below_min("-9223372036854775809")]
#[case::far_above_max("99999999999999999999")]
fn test_out_of_range_numbers_are_syntax_errors(#[case] literal: &str) {
    for source in [
        format!("foo --> a={} ;", literal),
        format!("foo --> l=[1 {}] ;", literal),
    ] {
        let error = parse_document(&source).unwrap_err();
        assert_eq!(error.found, Some(Token::OutOfRangeNumber(literal.to_string())));
        assert!(error.to_string().contains("out of range"));
    }
}

#[test]
fn test_list_items_match_by_text() {
    let doc = parse_document(r#"tags --> values=[edge public "load balancer"] mode=active ;"#)
        .expect("Failed to parse");
    assert_doc(&doc).node(0, |node| {
        node.assert_key_expression()
            .value_matches("values", TextMatch::Exact("public".to_string()))
            .value_matches("values", TextMatch::Contains("balance".to_string()))
            .value_matches("mode", TextMatch::StartsWith("act".to_string()));
    });
}
