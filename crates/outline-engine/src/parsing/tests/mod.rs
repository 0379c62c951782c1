//! Fixture tests for the parser.
//!
//! Fixtures (.outline) live in `fixtures/`. Several structures exist in a
//! tab-indented and a space-indented rendering, and both must produce the
//! same document.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Document, Example, Field, Function, Operator, Param, Type};
use crate::parsing::{MalformedHeader, ParseError, Parser, parse, parse_first};

fn fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.outline")).unwrap()
}

fn described(mut f: Function, description: &str) -> Function {
    f.description = description.into();
    f
}

fn two_funcs() -> Document {
    Document {
        name: "twoFuncs".into(),
        path: "twoFuncs".into(),
        functions: vec![
            Function::new("difference(a,b int) int"),
            described(Function::new("sum(a,b int) int"), "add two things together"),
        ],
        ..Document::default()
    }
}

fn time() -> Document {
    let mut add = Function::new("add(d duration) int");
    add.params = vec![Param::new("d", "duration")];

    Document {
        name: "time".into(),
        functions: vec![
            described(Function::new("duration(string) duration"), "parse a duration"),
            described(
                Function::new("time(string, format=..., location=...) time"),
                "parse a time",
            ),
            described(
                Function::new("now() time"),
                "new time instance set to current time\nimplementations are able to make this a constant",
            ),
            described(Function::new("zero() time"), "a constant"),
        ],
        types: vec![
            Type {
                name: "duration".into(),
                description: "a period of time".into(),
                methods: vec![add],
                fields: vec![
                    Field {
                        name: "hours float".into(),
                        description: "number of hours starting at zero".into(),
                    },
                    Field::new("minutes float"),
                    Field::new("nanoseconds int"),
                    Field::new("seconds float"),
                ],
                operators: vec![
                    Operator::new("duration - time = duration"),
                    Operator::new("duration + time = time"),
                    Operator::new("duration == duration = boolean"),
                    Operator::new("duration < duration = booleans"),
                ],
                ..Type::default()
            },
            Type {
                name: "time".into(),
                operators: vec![
                    Operator::new("time == time = boolean"),
                    Operator::new("time < time = boolean"),
                ],
                ..Type::default()
            },
        ],
        ..Document::default()
    }
}

#[rstest]
#[case("two_funcs_tabs")]
#[case("two_funcs_spaces")]
#[case("two_funcs_mixed")]
fn fixture_two_funcs(#[case] name: &str) {
    assert_eq!(parse_first(&fixture(name)).unwrap(), two_funcs());
}

#[rstest]
#[case("time_spaces")]
#[case("time_tabs")]
fn fixture_time(#[case] name: &str) {
    assert_eq!(parse_first(&fixture(name)).unwrap(), time());
}

#[test]
fn fixture_doc_with_description() {
    let doc = parse_first(&fixture("doc_with_description_tabs")).unwrap();
    assert_eq!(
        doc,
        Document {
            name: "doc".into(),
            description: "this is a document description.\nIt's written across two lines".into(),
            functions: vec![Function::new("sum(a int, b int) int")],
            ..Document::default()
        }
    );
}

#[test]
fn fixture_huh_body_at_header_indent() {
    let mut foo = described(
        Function::new("foo(bar string) int"),
        "foo a bar, which is to to a bar and remove 'd' from 'food'",
    );
    foo.params = vec![Param {
        name: "bar".into(),
        ty: "string".into(),
        description: "the name of a bar".into(),
    }];

    let doc = parse_first(&fixture("huh_spaces")).unwrap();
    assert_eq!(
        doc,
        Document {
            name: "huh".into(),
            description: "huh is a package that has no meaning or purpose".into(),
            functions: vec![foo, described(Function::new("date() date"), "make a date")],
            ..Document::default()
        }
    );
}

#[test]
fn fixture_function_examples() {
    let doc = parse_first(&fixture("func_examples")).unwrap();
    assert_eq!(doc.functions.len(), 1);

    let foo = &doc.functions[0];
    assert_eq!(
        foo.examples,
        vec![
            Example::new("foo.star", "Foo Example"),
            Example {
                filename: "bar.star".into(),
                name: String::new(),
                description: "Description of the bar example".into(),
            },
        ]
    );
    assert_eq!(foo.params.len(), 1);
    assert_eq!(foo.params[0].description, "the name of a bar");
}

#[test]
fn fixture_type_examples() {
    let doc = parse_first(&fixture("type_examples")).unwrap();
    assert_eq!(doc.types.len(), 1);

    let duration = &doc.types[0];
    assert_eq!(duration.description, "a period of time");
    assert_eq!(duration.examples, vec![Example::new("foo.star", "Foo Example")]);
    assert_eq!(duration.methods.len(), 1);
    assert_eq!(duration.methods[0].params, vec![Param::new("d", "duration")]);
}

#[test]
fn fixture_type_description_multiline() {
    let doc = parse_first(&fixture("type_description_multiline")).unwrap();
    let duration = &doc.types[0];
    assert_eq!(duration.description, "line 1.\nline 2.\n\nline 3.");
    assert_eq!(duration.examples, vec![Example::new("foo.star", "Foo Example")]);
}

#[test]
fn header_only() {
    assert_eq!(parse_first("outline: foo\n").unwrap(), Document::new("foo"));
}

#[test]
fn missing_header_is_malformed() {
    assert_eq!(
        parse_first("functions:\n  sum(a, b int) int\n"),
        Err(ParseError::MalformedHeader(MalformedHeader::Missing))
    );
    assert_eq!(
        parse_first(""),
        Err(ParseError::MalformedHeader(MalformedHeader::Missing))
    );
}

#[test]
fn nameless_header_is_malformed() {
    assert_eq!(
        parse_first("prose\noutline:\n  functions:\n"),
        Err(ParseError::MalformedHeader(MalformedHeader::EmptyName {
            line: 2
        }))
    );
}

#[test]
fn parse_returns_every_document_in_order() {
    let input = "outline: a\n  first\noutline: b\n  second\n";
    let docs: Vec<_> = parse(input).into_iter().map(Result::unwrap).collect();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].name, "a");
    assert_eq!(docs[0].description, "first");
    assert_eq!(docs[1].name, "b");
    assert_eq!(docs[1].description, "second");
}

#[test]
fn malformed_header_only_fails_its_own_document() {
    let input = "outline: a\noutline:\n  lost\noutline: c\n";
    let results = parse(input);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().name, "a");
    assert_eq!(
        results[1],
        Err(ParseError::MalformedHeader(MalformedHeader::EmptyName {
            line: 2
        }))
    );
    assert_eq!(results[2].as_ref().unwrap().name, "c");
}

#[test]
fn nested_outline_line_is_description_text() {
    let input = "outline: a\n  functions:\n    f()\n      outline: prints the outline of x\n    g()\n";
    let results = parse(input);
    assert_eq!(results.len(), 1);

    let doc = results[0].as_ref().unwrap();
    assert_eq!(
        doc.functions,
        vec![
            described(Function::new("f()"), "outline: prints the outline of x"),
            Function::new("g()"),
        ]
    );
}

#[test]
fn parse_without_headers_is_empty() {
    assert!(parse("nothing to see here\n").is_empty());
}

#[test]
fn parse_first_ignores_later_documents() {
    let doc = parse_first("outline: a\noutline:\n").unwrap();
    assert_eq!(doc.name, "a");
}

#[test]
fn empty_sections_are_empty_lists() {
    let doc = parse_first("outline: x\n  functions:\n  types:\n    t\n      fields:\n").unwrap();
    assert!(doc.functions.is_empty());
    assert_eq!(doc.types, vec![Type::new("t")]);
}

#[test]
fn type_sections_in_any_order() {
    let forward = "outline: x\n  types:\n    t\n      fields:\n        f int\n      methods:\n        m()\n      operators:\n        t + t = t\n      examples:\n        t.star\n";
    let backward = "outline: x\n  types:\n    t\n      examples:\n        t.star\n      operators:\n        t + t = t\n      methods:\n        m()\n      fields:\n        f int\n";
    assert_eq!(parse_first(forward).unwrap(), parse_first(backward).unwrap());
}

#[test]
fn unknown_keywords_are_prose() {
    let doc = parse_first("outline: x\n  returns:\n    nothing\n  methods:\n").unwrap();
    assert_eq!(doc.description, "returns:\nnothing\nmethods:");
}

#[test]
fn column_policy_handles_mixed_indent_that_raw_counts_get_wrong() {
    let input = fixture("two_funcs_mixed");

    assert_eq!(Parser::default().parse_first(&input).unwrap(), two_funcs());

    // Counting characters makes the one-tab `path:` shallower than the
    // two-space `functions:`, which then nests under the path directive.
    let raw = Parser::with_tab_width(1).parse_first(&input).unwrap();
    assert_eq!(raw.path, "twoFuncs");
    assert!(raw.functions.is_empty());
}

#[test]
fn crlf_input_parses_like_lf() {
    let lf = fixture("huh_spaces");
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(parse_first(&crlf).unwrap(), parse_first(&lf).unwrap());
}
