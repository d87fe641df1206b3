// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! End-to-end tree-shape tests: literal input in, expected node tree out.

use yaml_syntax::{parse, parse_bytes, tokenize, Mode, Node, TokenKind};

fn single_body(src: &str) -> Node {
    let file = parse_bytes(src.as_bytes(), Mode::empty()).unwrap();
    assert_eq!(file.docs.len(), 1, "expected one document for {src:?}");
    file.docs.into_iter().next().unwrap().body
}

#[test]
fn scenario_single_pair() {
    let Node::MappingValue(pair) = single_body("a: 1") else {
        panic!("expected bare mapping value");
    };
    let Node::String(key) = &pair.key else {
        panic!("expected string key");
    };
    assert_eq!(key.value, "a");
    let Node::Integer(value) = &pair.value else {
        panic!("expected integer value");
    };
    assert_eq!(value.value, "1");
}

#[test]
fn scenario_two_pairs() {
    let Node::Mapping(mapping) = single_body("a: 1\nb: 2") else {
        panic!("expected mapping");
    };
    assert_eq!(mapping.values.len(), 2);
    let pairs: Vec<(String, String)> = mapping
        .values
        .iter()
        .map(|pair| {
            (
                pair.key.token().value.clone(),
                pair.value.token().value.clone(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("a".to_owned(), "1".to_owned()),
            ("b".to_owned(), "2".to_owned()),
        ]
    );
}

#[test]
fn scenario_block_sequence() {
    let Node::Sequence(seq) = single_body("- 1\n- 2\n- 3") else {
        panic!("expected sequence");
    };
    assert!(!seq.is_flow_style);
    let values: Vec<String> = seq
        .values
        .iter()
        .map(|node| node.token().value.clone())
        .collect();
    assert_eq!(values, vec!["1", "2", "3"]);
    for value in &seq.values {
        assert!(matches!(value, Node::Integer(_)));
    }
}

#[test]
fn scenario_flow_mapping() {
    let Node::Mapping(mapping) = single_body("{a: 1, b: 2}") else {
        panic!("expected mapping");
    };
    assert!(mapping.is_flow_style);
    assert_eq!(mapping.values.len(), 2);
    assert_eq!(mapping.start.kind, TokenKind::MappingStart);
    assert_eq!(mapping.end.as_ref().unwrap().kind, TokenKind::MappingEnd);
}

#[test]
fn scenario_literal_block() {
    let Node::MappingValue(pair) = single_body("key: |\n  hello\n  world\n") else {
        panic!("expected bare mapping value");
    };
    let Node::String(key) = &pair.key else {
        panic!("expected string key");
    };
    assert_eq!(key.value, "key");
    let Node::Literal(literal) = &pair.value else {
        panic!("expected literal value");
    };
    assert_eq!(literal.value.kind, TokenKind::String);
    assert_eq!(literal.value.value, "hello\nworld\n");
}

#[test]
fn scenario_anchor_and_alias() {
    let Node::Mapping(mapping) = single_body("a: &x 1\nb: *x") else {
        panic!("expected mapping");
    };
    assert_eq!(mapping.values.len(), 2);

    let Node::Anchor(anchor) = &mapping.values[0].value else {
        panic!("expected anchor");
    };
    assert_eq!(anchor.name.token().value, "x");
    let Node::Integer(value) = &anchor.value else {
        panic!("expected anchored integer");
    };
    assert_eq!(value.value, "1");

    let Node::Alias(alias) = &mapping.values[1].value else {
        panic!("expected alias");
    };
    assert_eq!(alias.value.token().value, "x");
}

#[test]
fn scenario_explicit_document() {
    let file = parse_bytes(b"---\nfoo\n...", Mode::empty()).unwrap();
    assert_eq!(file.docs.len(), 1);
    let doc = &file.docs[0];
    assert_eq!(doc.start.as_ref().unwrap().kind, TokenKind::DocumentHeader);
    assert_eq!(doc.end.as_ref().unwrap().kind, TokenKind::DocumentEnd);
    let Node::String(body) = &doc.body else {
        panic!("expected string body");
    };
    assert_eq!(body.value, "foo");
}

#[test]
fn multi_document_stream() {
    let file = parse_bytes(b"---\na: 1\n---\nb: 2", Mode::empty()).unwrap();
    assert_eq!(file.docs.len(), 2);
    assert!(file.docs.iter().all(|doc| doc.start.is_some()));
    assert!(matches!(&file.docs[0].body, Node::MappingValue(_)));
    assert!(matches!(&file.docs[1].body, Node::MappingValue(_)));
}

#[test]
fn merge_key_pair() {
    let Node::Mapping(mapping) = single_body("<<: *base\nother: 2") else {
        panic!("expected mapping");
    };
    assert!(matches!(&mapping.values[0].key, Node::MergeKey(_)));
    assert!(matches!(&mapping.values[0].value, Node::Alias(_)));
}

#[test]
fn sequence_of_mappings() {
    let Node::Sequence(seq) = single_body("- a: 1\n- b: 2") else {
        panic!("expected sequence");
    };
    assert_eq!(seq.values.len(), 2);
    for entry in &seq.values {
        assert!(matches!(entry, Node::MappingValue(_)));
    }
}

#[test]
fn mapping_of_sequences() {
    let Node::Mapping(mapping) = single_body("first:\n  - 1\n  - 2\nsecond:\n  - 3") else {
        panic!("expected mapping");
    };
    assert_eq!(mapping.values.len(), 2);
    let Node::Sequence(first) = &mapping.values[0].value else {
        panic!("expected sequence value");
    };
    assert_eq!(first.values.len(), 2);
}

#[test]
fn scalar_shapes_through_parse() {
    for (src, expect_integer) in [("0x1f", true), ("0o17", true), ("0b11", true), ("10", true)] {
        let node = single_body(src);
        assert_eq!(matches!(node, Node::Integer(_)), expect_integer, "{src}");
    }
    assert!(matches!(single_body(".inf"), Node::Infinity(_)));
    assert!(matches!(single_body(".nan"), Node::Nan(_)));
    assert!(matches!(single_body("yes"), Node::Bool(_)));
    assert!(matches!(single_body("version 2"), Node::String(_)));
}

#[test]
fn quoted_scalars_keep_quote_kind() {
    let Node::MappingValue(pair) = single_body("a: \"he said \\\"hi\\\"\"") else {
        panic!("expected bare mapping value");
    };
    let Node::String(value) = &pair.value else {
        panic!("expected string value");
    };
    assert_eq!(value.kind, TokenKind::DoubleQuote);
    assert_eq!(value.value, "he said \"hi\"");
}

#[test]
fn folded_block_scalar() {
    let Node::MappingValue(pair) = single_body("key: >\n  joined\n  lines\n") else {
        panic!("expected bare mapping value");
    };
    let Node::Literal(literal) = &pair.value else {
        panic!("expected literal node");
    };
    assert_eq!(literal.start.kind, TokenKind::Folded);
    assert_eq!(literal.value.value, "joined lines");
}

#[test]
fn chomping_indicator_kept_in_header() {
    let Node::MappingValue(pair) = single_body("key: |-\n  text\n") else {
        panic!("expected bare mapping value");
    };
    let Node::Literal(literal) = &pair.value else {
        panic!("expected literal node");
    };
    assert_eq!(literal.start.value, "|-");
}

#[test]
fn empty_input_is_one_null_document() {
    let file = parse_bytes(b"", Mode::empty()).unwrap();
    assert_eq!(file.docs.len(), 1);
    assert!(file.docs[0].start.is_none());
    assert!(matches!(&file.docs[0].body, Node::Null(_)));
}

#[test]
fn tokenize_then_parse_matches_parse_bytes() {
    let src = "a: 1\nb: [2, 3]\n";
    let via_tokens = parse(tokenize(src), Mode::empty()).unwrap();
    let via_bytes = parse_bytes(src.as_bytes(), Mode::empty()).unwrap();
    assert_eq!(via_tokens, via_bytes);
}

#[test]
fn parse_file_sets_name() {
    let dir = std::env::temp_dir();
    let path = dir.join("yaml_syntax_scenarios.yaml");
    std::fs::write(&path, "a: 1\n").unwrap();
    let file = yaml_syntax::parse_file(&path, Mode::empty()).unwrap();
    assert_eq!(file.name.as_deref(), Some(path.to_str().unwrap()));
    assert!(matches!(&file.docs[0].body, Node::MappingValue(_)));
    std::fs::remove_file(&path).ok();
}

#[test]
fn error_positions_point_at_tokens() {
    let err = parse_bytes(b"a: 1\n1: x", Mode::empty()).unwrap_err();
    assert_eq!(err.position.line, 2);
    assert_eq!(err.position.column, 1);
}
