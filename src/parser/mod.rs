// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Recursive descent parser over the token stream.
//!
//! Dispatch is driven by the current token's kind plus its forward kind
//! link: any token directly followed by `:` opens a mapping-value group,
//! whatever its own kind. Block structure is decided by comparing token
//! columns, not indent counts, because YAML allows keys to sit to the
//! right of their container's column.
//!
//! The first error aborts the parse and propagates to the caller with the
//! offending token's position.

mod context;

use std::path::Path;

use crate::ast::{
    AliasNode, AnchorNode, DirectiveNode, Document, File, LiteralNode, MappingNode,
    MappingValueNode, Node, SequenceNode, TagNode,
};
use crate::error::{Error, ErrorKind, ParseError};
use crate::scanner::tokenize;
use crate::token::{Position, Token, TokenKind, Tokens};
use context::Context;

/// Parse mode bit set.
///
/// The only flag today preserves comment tokens instead of filtering them
/// before parsing begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mode(u32);

impl Mode {
    /// Keep comment tokens in the stream the parser walks.
    pub const PARSE_COMMENTS: Self = Self(1);

    /// No flags set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Whether all bits of `flag` are set.
    #[must_use]
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }
}

impl std::ops::BitOr for Mode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

fn null_token(position: Position) -> Token {
    Token::new("null".to_owned(), "null".to_owned(), position)
}

fn parse_map_key(tk: &Token) -> Option<Node> {
    if tk.kind.is_string() {
        return Some(Node::String(tk.clone()));
    }
    match tk.kind {
        TokenKind::MergeKey => Some(Node::MergeKey(tk.clone())),
        TokenKind::Null => Some(Node::Null(tk.clone())),
        _ => None,
    }
}

/// A plain-scalar key must not span lines: its origin may begin with
/// newlines but must not contain one after that.
fn validate_map_key(tk: &Token) -> Result<(), ParseError> {
    if tk.kind != TokenKind::String {
        return Ok(());
    }
    let origin = tk.origin.trim_start_matches('\n');
    if origin.find('\n').is_some_and(|idx| idx > 0) {
        return Err(ParseError::new(
            ErrorKind::UnexpectedKeyName,
            tk.position.clone(),
        ));
    }
    Ok(())
}

fn parse_mapping_value(ctx: &mut Context) -> Result<Node, ParseError> {
    let key_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::MappingKeyUndefined, Position::start()))?;
    let key = parse_map_key(&key_tk)
        .ok_or_else(|| ParseError::new(ErrorKind::MappingKeyUndefined, key_tk.position.clone()))?;
    validate_map_key(&key_tk)?;
    ctx.progress(1); // to the ':' token
    let colon_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::MappingKeyUndefined, key_tk.position.clone()))?;
    ctx.progress(1); // to the value token
    let value = if ctx.current_token().is_none() {
        Node::Null(null_token(colon_tk.position.clone()))
    } else {
        match parse_token(ctx)? {
            Some(node) => node,
            None => Node::Null(null_token(colon_tk.position.clone())),
        }
    };

    // `key:` followed by a same-column string that is not itself a key or
    // sequence entry means a sibling key lost its colon.
    let key_column = key.token().position.column;
    if key_column == value.token().position.column && matches!(value, Node::String(_)) {
        let continues = matches!(
            ctx.next_token(),
            Some(ntk) if matches!(ntk.kind, TokenKind::MappingValue | TokenKind::SequenceEntry)
        );
        if !continues {
            return Err(ParseError::new(
                ErrorKind::ExpectedColon,
                value.token().position.clone(),
            ));
        }
    }

    let mut values = vec![MappingValueNode {
        start: colon_tk.clone(),
        key,
        value,
    }];

    // Absorb sibling pairs at the same key column, flattening nested
    // mapping results into this group.
    loop {
        let sibling = match (ctx.next_token(), ctx.after_next_token()) {
            (Some(ntk), Some(antk)) => {
                antk.kind == TokenKind::MappingValue && ntk.position.column == key_column
            }
            _ => false,
        };
        if !sibling {
            break;
        }
        ctx.progress(1);
        match parse_token(ctx)? {
            Some(Node::Mapping(mapping)) => values.extend(mapping.values),
            Some(Node::MappingValue(pair)) => values.push(*pair),
            Some(other) => {
                return Err(ParseError::new(
                    ErrorKind::InvalidMappingValue(other.type_name()),
                    other.token().position.clone(),
                ));
            }
            None => break,
        }
    }

    if values.len() == 1 {
        let pair = values.remove(0);
        return Ok(Node::MappingValue(Box::new(pair)));
    }
    Ok(Node::Mapping(Box::new(MappingNode {
        start: colon_tk,
        end: None,
        is_flow_style: false,
        values,
    })))
}

fn parse_flow_mapping(ctx: &mut Context) -> Result<Node, ParseError> {
    let start_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::UnbalancedFlow, Position::start()))?;
    let mut node = MappingNode {
        start: start_tk.clone(),
        end: None,
        is_flow_style: true,
        values: Vec::new(),
    };
    ctx.progress(1); // skip '{'
    while ctx.next() {
        let (kind, position) = match ctx.current_token() {
            Some(tk) => (tk.kind, tk.position.clone()),
            None => break,
        };
        if kind == TokenKind::MappingEnd {
            node.end = ctx.current_token().cloned();
            break;
        }
        if kind == TokenKind::CollectEntry {
            ctx.progress(1);
            continue;
        }
        match parse_token(ctx)? {
            Some(Node::MappingValue(pair)) => node.values.push(*pair),
            Some(other) => {
                return Err(ParseError::new(
                    ErrorKind::FlowMappingEntry,
                    other.token().position.clone(),
                ));
            }
            None => return Err(ParseError::new(ErrorKind::FlowMappingEntry, position)),
        }
        ctx.progress(1);
    }
    if node.end.is_none() {
        return Err(ParseError::new(
            ErrorKind::UnbalancedFlow,
            start_tk.position.clone(),
        ));
    }
    Ok(Node::Mapping(Box::new(node)))
}

fn parse_flow_sequence(ctx: &mut Context) -> Result<Node, ParseError> {
    let start_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::UnbalancedFlow, Position::start()))?;
    let mut node = SequenceNode {
        start: start_tk.clone(),
        end: None,
        is_flow_style: true,
        values: Vec::new(),
    };
    ctx.progress(1); // skip '['
    while ctx.next() {
        let kind = match ctx.current_token() {
            Some(tk) => tk.kind,
            None => break,
        };
        if kind == TokenKind::SequenceEnd {
            node.end = ctx.current_token().cloned();
            break;
        }
        if kind == TokenKind::CollectEntry {
            ctx.progress(1);
            continue;
        }
        if let Some(value) = parse_token(ctx)? {
            node.values.push(value);
        }
        ctx.progress(1);
    }
    if node.end.is_none() {
        return Err(ParseError::new(
            ErrorKind::UnbalancedFlow,
            start_tk.position.clone(),
        ));
    }
    Ok(Node::Sequence(Box::new(node)))
}

fn parse_sequence_entry(ctx: &mut Context) -> Result<Node, ParseError> {
    let start_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::SequenceValueUndefined, Position::start()))?;
    let cur_column = start_tk.position.column;
    let mut values = Vec::new();
    loop {
        // current token is the '-'
        let entry_pos = ctx
            .current_token()
            .map_or_else(|| start_tk.position.clone(), |tk| tk.position.clone());
        ctx.progress(1); // skip the '-' token
        match parse_token(ctx)? {
            Some(value) => values.push(value),
            None => {
                return Err(ParseError::new(
                    ErrorKind::SequenceValueUndefined,
                    entry_pos,
                ));
            }
        }
        match ctx.next_token() {
            Some(tk)
                if tk.kind == TokenKind::SequenceEntry && tk.position.column == cur_column =>
            {
                ctx.progress(1);
            }
            _ => break,
        }
    }
    Ok(Node::Sequence(Box::new(SequenceNode {
        start: start_tk,
        end: None,
        is_flow_style: false,
        values,
    })))
}

fn parse_anchor(ctx: &mut Context) -> Result<Node, ParseError> {
    let start_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::AnchorNameUndefined, Position::start()))?;
    if ctx.next_token().is_none() {
        return Err(ParseError::new(
            ErrorKind::AnchorNameUndefined,
            start_tk.position.clone(),
        ));
    }
    ctx.progress(1); // skip the '&' token
    let name = match parse_token(ctx)? {
        Some(node) => node,
        None => {
            return Err(ParseError::new(
                ErrorKind::AnchorNameUndefined,
                start_tk.position.clone(),
            ));
        }
    };
    if ctx.next_token().is_none() {
        return Err(ParseError::new(
            ErrorKind::AnchorValueUndefined,
            name.token().position.clone(),
        ));
    }
    ctx.progress(1);
    let value = match parse_token(ctx)? {
        Some(node) => node,
        None => {
            return Err(ParseError::new(
                ErrorKind::AnchorValueUndefined,
                name.token().position.clone(),
            ));
        }
    };
    Ok(Node::Anchor(Box::new(AnchorNode {
        start: start_tk,
        name,
        value,
    })))
}

fn parse_alias(ctx: &mut Context) -> Result<Node, ParseError> {
    let start_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::AliasNameUndefined, Position::start()))?;
    if ctx.next_token().is_none() {
        return Err(ParseError::new(
            ErrorKind::AliasNameUndefined,
            start_tk.position.clone(),
        ));
    }
    ctx.progress(1); // skip the '*' token
    let name = match parse_token(ctx)? {
        Some(node) => node,
        None => {
            return Err(ParseError::new(
                ErrorKind::AliasNameUndefined,
                start_tk.position.clone(),
            ));
        }
    };
    Ok(Node::Alias(Box::new(AliasNode {
        start: start_tk,
        value: name,
    })))
}

fn parse_directive(ctx: &mut Context) -> Result<Node, ParseError> {
    let start_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::DirectiveValueUndefined, Position::start()))?;
    ctx.progress(1); // skip the directive token
    if ctx.current_token().is_none() {
        return Err(ParseError::new(
            ErrorKind::DirectiveValueUndefined,
            start_tk.position.clone(),
        ));
    }
    let value = match parse_token(ctx)? {
        Some(node) => node,
        None => {
            return Err(ParseError::new(
                ErrorKind::DirectiveValueUndefined,
                start_tk.position.clone(),
            ));
        }
    };
    ctx.progress(1);
    match ctx.current_token() {
        Some(tk) if tk.kind == TokenKind::DocumentHeader => {}
        Some(tk) => {
            return Err(ParseError::new(
                ErrorKind::DocumentNotStarted,
                tk.position.clone(),
            ));
        }
        None => {
            return Err(ParseError::new(
                ErrorKind::DocumentNotStarted,
                start_tk.position.clone(),
            ));
        }
    }
    Ok(Node::Directive(Box::new(DirectiveNode {
        start: start_tk,
        value,
    })))
}

fn parse_tag(ctx: &mut Context) -> Result<Node, ParseError> {
    let start_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::TagValueUndefined, Position::start()))?;
    ctx.progress(1); // skip the tag token
    if ctx.current_token().is_none() {
        return Err(ParseError::new(
            ErrorKind::TagValueUndefined,
            start_tk.position.clone(),
        ));
    }
    let value = match parse_token(ctx)? {
        Some(node) => node,
        None => {
            return Err(ParseError::new(
                ErrorKind::TagValueUndefined,
                start_tk.position.clone(),
            ));
        }
    };
    Ok(Node::Tag(Box::new(TagNode {
        start: start_tk,
        value,
    })))
}

fn parse_literal(ctx: &mut Context) -> Result<Node, ParseError> {
    let start_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::RequiredStringToken, Position::start()))?;
    // the scanner records the header option as written; reject anything
    // outside "", "+", "-", or a single digit here
    let opt = &start_tk.value[1..];
    let valid = matches!(opt, "" | "+" | "-")
        || (opt.len() == 1 && opt.as_bytes()[0].is_ascii_digit());
    if !valid {
        return Err(ParseError::new(
            ErrorKind::InvalidLiteralHeader,
            start_tk.position.clone(),
        ));
    }
    ctx.progress(1); // skip the '|' / '>' token
    if ctx.current_token().is_none() {
        return Err(ParseError::new(
            ErrorKind::RequiredStringToken,
            start_tk.position.clone(),
        ));
    }
    match parse_token(ctx)? {
        Some(Node::String(body)) => Ok(Node::Literal(Box::new(LiteralNode {
            start: start_tk,
            value: body,
        }))),
        Some(other) => Err(ParseError::new(
            ErrorKind::RequiredStringToken,
            other.token().position.clone(),
        )),
        None => Err(ParseError::new(
            ErrorKind::RequiredStringToken,
            start_tk.position.clone(),
        )),
    }
}

fn parse_document(ctx: &mut Context) -> Result<Node, ParseError> {
    let start_tk = ctx
        .current_token()
        .cloned()
        .ok_or_else(|| ParseError::new(ErrorKind::DocumentNotStarted, Position::start()))?;
    ctx.progress(1); // skip the '---' token
    let body = match parse_token(ctx)? {
        Some(node) => node,
        None => Node::Null(null_token(start_tk.position.clone())),
    };
    let mut end = None;
    if let Some(ntk) = ctx.next_token() {
        if ntk.kind == TokenKind::DocumentEnd {
            end = Some(ntk.clone());
            ctx.progress(1);
        }
    }
    Ok(Node::Document(Box::new(Document {
        start: Some(start_tk),
        end,
        body,
    })))
}

/// Parse the node starting at the current token. Returns `Ok(None)` for
/// tokens no sub-parser claims (the outer loop skips them).
fn parse_token(ctx: &mut Context) -> Result<Option<Node>, ParseError> {
    let Some(tk) = ctx.current_token() else {
        return Ok(None);
    };
    if tk.next_kind == Some(TokenKind::MappingValue) {
        return parse_mapping_value(ctx).map(Some);
    }
    if let Some(node) = Node::scalar_from(tk) {
        return Ok(Some(node));
    }
    match tk.kind {
        TokenKind::DocumentHeader => parse_document(ctx).map(Some),
        TokenKind::MappingStart => parse_flow_mapping(ctx).map(Some),
        TokenKind::SequenceStart => parse_flow_sequence(ctx).map(Some),
        TokenKind::SequenceEntry => parse_sequence_entry(ctx).map(Some),
        TokenKind::Anchor => parse_anchor(ctx).map(Some),
        TokenKind::Alias => parse_alias(ctx).map(Some),
        TokenKind::Directive => parse_directive(ctx).map(Some),
        TokenKind::Tag => parse_tag(ctx).map(Some),
        TokenKind::Literal | TokenKind::Folded => parse_literal(ctx).map(Some),
        _ => Ok(None),
    }
}

/// Parse a token stream into a [`File`].
///
/// Top-level nodes that are not explicit documents are wrapped in one
/// with no start/end markers. An empty stream yields a single document
/// whose body is null.
///
/// # Errors
///
/// Returns the first syntax error, carrying the offending token's
/// position.
pub fn parse(tokens: Tokens, mode: Mode) -> Result<File, ParseError> {
    let mut ctx = Context::new(tokens, mode);
    let mut file = File {
        name: None,
        docs: Vec::new(),
    };
    while ctx.next() {
        if let Some(node) = parse_token(&mut ctx)? {
            match node {
                Node::Document(doc) => file.docs.push(*doc),
                body => file.docs.push(Document {
                    start: None,
                    end: None,
                    body,
                }),
            }
        }
        ctx.progress(1);
    }
    if file.docs.is_empty() {
        file.docs.push(Document {
            start: None,
            end: None,
            body: Node::Null(null_token(Position::start())),
        });
    }
    log::debug!("parsed {} documents", file.docs.len());
    Ok(file)
}

/// Tokenize and parse a byte buffer.
///
/// Input is treated as UTF-8; invalid sequences are replaced rather than
/// rejected, so position reporting survives encoding damage.
///
/// # Errors
///
/// Returns the first syntax error.
pub fn parse_bytes(bytes: &[u8], mode: Mode) -> Result<File, ParseError> {
    let src = String::from_utf8_lossy(bytes);
    parse(tokenize(&src), mode)
}

/// Read a path into memory and parse it. The returned file's `name` is
/// the path.
///
/// # Errors
///
/// Returns the read error or the first syntax error.
pub fn parse_file(path: impl AsRef<Path>, mode: Mode) -> Result<File, Error> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)?;
    let mut file = parse_bytes(src.as_bytes(), mode)?;
    file.name = Some(path.display().to_string());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(src: &str) -> Result<File, ParseError> {
        parse(tokenize(src), Mode::empty())
    }

    fn body(src: &str) -> Node {
        let file = parse_str(src).unwrap();
        assert_eq!(file.docs.len(), 1, "{src}");
        file.docs.into_iter().next().unwrap().body
    }

    #[test]
    fn test_parse_simple_scalar() {
        assert!(matches!(body("hello"), Node::String(tk) if tk.value == "hello"));
        assert!(matches!(body("42"), Node::Integer(tk) if tk.value == "42"));
        assert!(matches!(body("~"), Node::Null(_)));
        assert!(matches!(body("true"), Node::Bool(_)));
        assert!(matches!(body("3.14"), Node::Float(_)));
    }

    #[test]
    fn test_parse_single_pair() {
        let Node::MappingValue(pair) = body("a: 1") else {
            panic!("expected bare mapping value");
        };
        assert!(matches!(&pair.key, Node::String(tk) if tk.value == "a"));
        assert!(matches!(&pair.value, Node::Integer(tk) if tk.value == "1"));
    }

    #[test]
    fn test_parse_block_mapping() {
        let Node::Mapping(mapping) = body("a: 1\nb: 2") else {
            panic!("expected mapping");
        };
        assert!(!mapping.is_flow_style);
        assert_eq!(mapping.values.len(), 2);
        let key_columns: Vec<_> = mapping
            .values
            .iter()
            .map(|pair| pair.key.token().position.column)
            .collect();
        assert_eq!(key_columns, vec![1, 1]);
    }

    #[test]
    fn test_parse_nested_mapping() {
        let Node::MappingValue(pair) = body("a:\n  b: 1") else {
            panic!("expected bare mapping value");
        };
        assert!(matches!(&pair.key, Node::String(tk) if tk.value == "a"));
        let Node::MappingValue(inner) = &pair.value else {
            panic!("expected nested pair");
        };
        assert!(matches!(&inner.key, Node::String(tk) if tk.value == "b"));
    }

    #[test]
    fn test_parse_flow_mapping() {
        let Node::Mapping(mapping) = body("{a: 1, b: 2}") else {
            panic!("expected mapping");
        };
        assert!(mapping.is_flow_style);
        assert_eq!(mapping.values.len(), 2);
        assert!(mapping.end.is_some());
    }

    #[test]
    fn test_parse_flow_sequence() {
        let Node::Sequence(seq) = body("[1, 2, 3]") else {
            panic!("expected sequence");
        };
        assert!(seq.is_flow_style);
        assert_eq!(seq.values.len(), 3);
    }

    #[test]
    fn test_parse_block_sequence() {
        let Node::Sequence(seq) = body("- 1\n- 2\n- 3") else {
            panic!("expected sequence");
        };
        assert!(!seq.is_flow_style);
        assert_eq!(seq.values.len(), 3);
    }

    #[test]
    fn test_parse_nested_sequence() {
        let Node::Sequence(outer) = body("- - 1") else {
            panic!("expected sequence");
        };
        assert_eq!(outer.values.len(), 1);
        assert!(matches!(&outer.values[0], Node::Sequence(_)));
    }

    #[test]
    fn test_parse_anchor_alias() {
        let Node::Mapping(mapping) = body("a: &x 1\nb: *x") else {
            panic!("expected mapping");
        };
        let Node::Anchor(anchor) = &mapping.values[0].value else {
            panic!("expected anchor");
        };
        assert!(matches!(&anchor.name, Node::String(tk) if tk.value == "x"));
        assert!(matches!(&anchor.value, Node::Integer(_)));
        let Node::Alias(alias) = &mapping.values[1].value else {
            panic!("expected alias");
        };
        assert!(matches!(&alias.value, Node::String(tk) if tk.value == "x"));
    }

    #[test]
    fn test_parse_merge_key() {
        let Node::MappingValue(pair) = body("<<: *base") else {
            panic!("expected bare mapping value");
        };
        assert!(matches!(&pair.key, Node::MergeKey(_)));
        assert!(matches!(&pair.value, Node::Alias(_)));
    }

    #[test]
    fn test_parse_null_key() {
        let Node::MappingValue(pair) = body("~: 1") else {
            panic!("expected bare mapping value");
        };
        assert!(matches!(&pair.key, Node::Null(_)));
    }

    #[test]
    fn test_parse_explicit_document() {
        let file = parse_str("---\nfoo\n...").unwrap();
        assert_eq!(file.docs.len(), 1);
        let doc = &file.docs[0];
        assert!(doc.start.is_some());
        assert!(doc.end.is_some());
        assert!(matches!(&doc.body, Node::String(tk) if tk.value == "foo"));
    }

    #[test]
    fn test_parse_multi_document() {
        let file = parse_str("---\na\n---\nb").unwrap();
        assert_eq!(file.docs.len(), 2);
    }

    #[test]
    fn test_parse_literal() {
        let Node::MappingValue(pair) = body("key: |\n  hello\n  world\n") else {
            panic!("expected bare mapping value");
        };
        let Node::Literal(literal) = &pair.value else {
            panic!("expected literal");
        };
        assert_eq!(literal.start.value, "|");
        assert_eq!(literal.value.value, "hello\nworld\n");
    }

    #[test]
    fn test_parse_tag() {
        let Node::MappingValue(pair) = body("a: !!str foo") else {
            panic!("expected bare mapping value");
        };
        let Node::Tag(tag) = &pair.value else {
            panic!("expected tag");
        };
        assert_eq!(tag.start.value, "!!str");
        assert!(matches!(&tag.value, Node::String(tk) if tk.value == "foo"));
    }

    #[test]
    fn test_parse_empty_input() {
        let file = parse_str("").unwrap();
        assert_eq!(file.docs.len(), 1);
        assert!(matches!(&file.docs[0].body, Node::Null(_)));
    }

    #[test]
    fn test_error_non_string_key() {
        let err = parse_str("1: x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MappingKeyUndefined);
        assert_eq!(err.position.column, 1);
    }

    #[test]
    fn test_error_sibling_key_missing_colon() {
        let err = parse_str("a:\nb").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedColon);
        assert_eq!(err.position.line, 2);
    }

    #[test]
    fn test_error_flow_mapping_plain_entry() {
        let err = parse_str("{a:1}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::FlowMappingEntry);
    }

    #[test]
    fn test_error_unbalanced_flow() {
        let err = parse_str("{a: 1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnbalancedFlow);
        let err = parse_str("[1, 2").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnbalancedFlow);
    }

    #[test]
    fn test_error_directive_without_header() {
        let err = parse_str("%YAML\nfoo").unwrap_err();
        assert_eq!(err.kind, ErrorKind::DocumentNotStarted);
    }

    #[test]
    fn test_error_invalid_literal_header() {
        let err = parse_str("key: |junk\n  body\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidLiteralHeader);
        assert_eq!(err.position.column, 6);
    }

    #[test]
    fn test_error_anchor_without_value() {
        let err = parse_str("&x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::AnchorValueUndefined);
    }

    #[test]
    fn test_error_anchor_without_name() {
        let err = parse_str("&").unwrap_err();
        assert_eq!(err.kind, ErrorKind::AnchorNameUndefined);
    }

    #[test]
    fn test_comments_dropped_from_tree() {
        let file = parse_str("a: 1 # note\n").unwrap();
        assert!(matches!(&file.docs[0].body, Node::MappingValue(_)));
        let with_comments = parse(tokenize("a: 1 # note\n"), Mode::PARSE_COMMENTS).unwrap();
        assert_eq!(file.docs.len(), with_comments.docs.len());
    }

    #[test]
    fn test_mode_bits() {
        let mode = Mode::empty() | Mode::PARSE_COMMENTS;
        assert!(mode.contains(Mode::PARSE_COMMENTS));
        assert!(!Mode::empty().contains(Mode::PARSE_COMMENTS));
    }
}
