// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! A YAML syntax reader.
//!
//! This crate turns UTF-8 text into a tree of typed syntactic nodes in
//! two phases:
//! - a **scanner** ([`tokenize`]) that converts characters into a flat,
//!   position-tagged token stream while tracking YAML's
//!   indentation-sensitive block structure and flow nesting
//! - a **parser** ([`parse`], [`parse_bytes`], [`parse_file`]) that
//!   consumes the stream and builds documents of mappings, sequences,
//!   scalars, anchors, aliases, tags, and block scalars
//!
//! Scanning never fails; parsing aborts on the first syntax error with
//! the offending token's position. Alias resolution, schema typing, and
//! value decoding are the concern of layers above this crate.
//!
//! # Example
//!
//! ```
//! use yaml_syntax::{parse_bytes, Mode, Node};
//!
//! let file = parse_bytes(b"name: John\nage: 30\n", Mode::empty()).unwrap();
//! assert_eq!(file.docs.len(), 1);
//! match &file.docs[0].body {
//!     Node::Mapping(mapping) => assert_eq!(mapping.values.len(), 2),
//!     other => panic!("expected a mapping, got {}", other.type_name()),
//! }
//! ```

mod ast;
mod error;
mod parser;
mod scanner;
mod token;

pub use ast::{
    AliasNode, AnchorNode, DirectiveNode, Document, File, LiteralNode, MappingNode,
    MappingValueNode, Node, SequenceNode, TagNode,
};
pub use error::{Error, ErrorKind, ParseError};
pub use parser::{parse, parse_bytes, parse_file, Mode};
pub use scanner::tokenize;
pub use token::{Position, Token, TokenKind, Tokens};
