// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Error types for YAML parsing.
//!
//! Every syntax error carries the offending token's position and a short
//! message. User-facing formatting (line extraction, carets) is the
//! caller's responsibility.

use crate::token::Position;
use derive_more::Display;

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// Block scalar indicator followed by a bad option.
    #[display("invalid literal header")]
    InvalidLiteralHeader,

    /// A mapping key token where none is usable.
    #[display("unexpected mapping key. key is undefined")]
    MappingKeyUndefined,

    /// A plain-scalar key spanning multiple lines.
    #[display("unexpected key name")]
    UnexpectedKeyName,

    /// `key:` followed by a same-column scalar that is really a sibling
    /// key missing its colon.
    #[display("could not find expected ':' token")]
    ExpectedColon,

    /// A flow mapping element that is not a key/value pair.
    #[display("failed to parse flow mapping value node")]
    FlowMappingEntry,

    /// A flow collection with no closing `}` or `]`.
    #[display("unbalanced flow container")]
    UnbalancedFlow,

    /// A sibling mapping entry that parsed to neither a pair nor a
    /// mapping.
    #[display("failed to parse mapping value node. node is {_0}")]
    InvalidMappingValue(&'static str),

    /// `&` with nothing after it.
    #[display("unexpected anchor. anchor name is undefined")]
    AnchorNameUndefined,

    /// `&name` with no value following.
    #[display("unexpected anchor. anchor value is undefined")]
    AnchorValueUndefined,

    /// `*` with nothing after it.
    #[display("unexpected alias. alias name is undefined")]
    AliasNameUndefined,

    /// `- ` with no value following.
    #[display("sequence entry value is undefined")]
    SequenceValueUndefined,

    /// A directive with no value following.
    #[display("directive value is undefined")]
    DirectiveValueUndefined,

    /// A directive whose value is not followed by `---`.
    #[display("unexpected directive value. document not started")]
    DocumentNotStarted,

    /// `!tag` with no value following.
    #[display("tag value is undefined")]
    TagValueUndefined,

    /// A `|`/`>` header not followed by the block scalar body.
    #[display("unexpected token. required string token")]
    RequiredStringToken,
}

/// A syntax error with the offending token's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// The position of the token the error refers to.
    pub position: Position,
}

impl ParseError {
    /// Create a new error at a position.
    #[must_use]
    pub const fn new(kind: ErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ParseError {}

/// Any failure from the file-level entry point: a syntax error or the
/// I/O error that prevented reading the path.
#[derive(Debug)]
pub enum Error {
    /// A syntax error from parsing.
    Syntax(ParseError),
    /// An I/O error from reading a file.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Syntax(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
