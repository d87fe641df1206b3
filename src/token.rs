// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Token types for the YAML scanner.
//!
//! A [`Token`] carries three views of the same piece of source text:
//! - `value`: the semantic text (quotes stripped, double-quote escapes
//!   applied, block-scalar header indicators included as written)
//! - `origin`: the verbatim lexeme, including surrounding whitespace
//! - `position`: line/column/offset plus the indent counters of the line
//!   that produced it
//!
//! Plain scalars are classified by shape at flush time (`Null`, `Bool`,
//! the integer family, `Float`, `Infinity`, `Nan`, or `String`); quoted
//! scalars always keep their quote kind regardless of content.

/// A source position.
///
/// `line`, `column`, and `offset` are 1-based. `indent_level` counts
/// logical nesting steps, `indent_num` counts the leading spaces of the
/// line that produced the token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub indent_level: usize,
    pub indent_num: usize,
}

impl Position {
    /// Position of the first character of a document.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 1,
            indent_level: 0,
            indent_num: 0,
        }
    }
}

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Structural
    /// `{` flow mapping start
    MappingStart,
    /// `}` flow mapping end
    MappingEnd,
    /// `[` flow sequence start
    SequenceStart,
    /// `]` flow sequence end
    SequenceEnd,
    /// `,` flow entry separator
    CollectEntry,
    /// `-` block sequence entry indicator
    SequenceEntry,
    /// `:` mapping value indicator
    MappingValue,
    /// `---` document start
    DocumentHeader,
    /// `...` document end
    DocumentEnd,

    // Markers
    /// `&` anchor indicator
    Anchor,
    /// `*` alias indicator
    Alias,
    /// `!…` tag
    Tag,
    /// `%` directive indicator (also emitted for `? `)
    Directive,
    /// `<<` merge key
    MergeKey,
    /// `#…` comment
    Comment,

    // Scalars
    /// Plain scalar
    String,
    /// Single-quoted scalar
    SingleQuote,
    /// Double-quoted scalar
    DoubleQuote,
    /// `|` literal block scalar header
    Literal,
    /// `>` folded block scalar header
    Folded,
    /// `null`, `~`, or empty
    Null,
    /// `true`/`false`/`yes`/`no`/`on`/`off`
    Bool,
    /// Decimal integer
    Integer,
    /// `0b…` binary integer
    BinaryInteger,
    /// `0o…` or leading-zero octal integer
    OctetInteger,
    /// `0x…` hexadecimal integer
    HexInteger,
    /// Floating-point number
    Float,
    /// `.inf` / `-.inf`
    Infinity,
    /// `.nan`
    Nan,
}

impl TokenKind {
    /// Returns `true` if this kind is a scalar (a token the parser can
    /// turn into a scalar node directly).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::String
                | Self::SingleQuote
                | Self::DoubleQuote
                | Self::Null
                | Self::Bool
                | Self::Integer
                | Self::BinaryInteger
                | Self::OctetInteger
                | Self::HexInteger
                | Self::Float
                | Self::Infinity
                | Self::Nan
        )
    }

    /// Returns `true` for the string family (plain and quoted scalars).
    #[must_use]
    pub const fn is_string(self) -> bool {
        matches!(self, Self::String | Self::SingleQuote | Self::DoubleQuote)
    }

    /// Returns `true` for any of the integer kinds.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::BinaryInteger | Self::OctetInteger | Self::HexInteger
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MappingStart => write!(f, "'{{'"),
            Self::MappingEnd => write!(f, "'}}'"),
            Self::SequenceStart => write!(f, "'['"),
            Self::SequenceEnd => write!(f, "']'"),
            Self::CollectEntry => write!(f, "','"),
            Self::SequenceEntry => write!(f, "'-'"),
            Self::MappingValue => write!(f, "':'"),
            Self::DocumentHeader => write!(f, "'---'"),
            Self::DocumentEnd => write!(f, "'...'"),
            Self::Anchor => write!(f, "anchor"),
            Self::Alias => write!(f, "alias"),
            Self::Tag => write!(f, "tag"),
            Self::Directive => write!(f, "directive"),
            Self::MergeKey => write!(f, "'<<'"),
            Self::Comment => write!(f, "comment"),
            Self::String => write!(f, "plain scalar"),
            Self::SingleQuote => write!(f, "single-quoted scalar"),
            Self::DoubleQuote => write!(f, "double-quoted scalar"),
            Self::Literal => write!(f, "'|'"),
            Self::Folded => write!(f, "'>'"),
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "bool"),
            Self::Integer => write!(f, "integer"),
            Self::BinaryInteger => write!(f, "binary integer"),
            Self::OctetInteger => write!(f, "octal integer"),
            Self::HexInteger => write!(f, "hex integer"),
            Self::Float => write!(f, "float"),
            Self::Infinity => write!(f, "infinity"),
            Self::Nan => write!(f, "nan"),
        }
    }
}

/// A single token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The semantic text of the token.
    pub value: String,
    /// The verbatim lexeme, including surrounding whitespace and quotes.
    pub origin: String,
    /// Where the token's originating character sits in the source.
    pub position: Position,
    /// The kind of the following token in the stream, assigned when the
    /// token is appended. The parser uses it to detect `X :` pairings
    /// without branching on lookahead.
    pub next_kind: Option<TokenKind>,
}

impl Token {
    fn with_kind(kind: TokenKind, value: String, origin: String, position: Position) -> Self {
        Self {
            kind,
            value,
            origin,
            position,
            next_kind: None,
        }
    }

    /// Create a token from buffered plain text, classifying its kind by
    /// shape.
    #[must_use]
    pub fn new(value: String, origin: String, position: Position) -> Self {
        let kind = classify(&value);
        Self::with_kind(kind, value, origin, position)
    }

    /// Create a plain string token regardless of the value's shape.
    /// Block-scalar bodies use this so a body of `123` stays a string.
    #[must_use]
    pub fn string(value: String, origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::String, value, origin, position)
    }

    /// Create a single-quoted scalar token.
    #[must_use]
    pub fn single_quote(value: String, origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::SingleQuote, value, origin, position)
    }

    /// Create a double-quoted scalar token.
    #[must_use]
    pub fn double_quote(value: String, origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::DoubleQuote, value, origin, position)
    }

    /// Create a literal block-scalar header token (`|` plus its option).
    #[must_use]
    pub fn literal(value: String, origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::Literal, value, origin, position)
    }

    /// Create a folded block-scalar header token (`>` plus its option).
    #[must_use]
    pub fn folded(value: String, origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::Folded, value, origin, position)
    }

    /// Create a tag token. The value keeps the leading `!`.
    #[must_use]
    pub fn tag(value: String, origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::Tag, value, origin, position)
    }

    /// Create a comment token. The value excludes the leading `#`.
    #[must_use]
    pub fn comment(value: String, origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::Comment, value, origin, position)
    }

    /// Create an anchor indicator token (`&`).
    #[must_use]
    pub fn anchor(origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::Anchor, "&".to_owned(), origin, position)
    }

    /// Create an alias indicator token (`*`).
    #[must_use]
    pub fn alias(origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::Alias, "*".to_owned(), origin, position)
    }

    /// Create a flow mapping start token (`{`).
    #[must_use]
    pub fn mapping_start(origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::MappingStart, "{".to_owned(), origin, position)
    }

    /// Create a flow mapping end token (`}`).
    #[must_use]
    pub fn mapping_end(origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::MappingEnd, "}".to_owned(), origin, position)
    }

    /// Create a flow sequence start token (`[`).
    #[must_use]
    pub fn sequence_start(origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::SequenceStart, "[".to_owned(), origin, position)
    }

    /// Create a flow sequence end token (`]`).
    #[must_use]
    pub fn sequence_end(origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::SequenceEnd, "]".to_owned(), origin, position)
    }

    /// Create a flow entry separator token (`,`).
    #[must_use]
    pub fn collect_entry(origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::CollectEntry, ",".to_owned(), origin, position)
    }

    /// Create a block sequence entry token (`-`).
    #[must_use]
    pub fn sequence_entry(origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::SequenceEntry, "-".to_owned(), origin, position)
    }

    /// Create a mapping value indicator token (`:`).
    #[must_use]
    pub fn mapping_value(position: Position) -> Self {
        Self::with_kind(TokenKind::MappingValue, ":".to_owned(), ":".to_owned(), position)
    }

    /// Create a document header token (`---`).
    #[must_use]
    pub fn document_header(position: Position) -> Self {
        Self::with_kind(
            TokenKind::DocumentHeader,
            "---".to_owned(),
            "---".to_owned(),
            position,
        )
    }

    /// Create a document end token (`...`).
    #[must_use]
    pub fn document_end(position: Position) -> Self {
        Self::with_kind(
            TokenKind::DocumentEnd,
            "...".to_owned(),
            "...".to_owned(),
            position,
        )
    }

    /// Create a directive token.
    #[must_use]
    pub fn directive(position: Position) -> Self {
        Self::with_kind(TokenKind::Directive, "%".to_owned(), "%".to_owned(), position)
    }

    /// Create a merge key token (`<<`).
    #[must_use]
    pub fn merge_key(origin: String, position: Position) -> Self {
        Self::with_kind(TokenKind::MergeKey, "<<".to_owned(), origin, position)
    }
}

/// An ordered token stream.
///
/// Appending a token assigns the previous token's forward kind link.
/// Tokens are never otherwise mutated after being appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    /// Create an empty stream.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a token, linking the previous token's `next_kind` to it.
    pub fn push(&mut self, token: Token) {
        if let Some(last) = self.0.last_mut() {
            last.next_kind = Some(token.kind);
        }
        self.0.push(token);
    }

    /// Consume the stream into its tokens.
    #[must_use]
    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }
}

impl std::ops::Deref for Tokens {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Classify buffered plain text by shape. The null/infinity/nan literal
/// sets are exact; only the boolean words match case-insensitively.
fn classify(value: &str) -> TokenKind {
    match value {
        "null" | "~" | "" => return TokenKind::Null,
        _ => {}
    }
    if ["true", "false", "yes", "no", "on", "off"]
        .iter()
        .any(|word| value.eq_ignore_ascii_case(word))
    {
        return TokenKind::Bool;
    }
    if matches!(value, ".inf" | "-.inf") {
        return TokenKind::Infinity;
    }
    if value == ".nan" {
        return TokenKind::Nan;
    }
    if let Some(kind) = classify_number(value) {
        return kind;
    }
    TokenKind::String
}

fn classify_number(value: &str) -> Option<TokenKind> {
    if let Some(rest) = value.strip_prefix("0b") {
        if !rest.is_empty() && rest.bytes().all(|b| b == b'0' || b == b'1') {
            return Some(TokenKind::BinaryInteger);
        }
    }
    if let Some(rest) = value.strip_prefix("0o") {
        if !rest.is_empty() && rest.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
            return Some(TokenKind::OctetInteger);
        }
    }
    if let Some(rest) = value.strip_prefix("0x") {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Some(TokenKind::HexInteger);
        }
    }
    if value.len() > 1
        && value.starts_with('0')
        && value.bytes().all(|b| (b'0'..=b'7').contains(&b))
    {
        return Some(TokenKind::OctetInteger);
    }
    let unsigned = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);
    if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Some(TokenKind::Integer);
    }
    // IEEE-754 textual form: digits with '.', exponent, or both. The
    // character filter keeps word-forms like "infinity" out of f64's
    // permissive parser.
    let float_chars = value
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if float_chars && value.bytes().any(|b| b.is_ascii_digit()) && value.parse::<f64>().is_ok() {
        return Some(TokenKind::Float);
    }
    None
}
