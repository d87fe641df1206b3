// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Indentation-aware YAML scanner.
//!
//! The scanner walks the source one character at a time, tracking:
//! - the current line's indent relative to the previous pinned column
//!   (`:` after a key, `-` at a sequence entry, and `<<` pin the column
//!   so nested blocks are told apart from same-level continuations)
//! - flow nesting (`{}` / `[]`), which changes what `,` means
//! - block-scalar mode (`|`, `>`), where newlines are written into the
//!   scalar body instead of terminating tokens
//!
//! Scanning never fails: malformed input still produces tokens whose
//! positions let the parser localize errors.

mod context;

use crate::token::{Position, Token, Tokens};
use context::Context;

/// The current line's indent classified against the previous line (or the
/// pinned column, when a delimiter pinned one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndentState {
    Equal,
    Up,
    Down,
    /// Mid-line: no indent decision applies.
    Keep,
}

#[derive(Debug)]
struct Scanner {
    line: usize,
    column: usize,
    offset: usize,
    prev_indent_level: usize,
    prev_indent_num: usize,
    prev_indent_column: usize,
    indent_level: usize,
    indent_num: usize,
    is_first_char_at_line: bool,
    is_anchor: bool,
    is_started_flow_sequence: bool,
    is_started_flow_map: bool,
    indent_state: IndentState,
    saved_pos: Option<Position>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 1,
            prev_indent_level: 0,
            prev_indent_num: 0,
            prev_indent_column: 0,
            indent_level: 0,
            indent_num: 0,
            is_first_char_at_line: true,
            is_anchor: false,
            is_started_flow_sequence: false,
            is_started_flow_map: false,
            indent_state: IndentState::Equal,
            saved_pos: None,
        }
    }

    fn pos(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.offset,
            indent_level: self.indent_level,
            indent_num: self.indent_num,
        }
    }

    /// Position `size` characters back from the cursor, for tokens whose
    /// text has already been consumed into the buffer.
    fn pos_back(&self, size: usize) -> Position {
        let mut pos = self.pos();
        pos.column = pos.column.saturating_sub(size).max(1);
        pos.offset = pos.offset.saturating_sub(size).max(1);
        pos
    }

    /// Flush the buffer as one token. A position saved at a line break
    /// wins over the computed one, so a plain scalar continued onto the
    /// next line reports its original column.
    fn buffered_token(&mut self, ctx: &mut Context) -> Option<Token> {
        if let Some(pos) = self.saved_pos.take() {
            return ctx.buffered_token(pos);
        }
        let pos = self.pos_back(ctx.buffered_size());
        ctx.buffered_token(pos)
    }

    fn add_buffered_token_if_exists(&mut self, ctx: &mut Context) {
        let token = self.buffered_token(ctx);
        ctx.add_token(token);
    }

    fn progress_column(&mut self, ctx: &mut Context, num: usize) {
        self.column += num;
        self.offset += num;
        ctx.progress(num);
    }

    fn progress_line(&mut self, ctx: &mut Context) {
        self.column = 1;
        self.line += 1;
        self.offset += 1;
        self.indent_num = 0;
        self.is_first_char_at_line = true;
        self.is_anchor = false;
        ctx.progress(1);
    }

    /// Advance over `count` already-scanned characters, keeping line and
    /// column accurate across interior newlines (quoted scalars may span
    /// lines).
    fn advance_over(&mut self, ctx: &mut Context, count: usize) {
        for _ in 0..count {
            if !ctx.next() {
                break;
            }
            if ctx.current_char() == '\n' {
                self.line += 1;
                self.column = 1;
                self.offset += 1;
                self.indent_num = 0;
            } else {
                self.column += 1;
                self.offset += 1;
            }
            ctx.progress(1);
        }
        self.is_first_char_at_line = false;
    }

    fn update_indent(&mut self, c: char) {
        if self.is_first_char_at_line && c == ' ' {
            self.indent_num += 1;
            return;
        }
        if !self.is_first_char_at_line {
            self.indent_state = IndentState::Keep;
            return;
        }

        if self.prev_indent_num < self.indent_num {
            self.indent_level = self.prev_indent_level + 1;
            self.indent_state = IndentState::Up;
        } else if self.prev_indent_num == self.indent_num {
            self.indent_level = self.prev_indent_level;
            self.indent_state = IndentState::Equal;
        } else {
            self.indent_state = IndentState::Down;
            if self.prev_indent_level > 0 {
                self.indent_level = self.prev_indent_level - 1;
            }
        }

        // A pinned column overrides the space-count comparison: indent is
        // column-based for block structure, not space-count-based.
        if self.prev_indent_column > 0 {
            if self.prev_indent_column < self.column {
                self.indent_state = IndentState::Up;
            } else if self.prev_indent_column == self.column {
                self.indent_state = IndentState::Equal;
            } else {
                self.indent_state = IndentState::Down;
            }
        }
        self.prev_indent_num = self.indent_num;
        self.prev_indent_column = 0;
        self.prev_indent_level = self.indent_level;
        self.is_first_char_at_line = false;
    }

    /// Accumulate one character of a block-scalar body. Literal mode
    /// writes newlines verbatim; folded and raw-folded modes join lines
    /// with a space. Leading spaces of continuation lines are consumed as
    /// indent.
    fn scan_literal(&mut self, ctx: &mut Context, c: char) {
        if c == '\n' {
            if ctx.is_literal {
                ctx.add_buf('\n');
            } else {
                ctx.add_buf(' ');
            }
            ctx.add_origin_buf(c);
            self.progress_line(ctx);
        } else if self.is_first_char_at_line && c == ' ' {
            ctx.add_origin_buf(c);
            self.progress_column(ctx, 1);
        } else {
            ctx.add_buf(c);
            ctx.add_origin_buf(c);
            self.progress_column(ctx, 1);
        }
    }

    /// Read a `|` or `>` header through its end of line. The option text
    /// is recorded as scanned; the parser validates it against the set
    /// `"" | "+" | "-" | digit` and reports bad headers at this token's
    /// position.
    fn scan_literal_header(&mut self, ctx: &mut Context) {
        let header = ctx.current_char();
        let header_pos = self.pos();
        ctx.add_origin_buf(header);
        let start = ctx.idx + 1;
        let mut idx = start;
        while let Some(c) = ctx.char_at(idx) {
            ctx.add_origin_buf(c);
            if c == '\n' {
                break;
            }
            idx += 1;
        }
        let opt = ctx.source(start, idx).trim_end_matches(' ').to_owned();
        let token = if header == '|' {
            ctx.is_literal = true;
            Token::literal(format!("|{opt}"), ctx.origin(), header_pos)
        } else {
            ctx.is_folded = true;
            Token::folded(format!(">{opt}"), ctx.origin(), header_pos)
        };
        ctx.add_token(Some(token));
        ctx.literal_opt = opt;
        let consumed = idx - ctx.idx;
        self.progress_column(ctx, consumed);
        ctx.reset_buffer();
        if ctx.next() {
            self.progress_line(ctx);
        }
    }

    /// Read a tag from `!` until a space or newline. The token value
    /// keeps the leading `!`.
    fn scan_tag(&mut self, ctx: &mut Context) {
        let pos = self.pos();
        ctx.add_origin_buf('!');
        let start = ctx.idx;
        let mut idx = start + 1;
        let mut terminator = None;
        while let Some(c) = ctx.char_at(idx) {
            ctx.add_origin_buf(c);
            if c == ' ' || c == '\n' {
                terminator = Some(c);
                break;
            }
            idx += 1;
        }
        let value = ctx.source(start, idx);
        ctx.add_token(Some(Token::tag(value, ctx.origin(), pos)));
        let consumed = idx - ctx.idx;
        match terminator {
            Some('\n') => {
                self.progress_column(ctx, consumed);
                self.progress_line(ctx);
            }
            Some(_) => self.progress_column(ctx, consumed + 1),
            None => self.progress_column(ctx, consumed),
        }
        ctx.reset_buffer();
    }

    /// Read a comment from `#` to the end of the line. A backslash
    /// immediately before the newline continues the comment.
    fn scan_comment(&mut self, ctx: &mut Context) {
        let pos = self.pos();
        ctx.add_origin_buf('#');
        let start = ctx.idx + 1;
        let mut idx = start;
        let mut saw_newline = false;
        while let Some(c) = ctx.char_at(idx) {
            ctx.add_origin_buf(c);
            if c == '\n' && (idx == start || ctx.char_at(idx - 1) != Some('\\')) {
                saw_newline = true;
                break;
            }
            idx += 1;
        }
        let value = ctx.source(start, idx);
        ctx.add_token(Some(Token::comment(value, ctx.origin(), pos)));
        let consumed = idx - ctx.idx;
        self.progress_column(ctx, consumed);
        if saw_newline {
            self.progress_line(ctx);
        }
        ctx.reset_buffer();
    }

    /// Read a quoted scalar. Double quotes get their escape sequences
    /// applied; single quotes keep `''` verbatim in the value (resolving
    /// it is the decoder's concern) but do not terminate on it.
    fn scan_quote(&mut self, ctx: &mut Context, quote: char) {
        let pos = self.pos();
        ctx.add_origin_buf(quote);
        let start = ctx.idx + 1;
        let mut idx = start;
        let mut value = String::new();
        loop {
            let Some(c) = ctx.char_at(idx) else { break };
            ctx.add_origin_buf(c);
            if c == quote {
                if quote == '\'' && ctx.char_at(idx + 1) == Some('\'') {
                    ctx.add_origin_buf('\'');
                    value.push_str("''");
                    idx += 2;
                    continue;
                }
                idx += 1;
                break;
            }
            if quote == '"' && c == '\\' {
                idx = self.scan_escape(ctx, idx, &mut value);
                continue;
            }
            value.push(c);
            idx += 1;
        }
        let token = if quote == '\'' {
            Token::single_quote(value, ctx.origin(), pos)
        } else {
            Token::double_quote(value, ctx.origin(), pos)
        };
        ctx.add_token(Some(token));
        let consumed = idx - ctx.idx;
        self.advance_over(ctx, consumed);
        ctx.reset_buffer();
    }

    /// Decode one backslash escape starting at `idx` (which points at the
    /// backslash). Returns the index after the escape.
    fn scan_escape(&self, ctx: &mut Context, idx: usize, value: &mut String) -> usize {
        let Some(esc) = ctx.char_at(idx + 1) else {
            value.push('\\');
            return idx + 1;
        };
        ctx.add_origin_buf(esc);
        let mut next = idx + 2;
        match esc {
            '0' => value.push('\0'),
            'a' => value.push('\x07'),
            'b' => value.push('\x08'),
            't' => value.push('\t'),
            'n' => value.push('\n'),
            'v' => value.push('\x0B'),
            'f' => value.push('\x0C'),
            'r' => value.push('\r'),
            'e' => value.push('\x1B'),
            '"' => value.push('"'),
            '/' => value.push('/'),
            '\\' => value.push('\\'),
            'N' => value.push('\u{0085}'),
            '_' => value.push('\u{00A0}'),
            'L' => value.push('\u{2028}'),
            'P' => value.push('\u{2029}'),
            'x' | 'u' | 'U' => {
                let digits = match esc {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let mut hex = String::new();
                while hex.len() < digits {
                    match ctx.char_at(next) {
                        Some(h) if h.is_ascii_hexdigit() => {
                            ctx.add_origin_buf(h);
                            hex.push(h);
                            next += 1;
                        }
                        _ => break,
                    }
                }
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if !hex.is_empty() => value.push(decoded),
                    _ => {
                        value.push('\\');
                        value.push(esc);
                        value.push_str(&hex);
                    }
                }
            }
            other => {
                value.push('\\');
                value.push(other);
            }
        }
        next
    }

    /// Handle a newline outside block-scalar mode: remember where the
    /// buffered scalar started, flush at end of source or after an anchor
    /// name, and join continuation lines with a single space.
    fn scan_new_line(&mut self, ctx: &mut Context, c: char) {
        if !ctx.buf_is_empty() && self.saved_pos.is_none() {
            self.saved_pos = Some(self.pos_back(ctx.buffered_size()));
        }
        if ctx.is_eos() || self.is_anchor {
            self.add_buffered_token_if_exists(ctx);
        }
        ctx.add_buf(' ');
        ctx.add_origin_buf(c);
        self.progress_line(ctx);
    }

    fn scan(&mut self, ctx: &mut Context) {
        while ctx.next() {
            let c = ctx.current_char();
            self.update_indent(c);
            if self.indent_state == IndentState::Down {
                self.add_buffered_token_if_exists(ctx);
                ctx.break_literal();
            } else if ctx.is_save_indent_mode() {
                self.scan_literal(ctx, c);
                continue;
            } else if self.indent_state == IndentState::Equal
                && !ctx.origin_is_empty()
                && !ctx.origin_starts_with_newline()
            {
                // An origin starting with a newline means a block scalar
                // whose first observed character was the line break; its
                // leading blank line must survive.
                self.add_buffered_token_if_exists(ctx);
            }
            match c {
                '{' if ctx.buffered_src().is_empty() => {
                    ctx.add_origin_buf(c);
                    let token = Token::mapping_start(ctx.origin(), self.pos());
                    ctx.add_token(Some(token));
                    self.is_started_flow_map = true;
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                '}' if ctx.buffered_src().is_empty() || self.is_started_flow_map => {
                    self.add_buffered_token_if_exists(ctx);
                    ctx.add_origin_buf(c);
                    let token = Token::mapping_end(ctx.origin(), self.pos());
                    ctx.add_token(Some(token));
                    self.is_started_flow_map = false;
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                '[' if ctx.buffered_src().is_empty() => {
                    ctx.add_origin_buf(c);
                    let token = Token::sequence_start(ctx.origin(), self.pos());
                    ctx.add_token(Some(token));
                    self.is_started_flow_sequence = true;
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                ']' if ctx.buffered_src().is_empty() || self.is_started_flow_sequence => {
                    self.add_buffered_token_if_exists(ctx);
                    ctx.add_origin_buf(c);
                    let token = Token::sequence_end(ctx.origin(), self.pos());
                    ctx.add_token(Some(token));
                    self.is_started_flow_sequence = false;
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                ',' if self.is_started_flow_sequence || self.is_started_flow_map => {
                    self.add_buffered_token_if_exists(ctx);
                    ctx.add_origin_buf(c);
                    let token = Token::collect_entry(ctx.origin(), self.pos());
                    ctx.add_token(Some(token));
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                '.' if self.indent_num == 0 && ctx.repeat_num('.') == 3 => {
                    self.add_buffered_token_if_exists(ctx);
                    ctx.add_token(Some(Token::document_end(self.pos())));
                    self.progress_column(ctx, 3);
                    ctx.reset_buffer();
                }
                '<' if ctx.repeat_num('<') == 2 => {
                    self.prev_indent_column = self.column;
                    let origin = format!("{}<<", ctx.origin());
                    ctx.add_token(Some(Token::merge_key(origin, self.pos())));
                    self.progress_column(ctx, 2);
                    ctx.reset_buffer();
                }
                '-' if self.indent_num == 0 && ctx.repeat_num('-') == 3 => {
                    self.add_buffered_token_if_exists(ctx);
                    ctx.add_token(Some(Token::document_header(self.pos())));
                    self.progress_column(ctx, 3);
                    ctx.reset_buffer();
                }
                '-' if !ctx.buffered_src().is_empty()
                    && self.indent_state == IndentState::Up =>
                {
                    // A dash continuing a plain scalar at deeper indent:
                    // the rest of the block folds like `>`.
                    ctx.is_raw_folded = true;
                    ctx.add_buf(c);
                    ctx.add_origin_buf(c);
                    self.progress_column(ctx, 1);
                }
                '-' if ctx.next_char() == Some(' ') => {
                    self.add_buffered_token_if_exists(ctx);
                    ctx.add_origin_buf(c);
                    let token = Token::sequence_entry(ctx.origin(), self.pos());
                    self.prev_indent_column = token.position.column;
                    ctx.add_token(Some(token));
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                ':' if matches!(ctx.next_char(), Some(' ' | '\n')) || ctx.is_next_eos() => {
                    if let Some(token) = self.buffered_token(ctx) {
                        self.prev_indent_column = token.position.column;
                        ctx.add_token(Some(token));
                    }
                    ctx.add_token(Some(Token::mapping_value(self.pos())));
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                '|' | '>' if ctx.buffered_src().is_empty() => {
                    self.scan_literal_header(ctx);
                }
                '!' if ctx.buffered_src().is_empty() => {
                    self.scan_tag(ctx);
                }
                '%' if ctx.buffered_src().is_empty() && self.indent_num == 0 => {
                    ctx.add_token(Some(Token::directive(self.pos())));
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                '?' if ctx.buffered_src().is_empty() && ctx.next_char() == Some(' ') => {
                    ctx.add_token(Some(Token::directive(self.pos())));
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                '&' if ctx.buffered_src().is_empty() => {
                    self.add_buffered_token_if_exists(ctx);
                    ctx.add_origin_buf(c);
                    ctx.add_token(Some(Token::anchor(ctx.origin(), self.pos())));
                    self.progress_column(ctx, 1);
                    self.is_anchor = true;
                    ctx.reset_buffer();
                }
                '*' if ctx.buffered_src().is_empty() => {
                    self.add_buffered_token_if_exists(ctx);
                    ctx.add_origin_buf(c);
                    ctx.add_token(Some(Token::alias(ctx.origin(), self.pos())));
                    self.progress_column(ctx, 1);
                    ctx.reset_buffer();
                }
                '#' => {
                    self.add_buffered_token_if_exists(ctx);
                    self.scan_comment(ctx);
                }
                '\'' | '"' if ctx.buffered_src().is_empty() => {
                    self.scan_quote(ctx, c);
                }
                '\n' => {
                    self.scan_new_line(ctx, c);
                }
                ' ' => {
                    if ctx.is_save_indent_mode()
                        || (!self.is_anchor && !self.is_first_char_at_line)
                    {
                        ctx.add_buf(c);
                        ctx.add_origin_buf(c);
                        self.progress_column(ctx, 1);
                    } else if self.is_first_char_at_line {
                        ctx.add_origin_buf(c);
                        self.progress_column(ctx, 1);
                    } else {
                        // Space after an anchor name flushes it.
                        self.add_buffered_token_if_exists(ctx);
                        self.progress_column(ctx, 1);
                        self.is_anchor = false;
                        ctx.reset_buffer();
                    }
                }
                _ => {
                    ctx.add_buf(c);
                    ctx.add_origin_buf(c);
                    self.progress_column(ctx, 1);
                }
            }
        }
        self.add_buffered_token_if_exists(ctx);
    }
}

/// Produce the complete, ordered token stream for `src`.
///
/// Never fails; malformed input still produces tokens whose positions let
/// the parser localize errors.
#[must_use]
pub fn tokenize(src: &str) -> Tokens {
    let mut scanner = Scanner::new();
    let mut ctx = Context::new(src);
    scanner.scan(&mut ctx);
    log::debug!("tokenized {} tokens from {} bytes", ctx.tokens.len(), src.len());
    ctx.tokens
}
