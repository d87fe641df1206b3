// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Scanner work area: character cursor, the two token buffers, and the
//! token accumulator.
//!
//! `buf` holds the semantic characters of the token in progress; `obuf`
//! holds every character observed since the last token boundary, so the
//! emitted token can carry its verbatim lexeme.

use crate::token::{Position, Token, Tokens};

#[derive(Debug)]
pub(crate) struct Context {
    src: Vec<char>,
    pub(crate) idx: usize,
    buf: String,
    obuf: String,
    pub(crate) tokens: Tokens,
    pub(crate) is_raw_folded: bool,
    pub(crate) is_literal: bool,
    pub(crate) is_folded: bool,
    pub(crate) literal_opt: String,
}

impl Context {
    pub(crate) fn new(src: &str) -> Self {
        Self {
            src: src.chars().collect(),
            idx: 0,
            buf: String::new(),
            obuf: String::new(),
            tokens: Tokens::new(),
            is_raw_folded: false,
            is_literal: false,
            is_folded: false,
            literal_opt: String::new(),
        }
    }

    pub(crate) fn next(&self) -> bool {
        self.idx < self.src.len()
    }

    pub(crate) fn source(&self, start: usize, end: usize) -> String {
        self.src[start..end].iter().collect()
    }

    pub(crate) fn current_char(&self) -> char {
        self.src[self.idx]
    }

    pub(crate) fn next_char(&self) -> Option<char> {
        self.src.get(self.idx + 1).copied()
    }

    pub(crate) fn char_at(&self, idx: usize) -> Option<char> {
        self.src.get(idx).copied()
    }

    /// Count of consecutive `ch` starting at the cursor.
    pub(crate) fn repeat_num(&self, ch: char) -> usize {
        self.src[self.idx..].iter().take_while(|&&c| c == ch).count()
    }

    pub(crate) fn progress(&mut self, num: usize) {
        self.idx += num;
    }

    /// Whether the cursor sits on the last character.
    pub(crate) fn is_eos(&self) -> bool {
        self.idx + 1 >= self.src.len()
    }

    /// Whether no character follows the cursor.
    pub(crate) fn is_next_eos(&self) -> bool {
        self.idx + 1 >= self.src.len()
    }

    pub(crate) fn add_token(&mut self, token: Option<Token>) {
        if let Some(tk) = token {
            self.tokens.push(tk);
        }
    }

    pub(crate) fn add_buf(&mut self, ch: char) {
        self.buf.push(ch);
    }

    pub(crate) fn add_origin_buf(&mut self, ch: char) {
        self.obuf.push(ch);
    }

    pub(crate) fn buf_is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub(crate) fn origin(&self) -> String {
        self.obuf.clone()
    }

    pub(crate) fn origin_starts_with_newline(&self) -> bool {
        self.obuf.starts_with('\n')
    }

    pub(crate) fn origin_is_empty(&self) -> bool {
        self.obuf.is_empty()
    }

    /// The buffered semantic text, trimmed of surrounding spaces.
    ///
    /// Newlines are preserved: block-scalar bodies keep their trailing
    /// line breaks, while the space appended by a line join is dropped.
    pub(crate) fn buffered_src(&self) -> &str {
        self.buf.trim_matches(' ')
    }

    /// Character count from the first semantic character through the
    /// cursor. Trailing spaces count: the cursor sits after them, so
    /// position math must step back over them too.
    pub(crate) fn buffered_size(&self) -> usize {
        self.buf.trim_start_matches(' ').chars().count()
    }

    /// One of the three block-scalar modes is active.
    pub(crate) fn is_save_indent_mode(&self) -> bool {
        self.is_literal || self.is_folded || self.is_raw_folded
    }

    /// Clear the block-scalar flags and the recorded header option.
    pub(crate) fn break_literal(&mut self) {
        self.is_literal = false;
        self.is_folded = false;
        self.is_raw_folded = false;
        self.literal_opt.clear();
    }

    pub(crate) fn reset_buffer(&mut self) {
        self.buf.clear();
        self.obuf.clear();
    }

    /// Flush the buffer as a single token positioned at `pos`.
    ///
    /// Returns `None` when nothing but spaces is buffered. Block-scalar
    /// bodies always flush as plain string tokens so the parser finds the
    /// string it requires after a `|` or `>` header.
    pub(crate) fn buffered_token(&mut self, pos: Position) -> Option<Token> {
        let source = self.buffered_src();
        if source.is_empty() {
            return None;
        }
        let value = source.to_owned();
        let origin = self.obuf.clone();
        let token = if self.is_save_indent_mode() {
            Token::string(value, origin, pos)
        } else {
            Token::new(value, origin, pos)
        };
        self.reset_buffer();
        Some(token)
    }
}
