// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Parser token cursor.
//!
//! One and two tokens of lookahead (`next_token`, `after_next_token`) are
//! the only primitives the parser uses. Comment tokens are filtered here
//! at construction unless the caller asked to keep them.

use crate::parser::Mode;
use crate::token::{Token, TokenKind, Tokens};

#[derive(Debug)]
pub(crate) struct Context {
    tokens: Vec<Token>,
    idx: usize,
}

impl Context {
    pub(crate) fn new(tokens: Tokens, mode: Mode) -> Self {
        let tokens = if mode.contains(Mode::PARSE_COMMENTS) {
            tokens.into_vec()
        } else {
            tokens
                .into_vec()
                .into_iter()
                .filter(|tk| tk.kind != TokenKind::Comment)
                .collect()
        };
        Self { tokens, idx: 0 }
    }

    /// Whether a current token exists.
    pub(crate) fn next(&self) -> bool {
        self.idx < self.tokens.len()
    }

    pub(crate) fn progress(&mut self, num: usize) {
        self.idx += num;
    }

    pub(crate) fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.idx)
    }

    pub(crate) fn next_token(&self) -> Option<&Token> {
        self.tokens.get(self.idx + 1)
    }

    pub(crate) fn after_next_token(&self) -> Option<&Token> {
        self.tokens.get(self.idx + 2)
    }
}
