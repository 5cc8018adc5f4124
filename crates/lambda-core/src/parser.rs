//! Byte-level lexer/recursive-descent parser.
//!
//! The lexer is embedded directly in the parser: there is no separate token stream, just a
//! cursor over the raw input bytes. Errors are collected rather than aborting immediately, so
//! that the top-level loop can recover from a handful of conditions (a stray `)` and a missing
//! expression) and keep scanning for further diagnostics, accumulating `SyntaxError`s with
//! byte-offset positions rather than failing fast.

use std::borrow::Cow;
use std::fmt;

use crate::ast::{Expr, Program};

/// A single syntax error, anchored to an absolute byte offset within the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub offset: usize,
    pub message: Cow<'static, str>,
}

impl SyntaxError {
    fn new(offset: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    /// Renders the diagnostic exactly as `STDIN:<offset>: Syntax error: <message>.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STDIN:{}: Syntax error: {}.", self.offset, self.message)
    }
}

/// Parses a full program (a sequence of independently-parsed top-level expressions).
///
/// Returns every successfully-parsed top-level expression alongside any syntax errors
/// encountered; per the driver's contract, a non-empty error list means the caller must not run
/// any downstream action regardless of how many expressions were recovered.
pub fn parse_program(input: &[u8]) -> (Program, Vec<SyntaxError>) {
    let mut parser = Parser::new(input);
    let mut program = Program::new();
    let mut attempted = false;

    loop {
        parser.skip_ws();
        if parser.at_end() && attempted {
            break;
        }
        attempted = true;
        let start = parser.pos;
        match parser.parse_expr() {
            AtomResult::Ok(expr) => program.push(expr),
            AtomResult::NoAtom => {
                parser.push_error(start, "Expected expr");
                // Guarantee progress: nothing was consumed by a bare `NoAtom`.
                if !parser.at_end() {
                    parser.pos += 1;
                }
            }
            AtomResult::AlreadyReported => {
                // A specific diagnostic was already recorded by whatever failed; every such
                // path consumes at least one byte, so the loop is guaranteed to terminate.
            }
        }
    }

    (program, parser.errors)
}

/// Outcome of attempting to parse one atom or expression.
///
/// `NoAtom` means nothing was consumed and no diagnostic was recorded — the caller decides
/// whether that's an error (top level, lambda body) or simply "end of this application chain"
/// (inside `applied_rest`). `AlreadyReported` means a concrete diagnostic was pushed by whoever
/// failed (a malformed token, an unclosed group, a malformed lambda header) and at least one
/// byte was consumed, so callers must not also report a generic failure for the same span.
enum AtomResult {
    Ok(Expr),
    NoAtom,
    AlreadyReported,
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            errors: Vec::new(),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(offset).copied()
    }

    fn skip_ws(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn push_error(&mut self, offset: usize, message: impl Into<Cow<'static, str>>) {
        self.errors.push(SyntaxError::new(offset, message));
    }

    fn try_consume(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// `expr := atom applied_rest?`, left-associative.
    fn parse_expr(&mut self) -> AtomResult {
        let first = match self.parse_atom() {
            AtomResult::Ok(expr) => expr,
            other => return other,
        };

        let mut acc = first;
        loop {
            let save = self.pos;
            self.skip_ws();
            match self.parse_atom() {
                AtomResult::Ok(next) => acc = Expr::app(acc, next),
                AtomResult::NoAtom => {
                    // Nothing here after all; restore the whitespace so a caller looking for a
                    // closing delimiter still sees it at the expected offset.
                    self.pos = save;
                    break;
                }
                AtomResult::AlreadyReported => break,
            }
        }
        AtomResult::Ok(acc)
    }

    /// `atom := varname | index | '(' expr ')' | '[' varname? ']' expr`
    fn parse_atom(&mut self) -> AtomResult {
        self.skip_ws();
        let start = self.pos;
        match self.peek() {
            None => AtomResult::NoAtom,
            Some(b) if b.is_ascii_alphabetic() => self.parse_varname(start, b),
            Some(b) if b.is_ascii_digit() => self.parse_index(start),
            Some(b'(') => self.parse_group(start),
            Some(b'[') => self.parse_lambda(start),
            Some(_) => AtomResult::NoAtom,
        }
    }

    /// A bare identifier. Any run of more than one alphanumeric byte is rejected outright —
    /// this also covers an uppercase letter immediately followed by another alphanumeric byte,
    /// the "reserved" lexical class from the grammar.
    fn parse_varname(&mut self, start: usize, first: u8) -> AtomResult {
        let next = self.peek_at(start + 1);
        if next.is_some_and(|b| b.is_ascii_alphanumeric()) {
            let mut end = start;
            while self.peek_at(end).is_some_and(|b| b.is_ascii_alphanumeric()) {
                end += 1;
            }
            let name = &self.input[start..end];
            let prefix = &name[..name.len().min(3)];
            let prefix = String::from_utf8_lossy(prefix);
            self.pos = end;
            self.push_error(
                start,
                format!("Multi-byte varnames aren't allowed.  '{prefix}...'"),
            );
            return AtomResult::AlreadyReported;
        }
        self.pos = start + 1;
        AtomResult::Ok(Expr::var(first, start))
    }

    /// A run of digits: a De Bruijn index literal.
    fn parse_index(&mut self, start: usize) -> AtomResult {
        let mut end = start;
        while self.peek_at(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
        }
        let digits = &self.input[start..end];
        self.pos = end;

        if digits.len() > 1 {
            let number = String::from_utf8_lossy(digits);
            self.push_error(start, format!("Multi-digit nums aren't allowed.  '{number}'"));
            return AtomResult::AlreadyReported;
        }
        if digits[0] == b'0' {
            self.push_error(start, "0 is an invalid debrujin index");
            return AtomResult::AlreadyReported;
        }
        let value = u32::from(digits[0] - b'0');
        AtomResult::Ok(Expr::bound_var(value, start))
    }

    /// `'(' expr ')'`. A group that found an inner expression but never finds its closing `)`
    /// is `Unmatched '('`, anchored at the opening paren's own offset. A group with no inner
    /// expression at all (nothing between `(` and whatever follows, including the degenerate
    /// `()`) has no expression to blame, so it's reported as `Unmatched ')'` instead.
    fn parse_group(&mut self, start: usize) -> AtomResult {
        self.pos = start + 1;
        let inner = self.parse_expr();
        self.skip_ws();
        match inner {
            AtomResult::Ok(expr) => {
                if self.try_consume(b')') {
                    AtomResult::Ok(expr)
                } else {
                    self.push_error(start, "Unmatched '('");
                    AtomResult::AlreadyReported
                }
            }
            AtomResult::NoAtom => {
                self.push_error(start, "Unmatched ')'");
                AtomResult::AlreadyReported
            }
            AtomResult::AlreadyReported => {
                // The inner content was already diagnosed; if a `)` is sitting right here, close
                // the group quietly instead of piling on a second, redundant diagnostic.
                if !self.try_consume(b')') {
                    self.push_error(start, "Unmatched '('");
                }
                AtomResult::AlreadyReported
            }
        }
    }

    /// `'[' varname? ']' expr`. `bracket_offset` is the offset of the `[` itself.
    fn parse_lambda(&mut self, bracket_offset: usize) -> AtomResult {
        self.pos = bracket_offset + 1;

        let param = match self.peek() {
            Some(b']') => {
                self.pos += 1;
                None
            }
            Some(b) if b.is_ascii_alphabetic() => {
                self.pos += 1;
                if self.try_consume(b']') {
                    Some(b)
                } else {
                    let mut captured = vec![b];
                    if let Some(offending) = self.peek() {
                        captured.push(offending);
                        self.pos += 1;
                    }
                    self.report_unterminated_header(bracket_offset, &captured);
                    return AtomResult::AlreadyReported;
                }
            }
            other => {
                let mut captured = Vec::new();
                if let Some(b) = other {
                    captured.push(b);
                    self.pos += 1;
                }
                self.report_unterminated_header(bracket_offset, &captured);
                return AtomResult::AlreadyReported;
            }
        };

        let body_offset = self.pos;
        match self.parse_atom() {
            AtomResult::Ok(body) => AtomResult::Ok(Expr::named_lam(param, body, bracket_offset)),
            AtomResult::NoAtom => {
                self.push_error(body_offset, "Expected lambda body");
                AtomResult::AlreadyReported
            }
            AtomResult::AlreadyReported => AtomResult::AlreadyReported,
        }
    }

    fn report_unterminated_header(&mut self, bracket_offset: usize, captured: &[u8]) {
        let captured = String::from_utf8_lossy(captured);
        self.push_error(
            bracket_offset,
            format!("Lambda '[{captured}' doesn't end in ']'"),
        );
    }
}
