//! Lexical scanning of `Link` header field values.
//!
//! The scanner makes a single left-to-right pass with one character of
//! lookahead and produces a flat token stream terminated by exactly one
//! [`TokenKind::Eof`] token. Whitespace between tokens (the grammar's
//! OWS/BWS) is consumed here and never reaches the parser.

mod token;

pub use self::token::{Token, TokenKind};

use memchr::memchr;
use thiserror::Error;

/// An error produced by [`lex`].
///
/// Lexing is all-or-nothing: the first malformed construct aborts the scan
/// and no partial token stream is returned. Both variants carry the offset
/// of the opening delimiter that was never closed.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("URI reference opened at offset {start_position} is not terminated by `>`.")]
    UnterminatedUri { start_position: usize },

    #[error("Quoted string opened at offset {start_position} is not terminated.")]
    UnterminatedQuotedString { start_position: usize },
}

#[inline]
fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
fn is_delimiter(b: u8) -> bool {
    matches!(b, b'<' | b'>' | b';' | b'=' | b',' | b'"')
}

/// Scans a `Link` header field value into a token stream.
///
/// The scan is purely lexical: no parameter name or URI syntax is validated
/// here. URI references and quoted strings are captured verbatim, without
/// escape interpretation, which matches the grammar scope of the structural
/// parser downstream.
pub fn lex<'a>(input: &'a str) -> Result<Vec<Token<'a>>, LexError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    let mut emit = |token: Token<'a>| {
        trace!(@lex "{:?} `{}` at {}", token.kind, token.text, token.position);
        tokens.push(token);
    };

    while pos < bytes.len() {
        let b = bytes[pos];

        if is_ws(b) {
            pos += 1;
            continue;
        }

        match b {
            b'<' => {
                // Everything up to the closing `>` is the URI reference,
                // taken verbatim: no escaping and no nesting in this grammar.
                emit(Token::new(TokenKind::LessThan, &input[pos..=pos], pos));

                let uri_start = pos + 1;
                let uri_len = memchr(b'>', &bytes[uri_start..])
                    .ok_or(LexError::UnterminatedUri {
                        start_position: pos,
                    })?;
                let uri_end = uri_start + uri_len;

                emit(Token::new(
                    TokenKind::Uri,
                    &input[uri_start..uri_end],
                    uri_start,
                ));
                emit(Token::new(
                    TokenKind::GreaterThan,
                    &input[uri_end..=uri_end],
                    uri_end,
                ));

                pos = uri_end + 1;
            }

            b'>' | b';' | b'=' | b',' => {
                let kind = match b {
                    b'>' => TokenKind::GreaterThan,
                    b';' => TokenKind::Semicolon,
                    b'=' => TokenKind::Equals,
                    _ => TokenKind::Comma,
                };

                emit(Token::new(kind, &input[pos..=pos], pos));
                pos += 1;
            }

            b'"' => {
                let content_start = pos + 1;
                let content_len = memchr(b'"', &bytes[content_start..]).ok_or(
                    LexError::UnterminatedQuotedString {
                        start_position: pos,
                    },
                )?;
                let content_end = content_start + content_len;

                emit(Token::new(
                    TokenKind::QuotedString,
                    &input[content_start..content_end],
                    content_start,
                ));

                pos = content_end + 1;
            }

            _ => {
                let start = pos;

                while pos < bytes.len() && !is_ws(bytes[pos]) && !is_delimiter(bytes[pos]) {
                    pos += 1;
                }

                // NOTE: at least one byte is always consumed here, so an
                // `Ident` token is never empty.
                emit(Token::new(TokenKind::Ident, &input[start..pos], start));
            }
        }
    }

    emit(Token::new(TokenKind::Eof, "", input.len()));

    Ok(tokens)
}
