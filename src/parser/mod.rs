//! Structural parsing of the lexed token stream.
//!
//! The `Link` header grammar is LL(1) at the token level, so the parser is a
//! plain recursive descent over a single forward cursor with no
//! backtracking. It enforces header-level structure only: parameter
//! semantics (first-wins rules, case folding, URI resolution) belong to the
//! resolver.

mod outputs;

pub use self::outputs::{RawLinkHeader, RawLinkValue, RawParam};

use crate::lexer::{Token, TokenKind};
use thiserror::Error;

/// An error produced by [`parse`].
///
/// Reported at the first structural violation; there is no recovery and no
/// partial result, since a malformed `Link` header entry invalidates the
/// whole header field.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Token stream is not terminated by an end-of-input token.")]
    MissingEof,

    #[error("Link header field contains no link-values.")]
    EmptyHeader,

    #[error("Link header field ends with a dangling comma.")]
    TrailingComma,

    #[error("Unexpected {found:?} token at offset {position}, expected {expected:?}.")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        position: usize,
    },
}

/// Parses a token stream into the ordered raw link-value list.
///
/// The stream must be terminated by exactly one [`TokenKind::Eof`] token and
/// must contain at least one link-value: a `Link` header field with no
/// link-values is not valid.
pub fn parse<'i>(tokens: &[Token<'i>]) -> Result<RawLinkHeader<'i>, ParseError> {
    match tokens.last() {
        Some(token) if token.kind == TokenKind::Eof => (),
        _ => return Err(ParseError::MissingEof),
    }

    if tokens.len() == 1 {
        return Err(ParseError::EmptyHeader);
    }

    let mut cursor = Cursor { tokens, pos: 0 };
    let mut link_values = Vec::new();

    loop {
        link_values.push(cursor.parse_link_value()?);

        let token = cursor.peek();

        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Comma => {
                cursor.advance();

                if cursor.peek().kind == TokenKind::Eof {
                    return Err(ParseError::TrailingComma);
                }
            }
            found => {
                return Err(ParseError::UnexpectedToken {
                    expected: TokenKind::Comma,
                    found,
                    position: token.position,
                })
            }
        }
    }

    Ok(RawLinkHeader { link_values })
}

struct Cursor<'t, 'i> {
    tokens: &'t [Token<'i>],
    pos: usize,
}

impl<'t, 'i> Cursor<'t, 'i> {
    // NOTE: the cursor never advances past `Eof` (`expect` and the callers
    // bail out on it first), so indexing is always in bounds.
    #[inline]
    fn peek(&self) -> &'t Token<'i> {
        &self.tokens[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    fn expect(&mut self, expected: TokenKind) -> Result<&'t Token<'i>, ParseError> {
        let token = self.peek();

        if token.kind == expected {
            self.advance();
            Ok(token)
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: token.kind,
                position: token.position,
            })
        }
    }

    fn parse_link_value(&mut self) -> Result<RawLinkValue<'i>, ParseError> {
        self.expect(TokenKind::LessThan)?;
        let target = self.expect(TokenKind::Uri)?.text;
        self.expect(TokenKind::GreaterThan)?;

        let mut params = Vec::new();

        while self.peek().kind == TokenKind::Semicolon {
            self.advance();
            params.push(self.parse_param()?);
        }

        Ok(RawLinkValue { target, params })
    }

    fn parse_param(&mut self) -> Result<RawParam<'i>, ParseError> {
        let name = self.expect(TokenKind::Ident)?.text;

        if self.peek().kind != TokenKind::Equals {
            return Ok(RawParam {
                name,
                value: None,
                was_quoted: false,
            });
        }

        self.advance();

        let token = self.peek();

        match token.kind {
            TokenKind::Ident | TokenKind::QuotedString => {
                self.advance();

                Ok(RawParam {
                    name,
                    value: Some(token.text),
                    was_quoted: token.kind == TokenKind::QuotedString,
                })
            }
            found => Err(ParseError::UnexpectedToken {
                expected: TokenKind::Ident,
                found,
                position: token.position,
            }),
        }
    }
}
