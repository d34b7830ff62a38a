/// The kind of a [`Token`].
///
/// This is a closed set: the `Link` header field grammar has no other
/// lexical shapes, and every stream ends with exactly one `Eof`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    LessThan,
    GreaterThan,
    Semicolon,
    Equals,
    Comma,
    QuotedString,
    Ident,
    Uri,
    Eof,
}

/// A single lexical unit of a `Link` header field value.
///
/// Tokens borrow their text from the input string. `position` is the 0-based
/// byte offset of the first text character in that input, so diagnostics can
/// point back at the source and buffered tokens can be re-sorted into stream
/// order. For a `QuotedString` the text excludes the quotes and the position
/// is just past the opening quote; for a `Uri` the text excludes the angle
/// brackets. The `Eof` token carries empty text at `position == input.len()`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'i> {
    pub kind: TokenKind,
    pub text: &'i str,
    pub position: usize,
}

impl<'i> Token<'i> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'i str, position: usize) -> Self {
        Token {
            kind,
            text,
            position,
        }
    }
}
