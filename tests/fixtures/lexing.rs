use web_link::lexer::{lex, LexError, Token, TokenKind};

#[test]
fn realistic_signposting_header() {
    let input =
        "<https://portal.example/datasets/42/meta.jsonld>; rel=\"describedby\"; type=\"application/ld+json\"";

    let tokens = lex(input).unwrap();

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        [
            TokenKind::LessThan,
            TokenKind::Uri,
            TokenKind::GreaterThan,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::Equals,
            TokenKind::QuotedString,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::Equals,
            TokenKind::QuotedString,
            TokenKind::Eof,
        ]
    );

    assert_eq!(tokens[1].text, "https://portal.example/datasets/42/meta.jsonld");
    assert_eq!(tokens[6].text, "describedby");
    assert_eq!(tokens[10].text, "application/ld+json");
}

#[test]
fn uri_content_is_not_interpreted() {
    // Reserved characters and even quotes are taken verbatim up to `>`.
    let tokens = lex("<https://a/b?x=1,2;y=\"z\">").unwrap();

    assert_eq!(tokens[1], Token::new(TokenKind::Uri, "https://a/b?x=1,2;y=\"z\"", 1));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn positions_survive_interior_whitespace() {
    let tokens = lex("<u> ;  rel = item").unwrap();

    assert_eq!(tokens[4], Token::new(TokenKind::Ident, "rel", 7));
    assert_eq!(tokens[5], Token::new(TokenKind::Equals, "=", 11));
    assert_eq!(tokens[6], Token::new(TokenKind::Ident, "item", 13));
}

#[test]
fn unterminated_uri_reports_opening_bracket() {
    assert_eq!(
        lex("<https://a/b>; rel=item, <https://trunc"),
        Err(LexError::UnterminatedUri { start_position: 25 })
    );
}

#[test]
fn unterminated_quoted_string_reports_opening_quote() {
    assert_eq!(
        lex("<u>; title=\"dangling"),
        Err(LexError::UnterminatedQuotedString { start_position: 11 })
    );
}

#[test]
fn error_display_names_the_offset() {
    let err = lex("<https://a").unwrap_err();

    assert_eq!(
        err.to_string(),
        "URI reference opened at offset 0 is not terminated by `>`."
    );
}
