//! Processor for HTTP `Link` header fields ([RFC 8288], "Web Linking").
//!
//! The crate is a pure library with a one-way, three-stage pipeline: a
//! [lexer](lexer) scans the raw header value into a flat token stream, a
//! [parser](parser) builds the ordered raw link-value list, and a
//! [resolver](resolver) applies RFC 8288 parameter semantics (first-wins
//! rules, `rel` splitting, relative-reference resolution against a context
//! URI) to produce application-facing [`WebLink`]s. Its main consumer is
//! FAIR-data signposting: machine-readable discovery links a portal emits so
//! external tooling can navigate a research object's metadata, licence and
//! download relations without scraping HTML.
//!
//! Every stage is a pure, reentrant function over its inputs; different
//! header strings can be processed concurrently without coordination.
//!
//! # Example
//!
//! ```
//! use url::Url;
//! use web_link::{process_link_header, RelationType};
//!
//! let context = Url::parse("https://portal.example/datasets/42").unwrap();
//!
//! let resolved = process_link_header(
//!     "<https://portal.example/datasets/42/meta.jsonld>; rel=\"describedby\"; \
//!      type=\"application/ld+json\", </licenses/cc-by>; rel=license",
//!     &context,
//! )
//! .unwrap();
//!
//! assert_eq!(resolved.links.len(), 2);
//! assert!(resolved.links[0].has_relation(RelationType::DESCRIBEDBY));
//! assert_eq!(
//!     resolved.links[1].target().as_str(),
//!     "https://portal.example/licenses/cc-by"
//! );
//! ```
//!
//! [RFC 8288]: https://datatracker.ietf.org/doc/html/rfc8288

#[macro_use]
mod debug_trace;

pub mod errors;
pub mod lexer;
pub mod parser;
pub mod resolver;

pub use self::errors::LinkHeaderError;
pub use self::resolver::{RelationType, ResolveDiagnostic, ResolvedLinks, WebLink};

use url::Url;

/// Runs the full pipeline over one `Link` header field value.
///
/// Lexing and parsing failures are hard errors: the header field as a whole
/// is unusable. Per-entry resolution failures are not: they are reported in
/// [`ResolvedLinks::diagnostics`] while the sibling entries still resolve,
/// and a result with zero surviving links is a valid outcome.
pub fn process_link_header(value: &str, context: &Url) -> Result<ResolvedLinks, LinkHeaderError> {
    let tokens = lexer::lex(value)?;
    let header = parser::parse(&tokens)?;

    Ok(resolver::resolve(&header, context))
}

/// Runs the full pipeline over multiple `Link` header field instances.
///
/// Repeated header field instances are semantically equivalent to one
/// comma-joined field value, so the instances are joined with `", "` before
/// processing; empty instances are skipped. An iterator with no non-empty
/// instances fails with [`ParseError::EmptyHeader`], same as an empty field
/// value.
///
/// [`ParseError::EmptyHeader`]: crate::parser::ParseError::EmptyHeader
pub fn process_link_headers<'v, I>(values: I, context: &Url) -> Result<ResolvedLinks, LinkHeaderError>
where
    I: IntoIterator<Item = &'v str>,
{
    let mut joined = String::new();

    for value in values {
        if value.trim().is_empty() {
            continue;
        }

        if !joined.is_empty() {
            joined.push_str(", ");
        }

        joined.push_str(value);
    }

    process_link_header(&joined, context)
}
