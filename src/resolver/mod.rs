//! Semantic resolution of raw link-values into [`WebLink`]s.
//!
//! This is where RFC 8288 parameter semantics live: first-occurrence-wins
//! for the singular parameters, ordered accumulation for `hreflang`,
//! whitespace splitting and case folding for `rel`, and RFC 3986 §5
//! reference resolution for the target and anchor. Each link-value resolves
//! independently: one bad entry is dropped and reported, its siblings still
//! resolve.

mod web_link;

pub use self::web_link::{RelationType, WebLink};

use crate::parser::{RawLinkHeader, RawLinkValue, RawParam};
use hashbrown::{HashMap, HashSet};
use mime::Mime;
use thiserror::Error;
use url::Url;

/// A semantic violation scoped to one link-value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Link target is not a valid URI reference: {0}.")]
    InvalidTargetUri(url::ParseError),

    #[error("Link-value has no usable rel parameter.")]
    MissingRelation,
}

/// A per-entry resolution failure, reported alongside the surviving links
/// so the caller can log partial results without re-parsing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveDiagnostic {
    /// 0-based index of the offending link-value within the header.
    pub index: usize,
    /// The raw (unresolved) target text of the offending link-value.
    pub target: String,
    pub error: ResolveError,
}

/// The outcome of resolving one header.
///
/// `links` preserves the source order of the surviving link-values. A header
/// whose entries all failed resolution yields an empty `links` list and is
/// still a valid "no actionable links" outcome, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedLinks {
    pub links: Vec<WebLink>,
    pub diagnostics: Vec<ResolveDiagnostic>,
}

/// Resolves a raw header against the context URI of the resource the header
/// is attached to.
pub fn resolve(header: &RawLinkHeader<'_>, context: &Url) -> ResolvedLinks {
    let mut links = Vec::with_capacity(header.len());
    let mut diagnostics = Vec::new();

    for (index, link_value) in header.iter().enumerate() {
        match resolve_link_value(link_value, context) {
            Ok(link) => links.push(link),
            Err(error) => {
                trace!(@resolve "dropped link-value #{index} `{}`: {error}", link_value.target);

                diagnostics.push(ResolveDiagnostic {
                    index,
                    target: link_value.target.to_owned(),
                    error,
                });
            }
        }
    }

    ResolvedLinks { links, diagnostics }
}

fn resolve_link_value(link_value: &RawLinkValue<'_>, context: &Url) -> Result<WebLink, ResolveError> {
    let target = context
        .join(link_value.target)
        .map_err(ResolveError::InvalidTargetUri)?;

    // One forward pass; each singular parameter slot is claimed by its first
    // occurrence, even a valueless one.
    let mut rel_slot: Option<&RawParam<'_>> = None;
    let mut anchor_slot: Option<&RawParam<'_>> = None;
    let mut media_slot: Option<&RawParam<'_>> = None;
    let mut title_slot: Option<&RawParam<'_>> = None;
    let mut type_slot: Option<&RawParam<'_>> = None;
    let mut hreflang = Vec::new();
    let mut extension_params = HashMap::new();

    for param in &link_value.params {
        let name = param.name.to_ascii_lowercase();

        match name.as_str() {
            "rel" => claim(&mut rel_slot, param),
            "anchor" => claim(&mut anchor_slot, param),
            "media" => claim(&mut media_slot, param),
            "title" => claim(&mut title_slot, param),
            "type" => claim(&mut type_slot, param),
            "hreflang" => {
                if let Some(value) = param.value {
                    hreflang.push(value.to_ascii_lowercase());
                }
            }
            _ => {
                extension_params
                    .entry(name)
                    .or_insert_with(|| param.value.map(str::to_owned));
            }
        }
    }

    let relations: HashSet<RelationType> = rel_slot
        .ok_or(ResolveError::MissingRelation)?
        .value
        .map(|value| value.split_ascii_whitespace().map(RelationType::new).collect())
        .unwrap_or_default();

    // A link without any relation type is useless to a consumer: reject the
    // entry instead of inventing a default.
    if relations.is_empty() {
        return Err(ResolveError::MissingRelation);
    }

    // The anchor is advisory: a value that does not resolve falls back to
    // the context default rather than invalidating the entry.
    let anchor = anchor_slot
        .and_then(|param| param.value)
        .and_then(|value| context.join(value).ok())
        .unwrap_or_else(|| context.clone());

    let type_hint = type_slot
        .and_then(|param| param.value)
        .and_then(|value| value.trim().parse::<Mime>().ok());

    Ok(WebLink {
        target,
        relations,
        anchor,
        hreflang,
        media: media_slot.and_then(|param| param.value).map(str::to_owned),
        title: title_slot.and_then(|param| param.value).map(str::to_owned),
        type_hint,
        extension_params,
    })
}

#[inline]
fn claim<'a, 'i>(slot: &mut Option<&'a RawParam<'i>>, param: &'a RawParam<'i>) {
    if slot.is_none() {
        *slot = Some(param);
    }
}
