use crate::harness::{context, parse_header, resolve_header, resolve_single};
use url::Url;
use web_link::resolver::{resolve, ResolveError};

#[test]
fn well_formed_single_link_round_trips() {
    let link = resolve_single("<https://a/b>; rel=\"item\"");

    assert_eq!(link.target(), &Url::parse("https://a/b").unwrap());
    assert_eq!(link.relations().len(), 1);
    assert!(link.has_relation("item"));
    assert_eq!(link.anchor(), &context());
}

#[test]
fn first_occurrence_wins_for_singular_params() {
    let link = resolve_single("<https://a>; rel=\"x\"; title=\"A\"; title=\"B\"");

    assert_eq!(link.title(), Some("A"));
}

#[test]
fn hreflang_accumulates_in_order() {
    let link = resolve_single("<https://a>; rel=\"x\"; hreflang=en; hreflang=de");

    assert_eq!(link.hreflang(), ["en", "de"]);
}

#[test]
fn rel_value_splits_into_a_set() {
    let link = resolve_single("<https://a>; rel=\"item item collection\"");

    assert_eq!(link.relations().len(), 2);
    assert!(link.has_relation("item"));
    assert!(link.has_relation("collection"));
}

#[test]
fn link_values_resolve_in_source_order() {
    let resolved = resolve_header("<https://a/1>; rel=prev, <https://a/2>; rel=next");

    assert_eq!(resolved.links.len(), 2);
    assert!(resolved.links[0].has_relation("prev"));
    assert!(resolved.links[1].has_relation("next"));
}

#[test]
fn missing_rel_drops_only_that_entry() {
    let resolved = resolve_header("<https://a>; title=\"x\", <https://b>; rel=\"item\"");

    assert_eq!(resolved.links.len(), 1);
    assert_eq!(resolved.links[0].target(), &Url::parse("https://b").unwrap());

    assert_eq!(resolved.diagnostics.len(), 1);
    assert_eq!(resolved.diagnostics[0].index, 0);
    assert_eq!(resolved.diagnostics[0].target, "https://a");
    assert_eq!(resolved.diagnostics[0].error, ResolveError::MissingRelation);
}

#[test]
fn invalid_target_drops_only_that_entry() {
    let resolved = resolve_header("<https://[broken>; rel=item, <https://a>; rel=item");

    assert_eq!(resolved.links.len(), 1);
    assert_eq!(resolved.diagnostics.len(), 1);
    assert_eq!(resolved.diagnostics[0].target, "https://[broken");
    assert!(matches!(
        resolved.diagnostics[0].error,
        ResolveError::InvalidTargetUri(_)
    ));
}

#[test]
fn relative_targets_resolve_against_the_context() {
    let resolved =
        resolve_header("</datasets/42/files/1.csv>; rel=item, <../licenses/cc0>; rel=license");

    assert_eq!(
        resolved.links[0].target().as_str(),
        "https://portal.example/datasets/42/files/1.csv"
    );
    assert_eq!(
        resolved.links[1].target().as_str(),
        "https://portal.example/licenses/cc0"
    );
}

#[test]
fn explicit_anchor_resolves_against_the_context() {
    let link = resolve_single("<https://a>; rel=item; anchor=\"#files\"");

    assert_eq!(
        link.anchor().as_str(),
        "https://portal.example/datasets/42#files"
    );
}

#[test]
fn type_hint_parses_well_formed_media_types() {
    let link = resolve_single("<https://a>; rel=item; type=\"text/csv\"");

    assert_eq!(link.type_hint().unwrap().type_(), mime::TEXT);
    assert_eq!(link.type_hint().unwrap().subtype().as_str(), "csv");
}

#[test]
fn all_entries_failing_is_not_an_error() {
    let resolved = resolve_header("<https://a>, <https://b>; title=\"x\"");

    assert_eq!(resolved.links, []);
    assert_eq!(resolved.diagnostics.len(), 2);
}

#[test]
fn resolution_is_idempotent() {
    let header = parse_header("<./files/1>; rel=\"item collection\"; hreflang=EN; custom=v");
    let first = resolve(&header, &context());
    let second = resolve(&header, &context());

    assert_eq!(first, second);
}
