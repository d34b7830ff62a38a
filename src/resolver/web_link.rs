use hashbrown::{HashMap, HashSet};
use mime::Mime;
use std::borrow::Borrow;
use std::fmt::{self, Display};
use url::Url;

/// A link relation type per RFC 8288 §2.1.
///
/// Relation types are case-insensitive and are stored lower-cased, so two
/// `RelationType`s compare equal whenever the header tokens they came from
/// differ only in case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationType(String);

impl RelationType {
    pub const AUTHOR: &'static str = "author";
    pub const CITE_AS: &'static str = "cite-as";
    pub const COLLECTION: &'static str = "collection";
    pub const DESCRIBEDBY: &'static str = "describedby";
    pub const ITEM: &'static str = "item";
    pub const LICENSE: &'static str = "license";
    pub const TYPE: &'static str = "type";

    #[inline]
    pub fn new(token: &str) -> Self {
        RelationType(token.to_ascii_lowercase())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RelationType {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RelationType {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully resolved link of one `Link` header field.
///
/// This is the application-facing entity: the target and anchor are resolved
/// against the context URI, relation types are folded into a non-empty set
/// and parameter disambiguation has already been applied. Instances are
/// immutable value objects; a new header parse always produces brand-new
/// links.
#[derive(Debug, Clone, PartialEq)]
pub struct WebLink {
    pub(crate) target: Url,
    pub(crate) relations: HashSet<RelationType>,
    pub(crate) anchor: Url,
    pub(crate) hreflang: Vec<String>,
    pub(crate) media: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) type_hint: Option<Mime>,
    pub(crate) extension_params: HashMap<String, Option<String>>,
}

impl WebLink {
    /// The resolved target URI of the link.
    #[inline]
    pub fn target(&self) -> &Url {
        &self.target
    }

    /// The relation types of the link. Never empty.
    #[inline]
    pub fn relations(&self) -> &HashSet<RelationType> {
        &self.relations
    }

    /// Returns `true` if the link carries the given relation type,
    /// compared case-insensitively.
    #[inline]
    pub fn has_relation(&self, token: &str) -> bool {
        self.relations.contains(token.to_ascii_lowercase().as_str())
    }

    /// The context the link applies to: the `anchor` parameter resolved
    /// against the context URI, or the context URI itself when absent.
    #[inline]
    pub fn anchor(&self) -> &Url {
        &self.anchor
    }

    /// Language tags of the target representation, lower-cased, in header
    /// order. `hreflang` is the one parameter that meaningfully repeats.
    #[inline]
    pub fn hreflang(&self) -> &[String] {
        &self.hreflang
    }

    #[inline]
    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }

    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The advisory media type of the target, when the `type` parameter was
    /// present and well-formed.
    #[inline]
    pub fn type_hint(&self) -> Option<&Mime> {
        self.type_hint.as_ref()
    }

    /// All parameters outside the RFC 8288 vocabulary, keyed by lower-cased
    /// name, first occurrence each. A `None` value marks a bare parameter
    /// that had no `=` part.
    #[inline]
    pub fn extension_params(&self) -> &HashMap<String, Option<String>> {
        &self.extension_params
    }

    /// Looks up an extension parameter by name, case-insensitively.
    ///
    /// The outer `Option` is presence of the parameter, the inner one is
    /// presence of its value.
    #[inline]
    pub fn extension_param(&self, name: &str) -> Option<Option<&str>> {
        self.extension_params
            .get(name.to_ascii_lowercase().as_str())
            .map(|value| value.as_deref())
    }
}
