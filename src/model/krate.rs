//! The `Crate` aggregate and the `Item` envelope.

use super::items::{ItemEnum, ItemKind, Visibility};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// The only `format_version` this crate understands.
///
/// Field shapes are not stable across versions, so a document carrying any other
/// value is rejected before the rest of it is looked at.
pub const FORMAT_VERSION: u32 = 17;

/// Index of an entry in [`Crate::external_crates`].
pub type CrateId = u32;

/// Opaque identifier of an item, scoped to a single [`Crate`] document.
///
/// Ids are compared as plain strings; their internal structure (e.g. `0:42`)
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(pub String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The decoded documentation graph of one crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crate {
    /// Id of the crate's top-level module.
    pub root: Id,
    pub crate_version: Option<String>,
    /// Whether private items were documented (`--document-private-items`).
    pub includes_private: bool,
    /// Every fully-described item, local and external.
    pub index: HashMap<Id, Item>,
    /// Path and kind for ids, including ones without an entry in `index`.
    pub paths: HashMap<Id, ItemSummary>,
    pub external_crates: HashMap<CrateId, ExternalCrate>,
    pub format_version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalCrate {
    pub name: String,
    pub html_root_url: Option<String>,
}

/// Minimal descriptor for an id: where it lives and what it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub crate_id: CrateId,
    /// Fully qualified path, e.g. `["std", "vec", "Vec"]`.
    pub path: Vec<String>,
    pub kind: ItemKind,
}

/// One declared entity together with its documentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: Id,
    pub crate_id: CrateId,
    /// Absent for impls and other anonymous items.
    pub name: Option<String>,
    /// Absent for macro-expanded and foreign items.
    pub span: Option<Span>,
    pub visibility: Visibility,
    /// Raw markdown. `Some("")` and `None` are different things.
    pub docs: Option<String>,
    /// Intra-doc link text to the id it resolved to.
    pub links: HashMap<String, Id>,
    /// Stringified attributes, in source order.
    pub attrs: Vec<String>,
    pub deprecation: Option<Deprecation>,
    pub inner: ItemEnum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub filename: String,
    /// `(line, column)` of the first character.
    pub begin: (usize, usize),
    /// `(line, column)` of the last character.
    pub end: (usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deprecation {
    pub since: Option<String>,
    pub note: Option<String>,
}

/// Encodes a crate back into the wire format accepted by [`crate::decode`].
pub fn encode(krate: &Crate) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(krate)
}
