//! Read-only graph queries over a decoded [`Crate`].
//!
//! A [`Resolver`] is a `Copy` view borrowing the crate, so any number of them
//! can be handed to threads without locks. Lookups go to `index` first and
//! fall back to the `paths` summaries for ids that have no full item, such as
//! items of other crates.

mod item_ref;
mod iterator;
mod path;

pub use item_ref::ItemRef;
pub use iterator::ChildIterator;
pub use path::{ItemPath, PathSuggestion, parse_path, path_canonicality_score};

use crate::model::{
    Crate, CrateId, ExternalCrate, Id, Item, ItemEnum, ItemKind, ItemSummary, Type,
};
use rapidfuzz::distance::jaro_winkler;

/// What an id resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// A fully described item from `index`.
    Item(ItemRef<'a, Item>),
    /// Only a path and kind are known.
    Summary {
        id: &'a Id,
        summary: &'a ItemSummary,
    },
}

impl<'a> Node<'a> {
    pub fn id(&self) -> &'a Id {
        match self {
            Self::Item(item) => &item.get_ref().id,
            Self::Summary { id, .. } => id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Item(item) => item.kind(),
            Self::Summary { summary, .. } => summary.kind,
        }
    }

    /// The item's name, or the last path segment for summaries.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Self::Item(item) => item.name(),
            Self::Summary { summary, .. } => summary.path.last().map(String::as_str),
        }
    }

    pub fn path(&self) -> Option<ItemPath<'a>> {
        match self {
            Self::Item(item) => item.path(),
            Self::Summary { summary, .. } => Some(ItemPath::new(&summary.path)),
        }
    }

    pub const fn as_item(&self) -> Option<ItemRef<'a, Item>> {
        match self {
            Self::Item(item) => Some(*item),
            Self::Summary { .. } => None,
        }
    }
}

/// Query interface over one decoded crate.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    krate: &'a Crate,
}

impl<'a> Resolver<'a> {
    pub const fn new(krate: &'a Crate) -> Self {
        Self { krate }
    }

    pub const fn krate(&self) -> &'a Crate {
        self.krate
    }

    /// Look up an id, preferring the full item over its summary.
    pub fn get(&self, id: &Id) -> Option<Node<'a>> {
        if let Some(item) = self.item(id) {
            return Some(Node::Item(item));
        }
        let (id, summary) = self.krate.paths.get_key_value(id)?;
        Some(Node::Summary { id, summary })
    }

    /// Look up an id in `index` only.
    pub fn item(&self, id: &Id) -> Option<ItemRef<'a, Item>> {
        let item = self.krate.index.get(id);
        tracing::trace!(%id, found = item.is_some(), "index lookup");
        item.map(|item| ItemRef::new(*self, item))
    }

    /// The crate's top-level module.
    pub fn root(&self) -> Option<ItemRef<'a, Item>> {
        self.item(&self.krate.root)
    }

    pub fn crate_name(&self) -> Option<&'a str> {
        self.root()?.name()
    }

    pub fn crate_version(&self) -> Option<&'a str> {
        self.krate.crate_version.as_deref()
    }

    /// The target of the intra-doc link `text` in `item`'s docs.
    pub fn resolve_link<'i>(&self, item: &'i Item, text: &str) -> Option<&'i Id> {
        item.links.get(text)
    }

    /// Members of `module`, in declaration order.
    pub fn children_of(&self, module: ItemRef<'a, Item>) -> ChildIterator<'a> {
        match module.inner() {
            ItemEnum::Module(module) => ChildIterator::new(*self, &module.items),
            _ => ChildIterator::empty(*self),
        }
    }

    /// Impl blocks of a trait, or of a struct, enum or union.
    ///
    /// Impl ids without an `index` entry are left out.
    pub fn implementations_of(&self, item: ItemRef<'a, Item>) -> Vec<ItemRef<'a, Item>> {
        let ids: &'a [Id] = match item.inner() {
            ItemEnum::Trait(trait_) => &trait_.implementations,
            ItemEnum::Struct(strukt) => &strukt.impls,
            ItemEnum::Enum(enm) => &enm.impls,
            ItemEnum::Union(union) => &union.impls,
            _ => &[],
        };
        ids.iter().filter_map(|id| self.item(id)).collect()
    }

    /// Impls of `item` without a trait.
    pub fn inherent_impls(&self, item: ItemRef<'a, Item>) -> Vec<ItemRef<'a, Item>> {
        self.impls_where(item, |trait_| trait_.is_none())
    }

    /// Impls of `item` for some trait.
    pub fn trait_impls(&self, item: ItemRef<'a, Item>) -> Vec<ItemRef<'a, Item>> {
        self.impls_where(item, |trait_| trait_.is_some())
    }

    fn impls_where(
        &self,
        item: ItemRef<'a, Item>,
        keep: impl Fn(Option<&Type>) -> bool,
    ) -> Vec<ItemRef<'a, Item>> {
        let mut impls = self.implementations_of(item);
        impls.retain(|imp| match imp.inner() {
            ItemEnum::Impl(block) => keep(block.trait_.as_ref()),
            _ => false,
        });
        impls
    }

    pub fn external_crate(&self, crate_id: CrateId) -> Option<&'a ExternalCrate> {
        self.krate.external_crates.get(&crate_id)
    }

    pub fn path_of(&self, id: &Id) -> Option<ItemPath<'a>> {
        self.krate
            .paths
            .get(id)
            .map(|summary| ItemPath::new(&summary.path))
    }

    /// The id whose summary path is exactly `segments`.
    ///
    /// Several ids may share a path (a function and a module of the same name,
    /// say); the smallest id wins.
    pub fn find_by_path(&self, segments: &[&str]) -> Option<Node<'a>> {
        let id = self
            .krate
            .paths
            .iter()
            .filter(|(_, summary)| {
                summary
                    .path
                    .iter()
                    .map(String::as_str)
                    .eq(segments.iter().copied())
            })
            .map(|(id, _)| id)
            .min()?;
        self.get(id)
    }

    /// Summary paths most similar to `query`, best first.
    ///
    /// Similarity is Jaro-Winkler over the `::`-joined path; equal scores go to
    /// the more canonical path.
    pub fn suggest_paths(&self, query: &str, limit: usize) -> Vec<PathSuggestion<'a>> {
        let mut ranked: Vec<(PathSuggestion<'a>, i32)> = self
            .krate
            .paths
            .iter()
            .map(|(id, summary)| {
                let path = ItemPath::new(&summary.path);
                let score = jaro_winkler::similarity(query.chars(), path.to_string().chars());
                let canonicality = path_canonicality_score(&summary.path);
                (PathSuggestion { id, path, score }, canonicality)
            })
            .collect();

        ranked.sort_by(|(a, a_canon), (b, b_canon)| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b_canon.cmp(a_canon))
                .then_with(|| a.path.segments().cmp(b.path.segments()))
                .then_with(|| a.id.cmp(b.id))
        });
        ranked.truncate(limit);

        tracing::trace!(query, suggestions = ranked.len(), "ranked path suggestions");
        ranked.into_iter().map(|(suggestion, _)| suggestion).collect()
    }

    /// Every `index` item of `kind`, sorted by id.
    pub fn items_of_kind(&self, kind: ItemKind) -> Vec<ItemRef<'a, Item>> {
        let mut items: Vec<_> = self
            .krate
            .index
            .values()
            .filter(|item| item.inner.kind() == kind)
            .map(|item| ItemRef::new(*self, item))
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }
}
