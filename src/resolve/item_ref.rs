//! ItemRef provides lifetime-bound handles to items with access back to the resolver.

use super::iterator::ChildIterator;
use super::path::ItemPath;
use super::{Node, Resolver};
use crate::model::{Id, Item, ItemEnum, ItemKind, Visibility};
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;

/// A reference to a model value that remembers the [`Resolver`] it came from.
/// Provides transparent access to the underlying value via Deref.
pub struct ItemRef<'a, T> {
    resolver: Resolver<'a>,
    item: &'a T,
}

// Manually implement Copy and Clone without requiring T: Copy,
// since ItemRef only contains references which are always Copy.
impl<T> Copy for ItemRef<'_, T> {}

impl<T> Clone for ItemRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Deref for ItemRef<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.item
    }
}

impl<'a, T> ItemRef<'a, T> {
    pub(crate) const fn new(resolver: Resolver<'a>, item: &'a T) -> Self {
        Self { resolver, item }
    }

    /// The underlying value, with the full `'a` lifetime.
    #[inline]
    pub const fn get_ref(&self) -> &'a T {
        self.item
    }
}

impl<'a> ItemRef<'a, Item> {
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        self.item.name.as_deref()
    }

    #[inline]
    pub fn inner(&self) -> &'a ItemEnum {
        &self.item.inner
    }

    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.item.inner.kind()
    }

    /// Raw markdown documentation, if any was written.
    #[inline]
    pub fn docs(&self) -> Option<&'a str> {
        self.item.docs.as_deref()
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        matches!(self.item.visibility, Visibility::Public)
    }

    /// Whether the item's member list is known to be incomplete.
    pub const fn is_stripped(&self) -> bool {
        match &self.item.inner {
            ItemEnum::Module(module) => module.is_stripped,
            ItemEnum::Struct(strukt) => strukt.fields_stripped,
            ItemEnum::Union(union) => union.fields_stripped,
            ItemEnum::Enum(enm) => enm.variants_stripped,
            ItemEnum::Variant(variant) => variant.fields_stripped,
            _ => false,
        }
    }

    /// Follow an intra-doc link written in this item's docs.
    pub fn link(&self, text: &str) -> Option<Node<'a>> {
        let target = self.resolver.resolve_link(self.item, text)?;
        self.resolver.get(target)
    }

    /// Get the path to this item if `paths` records one.
    pub fn path(&self) -> Option<ItemPath<'a>> {
        self.resolver.path_of(&self.item.id)
    }

    /// Resolve an Id through the same resolver.
    #[inline]
    pub fn get(&self, id: &Id) -> Option<Node<'a>> {
        self.resolver.get(id)
    }

    pub fn children(&self) -> ChildIterator<'a> {
        self.resolver.children_of(*self)
    }

    pub fn implementations(&self) -> Vec<Self> {
        self.resolver.implementations_of(*self)
    }
}

impl<T: Debug> Debug for ItemRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRef")
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> PartialEq for ItemRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}
