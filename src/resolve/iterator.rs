//! Iterator for traversing a module's members.

use super::{Node, Resolver};
use crate::model::Id;

/// Members of a module in declaration order.
///
/// Ids that neither `index` nor `paths` can resolve are skipped. Built from
/// anything other than a module, the iterator is empty.
pub struct ChildIterator<'a> {
    resolver: Resolver<'a>,
    ids: std::slice::Iter<'a, Id>,
}

impl<'a> ChildIterator<'a> {
    pub(crate) fn new(resolver: Resolver<'a>, ids: &'a [Id]) -> Self {
        Self {
            resolver,
            ids: ids.iter(),
        }
    }

    pub(crate) fn empty(resolver: Resolver<'a>) -> Self {
        Self::new(resolver, &[])
    }
}

impl<'a> Iterator for ChildIterator<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for id in self.ids.by_ref() {
            match self.resolver.get(id) {
                Some(node) => return Some(node),
                None => tracing::debug!(%id, "skipping unresolvable module member"),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.ids.size_hint().1)
    }
}

impl std::iter::FusedIterator for ChildIterator<'_> {}
