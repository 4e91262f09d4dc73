//! Whole-document checks that run once every entry has been decoded.

use crate::error::{DecodeError, RootProblem};
use crate::model::{Crate, Id, ItemEnum, Visibility, walk};
use ahash::AHashSet;

/// Every id reachable from an item's payload or its `pub(in path)` parent must
/// be described by `index` or `paths`.
///
/// Each missing id is reported once, blamed on the first referrer in id order.
pub(super) fn dangling_references(krate: &Crate) -> Vec<DecodeError> {
    let mut items: Vec<_> = krate.index.values().collect();
    items.sort_unstable_by(|a, b| a.id.cmp(&b.id));

    let mut reported: AHashSet<&Id> = AHashSet::new();
    let mut errors = Vec::new();
    for item in items {
        let parent = match &item.visibility {
            Visibility::Restricted { parent, .. } => Some(parent),
            _ => None,
        };
        for id in parent.into_iter().chain(walk::referenced_ids(&item.inner)) {
            if krate.index.contains_key(id) || krate.paths.contains_key(id) {
                continue;
            }
            if reported.insert(id) {
                tracing::warn!(id = %id, referrer = %item.id, "dangling reference");
                errors.push(DecodeError::DanglingReference {
                    id: id.clone(),
                    referrer: item.id.clone(),
                });
            }
        }
    }
    errors
}

pub(super) fn check_root(krate: &Crate) -> Result<(), DecodeError> {
    let reason = match krate.index.get(&krate.root) {
        Some(item) => match item.inner {
            ItemEnum::Module(_) => return Ok(()),
            ref other => RootProblem::NotAModule(other.kind()),
        },
        None => RootProblem::NotInIndex,
    };
    Err(DecodeError::InvalidRoot {
        root: krate.root.clone(),
        reason,
    })
}
