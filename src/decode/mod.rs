//! Turning an untyped JSON document into a validated [`Crate`].
//!
//! Decoding is hand-written over [`serde_json::Value`] rather than derived, so
//! that every failure can be classified (missing field, wrong shape, unknown
//! tag) and located (`$.index.0:3.inner.fields`).
//!
//! Index entries are independent of each other and are decoded in parallel.
//! A broken entry is dropped and reported in [`Decoded::diagnostics`] unless
//! [`DecodeOptions::strict`] is set.

mod fields;
mod generics;
mod items;
mod types;
mod validate;

use crate::error::DecodeError;
use crate::model::{Crate, FORMAT_VERSION, Id, Item};
use fields::{Fields, Loc};
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

pub(crate) type Result<T> = std::result::Result<T, DecodeError>;

/// Fields that must exist before anything is decoded, in reporting order.
const REQUIRED_FIELDS: [&str; 5] = ["root", "includes_private", "index", "paths", "external_crates"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Fail on the first per-item error or dangling reference instead of
    /// reporting it.
    pub strict: bool,
}

impl DecodeOptions {
    pub const fn strict() -> Self {
        Self { strict: true }
    }
}

/// A successfully decoded crate and the problems that were tolerated on the way.
#[derive(Debug)]
pub struct Decoded {
    pub krate: Crate,
    /// Per-item errors sorted by item id, then dangling references sorted by
    /// referrer. Always empty in strict mode.
    pub diagnostics: Vec<DecodeError>,
}

/// Parses `bytes` as JSON, then [`decode`]s it.
pub fn decode_slice(bytes: &[u8], options: &DecodeOptions) -> Result<Decoded> {
    let raw: Value = serde_json::from_slice(bytes)?;
    decode(&raw, options)
}

/// Parses `text` as JSON, then [`decode`]s it.
pub fn decode_str(text: &str, options: &DecodeOptions) -> Result<Decoded> {
    let raw: Value = serde_json::from_str(text)?;
    decode(&raw, options)
}

/// Decodes and validates a rustdoc JSON document.
///
/// The format version is checked before anything else; a document of another
/// version is rejected without looking at the rest of it.
pub fn decode(raw: &Value, options: &DecodeOptions) -> Result<Decoded> {
    let root = Loc::ROOT;
    let top = Fields::object(raw, root)?;
    let format_version = check_version(top)?;

    for field in REQUIRED_FIELDS {
        top.required(field)?;
    }
    let root_id = top.id("root")?;
    let includes_private = top.bool("includes_private")?;
    let crate_version = top.opt_string("crate_version")?;

    let external_crates = top.map("external_crates", items::decode_external_crate)?;

    let (index, mut diagnostics) = decode_index(top, options)?;

    let paths = top.map("paths", |key, value, loc| {
        Ok((Id::from(key), items::decode_summary(value, loc)?))
    })?;

    let krate = Crate {
        root: root_id,
        crate_version,
        includes_private,
        index,
        paths,
        external_crates,
        format_version,
    };

    let mut dangling = validate::dangling_references(&krate);
    if options.strict && !dangling.is_empty() {
        return Err(dangling.swap_remove(0));
    }
    diagnostics.extend(dangling);

    validate::check_root(&krate)?;

    tracing::debug!(
        items = krate.index.len(),
        paths = krate.paths.len(),
        diagnostics = diagnostics.len(),
        "decoded crate"
    );
    Ok(Decoded { krate, diagnostics })
}

fn check_version(top: Fields<'_, '_>) -> Result<u32> {
    let value = top.required("format_version")?;
    let here = top.loc();
    let number = match value {
        Value::Number(number) if number.is_u64() || number.is_i64() => number,
        other => {
            return Err(fields::mismatch(
                here.key("format_version"),
                "an integer",
                other,
            ));
        }
    };
    if number.as_u64() == Some(u64::from(FORMAT_VERSION)) {
        Ok(FORMAT_VERSION)
    } else {
        Err(DecodeError::UnsupportedVersion {
            found: number.clone(),
            expected: FORMAT_VERSION,
        })
    }
}

/// Decodes every `index` entry in parallel, isolating per-item failures.
fn decode_index(
    top: Fields<'_, '_>,
    options: &DecodeOptions,
) -> Result<(HashMap<Id, Item>, Vec<DecodeError>)> {
    let value = top.required("index")?;
    let here = top.loc();
    let loc = here.key("index");
    let entries = Fields::object(value, loc)?;

    let mut results: Vec<(&str, Result<Item>)> = entries
        .entries()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(key, value)| (key.as_str(), items::decode_item(key, value, loc.key(key))))
        .collect();
    results.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut index = HashMap::with_capacity(results.len());
    let mut diagnostics = Vec::new();
    for (key, result) in results {
        match result {
            Ok(item) => {
                index.insert(item.id.clone(), item);
            }
            Err(err) if options.strict => return Err(err),
            Err(err) => {
                tracing::warn!(id = key, error = %err, "dropping undecodable item");
                diagnostics.push(err);
            }
        }
    }

    tracing::debug!(
        decoded = index.len(),
        dropped = diagnostics.len(),
        "decoded index"
    );
    Ok((index, diagnostics))
}
