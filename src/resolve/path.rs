//! Item paths, path parsing and fuzzy path suggestions.

use crate::model::Id;
use std::fmt::{self, Display, Formatter};

/// A fully qualified path such as `std::vec::Vec`, borrowed from `paths`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPath<'a>(&'a [String]);

impl<'a> ItemPath<'a> {
    pub(crate) const fn new(segments: &'a [String]) -> Self {
        Self(segments)
    }

    pub const fn segments(&self) -> &'a [String] {
        self.0
    }

    /// The final segment, i.e. the item's own name.
    pub fn name(&self) -> Option<&'a str> {
        self.0.last().map(String::as_str)
    }

    /// The crate the path starts in.
    pub fn crate_name(&self) -> Option<&'a str> {
        self.0.first().map(String::as_str)
    }
}

impl Display for ItemPath<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("::")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Split a query like `std::vec::Vec` into its segments.
///
/// Whitespace around segments and empty segments (from `::Vec` or `a::::b`)
/// are dropped.
pub fn parse_path(query: &str) -> Vec<&str> {
    query
        .split("::")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// A path that resembles a query which did not resolve.
#[derive(Debug, Clone, Copy)]
pub struct PathSuggestion<'a> {
    pub id: &'a Id,
    pub path: ItemPath<'a>,
    pub score: f64,
}

impl<'a> PathSuggestion<'a> {
    pub const fn id(&self) -> &'a Id {
        self.id
    }

    pub const fn path(&self) -> ItemPath<'a> {
        self.path
    }

    /// Get the similarity score (0.0 to 1.0, higher is better).
    pub const fn score(&self) -> f64 {
        self.score
    }
}

/// Calculate a canonicality score for a path.
///
/// More canonical paths (shorter, fewer internal markers) get higher scores.
/// Used to order suggestions that are equally similar to the query.
///
/// Scoring:
/// - Base score: 100
/// - Penalty: -8 per additional path segment (beyond the first)
/// - Penalty: -40 per segment carrying an internal marker (_private, __, etc.)
pub fn path_canonicality_score(segments: &[String]) -> i32 {
    const INTERNAL_MARKERS: [&str; 6] = [
        "_core",
        "_private",
        "_internal",
        "internal",
        "private",
        "__",
    ];

    let extra_segments = i32::try_from(segments.len().saturating_sub(1)).unwrap_or(i32::MAX / 8);
    let mut score = 100 - extra_segments * 8;
    for segment in segments {
        if INTERNAL_MARKERS
            .iter()
            .any(|marker| segment.contains(marker))
        {
            score -= 40;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn owned(segments: &[&str]) -> Vec<String> {
        segments.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case("Vec", &["Vec"])]
    #[case("std::vec::Vec", &["std", "vec", "Vec"])]
    #[case(" std :: vec ", &["std", "vec"])]
    #[case("::Vec", &["Vec"])]
    #[case("", &[])]
    fn parses_queries(#[case] query: &str, #[case] expected: &[&str]) {
        check!(parse_path(query) == expected);
    }

    #[test]
    fn displays_with_double_colons() {
        let segments = owned(&["serde", "de", "Deserialize"]);
        let path = ItemPath::new(&segments);
        check!(path.to_string() == "serde::de::Deserialize");
        check!(path.name() == Some("Deserialize"));
        check!(path.crate_name() == Some("serde"));
    }

    #[rstest]
    #[case(&["serde", "Deserialize"], &["serde", "de", "Deserialize"])]
    #[case(&["serde", "de", "Deserialize"], &["serde", "__private", "de", "Deserialize"])]
    #[case(&["tokio", "spawn"], &["tokio_internal", "spawn"])]
    fn canonical_paths_score_higher(#[case] better: &[&str], #[case] worse: &[&str]) {
        check!(path_canonicality_score(&owned(better)) > path_canonicality_score(&owned(worse)));
    }
}
