// Copyright (c) Contributors to the buildspec project.
// SPDX-License-Identifier: Apache-2.0

//! Extras resolution: named groups of optional install requirements.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(test)]
#[path = "./extras_test.rs"]
mod extras_test;

/// Requirement sets keyed by extras tag. BTree ordering makes serialized
/// output byte-identical across resolutions of the same input.
pub type ExtrasTable = BTreeMap<String, BTreeSet<String>>;

/// Reserved tag holding the union of every other tag's requirements.
pub const ALL_EXTRA: &str = "all";

/// Group comma-separated requirement lists into named extras sets.
///
/// `extra_requires` is a comma-separated tag list; each tag's requirements
/// come from the `{tag}_requires` key in `requirements_by_tag`. A synthesized
/// [`ALL_EXTRA`] entry unions all tags, duplicate-free.
///
/// An empty tag list yields an empty table with no [`ALL_EXTRA`] key, so
/// callers branch on emptiness rather than iterating an empty aggregate.
/// A listed tag without a backing key is a configuration error naming the
/// offending key.
pub fn resolve_extras(
    extra_requires: &str,
    requirements_by_tag: &BTreeMap<String, String>,
) -> crate::Result<ExtrasTable> {
    let tags: Vec<&str> = extra_requires
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect();

    if tags.is_empty() {
        return Ok(ExtrasTable::new());
    }

    let mut table = ExtrasTable::new();
    let mut all = BTreeSet::new();

    for tag in tags {
        let key = format!("{tag}_requires");
        let raw = requirements_by_tag
            .get(&key)
            .ok_or_else(|| crate::Error::MissingRequirementKey {
                tag: tag.to_string(),
                key: key.clone(),
            })?;

        let requirements: BTreeSet<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|req| !req.is_empty())
            .map(String::from)
            .collect();

        all.extend(requirements.iter().cloned());
        table.insert(tag.to_string(), requirements);
    }

    table.insert(ALL_EXTRA.to_string(), all);
    Ok(table)
}
