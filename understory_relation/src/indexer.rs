// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building a [`RelationMap`] and its [`InvertedMap`] from a flat collection.

use core::convert::Infallible;

use crate::key::IntoKey;
use crate::relation::{InvertedMap, RelationMap};

/// Output of one indexing pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Indexed {
    /// Forward map consumed by the script emitter.
    pub relations: RelationMap,
    /// Inverse map stored alongside the select for upward preselection.
    pub inverted: InvertedMap,
}

/// Index `records` with infallible extractors.
///
/// For each record the reference and value are stringified and the label is appended to
/// `relations[reference][value]`. Empty input yields empty maps.
///
/// ```
/// use understory_relation::index;
///
/// let cities = [(1, "Lyon", "fr"), (2, "Nice", "fr"), (3, "Porto", "pt")];
/// let idx = index(&cities, |c| c.0, |c| c.1, |c| c.2);
/// assert_eq!(idx.relations.labels("fr", "2"), ["Nice"]);
/// assert_eq!(idx.inverted.get("3"), Some("pt"));
/// ```
pub fn index<R, I, V, T, P>(
    records: I,
    mut value_of: impl FnMut(&R) -> V,
    mut text_of: impl FnMut(&R) -> T,
    mut reference_of: impl FnMut(&R) -> P,
) -> Indexed
where
    I: IntoIterator<Item = R>,
    V: IntoKey,
    T: IntoKey,
    P: IntoKey,
{
    let result = try_index(
        records,
        |r| Ok::<_, Infallible>(value_of(r)),
        |r| Ok(text_of(r)),
        |r| Ok(reference_of(r)),
    );
    match result {
        Ok(indexed) => indexed,
        Err(never) => match never {},
    }
}

/// Index `records` with fallible extractors.
///
/// The first extractor error stops indexing and is returned as is; nothing is recovered.
pub fn try_index<R, I, V, T, P, E>(
    records: I,
    mut value_of: impl FnMut(&R) -> Result<V, E>,
    mut text_of: impl FnMut(&R) -> Result<T, E>,
    mut reference_of: impl FnMut(&R) -> Result<P, E>,
) -> Result<Indexed, E>
where
    I: IntoIterator<Item = R>,
    V: IntoKey,
    T: IntoKey,
    P: IntoKey,
{
    let mut relations = RelationMap::new();
    let mut count = 0_usize;
    for record in records {
        let reference = reference_of(&record)?.into_key();
        let value = value_of(&record)?.into_key();
        let text = text_of(&record)?.into_key();
        relations.insert(reference, value, text);
        count += 1;
    }
    let inverted = relations.invert();
    tracing::debug!(
        records = count,
        parents = relations.len(),
        values = inverted.len(),
        "indexed relation collection"
    );
    Ok(Indexed {
        relations,
        inverted,
    })
}
