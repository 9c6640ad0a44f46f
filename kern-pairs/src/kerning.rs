//! The set of kerning pairs found in a font

use std::collections::{btree_map::Entry, BTreeMap};

use read_fonts::types::GlyphId16;

use crate::value::KernValue;

/// Where a kerning record was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernSource {
    /// A pair adjustment subtable in format 1, which lists explicit glyph pairs.
    Pair,
    /// A pair adjustment subtable in format 2, which kerns glyph classes.
    Class,
}

/// How to handle a glyph pair that appears in more than one format 1 subtable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// The value from the last subtable (in lookup order) is kept.
    #[default]
    Last,
    /// The value from the first subtable is kept.
    ///
    /// This is what a shaping engine would apply.
    First,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct KernRecord {
    value: KernValue,
    source: KernSource,
}

/// All of the kerning pairs in a font, keyed by `(left, right)` glyph.
///
/// There is at most one value for each pair. A value from a pair-level
/// subtable always replaces a value from a class subtable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KerningPairs {
    records: BTreeMap<(GlyphId16, GlyphId16), KernRecord>,
}

impl KerningPairs {
    /// The number of pairs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the font has no kerning pairs.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The value for a pair, if it is kerned.
    pub fn get(&self, left: GlyphId16, right: GlyphId16) -> Option<KernValue> {
        self.records.get(&(left, right)).map(|rec| rec.value)
    }

    /// The kind of subtable that the value for this pair came from.
    pub fn source(&self, left: GlyphId16, right: GlyphId16) -> Option<KernSource> {
        self.records.get(&(left, right)).map(|rec| rec.source)
    }

    /// Iterate over `(left, right, value)`, ordered by glyph id.
    pub fn iter(&self) -> impl Iterator<Item = (GlyphId16, GlyphId16, KernValue)> + '_ {
        self.records
            .iter()
            .map(|((left, right), rec)| (*left, *right, rec.value))
    }

    /// The number of pairs that came from subtables of the given kind.
    pub fn count_from(&self, source: KernSource) -> usize {
        self.records
            .values()
            .filter(|rec| rec.source == source)
            .count()
    }

    /// Record a pair from a format 1 subtable.
    pub(crate) fn insert_pair(
        &mut self,
        left: GlyphId16,
        right: GlyphId16,
        value: KernValue,
        policy: DuplicatePolicy,
    ) {
        let record = KernRecord {
            value,
            source: KernSource::Pair,
        };
        match self.records.entry((left, right)) {
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
            Entry::Occupied(mut entry) => {
                let replace = entry.get().source == KernSource::Class
                    || policy == DuplicatePolicy::Last;
                if replace {
                    entry.insert(record);
                }
            }
        }
    }

    /// Record a pair from a format 2 subtable, unless the pair is already kerned.
    ///
    /// Returns `true` if the pair was added.
    pub(crate) fn insert_class(
        &mut self,
        left: GlyphId16,
        right: GlyphId16,
        value: KernValue,
    ) -> bool {
        match self.records.entry((left, right)) {
            Entry::Vacant(entry) => {
                entry.insert(KernRecord {
                    value,
                    source: KernSource::Class,
                });
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}
