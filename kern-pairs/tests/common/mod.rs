//! Compiling small test fonts in memory.
//!
//! This is shared between the unit tests (where it is included as
//! `crate::testing`) and the integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use write_fonts::{
    tables::{
        gpos::{
            Class1Record, Class2Record, ExtensionPosFormat1, ExtensionSubtable, Gpos, PairPos,
            PairSet, PairValueRecord, PositionLookup, PositionSequenceContext, SinglePos,
            ValueRecord,
        },
        layout::{
            ClassDef, CoverageTable, Feature, FeatureList, FeatureRecord, Lookup, LookupFlag,
            LookupList, ScriptList,
        },
        post::Post,
    },
    types::{GlyphId16, Tag},
    FontBuilder,
};

/// The glyph order of every test font.
pub const GLYPHS: &[&str] = &[".notdef", "A", "B", "C", "D", "E", "F", "G", "H"];

/// The glyph id of a glyph in [`GLYPHS`].
pub fn gid(name: &str) -> u16 {
    GLYPHS
        .iter()
        .position(|glyph| *glyph == name)
        .unwrap_or_else(|| panic!("no glyph named '{name}'")) as u16
}

fn glyph(name: &str) -> GlyphId16 {
    GlyphId16::new(gid(name))
}

/// A value record in ValueFormat 4.
pub fn ltr(x_advance: i16) -> ValueRecord {
    ValueRecord::new().with_x_advance(x_advance)
}

/// A value record in ValueFormat 5.
pub fn rtl(x_placement: i16, x_advance: i16) -> ValueRecord {
    ValueRecord::new()
        .with_x_placement(x_placement)
        .with_x_advance(x_advance)
}

/// A value record with the same format as `record` and all values zero.
fn zero_like(record: &ValueRecord) -> ValueRecord {
    let mut zero = ValueRecord::new();
    if record.x_placement.is_some() {
        zero = zero.with_x_placement(0);
    }
    if record.y_placement.is_some() {
        zero = zero.with_y_placement(0);
    }
    if record.x_advance.is_some() {
        zero = zero.with_x_advance(0);
    }
    if record.y_advance.is_some() {
        zero = zero.with_y_advance(0);
    }
    zero
}

/// A format 1 pair adjustment subtable.
pub fn pair_pos_1(pairs: &[(&str, &str, ValueRecord)]) -> PairPos {
    pair_pos_1_with_second(pairs, ValueRecord::new())
}

/// A format 1 pair adjustment subtable where every pair also adjusts the
/// second glyph by `second`.
pub fn pair_pos_1_with_second(pairs: &[(&str, &str, ValueRecord)], second: ValueRecord) -> PairPos {
    let mut pair_sets: BTreeMap<GlyphId16, BTreeMap<GlyphId16, ValueRecord>> = BTreeMap::new();
    for (left, right, value) in pairs {
        pair_sets
            .entry(glyph(left))
            .or_default()
            .insert(glyph(right), value.clone());
    }
    let coverage = pair_sets.keys().copied().collect::<CoverageTable>();
    let pair_sets = pair_sets
        .into_values()
        .map(|records| {
            PairSet::new(
                records
                    .into_iter()
                    .map(|(right, value)| PairValueRecord::new(right, value, second.clone()))
                    .collect(),
            )
        })
        .collect();
    PairPos::format_1(coverage, pair_sets)
}

/// A format 2 pair adjustment subtable.
///
/// `left` and `right` assign glyphs to classes; `class_zero` lists the
/// coverage glyphs that are only in left class 0. Cells that are not listed
/// in `cells` have a zero value in the same format as the listed cells.
///
/// The class1 and class2 record arrays are sized by the number of distinct
/// classes, so class indices should be contiguous unless a test wants a cell
/// without a record.
pub fn pair_pos_2(
    left: &[(&str, u16)],
    right: &[(&str, u16)],
    class_zero: &[&str],
    cells: &[(u16, u16, ValueRecord)],
) -> PairPos {
    pair_pos_2_with_second(left, right, class_zero, cells, ValueRecord::new())
}

/// A format 2 pair adjustment subtable where every cell also adjusts the
/// second glyph by `second`.
pub fn pair_pos_2_with_second(
    left: &[(&str, u16)],
    right: &[(&str, u16)],
    class_zero: &[&str],
    cells: &[(u16, u16, ValueRecord)],
    second: ValueRecord,
) -> PairPos {
    let coverage = left
        .iter()
        .map(|(name, _)| glyph(name))
        .chain(class_zero.iter().map(|name| glyph(name)))
        .collect::<CoverageTable>();
    let class_def1 = left
        .iter()
        .map(|(name, class)| (glyph(name), *class))
        .collect::<ClassDef>();
    let class_def2 = right
        .iter()
        .map(|(name, class)| (glyph(name), *class))
        .collect::<ClassDef>();

    let n_rows = distinct_classes(left);
    let n_cols = distinct_classes(right);
    let empty = cells
        .first()
        .map(|(_, _, value)| zero_like(value))
        .unwrap_or_default();
    let cells = cells
        .iter()
        .map(|(class1, class2, value)| ((*class1, *class2), value.clone()))
        .collect::<BTreeMap<_, _>>();
    let class1_records = (0..n_rows)
        .map(|class1| {
            Class1Record::new(
                (0..n_cols)
                    .map(|class2| {
                        let value = cells
                            .get(&(class1, class2))
                            .cloned()
                            .unwrap_or_else(|| empty.clone());
                        Class2Record::new(value, second.clone())
                    })
                    .collect(),
            )
        })
        .collect();
    PairPos::format_2(coverage, class_def1, class_def2, class1_records)
}

fn distinct_classes(assignments: &[(&str, u16)]) -> u16 {
    assignments
        .iter()
        .map(|(_, class)| *class)
        .chain(std::iter::once(0))
        .collect::<BTreeSet<_>>()
        .len() as u16
}

/// A GPOS lookup.
pub struct LookupSpec(PositionLookup);

impl LookupSpec {
    /// A pair adjustment lookup with a single format 1 subtable.
    pub fn pairs(pairs: &[(&str, &str, ValueRecord)]) -> Self {
        Self::subtables(vec![pair_pos_1(pairs)])
    }

    /// A pair adjustment lookup with the given subtables.
    pub fn subtables(subtables: Vec<PairPos>) -> Self {
        LookupSpec(PositionLookup::Pair(Lookup::new(
            LookupFlag::empty(),
            subtables,
        )))
    }

    /// A pair adjustment lookup with each subtable wrapped in an extension
    /// subtable.
    pub fn extension(subtables: Vec<PairPos>) -> Self {
        let subtables = subtables
            .into_iter()
            .map(|table| ExtensionSubtable::Pair(ExtensionPosFormat1::new(2, table)))
            .collect();
        LookupSpec(PositionLookup::Extension(Lookup::new(
            LookupFlag::empty(),
            subtables,
        )))
    }

    /// An extension lookup wrapping an (empty) contextual positioning subtable.
    pub fn contextual_extension() -> Self {
        let subtable =
            ExtensionSubtable::Contextual(ExtensionPosFormat1::new(7, PositionSequenceContext::default()));
        LookupSpec(PositionLookup::Extension(Lookup::new(
            LookupFlag::empty(),
            vec![subtable],
        )))
    }

    /// A single adjustment lookup, which is never used for kerning.
    pub fn single() -> Self {
        let coverage = [glyph("A")].into_iter().collect::<CoverageTable>();
        let subtable = SinglePos::format_1(coverage, ltr(5));
        LookupSpec(PositionLookup::Single(Lookup::new(
            LookupFlag::empty(),
            vec![subtable],
        )))
    }
}

/// A GPOS feature.
pub struct FeatureSpec {
    tag: Tag,
    lookups: Vec<u16>,
}

impl FeatureSpec {
    pub fn new(tag: &[u8; 4], lookups: &[u16]) -> Self {
        FeatureSpec {
            tag: Tag::new(tag),
            lookups: lookups.to_vec(),
        }
    }

    pub fn kern(lookups: &[u16]) -> Self {
        Self::new(b"kern", lookups)
    }
}

/// The contents of a test font.
pub struct FontSpec {
    pub lookups: Vec<LookupSpec>,
    pub features: Vec<FeatureSpec>,
    /// If `false`, the font has no GPOS table.
    pub with_gpos: bool,
    /// If `false`, the font has no post table and glyphs are unnamed.
    pub with_post: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        FontSpec {
            lookups: Vec::new(),
            features: Vec::new(),
            with_gpos: true,
            with_post: true,
        }
    }
}

impl FontSpec {
    /// A font with one kern feature that uses every lookup.
    pub fn kern(lookups: Vec<LookupSpec>) -> Self {
        let indices = (0..lookups.len() as u16).collect::<Vec<_>>();
        FontSpec {
            lookups,
            features: vec![FeatureSpec::kern(&indices)],
            ..Default::default()
        }
    }

    /// Compile the font.
    pub fn build(self) -> Vec<u8> {
        let mut builder = FontBuilder::new();
        if self.with_gpos {
            let features = self
                .features
                .into_iter()
                .map(|spec| FeatureRecord::new(spec.tag, Feature::new(None, spec.lookups)))
                .collect();
            let lookups = self.lookups.into_iter().map(|spec| spec.0).collect();
            let gpos = Gpos::new(
                ScriptList::default(),
                FeatureList::new(features),
                LookupList::new(lookups),
            );
            builder.add_table(&gpos).unwrap();
        }
        if self.with_post {
            let post = Post::new_v2(GLYPHS.iter().copied());
            builder.add_table(&post).unwrap();
        }
        builder.build()
    }
}

/// The offset of a table in a compiled (non-collection) font.
pub fn table_offset(font: &[u8], tag: &[u8; 4]) -> usize {
    let num_tables = u16::from_be_bytes([font[4], font[5]]) as usize;
    (0..num_tables)
        .map(|i| 12 + i * 16)
        .find(|record| &font[*record..*record + 4] == tag)
        .map(|record| {
            let offset = &font[record + 8..record + 12];
            u32::from_be_bytes([offset[0], offset[1], offset[2], offset[3]]) as usize
        })
        .unwrap_or_else(|| panic!("no table '{}'", String::from_utf8_lossy(tag)))
}
