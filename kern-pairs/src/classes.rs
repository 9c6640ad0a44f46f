//! Class-based kerning, from PairPos format 2 subtables

use std::collections::{BTreeMap, BTreeSet};

use read_fonts::{
    tables::{
        gpos::PairPosFormat2,
        layout::{ClassDef, CoverageTable},
    },
    types::GlyphId16,
};

use crate::{
    kerning::KerningPairs,
    value::{self, KernValue},
};

/// Glyphs grouped by class index.
pub type GlyphClasses = BTreeMap<u16, Vec<GlyphId16>>;

/// Group the glyphs with an explicit, nonzero class.
fn explicit_classes(class_def: &ClassDef) -> GlyphClasses {
    let mut classes = GlyphClasses::new();
    for (glyph, class) in class_def.iter() {
        if class != 0 {
            classes.entry(class).or_default().push(glyph);
        }
    }
    classes
}

/// The classes of the first glyph of a pair.
///
/// Class 0 is special: a ClassDef never lists its members. In a PairPos
/// format 2 subtable it holds every covered glyph that isn't assigned to some
/// other class, so we rebuild it as the coverage minus the ClassDef keys.
/// This only holds for the first ClassDef of this subtable format.
pub fn left_classes(coverage: &CoverageTable, class_def: &ClassDef) -> GlyphClasses {
    let mut classes = explicit_classes(class_def);
    let assigned = classes.values().flatten().copied().collect::<BTreeSet<_>>();
    let class_zero = coverage
        .iter()
        .filter(|glyph| !assigned.contains(glyph))
        .collect::<BTreeSet<_>>();
    if !class_zero.is_empty() {
        classes.insert(0, class_zero.into_iter().collect());
    }
    classes
}

/// The classes of the second glyph of a pair.
///
/// Only explicitly assigned glyphs are included.
pub fn right_classes(class_def: &ClassDef) -> GlyphClasses {
    explicit_classes(class_def)
}

/// Add the expansion of every kerned class pair in this subtable to `pairs`.
///
/// Pairs that are already present are left unchanged. `label` identifies the
/// subtable in log messages.
pub(crate) fn extract_class_pairs(table: &PairPosFormat2, label: &str, pairs: &mut KerningPairs) {
    let format = table.value_format1();
    if format.is_empty() {
        // a class pair with a zero-length value record has no adjustment
        log::debug!("{label}: ValueFormat1 is 0, no class kerning");
        return;
    }
    if !value::is_supported_format(format) {
        log::warn!(
            "{label}: skipping class pairs with ValueFormat1 {}",
            format.bits()
        );
        return;
    }

    let (coverage, class_def1, class_def2) =
        match (table.coverage(), table.class_def1(), table.class_def2()) {
            (Ok(coverage), Ok(class_def1), Ok(class_def2)) => (coverage, class_def1, class_def2),
            (Err(err), ..) | (_, Err(err), _) | (.., Err(err)) => {
                log::warn!("{label}: skipping class pairs: '{err}'");
                return;
            }
        };
    let left = left_classes(&coverage, &class_def1);
    let right = right_classes(&class_def2);
    let class1_records = table.class1_records();

    let mut added = 0usize;
    for (class1, left_glyphs) in &left {
        for (class2, right_glyphs) in &right {
            let record = class1_records
                .get(*class1 as usize)
                .and_then(|rec| rec.class2_records().get(*class2 as usize));
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    log::error!(
                        "{label}: no value record for class pair ({class1}, {class2}): '{err}'"
                    );
                    continue;
                }
            };
            let Some(value) = KernValue::from_value_record(format, record.value_record1()) else {
                continue;
            };
            if value.is_zero() {
                continue;
            }
            for left_glyph in left_glyphs {
                for right_glyph in right_glyphs {
                    if pairs.insert_class(*left_glyph, *right_glyph, value) {
                        added += 1;
                    }
                }
            }
        }
    }
    log::debug!("{label}: read {added} class pairs");
}
