//! Extracting kerning pairs from the GPOS table.
//!
//! Kerning in an OpenType font lives in the pair adjustment lookups of the
//! `kern` feature. These lookups describe kerning in two ways: as explicit
//! glyph pairs (PairPos format 1), and as pairs of glyph classes (PairPos
//! format 2). This crate flattens both into a single set of
//! `(left glyph, right glyph) -> value` records.
//!
//! When both forms describe the same pair, the explicit pair wins.
//!
//! Values are read for left-to-right fonts (ValueFormat 4, an x-advance) and
//! for right-to-left fonts (ValueFormat 5, an x-placement and x-advance).
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use kern_pairs::{analyze, GlyphNames, Options};
//! use read_fonts::FontRef;
//!
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).unwrap();
//! let pairs = analyze(&font, &Options::default()).unwrap();
//! for line in kern_pairs::format_pairs(&pairs, &GlyphNames::new(&font)) {
//!     println!("{line}");
//! }
//! ```

#![forbid(unsafe_code)]

mod classes;
mod error;
mod kerning;
pub mod lookups;
pub mod names;
pub mod output;
mod pairs;
pub mod subtables;
mod value;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod testing;

use read_fonts::{
    tables::gpos::{Gpos, PairPos},
    FontRef, ReadError, TableProvider,
};

pub use classes::{left_classes, right_classes, GlyphClasses};
pub use error::Error;
pub use kerning::{DuplicatePolicy, KernSource, KerningPairs};
pub use names::GlyphNames;
pub use output::{format_pairs, write_pairs};
pub use value::KernValue;

/// Settings for an analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// How to handle a pair that appears in more than one format 1 subtable.
    pub duplicate_policy: DuplicatePolicy,
}

/// Find all the kerning pairs in a font.
///
/// Returns an error if the font has no GPOS table or no `kern` feature.
pub fn analyze(font: &FontRef, options: &Options) -> Result<KerningPairs, Error> {
    let gpos = match font.gpos() {
        Ok(gpos) => gpos,
        Err(ReadError::TableIsMissing(_)) => return Err(Error::NoGpos),
        Err(err) => return Err(err.into()),
    };
    analyze_gpos(&gpos, options)
}

/// Find all the kerning pairs in a GPOS table.
pub fn analyze_gpos(gpos: &Gpos, options: &Options) -> Result<KerningPairs, Error> {
    let lookups = lookups::kern_lookups(gpos)?;
    let subtables = subtables::collect_pair_pos(&lookups);
    let mut pairs = KerningPairs::default();

    // every explicit pair goes in before any class is expanded
    for subtable in &subtables {
        if let PairPos::Format1(table) = &subtable.table {
            pairs::extract_pairs(
                table,
                &label(subtable),
                options.duplicate_policy,
                &mut pairs,
            );
        }
    }
    for subtable in &subtables {
        if let PairPos::Format2(table) = &subtable.table {
            classes::extract_class_pairs(table, &label(subtable), &mut pairs);
        }
    }

    log::info!(
        "{} kerning pairs ({} from pairs, {} from classes) in {} subtables",
        pairs.len(),
        pairs.count_from(KernSource::Pair),
        pairs.count_from(KernSource::Class),
        subtables.len()
    );
    Ok(pairs)
}

fn label(subtable: &subtables::PairPosSubtable) -> String {
    format!(
        "lookup {} subtable {}",
        subtable.lookup_index, subtable.subtable_index
    )
}
