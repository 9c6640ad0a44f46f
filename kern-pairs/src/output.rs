//! Printing kerning pairs

use std::{borrow::Cow, collections::BTreeMap, io::Write};

use crate::{kerning::KerningPairs, names::GlyphNames, value::KernValue};

/// Format each pair as `/<left> /<right> <value>`, sorted.
///
/// If two glyphs share a name, only the first pair (by glyph id) for each
/// pair of names is kept.
pub fn format_pairs(pairs: &KerningPairs, names: &GlyphNames) -> Vec<String> {
    let mut named: BTreeMap<(Cow<str>, Cow<str>), KernValue> = BTreeMap::new();
    for (left, right, value) in pairs.iter() {
        let key = (names.get(left), names.get(right));
        if named.contains_key(&key) {
            log::warn!(
                "duplicate glyph names: pair /{} /{} (glyph ids {}, {}) is ignored",
                key.0,
                key.1,
                left.to_u16(),
                right.to_u16()
            );
            continue;
        }
        named.insert(key, value);
    }
    // glyph names contain no characters that sort before ' ', so ordering by
    // (left, right) is the same as ordering the formatted lines.
    named
        .into_iter()
        .map(|((left, right), value)| format!("/{left} /{right} {value}"))
        .collect()
}

/// Write the formatted pairs, one per line.
pub fn write_pairs(
    writer: &mut impl Write,
    pairs: &KerningPairs,
    names: &GlyphNames,
) -> std::io::Result<()> {
    for line in format_pairs(pairs, names) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
