//! Pair-level kerning, from PairPos format 1 subtables

use read_fonts::tables::gpos::PairPosFormat1;

use crate::{
    kerning::{DuplicatePolicy, KerningPairs},
    value::KernValue,
};

/// Add every pair listed in this subtable to `pairs`.
///
/// `label` identifies the subtable in log messages.
pub(crate) fn extract_pairs(
    table: &PairPosFormat1,
    label: &str,
    policy: DuplicatePolicy,
    pairs: &mut KerningPairs,
) {
    let coverage = match table.coverage() {
        Ok(coverage) => coverage,
        Err(err) => {
            log::warn!("{label}: skipping pairs, coverage is unreadable: '{err}'");
            return;
        }
    };
    let format = table.value_format1();
    let pair_sets = table.pair_sets();
    let mut added = 0usize;
    let mut skipped = 0usize;

    for (pair_set_index, (first, pair_set)) in coverage.iter().zip(pair_sets.iter()).enumerate() {
        let pair_set = match pair_set {
            Ok(pair_set) => pair_set,
            Err(err) => {
                log::warn!("{label}: pair set {pair_set_index} is unreadable: '{err}'");
                continue;
            }
        };
        for record in pair_set.pair_value_records().iter() {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    log::warn!("{label}: pair set {pair_set_index} has a bad record: '{err}'");
                    continue;
                }
            };
            match KernValue::from_value_record(format, record.value_record1()) {
                Some(value) => {
                    pairs.insert_pair(first, record.second_glyph(), value, policy);
                    added += 1;
                }
                None => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        log::warn!(
            "{label}: skipped {skipped} pairs with ValueFormat1 {}",
            format.bits()
        );
    }
    log::debug!("{label}: read {added} pairs");
}
