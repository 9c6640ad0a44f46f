//! Collecting the pair adjustment subtables of the kern lookups

use read_fonts::{
    tables::{
        gpos::{PairPos, PositionSubtables, ValueFormat},
        layout::CoverageTable,
    },
    ReadError,
};

use crate::{lookups::KernLookup, value};

/// A pair adjustment subtable, with enough context to identify it in logs.
pub struct PairPosSubtable<'a> {
    /// The index of the lookup this subtable belongs to.
    pub lookup_index: u16,
    /// The index of this subtable in its lookup.
    pub subtable_index: usize,
    /// The subtable, after unwrapping any extension.
    pub table: PairPos<'a>,
}

impl<'a> PairPosSubtable<'a> {
    pub fn coverage(&self) -> Result<CoverageTable<'a>, ReadError> {
        match &self.table {
            PairPos::Format1(table) => table.coverage(),
            PairPos::Format2(table) => table.coverage(),
        }
    }

    pub fn value_format1(&self) -> ValueFormat {
        match &self.table {
            PairPos::Format1(table) => table.value_format1(),
            PairPos::Format2(table) => table.value_format1(),
        }
    }

    pub fn value_format2(&self) -> ValueFormat {
        match &self.table {
            PairPos::Format1(table) => table.value_format2(),
            PairPos::Format2(table) => table.value_format2(),
        }
    }

    /// Log anything about this subtable that we can't fully interpret.
    ///
    /// None of these problems are fatal.
    fn validate(&self) {
        let (lookup, subtable) = (self.lookup_index, self.subtable_index);
        match self.coverage() {
            Ok(CoverageTable::Format1(_) | CoverageTable::Format2(_)) => (),
            Err(ReadError::InvalidFormat(format)) => {
                log::warn!(
                    "lookup {lookup} subtable {subtable}: coverage format {format} is not supported"
                );
            }
            Err(err) => {
                log::warn!("lookup {lookup} subtable {subtable}: unreadable coverage: '{err}'")
            }
        }

        let format1 = self.value_format1();
        if !value::is_supported_format(format1) {
            log::warn!(
                "lookup {lookup} subtable {subtable}: ValueFormat1 {} is not supported",
                format1.bits()
            );
        }
        let format2 = self.value_format2();
        if !format2.is_empty() {
            log::warn!(
                "lookup {lookup} subtable {subtable}: ValueFormat2 {} is not supported, \
                 adjustments to the second glyph are ignored",
                format2.bits()
            );
        }
    }
}

/// Resolve the subtables of each lookup, in order, unwrapping extensions.
///
/// Subtables that can't be read are skipped.
pub fn collect_pair_pos<'a>(lookups: &[KernLookup<'a>]) -> Vec<PairPosSubtable<'a>> {
    let mut result = Vec::new();
    for KernLookup { index, lookup } in lookups {
        let subtables = match lookup.subtables() {
            Ok(PositionSubtables::Pair(subtables)) => subtables,
            // lookups of other types were already reported when they were selected
            Ok(_) => continue,
            Err(err) => {
                log::warn!("lookup {index}: could not read subtables: '{err}'");
                continue;
            }
        };
        for (subtable_index, table) in subtables.iter().enumerate() {
            match table {
                Ok(table) => {
                    let subtable = PairPosSubtable {
                        lookup_index: *index,
                        subtable_index,
                        table,
                    };
                    subtable.validate();
                    result.push(subtable);
                }
                Err(err) => {
                    log::warn!("lookup {index} subtable {subtable_index}: unreadable: '{err}'")
                }
            }
        }
    }
    result
}
