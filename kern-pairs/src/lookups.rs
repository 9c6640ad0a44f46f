//! Finding the lookups used by the `kern` feature

use std::collections::BTreeSet;

use read_fonts::{
    tables::{
        gpos::{Gpos, PositionLookup, PositionSubtables},
        layout::FeatureList,
    },
    types::Tag,
};

use crate::Error;

/// The tag of the kerning feature.
pub const KERN: Tag = Tag::new(b"kern");

const PAIR_ADJUSTMENT: u16 = 2;
const EXTENSION: u16 = 9;

/// A pair adjustment lookup referenced by a `kern` feature.
pub struct KernLookup<'a> {
    /// The index of the lookup in the lookup list.
    pub index: u16,
    /// The lookup itself; extension lookups are not unwrapped.
    pub lookup: PositionLookup<'a>,
}

/// Return the indices of all lookups referenced by `kern` features.
///
/// The result is de-duplicated and sorted. A `kern` feature that can't be
/// read is skipped, with a warning.
pub fn kern_lookup_indices(feature_list: &FeatureList) -> Vec<u16> {
    let mut indices = BTreeSet::new();
    for (i, record) in feature_list.feature_records().iter().enumerate() {
        if record.feature_tag() != KERN {
            continue;
        }
        let feature = match record.feature(feature_list.offset_data()) {
            Ok(feature) => feature,
            Err(err) => {
                log::warn!("feature record {i} ('kern') could not be read: '{err}'");
                continue;
            }
        };
        indices.extend(feature.lookup_list_indices().iter().map(|idx| idx.get()));
    }
    indices.into_iter().collect()
}

/// Return the pair adjustment lookups used for kerning, in index order.
///
/// Lookups of other types are skipped, with a warning.
pub fn kern_lookups<'a>(gpos: &Gpos<'a>) -> Result<Vec<KernLookup<'a>>, Error> {
    let feature_list = gpos.feature_list()?;
    let indices = kern_lookup_indices(&feature_list);
    if indices.is_empty() {
        return Err(Error::NoKernFeature);
    }

    let lookup_list = gpos.lookup_list()?;
    let lookups = lookup_list.lookups();
    let mut result = Vec::with_capacity(indices.len());
    for index in indices {
        let lookup = match lookups.get(index as usize) {
            Ok(lookup) => lookup,
            Err(err) => {
                log::warn!("kern lookup {index} could not be read: '{err}'");
                continue;
            }
        };
        if is_pair_adjustment(index, &lookup) {
            result.push(KernLookup { index, lookup });
        }
    }
    log::debug!("found {} pair adjustment kern lookups", result.len());
    Ok(result)
}

fn is_pair_adjustment(index: u16, lookup: &PositionLookup) -> bool {
    match lookup.lookup_type() {
        PAIR_ADJUSTMENT => true,
        EXTENSION => match lookup.subtables() {
            Ok(PositionSubtables::Pair(_)) => true,
            Ok(PositionSubtables::Contextual(_) | PositionSubtables::ChainContextual(_)) => {
                log::warn!("lookup {index}: contextual kerning is not supported");
                false
            }
            Ok(_) => {
                log::warn!("lookup {index}: extension does not wrap a pair adjustment lookup");
                false
            }
            Err(err) => {
                log::warn!("lookup {index}: could not read extension subtables: '{err}'");
                false
            }
        },
        other => {
            log::warn!("lookup {index} has type {other}, which is not a pair adjustment lookup");
            false
        }
    }
}
