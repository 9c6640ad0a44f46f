//! Kerning values, and how they are derived from GPOS value records

use std::fmt::{Display, Formatter};

use read_fonts::tables::gpos::{ValueFormat, ValueRecord};

/// ValueFormat1 of a right-to-left pair with an all-zero adjustment.
pub(crate) const NO_ADJUSTMENT: u16 = 0x0000;
/// ValueFormat1 of a left-to-right pair: XAdvance only.
pub(crate) const LTR_ADVANCE: u16 = 0x0004;
/// ValueFormat1 of a right-to-left pair: XPlacement and XAdvance.
pub(crate) const RTL_PLACEMENT_ADVANCE: u16 = 0x0005;

/// The adjustment applied to a kerning pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernValue {
    /// A left-to-right kern, the x-advance of the first glyph.
    Ltr(i16),
    /// A right-to-left kern, as `[x_placement, y_placement, x_advance, y_advance]`.
    ///
    /// Only the x components are read from the font; the y components are
    /// always zero.
    Rtl([i16; 4]),
}

impl KernValue {
    /// The value of an RTL pair with no adjustment.
    pub const RTL_ZERO: KernValue = KernValue::Rtl([0; 4]);

    /// Returns `true` if this value does not move either glyph.
    pub fn is_zero(&self) -> bool {
        match self {
            KernValue::Ltr(advance) => *advance == 0,
            KernValue::Rtl(values) => values.iter().all(|v| *v == 0),
        }
    }

    /// Derive the value of a pair from its first value record.
    ///
    /// Returns `None` if the value format is not one we know how to interpret.
    pub(crate) fn from_value_record(format: ValueFormat, record: &ValueRecord) -> Option<Self> {
        match format.bits() {
            LTR_ADVANCE => Some(KernValue::Ltr(record.x_advance().unwrap_or_default())),
            RTL_PLACEMENT_ADVANCE => Some(KernValue::Rtl([
                record.x_placement().unwrap_or_default(),
                0,
                record.x_advance().unwrap_or_default(),
                0,
            ])),
            NO_ADJUSTMENT => Some(KernValue::RTL_ZERO),
            _ => None,
        }
    }
}

/// Returns `true` if pairs with this ValueFormat1 can be read.
pub(crate) fn is_supported_format(format: ValueFormat) -> bool {
    matches!(
        format.bits(),
        NO_ADJUSTMENT | LTR_ADVANCE | RTL_PLACEMENT_ADVANCE
    )
}

impl Display for KernValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KernValue::Ltr(advance) => write!(f, "{advance}"),
            KernValue::Rtl([a, b, c, d]) => write!(f, "<{a} {b} {c} {d}>"),
        }
    }
}
