use crate::grid::PieceType;

/// Piece-type bitmask selecting which tiles a query keeps.
///
/// A tile matches when the filter is non-positive or shares at least one bit
/// with the tile's piece id. `0` therefore matches everything, same as
/// [`AreaFilter::ANY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AreaFilter(pub i32);

impl AreaFilter {
    pub const ANY: Self = Self(-1);

    /// True when the filter accepts every tile regardless of its pieces.
    pub fn is_any(self) -> bool {
        self.0 <= 0
    }

    pub fn matches(self, id: PieceType) -> bool {
        self.is_any() || (id.bits() & self.0 as u32) != 0
    }
}

impl Default for AreaFilter {
    fn default() -> Self {
        Self::ANY
    }
}

impl From<PieceType> for AreaFilter {
    fn from(types: PieceType) -> Self {
        Self(types.bits() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_filters_match_everything() {
        for filter in [AreaFilter(0), AreaFilter(-1), AreaFilter(i32::MIN)] {
            assert!(filter.is_any());
            assert!(filter.matches(PieceType::NONE));
            assert!(filter.matches(PieceType::GENERIC | PieceType::UNIT));
            assert!(filter.matches(PieceType::empty()));
        }
    }

    #[test]
    fn positive_filter_needs_a_shared_bit() {
        let units = AreaFilter::from(PieceType::UNIT);
        assert!(!units.is_any());
        assert!(units.matches(PieceType::GENERIC | PieceType::UNIT | PieceType::ENTITY));
        assert!(!units.matches(PieceType::GENERIC | PieceType::DESTRUCTIBLE));
        assert!(!units.matches(PieceType::NONE));
    }

    #[test]
    fn none_filter_selects_empty_tiles() {
        let empty = AreaFilter::from(PieceType::NONE);
        assert!(empty.matches(PieceType::NONE));
        assert!(!empty.matches(PieceType::GENERIC));
    }
}
