//! The [`Terrain`] type: the state of a single grid cell.

/// Whether a cell can be entered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Open,
    Blocked,
}

impl Terrain {
    /// Whether movement into this cell is allowed.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Terrain::Open)
    }

    /// The ASCII rune used by [`Grid`](crate::Grid) parsing and display.
    #[inline]
    pub const fn rune(self) -> char {
        match self {
            Terrain::Open => '.',
            Terrain::Blocked => '#',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    #[inline]
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Terrain::Open),
            '#' => Some(Terrain::Blocked),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rune_round_trip() {
        for t in [Terrain::Open, Terrain::Blocked] {
            assert_eq!(Terrain::from_rune(t.rune()), Some(t));
        }
        assert_eq!(Terrain::from_rune('x'), None);
        assert!(Terrain::default().is_open());
        assert!(!Terrain::Blocked.is_open());
    }
}
