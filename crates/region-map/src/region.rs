//! Named galactic regions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a galactic region.
///
/// Id 0 is reserved for cells that belong to no region.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RegionId(pub u16);

impl RegionId {
    /// Cells outside every named region.
    pub const UNMAPPED: RegionId = RegionId(0);

    /// Get the raw id.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Check if this is the reserved unmapped id.
    #[must_use]
    pub const fn is_unmapped(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named region, borrowed from the name table of the grid that found it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Region<'a> {
    pub id: RegionId,
    pub name: &'a str,
}

impl fmt::Display for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped() {
        assert!(RegionId::UNMAPPED.is_unmapped());
        assert!(RegionId::default().is_unmapped());
        assert!(!RegionId(18).is_unmapped());
        assert_eq!(RegionId(18).get(), 18);
    }

    #[test]
    fn test_region_serializes_flat() {
        let region = Region {
            id: RegionId(18),
            name: "Inner Orion Spur",
        };
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(json, r#"{"id":18,"name":"Inner Orion Spur"}"#);
        assert_eq!(region.to_string(), "Inner Orion Spur");
    }
}
