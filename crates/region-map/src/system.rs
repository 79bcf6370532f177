//! Star system records as served by system catalogs.
//!
//! A record always carries its id64, so its boxel can be classified; the
//! exact coordinates are optional and give the region of the system itself.

use serde::{Deserialize, Serialize};

use crate::{Classification, Region, RegionGrid};

/// Galactic position of a system, in light years.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A system record: `{"name": .., "id64": .., "coords": {"x": .., "y": .., "z": ..}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub name: String,
    pub id64: u64,
    #[serde(default)]
    pub coords: Option<Coords>,
}

/// Where a system sits on the region map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SystemLocation<'a> {
    pub name: &'a str,
    pub id64: u64,
    pub coords: Option<Coords>,
    /// Region of the exact coordinates, if the record had any.
    pub region: Option<Region<'a>>,
    /// Boxel origin decoded from the id64 and its region.
    pub boxel: Classification<'a>,
}

impl RegionGrid {
    /// Place a system record on this map.
    #[must_use]
    pub fn locate<'a>(&'a self, record: &'a SystemRecord) -> SystemLocation<'a> {
        let region = record
            .coords
            .and_then(|c| self.find_region(c.x, c.y, c.z));

        SystemLocation {
            name: &record.name,
            id64: record.id64,
            coords: record.coords,
            region,
            boxel: self.classify(record.id64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_coords_optional() {
        let with: SystemRecord = serde_json::from_str(
            r#"{"name":"Sol","id64":10477373803,"coords":{"x":0,"y":0,"z":0}}"#,
        )
        .unwrap();
        assert_eq!(with.coords, Some(Coords::default()));

        let null: SystemRecord =
            serde_json::from_str(r#"{"name":"Sol","id64":10477373803,"coords":null}"#).unwrap();
        assert_eq!(null.coords, None);

        let missing: SystemRecord =
            serde_json::from_str(r#"{"name":"Sol","id64":10477373803}"#).unwrap();
        assert_eq!(missing.coords, None);
        assert_eq!(missing.id64, 10_477_373_803);
    }

    #[test]
    fn test_locate_without_coords_still_classifies_boxel() {
        let grid = RegionGrid::embedded();
        let record = SystemRecord {
            name: "Sol".to_string(),
            id64: 10_477_373_803,
            coords: None,
        };

        let location = grid.locate(&record);
        assert_eq!(location.name, "Sol");
        assert_eq!(location.region, None);
        assert_eq!(location.boxel, grid.classify(record.id64));
        assert!(location.boxel.region.is_some());
    }

    #[test]
    fn test_locate_with_coords() {
        let grid = RegionGrid::embedded();
        let record = SystemRecord {
            name: "Sol".to_string(),
            id64: 10_477_373_803,
            coords: Some(Coords::default()),
        };

        let location = grid.locate(&record);
        assert_eq!(location.region, grid.find_region(0.0, 0.0, 0.0));
        assert_eq!(location.region.map(|r| r.name), Some("Inner Orion Spur"));
    }
}
