//! Galactic region map.
//!
//! Places star systems in the galaxy's named macro-regions without asking a
//! catalog for region membership.
//!
//! - [`decode_boxel`] unpacks the boxel origin stored in a system's id64.
//! - [`RegionGrid`] classifies an x/z position through a run-length encoded
//!   grid of region ids plus a name table.
//! - [`classify`] chains the two.
//!
//! The embedded map is generated from `data/region-map.json` at build time
//! and is immutable for the life of the process, so every query is safe to
//! run from any number of threads.
//!
//! # Usage
//!
//! ```
//! use region_map::{classify, decode_boxel, find_region};
//!
//! let sol = find_region(0.0, 0.0, 0.0).unwrap();
//! assert_eq!(sol.name, "Inner Orion Spur");
//!
//! let origin = decode_boxel(10_477_373_803);
//! assert_eq!((origin.x, origin.y, origin.z), (-65.0, -25.0, -25.0));
//!
//! let boxel = classify(10_477_373_803);
//! assert_eq!(boxel.region, Some(sol));
//! ```

pub mod boxel;
pub mod classify;
mod data;
pub mod error;
pub mod grid;
pub mod region;
pub mod system;

pub use boxel::{Origin, decode_boxel, masscode};
pub use classify::Classification;
pub use error::{MapError, MapResult};
pub use grid::{Cell, RegionGrid, Run};
pub use region::{Region, RegionId};
pub use system::{Coords, SystemLocation, SystemRecord};

/// Find the region containing a position on the embedded map.
#[must_use]
pub fn find_region(x: f64, y: f64, z: f64) -> Option<Region<'static>> {
    RegionGrid::embedded().find_region(x, y, z)
}

/// Decode `id` and classify its boxel origin on the embedded map.
#[must_use]
pub fn classify(id: u64) -> Classification<'static> {
    RegionGrid::embedded().classify(id)
}

/// Place a system record on the embedded map.
#[must_use]
pub fn locate(record: &SystemRecord) -> SystemLocation<'_> {
    RegionGrid::embedded().locate(record)
}
